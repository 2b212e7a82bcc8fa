use serde::{Deserialize, Serialize};
use tokio::time::Duration;

/// Everything needed to set up a [`crate::FanClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanConfig {
    /// Device model, `"Calima"` or `"Svara"`
    pub model: String,
    pub address: String,
    /// PIN printed on the fan. Leave unset for fans without authorization.
    #[serde(default)]
    pub pin: Option<u32>,
    /// Attempts made by each call to connect
    #[serde(default = "FanConfig::default_connect_retries")]
    pub connect_retries: u32,
    /// Pause between connection attempts in milliseconds
    #[serde(default)]
    pub retry_delay_ms: u64,
}

impl FanConfig {
    pub const DEFAULT_CONNECT_RETRIES: u32 = 3;

    pub fn new(model: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            address: address.into(),
            pin: None,
            connect_retries: Self::DEFAULT_CONNECT_RETRIES,
            retry_delay_ms: 0,
        }
    }

    pub fn with_pin(mut self, pin: u32) -> Self {
        self.pin = Some(pin);
        self
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    fn default_connect_retries() -> u32 {
        Self::DEFAULT_CONNECT_RETRIES
    }
}

#[test]
fn test_config_defaults() {
    let config: FanConfig =
        serde_json::from_str(r#"{"model": "Calima", "address": "58:2b:db:01:02:03"}"#).unwrap();
    assert_eq!(config, FanConfig::new("Calima", "58:2b:db:01:02:03"));
    assert_eq!(config.connect_retries, 3);
    assert_eq!(config.retry_delay(), Duration::ZERO);
}

#[test]
fn test_config_full() {
    let config: FanConfig = serde_json::from_str(
        r#"{"model": "Svara", "address": "AA:BB", "pin": 1234, "connect_retries": 5, "retry_delay_ms": 250}"#,
    )
    .unwrap();
    assert_eq!(config.pin, Some(1234));
    assert_eq!(config.connect_retries, 5);
    assert_eq!(config.retry_delay(), Duration::from_millis(250));
}

#[test]
fn test_config_with_pin() {
    let config = FanConfig::new("Calima", "58:2b:db:01:02:03").with_pin(12345678);
    assert_eq!(config.pin, Some(12345678));
    assert_eq!(config.connect_retries, FanConfig::DEFAULT_CONNECT_RETRIES);
}
