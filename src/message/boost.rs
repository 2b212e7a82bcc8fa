use serde::{Deserialize, Serialize};

use super::{validate_speed_step, Decode, Encode, Fields, Payload};
use crate::characteristic::Characteristic;
use crate::error::Result;

/// Temporary boost of the fan speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoostMode {
    pub on: bool,
    /// Boost speed in rpm
    pub speed: u16,
    /// Boost duration when writing, remaining time when reading
    pub seconds: u16,
}

impl BoostMode {
    const LEN: usize = 5;

    pub fn off() -> Self {
        Self {
            on: false,
            speed: 0,
            seconds: 0,
        }
    }
}

impl Payload for BoostMode {
    const CHARACTERISTIC: Characteristic = Characteristic::Boost;
}

impl Decode for BoostMode {
    fn decode(data: &[u8]) -> Result<Self> {
        let mut f = Fields::new(Self::CHARACTERISTIC, data, Self::LEN)?;
        Ok(Self {
            on: f.bool(),
            speed: f.u16(),
            seconds: f.u16(),
        })
    }
}

impl Encode for BoostMode {
    /// Speed and duration are not sent when switching boost off.
    fn encode(&self) -> Result<Vec<u8>> {
        validate_speed_step("boost speed", self.speed)?;
        let (speed, seconds) = if self.on { (self.speed, self.seconds) } else { (0, 0) };

        let mut data = Vec::with_capacity(Self::LEN);
        data.push(u8::from(self.on));
        data.extend_from_slice(&speed.to_le_bytes());
        data.extend_from_slice(&seconds.to_le_bytes());
        Ok(data)
    }
}

#[test]
fn test_boost_off_discards_speed_and_duration() {
    let boost = BoostMode { on: false, speed: 500, seconds: 30 };
    let data = boost.encode().unwrap();
    assert_eq!(data, vec![0, 0, 0, 0, 0]);
    assert_eq!(BoostMode::decode(&data).unwrap(), BoostMode::off());
}

#[test]
fn test_boost_on() {
    let boost = BoostMode { on: true, speed: 2400, seconds: 900 };
    let data = boost.encode().unwrap();
    assert_eq!(hex::encode(&data), "0160098403");
    assert_eq!(BoostMode::decode(&data).unwrap(), boost);
}

#[test]
fn test_boost_speed_must_be_step() {
    let boost = BoostMode { on: true, speed: 2410, seconds: 900 };
    assert!(boost.encode().is_err());
}
