use std::fmt;

use async_trait::async_trait;

use crate::characteristic::CharacteristicId;

/// Link layer address of a fan, e.g. `"58:2B:DB:01:02:03"`.
///
/// Stored upper case, addresses compare case-insensitively on every platform we target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceAddress(String);

impl DeviceAddress {
    pub fn new(address: impl AsRef<str>) -> Self {
        Self(address.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceAddress {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DeviceAddress {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// The platform BLE stack, as far as a fan client needs it.
///
/// Implementations own adapter handling, pairing and service discovery. A
/// [`BleTransport::Device`] handle only has to stay valid for one connection.
#[async_trait]
pub trait BleTransport: Send + Sync {
    type Device: Send + Sync;

    /// Look up a device by address. `Ok(None)` if it is not currently reachable.
    async fn resolve(&self, address: &DeviceAddress) -> anyhow::Result<Option<Self::Device>>;

    async fn connect(&self, device: &Self::Device) -> anyhow::Result<()>;

    async fn disconnect(&self, device: &Self::Device) -> anyhow::Result<()>;

    /// Whether the link to `device` is still up. Must not fail.
    async fn is_connected(&self, device: &Self::Device) -> bool;

    async fn read(&self, device: &Self::Device, id: CharacteristicId) -> anyhow::Result<Vec<u8>>;

    async fn write(
        &self,
        device: &Self::Device,
        id: CharacteristicId,
        value: &[u8],
        with_response: bool,
    ) -> anyhow::Result<()>;
}

#[test]
fn test_address_normalized() {
    let address = DeviceAddress::new(" 58:2b:db:01:02:0a ");
    assert_eq!(address.as_str(), "58:2B:DB:01:02:0A");
    assert_eq!(address, DeviceAddress::from("58:2B:DB:01:02:0A"));
}
