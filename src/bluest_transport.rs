use anyhow::anyhow;
use async_trait::async_trait;
use bluest::{Adapter, Characteristic, Device, Uuid};
use futures_util::StreamExt;
use tokio::time::{timeout, Duration};
use tracing::debug;

use crate::characteristic::CharacteristicId;
use crate::transport::{BleTransport, DeviceAddress};

/// [`BleTransport`] on top of the host Bluetooth adapter, using `bluest`.
///
/// `bluest` addresses characteristics by UUID only. Attribute handles are
/// translated for the standard GAP and Device Information characteristics; any
/// other handle fails to resolve.
pub struct BluestTransport {
    adapter: Adapter,
    scan_timeout: Duration,
}

impl BluestTransport {
    // How long to scan for a device that is not already connected
    const SCAN_TIMEOUT_S: u64 = 30;

    const BLUETOOTH_BASE_UUID: u128 = 0x00000000_0000_1000_8000_00805f9b34fb;

    /// Use the default adapter, waiting for it to become available.
    pub async fn new() -> anyhow::Result<Self> {
        let adapter = Adapter::default()
            .await
            .ok_or(anyhow!("Default adapter not found"))?;
        adapter.wait_available().await?;

        Ok(Self {
            adapter,
            scan_timeout: Duration::from_secs(Self::SCAN_TIMEOUT_S),
        })
    }

    /// Give up scanning for an unconnected device after `scan_timeout`.
    pub fn with_scan_timeout(mut self, scan_timeout: Duration) -> Self {
        self.scan_timeout = scan_timeout;
        self
    }

    fn matches(device: &Device, address: &DeviceAddress) -> bool {
        device.id().to_string().eq_ignore_ascii_case(address.as_str())
    }

    async fn discover_device(&self, address: &DeviceAddress) -> anyhow::Result<Option<Device>> {
        let mut adapter_events = self.adapter.scan(&[]).await?;
        while let Some(advertising) = adapter_events.next().await {
            if Self::matches(&advertising.device, address) {
                return Ok(Some(advertising.device));
            }
        }
        Ok(None)
    }

    const fn sig_uuid(short: u16) -> Uuid {
        Uuid::from_u128(((short as u128) << 96) | Self::BLUETOOTH_BASE_UUID)
    }

    /// The standard characteristic behind a well known attribute handle.
    fn handle_uuid(handle: u16) -> Option<Uuid> {
        let short = match handle {
            0x02 | 0x03 => 0x2a00, // Device Name
            0x0b => 0x2a25,        // Serial Number String
            0x0d => 0x2a24,        // Model Number String
            0x0f => 0x2a27,        // Hardware Revision String
            0x11 => 0x2a26,        // Firmware Revision String
            0x13 => 0x2a28,        // Software Revision String
            0x15 => 0x2a29,        // Manufacturer Name String
            _ => return None,
        };
        Some(Self::sig_uuid(short))
    }

    async fn find_characteristic(
        &self,
        device: &Device,
        id: CharacteristicId,
    ) -> anyhow::Result<Characteristic> {
        let uuid = match id {
            CharacteristicId::Uuid(uuid) => uuid,
            CharacteristicId::Handle(handle) => Self::handle_uuid(handle)
                .ok_or(anyhow!("Characteristic handle 0x{handle:02x} cannot be addressed"))?,
        };

        for service in device.discover_services().await? {
            let found = service
                .discover_characteristics()
                .await?
                .into_iter()
                .find(|c| c.uuid() == uuid);
            if let Some(characteristic) = found {
                return Ok(characteristic);
            }
        }

        Err(anyhow!("The device does not have characteristic {uuid}"))
    }
}

#[async_trait]
impl BleTransport for BluestTransport {
    type Device = Device;

    async fn resolve(&self, address: &DeviceAddress) -> anyhow::Result<Option<Device>> {
        for device in self.adapter.connected_devices().await? {
            if Self::matches(&device, address) {
                return Ok(Some(device));
            }
        }

        debug!("Scanning for {address}");
        match timeout(self.scan_timeout, self.discover_device(address)).await {
            Ok(result) => result,
            Err(_) => Ok(None),
        }
    }

    async fn connect(&self, device: &Device) -> anyhow::Result<()> {
        self.adapter.connect_device(device).await?;
        Ok(())
    }

    async fn disconnect(&self, device: &Device) -> anyhow::Result<()> {
        self.adapter.disconnect_device(device).await?;
        Ok(())
    }

    async fn is_connected(&self, device: &Device) -> bool {
        device.is_connected().await
    }

    async fn read(&self, device: &Device, id: CharacteristicId) -> anyhow::Result<Vec<u8>> {
        let characteristic = self.find_characteristic(device, id).await?;
        Ok(characteristic.read().await?)
    }

    async fn write(
        &self,
        device: &Device,
        id: CharacteristicId,
        value: &[u8],
        with_response: bool,
    ) -> anyhow::Result<()> {
        let characteristic = self.find_characteristic(device, id).await?;
        if with_response {
            characteristic.write(value).await?;
        } else {
            characteristic.write_without_response(value).await?;
        }
        Ok(())
    }
}

#[test]
fn test_handle_uuid() {
    assert_eq!(
        BluestTransport::handle_uuid(0x15).unwrap().to_string(),
        "00002a29-0000-1000-8000-00805f9b34fb"
    );
    assert_eq!(
        BluestTransport::handle_uuid(0x03).unwrap().to_string(),
        "00002a00-0000-1000-8000-00805f9b34fb"
    );
    assert!(BluestTransport::handle_uuid(0x40).is_none());
}
