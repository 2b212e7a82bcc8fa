use anyhow::anyhow;
use tokio::time::{sleep, Duration};
use tracing::{debug, info, warn};

use crate::characteristic::CharacteristicId;
use crate::error::{Error, Result};
use crate::transport::{BleTransport, DeviceAddress};

/// The link to one fan.
///
/// Holds the device handle of the current connection, if any. The handle is only
/// stored once a connect succeeded and is dropped again on disconnect.
pub struct Connection<T: BleTransport> {
    transport: T,
    address: DeviceAddress,
    device: Option<T::Device>,
    retry_delay: Duration,
}

impl<T: BleTransport> Connection<T> {
    pub fn new(transport: T, address: DeviceAddress) -> Self {
        Self {
            transport,
            address,
            device: None,
            retry_delay: Duration::ZERO,
        }
    }

    /// Wait `delay` between connection attempts. No delay by default.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn address(&self) -> &DeviceAddress {
        &self.address
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Connect unless already connected, making at most `max_retries` attempts.
    ///
    /// Returns whether the fan is connected afterwards. Failing to connect is not an
    /// error; it is logged and left to the caller to try again later.
    pub async fn connect(&mut self, max_retries: u32) -> bool {
        if self.is_connected().await {
            return true;
        }
        // The link behind a stale handle dropped; release it before reconnecting.
        if let Some(device) = self.device.take() {
            debug!("Link to {} dropped, releasing the old connection", self.address);
            if let Err(err) = self.transport.disconnect(&device).await {
                warn!("Error releasing the dropped connection to {}! {err}", self.address);
            }
        }

        let attempts = max_retries.max(1);
        debug!("Connecting to {}", self.address);
        for attempt in 1..=attempts {
            match self.try_connect().await {
                Ok(device) => {
                    debug!("Connected to {}", self.address);
                    self.device = Some(device);
                    return true;
                }
                Err(err) if attempt < attempts => {
                    debug!("Retrying {} after attempt {attempt} failed: {err}", self.address);
                    if !self.retry_delay.is_zero() {
                        sleep(self.retry_delay).await;
                    }
                }
                Err(err) => {
                    info!("Not able to connect to {}! {err}", self.address);
                }
            }
        }

        false
    }

    async fn try_connect(&self) -> anyhow::Result<T::Device> {
        let device = self
            .transport
            .resolve(&self.address)
            .await?
            .ok_or_else(|| anyhow!("A device with address {} could not be found.", self.address))?;
        self.transport.connect(&device).await?;
        Ok(device)
    }

    /// Disconnect if connected. Errors from the platform are logged, never returned.
    pub async fn disconnect(&mut self) {
        if let Some(device) = self.device.take() {
            if let Err(err) = self.transport.disconnect(&device).await {
                warn!("Error disconnecting from {}! {err}", self.address);
            }
        }
    }

    /// Whether there is a connection handle and the platform still reports it live.
    pub async fn is_connected(&self) -> bool {
        match &self.device {
            Some(device) => self.transport.is_connected(device).await,
            None => false,
        }
    }

    pub async fn read(&self, id: CharacteristicId) -> Result<Vec<u8>> {
        let device = self.device.as_ref().ok_or(Error::NotConnected)?;
        let value = self.transport.read(device, id).await?;
        debug!("RX {id}: {}", hex::encode(&value));
        Ok(value)
    }

    /// Write with response, so a rejected write surfaces as an error.
    pub async fn write(&self, id: CharacteristicId, value: &[u8]) -> Result<()> {
        let device = self.device.as_ref().ok_or(Error::NotConnected)?;
        debug!("TX {id}: {}", hex::encode(value));
        self.transport.write(device, id, value, true).await?;
        Ok(())
    }
}
