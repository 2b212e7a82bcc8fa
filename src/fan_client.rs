use time::OffsetDateTime;
use tracing::debug;

use crate::characteristic::{Characteristic, DeviceInfoField};
use crate::config::FanConfig;
use crate::connection::Connection;
use crate::error::Result;
use crate::message::{
    decode_ascii, Alias, AutomaticCycles, BoostMode, ClockTime, Decode, DeviceInfo, Encode,
    FactorySettingsChanged, FanMode, FanSpeedSettings, FanState, HeatDistributorSettings,
    LightSensorSettings, PinCode, PinConfirmation, ResetCommand, Sensitivity, SilentHours,
    TrickleDays,
};
use crate::profile::DeviceProfile;
use crate::transport::{BleTransport, DeviceAddress};

/// Client for a single Pax fan.
///
/// Every method maps to one characteristic read or write. Nothing is cached and a
/// dropped link is not reconnected behind the caller's back: call
/// [`FanClient::connect`] again when an operation fails with a transport error.
///
/// Calls on one client must not overlap; the fan handles a single outstanding
/// request at a time.
pub struct FanClient<T: BleTransport> {
    profile: DeviceProfile,
    connection: Connection<T>,
    pin: Option<u32>,
    connect_retries: u32,
}

impl<T: BleTransport> FanClient<T> {
    /// Create a client for the fan of the given model at `address`.
    ///
    /// Fails if `model` is not a supported device model.
    pub fn new(
        transport: T,
        model: &str,
        address: impl Into<DeviceAddress>,
        pin: Option<u32>,
    ) -> Result<Self> {
        let profile: DeviceProfile = model.parse()?;
        Ok(Self {
            profile,
            connection: Connection::new(transport, address.into()),
            pin,
            connect_retries: FanConfig::DEFAULT_CONNECT_RETRIES,
        })
    }

    pub fn from_config(transport: T, config: &FanConfig) -> Result<Self> {
        let profile: DeviceProfile = config.model.parse()?;
        let connection = Connection::new(transport, DeviceAddress::new(&config.address))
            .with_retry_delay(config.retry_delay());
        Ok(Self {
            profile,
            connection,
            pin: config.pin,
            connect_retries: config.connect_retries,
        })
    }

    pub fn profile(&self) -> DeviceProfile {
        self.profile
    }

    pub fn address(&self) -> &DeviceAddress {
        self.connection.address()
    }

    pub fn transport(&self) -> &T {
        self.connection.transport()
    }

    // --- Connection

    /// Connect using the configured number of attempts.
    pub async fn connect(&mut self) -> bool {
        self.connect_with_retries(self.connect_retries).await
    }

    pub async fn connect_with_retries(&mut self, max_retries: u32) -> bool {
        self.connection.connect(max_retries).await
    }

    pub async fn disconnect(&mut self) {
        self.connection.disconnect().await
    }

    pub async fn is_connected(&self) -> bool {
        self.connection.is_connected().await
    }

    /// Send the configured PIN. Does nothing for fans configured without one.
    pub async fn authorize(&self) -> Result<()> {
        match self.pin {
            Some(pin) => self.set_auth(pin).await,
            None => {
                debug!("No PIN configured for {}, skipping authorization", self.address());
                Ok(())
            }
        }
    }

    pub async fn set_auth(&self, pin: u32) -> Result<()> {
        self.write(&PinCode(pin)).await
    }

    /// Whether the fan accepted the PIN.
    pub async fn check_auth(&self) -> Result<bool> {
        Ok(self.read::<PinConfirmation>().await?.0)
    }

    // --- Generic GATT characteristics

    pub async fn get_device_name(&self) -> Result<String> {
        let id = self.profile.characteristic(Characteristic::DeviceName);
        let data = self.connection.read(id).await?;
        decode_ascii(Characteristic::DeviceName.name(), &data)
    }

    pub async fn get_model_number(&self) -> Result<String> {
        self.read_info(DeviceInfoField::ModelNumber).await
    }

    pub async fn get_serial_number(&self) -> Result<String> {
        self.read_info(DeviceInfoField::SerialNumber).await
    }

    pub async fn get_hardware_revision(&self) -> Result<String> {
        self.read_info(DeviceInfoField::HardwareRevision).await
    }

    pub async fn get_firmware_revision(&self) -> Result<String> {
        self.read_info(DeviceInfoField::FirmwareRevision).await
    }

    pub async fn get_software_revision(&self) -> Result<String> {
        self.read_info(DeviceInfoField::SoftwareRevision).await
    }

    pub async fn get_manufacturer(&self) -> Result<String> {
        self.read_info(DeviceInfoField::Manufacturer).await
    }

    /// Read all identification strings, one read each.
    ///
    /// The reads are not atomic: if one fails, the strings read before it are
    /// discarded and the error is returned.
    pub async fn get_device_info(&self) -> Result<DeviceInfo> {
        Ok(DeviceInfo {
            name: self.get_device_name().await?,
            model_number: self.get_model_number().await?,
            serial_number: self.get_serial_number().await?,
            hardware_revision: self.get_hardware_revision().await?,
            firmware_revision: self.get_firmware_revision().await?,
            software_revision: self.get_software_revision().await?,
            manufacturer: self.get_manufacturer().await?,
        })
    }

    // --- Pax characteristics

    pub async fn get_alias(&self) -> Result<String> {
        Ok(self.read::<Alias>().await?.0)
    }

    /// Set the fan name. Anything beyond 20 bytes is cut off.
    pub async fn set_alias(&self, name: &str) -> Result<()> {
        self.write(&Alias(name.to_string())).await
    }

    /// Raw clock status as hex.
    pub async fn get_is_clock_set(&self) -> Result<String> {
        Ok(hex::encode(self.read_raw(Characteristic::Status).await?))
    }

    /// Read the sensors and the current trigger.
    pub async fn get_state(&self) -> Result<FanState> {
        let state = self.read::<FanState>().await?;
        debug!("Read fan state: {state:?}");
        Ok(state)
    }

    pub async fn get_factory_settings_changed(&self) -> Result<bool> {
        Ok(self.read::<FactorySettingsChanged>().await?.0)
    }

    pub async fn get_mode(&self) -> Result<FanMode> {
        self.read().await
    }

    pub async fn get_fan_speed_settings(&self) -> Result<FanSpeedSettings> {
        self.read().await
    }

    /// Set the speeds in rpm. Each must be a multiple of 25 between 0 and 2500.
    pub async fn set_fan_speed_settings(&self, speeds: FanSpeedSettings) -> Result<()> {
        debug!("Set fan speed settings: {speeds:?}");
        self.write(&speeds).await
    }

    pub async fn get_sensors_sensitivity(&self) -> Result<Sensitivity> {
        self.read().await
    }

    /// Set sensor sensitivities 0-3, where 0 turns the sensor off.
    pub async fn set_sensors_sensitivity(&self, humidity: u8, light: u8) -> Result<()> {
        self.write(&Sensitivity::new(humidity, light)).await
    }

    pub async fn get_light_sensor_settings(&self) -> Result<LightSensorSettings> {
        self.read().await
    }

    pub async fn set_light_sensor_settings(&self, settings: LightSensorSettings) -> Result<()> {
        self.write(&settings).await
    }

    pub async fn get_heat_distributor(&self) -> Result<HeatDistributorSettings> {
        self.read().await
    }

    pub async fn get_boost_mode(&self) -> Result<BoostMode> {
        self.read().await
    }

    /// Boost the fan to `speed` rpm for `seconds`. Speed and duration are ignored when `on` is false.
    pub async fn set_boost_mode(&self, on: bool, speed: u16, seconds: u16) -> Result<()> {
        self.write(&BoostMode { on, speed, seconds }).await
    }

    /// Raw LED state as hex.
    pub async fn get_led(&self) -> Result<String> {
        Ok(hex::encode(self.read_raw(Characteristic::Led).await?))
    }

    pub async fn get_automatic_cycles(&self) -> Result<u8> {
        Ok(self.read::<AutomaticCycles>().await?.0)
    }

    pub async fn set_automatic_cycles(&self, setting: u8) -> Result<()> {
        self.write(&AutomaticCycles(setting)).await
    }

    pub async fn get_time(&self) -> Result<ClockTime> {
        self.read().await
    }

    pub async fn set_time(&self, time: ClockTime) -> Result<()> {
        self.write(&time).await
    }

    /// Set the fan clock to the local time of this host, or UTC if the local offset is unknown.
    pub async fn set_time_to_now(&self) -> Result<()> {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        self.set_time(now.into()).await
    }

    pub async fn get_silent_hours(&self) -> Result<SilentHours> {
        self.read().await
    }

    pub async fn set_silent_hours(&self, hours: SilentHours) -> Result<()> {
        debug!("Writing silent hours {hours:?}");
        self.write(&hours).await
    }

    pub async fn get_trickle_days(&self) -> Result<TrickleDays> {
        self.read().await
    }

    pub async fn set_trickle_days(&self, days: TrickleDays) -> Result<()> {
        self.write(&days).await
    }

    /// Restart the fan firmware.
    pub async fn reset_device(&self) -> Result<()> {
        self.write(&ResetCommand::Device).await
    }

    /// Restore every setting to its factory value.
    pub async fn reset_values(&self) -> Result<()> {
        self.write(&ResetCommand::Values).await
    }

    async fn read<M: Decode>(&self) -> Result<M> {
        let data = self.read_raw(M::CHARACTERISTIC).await?;
        M::decode(&data)
    }

    async fn read_raw(&self, characteristic: Characteristic) -> Result<Vec<u8>> {
        let id = self.profile.characteristic(characteristic);
        self.connection.read(id).await
    }

    async fn read_info(&self, field: DeviceInfoField) -> Result<String> {
        let data = self.connection.read(field.id()).await?;
        decode_ascii(field.name(), &data)
    }

    /// Encodes before touching the link, so invalid values never cause I/O.
    async fn write<M: Encode>(&self, value: &M) -> Result<()> {
        let data = value.encode()?;
        let id = self.profile.characteristic(M::CHARACTERISTIC);
        self.connection.write(id, &data).await
    }
}
