//! Binary layouts of the fan characteristics.
//!
//! Every characteristic has one fixed little-endian layout. Each record type here knows
//! which [`Characteristic`] it lives in and how to turn itself into, or back from,
//! the bytes on the wire. Encoding validates the value first so nothing illegal
//! ever reaches the device.

mod alias;
mod auth;
mod boost;
mod clock;
mod device_info;
mod fan_speed;
mod heat_distributor;
mod light_sensor;
mod mode;
mod sensitivity;
mod sensor_data;
mod settings;
mod silent_hours;
mod trickle_days;

pub use alias::Alias;
pub use auth::{PinCode, PinConfirmation};
pub use boost::BoostMode;
pub use clock::ClockTime;
pub use device_info::DeviceInfo;
pub(crate) use device_info::decode_ascii;
pub use fan_speed::FanSpeedSettings;
pub use heat_distributor::HeatDistributorSettings;
pub use light_sensor::LightSensorSettings;
pub use mode::FanMode;
pub use sensitivity::Sensitivity;
pub use sensor_data::{FanState, Trigger};
pub use settings::{AutomaticCycles, FactorySettingsChanged, ResetCommand};
pub use silent_hours::SilentHours;
pub use trickle_days::TrickleDays;

use crate::characteristic::Characteristic;
use crate::error::{Error, Result};

/// A value stored in a single characteristic.
pub trait Payload {
    const CHARACTERISTIC: Characteristic;
}

/// A payload that can be read back from the device.
pub trait Decode: Payload + Sized {
    fn decode(data: &[u8]) -> Result<Self>;
}

/// A payload that can be written to the device.
pub trait Encode: Payload {
    /// Validate the value and produce the bytes to write.
    fn encode(&self) -> Result<Vec<u8>>;
}

/// Sequential little-endian reader over a payload whose length has already been checked.
pub(crate) struct Fields<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Fields<'a> {
    /// Fails unless `data` is exactly `len` bytes long.
    pub fn new(characteristic: Characteristic, data: &'a [u8], len: usize) -> Result<Self> {
        if data.len() != len {
            return Err(Error::PayloadLength {
                characteristic: characteristic.name(),
                expected: len,
                actual: data.len(),
            });
        }
        Ok(Self { data, pos: 0 })
    }

    pub fn u8(&mut self) -> u8 {
        let v = self.data[self.pos];
        self.pos += 1;
        v
    }

    pub fn u16(&mut self) -> u16 {
        let v = u16::from_le_bytes([self.data[self.pos], self.data[self.pos + 1]]);
        self.pos += 2;
        v
    }

    pub fn bool(&mut self) -> bool {
        self.u8() != 0
    }
}

/// Fan speeds are set in steps of 25 rpm.
pub(crate) fn validate_speed_step(field: &'static str, rpm: u16) -> Result<()> {
    if rpm % 25 != 0 {
        return Err(Error::invalid(field, format!("{rpm} is not a multiple of 25")));
    }
    Ok(())
}

pub(crate) fn validate_range(field: &'static str, value: u8, max: u8) -> Result<()> {
    if value > max {
        return Err(Error::invalid(field, format!("{value} must be between 0-{max}")));
    }
    Ok(())
}

#[test]
fn test_fields_rejects_wrong_length() {
    let data = hex::decode("0102").unwrap();
    let err = Fields::new(Characteristic::Clock, &data, 4).err().unwrap();
    assert!(matches!(
        err,
        Error::PayloadLength { characteristic: "clock", expected: 4, actual: 2 }
    ));
}

#[test]
fn test_fields_little_endian() {
    let data = hex::decode("2a3412").unwrap();
    let mut fields = Fields::new(Characteristic::Boost, &data, 3).unwrap();
    assert_eq!(fields.u8(), 0x2a);
    assert_eq!(fields.u16(), 0x1234);
}

#[test]
fn test_validate_speed_step() {
    assert!(validate_speed_step("speed", 0).is_ok());
    assert!(validate_speed_step("speed", 2525).is_ok());
    assert!(validate_speed_step("speed", 1010).is_err());
}

#[test]
fn test_validate_range() {
    assert!(validate_range("cycles", 3, 3).is_ok());
    assert!(validate_range("cycles", 4, 3).is_err());
}
