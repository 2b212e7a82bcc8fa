use serde::{Deserialize, Serialize};

use super::{validate_speed_step, Decode, Encode, Fields, Payload};
use crate::characteristic::Characteristic;
use crate::error::{Error, Result};

/// Fan speed in rpm used for each kind of ventilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanSpeedSettings {
    pub humidity: u16,
    pub light: u16,
    pub trickle: u16,
}

impl FanSpeedSettings {
    pub const MAX_RPM: u16 = 2500;
    const LEN: usize = 6;

    fn validate(field: &'static str, rpm: u16) -> Result<()> {
        validate_speed_step(field, rpm)?;
        if rpm > Self::MAX_RPM {
            return Err(Error::invalid(
                field,
                format!("{rpm} is outside 0-{} rpm", Self::MAX_RPM),
            ));
        }
        Ok(())
    }
}

impl Default for FanSpeedSettings {
    fn default() -> Self {
        Self {
            humidity: 2250,
            light: 1625,
            trickle: 1000,
        }
    }
}

impl Payload for FanSpeedSettings {
    const CHARACTERISTIC: Characteristic = Characteristic::FanSpeed;
}

impl Decode for FanSpeedSettings {
    fn decode(data: &[u8]) -> Result<Self> {
        let mut f = Fields::new(Self::CHARACTERISTIC, data, Self::LEN)?;
        Ok(Self {
            humidity: f.u16(),
            light: f.u16(),
            trickle: f.u16(),
        })
    }
}

impl Encode for FanSpeedSettings {
    fn encode(&self) -> Result<Vec<u8>> {
        Self::validate("humidity speed", self.humidity)?;
        Self::validate("light speed", self.light)?;
        Self::validate("trickle speed", self.trickle)?;

        let mut data = Vec::with_capacity(Self::LEN);
        data.extend_from_slice(&self.humidity.to_le_bytes());
        data.extend_from_slice(&self.light.to_le_bytes());
        data.extend_from_slice(&self.trickle.to_le_bytes());
        Ok(data)
    }
}

#[test]
fn test_encode_fan_speeds() {
    let data = FanSpeedSettings::default().encode().unwrap();
    assert_eq!(hex::encode(data), "ca085906e803");
}

#[test]
fn test_fan_speeds_round_trip_full_range() {
    for rpm in (0..=FanSpeedSettings::MAX_RPM).step_by(25) {
        let settings = FanSpeedSettings {
            humidity: rpm,
            light: FanSpeedSettings::MAX_RPM - rpm,
            trickle: rpm / 50 * 25,
        };
        let data = settings.encode().unwrap();
        assert_eq!(FanSpeedSettings::decode(&data).unwrap(), settings);
    }
}

#[test]
fn test_fan_speeds_rejects_each_field() {
    let ok = FanSpeedSettings::default();
    for bad in [10, 2525, 2600] {
        for settings in [
            FanSpeedSettings { humidity: bad, ..ok },
            FanSpeedSettings { light: bad, ..ok },
            FanSpeedSettings { trickle: bad, ..ok },
        ] {
            assert!(matches!(settings.encode(), Err(Error::InvalidValue { .. })));
        }
    }
}
