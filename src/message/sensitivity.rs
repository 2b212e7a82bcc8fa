use serde::{Deserialize, Serialize};

use super::{validate_range, Decode, Encode, Fields, Payload};
use crate::characteristic::Characteristic;
use crate::error::Result;

/// Sensitivity of the humidity and light sensors, 0 (off) to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensitivity {
    pub humidity_on: u8,
    pub humidity: u8,
    pub light_on: u8,
    pub light: u8,
}

impl Sensitivity {
    pub const MAX_LEVEL: u8 = 3;
    const LEN: usize = 4;

    /// Build the settings written for the given levels. A level of 0 switches the sensor off.
    pub fn new(humidity: u8, light: u8) -> Self {
        Self {
            humidity_on: u8::from(humidity != 0),
            humidity,
            light_on: u8::from(light != 0),
            light,
        }
    }
}

impl Payload for Sensitivity {
    const CHARACTERISTIC: Characteristic = Characteristic::Sensitivity;
}

impl Decode for Sensitivity {
    /// The fan keeps the last level around while a sensor is disabled, so the
    /// level is reported as 0 whenever its sensor is off.
    fn decode(data: &[u8]) -> Result<Self> {
        let mut f = Fields::new(Self::CHARACTERISTIC, data, Self::LEN)?;
        let (humidity_on, humidity, light_on, light) = (f.u8(), f.u8(), f.u8(), f.u8());
        Ok(Self {
            humidity_on,
            humidity: if humidity_on != 0 { humidity } else { 0 },
            light_on,
            light: if light_on != 0 { light } else { 0 },
        })
    }
}

impl Encode for Sensitivity {
    fn encode(&self) -> Result<Vec<u8>> {
        validate_range("humidity sensitivity", self.humidity, Self::MAX_LEVEL)?;
        validate_range("light sensitivity", self.light, Self::MAX_LEVEL)?;
        // On flags are derived from the levels, never taken from the record.
        Ok(vec![
            u8::from(self.humidity != 0),
            self.humidity,
            u8::from(self.light != 0),
            self.light,
        ])
    }
}

#[test]
fn test_decode_zeroes_disabled_levels() {
    let s = Sensitivity::decode(&[0, 3, 1, 2]).unwrap();
    assert_eq!(
        s,
        Sensitivity {
            humidity_on: 0,
            humidity: 0,
            light_on: 1,
            light: 2
        }
    );
}

#[test]
fn test_encode_derives_flags() {
    assert_eq!(Sensitivity::new(2, 0).encode().unwrap(), vec![1, 2, 0, 0]);
    assert_eq!(Sensitivity::new(0, 3).encode().unwrap(), vec![0, 0, 1, 3]);
}

#[test]
fn test_encode_ignores_stale_flags() {
    let stale = Sensitivity {
        humidity_on: 0,
        humidity: 3,
        light_on: 1,
        light: 2,
    };
    assert_eq!(stale.encode().unwrap(), vec![1, 3, 1, 2]);
    assert_eq!(Sensitivity::decode(&stale.encode().unwrap()).unwrap(), Sensitivity::new(3, 2));

    let off = Sensitivity {
        humidity_on: 1,
        humidity: 0,
        light_on: 1,
        light: 0,
    };
    assert_eq!(off.encode().unwrap(), vec![0, 0, 0, 0]);
}

#[test]
fn test_encode_rejects_levels_above_three() {
    assert!(Sensitivity::new(4, 0).encode().is_err());
    assert!(Sensitivity::new(0, 9).encode().is_err());
}

#[test]
fn test_sensitivity_round_trip() {
    for h in 0..=Sensitivity::MAX_LEVEL {
        for l in 0..=Sensitivity::MAX_LEVEL {
            let s = Sensitivity::new(h, l);
            assert_eq!(Sensitivity::decode(&s.encode().unwrap()).unwrap(), s);
        }
    }
}
