use serde::{Deserialize, Serialize};

use super::{Decode, Encode, Fields, Payload};
use crate::characteristic::Characteristic;
use crate::error::{Error, Result};

/// Light triggered ventilation timing, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightSensorSettings {
    pub delayed_start: u8,
    pub running_time: u8,
}

impl LightSensorSettings {
    pub const DELAYED_START_MINUTES: [u8; 3] = [0, 5, 10];
    pub const RUNNING_TIME_MINUTES: [u8; 5] = [5, 10, 15, 30, 60];
    const LEN: usize = 2;
}

impl Payload for LightSensorSettings {
    const CHARACTERISTIC: Characteristic = Characteristic::LightSensor;
}

impl Decode for LightSensorSettings {
    fn decode(data: &[u8]) -> Result<Self> {
        let mut f = Fields::new(Self::CHARACTERISTIC, data, Self::LEN)?;
        Ok(Self {
            delayed_start: f.u8(),
            running_time: f.u8(),
        })
    }
}

impl Encode for LightSensorSettings {
    fn encode(&self) -> Result<Vec<u8>> {
        if !Self::DELAYED_START_MINUTES.contains(&self.delayed_start) {
            return Err(Error::invalid(
                "delayed start",
                format!("{} must be 0, 5 or 10 minutes", self.delayed_start),
            ));
        }
        if !Self::RUNNING_TIME_MINUTES.contains(&self.running_time) {
            return Err(Error::invalid(
                "running time",
                format!("{} must be 5, 10, 15, 30 or 60 minutes", self.running_time),
            ));
        }
        Ok(vec![self.delayed_start, self.running_time])
    }
}

#[test]
fn test_light_sensor_round_trip() {
    for delayed_start in LightSensorSettings::DELAYED_START_MINUTES {
        for running_time in LightSensorSettings::RUNNING_TIME_MINUTES {
            let s = LightSensorSettings { delayed_start, running_time };
            assert_eq!(LightSensorSettings::decode(&s.encode().unwrap()).unwrap(), s);
        }
    }
}

#[test]
fn test_light_sensor_rejects_illegal_minutes() {
    let bad_delay = LightSensorSettings { delayed_start: 7, running_time: 5 };
    assert!(bad_delay.encode().is_err());
    let bad_running = LightSensorSettings { delayed_start: 0, running_time: 0 };
    assert!(bad_running.encode().is_err());
}
