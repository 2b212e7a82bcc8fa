use serde::{Deserialize, Serialize};

use super::{validate_range, Decode, Encode, Fields, Payload};
use crate::characteristic::Characteristic;
use crate::error::Result;

/// Period of the day during which the fan stays quiet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SilentHours {
    pub on: bool,
    pub starting_hour: u8,
    pub starting_minute: u8,
    pub ending_hour: u8,
    pub ending_minute: u8,
}

impl Payload for SilentHours {
    const CHARACTERISTIC: Characteristic = Characteristic::SilentHours;
}

impl Decode for SilentHours {
    fn decode(data: &[u8]) -> Result<Self> {
        let mut f = Fields::new(Self::CHARACTERISTIC, data, 5)?;
        Ok(Self {
            on: f.bool(),
            starting_hour: f.u8(),
            starting_minute: f.u8(),
            ending_hour: f.u8(),
            ending_minute: f.u8(),
        })
    }
}

impl Encode for SilentHours {
    fn encode(&self) -> Result<Vec<u8>> {
        validate_range("starting hour", self.starting_hour, 23)?;
        validate_range("starting minute", self.starting_minute, 59)?;
        validate_range("ending hour", self.ending_hour, 23)?;
        validate_range("ending minute", self.ending_minute, 59)?;
        Ok(vec![
            u8::from(self.on),
            self.starting_hour,
            self.starting_minute,
            self.ending_hour,
            self.ending_minute,
        ])
    }
}

#[test]
fn test_silent_hours_round_trip() {
    let hours = SilentHours {
        on: true,
        starting_hour: 22,
        starting_minute: 30,
        ending_hour: 6,
        ending_minute: 0,
    };
    let data = hours.encode().unwrap();
    assert_eq!(hex::encode(&data), "01161e0600");
    assert_eq!(SilentHours::decode(&data).unwrap(), hours);
}

#[test]
fn test_silent_hours_rejects_bad_time() {
    let hours = SilentHours {
        on: true,
        starting_hour: 24,
        starting_minute: 0,
        ending_hour: 6,
        ending_minute: 0,
    };
    assert!(hours.encode().is_err());
}
