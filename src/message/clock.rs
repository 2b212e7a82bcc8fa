use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{Decode, Encode, Fields, Payload};
use crate::characteristic::Characteristic;
use crate::error::{Error, Result};

/// The fan's internal clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    /// ISO weekday, Monday is 1 and Sunday is 7
    pub day_of_week: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl From<OffsetDateTime> for ClockTime {
    fn from(now: OffsetDateTime) -> Self {
        Self {
            day_of_week: now.weekday().number_from_monday(),
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
        }
    }
}

impl Payload for ClockTime {
    const CHARACTERISTIC: Characteristic = Characteristic::Clock;
}

impl Decode for ClockTime {
    fn decode(data: &[u8]) -> Result<Self> {
        let mut f = Fields::new(Self::CHARACTERISTIC, data, 4)?;
        Ok(Self {
            day_of_week: f.u8(),
            hour: f.u8(),
            minute: f.u8(),
            second: f.u8(),
        })
    }
}

impl Encode for ClockTime {
    fn encode(&self) -> Result<Vec<u8>> {
        if !(1..=7).contains(&self.day_of_week) {
            return Err(Error::invalid(
                "day of week",
                format!("{} must be between 1-7", self.day_of_week),
            ));
        }
        super::validate_range("hour", self.hour, 23)?;
        super::validate_range("minute", self.minute, 59)?;
        super::validate_range("second", self.second, 59)?;
        Ok(vec![self.day_of_week, self.hour, self.minute, self.second])
    }
}

#[test]
fn test_clock_from_datetime() {
    // 2024-03-10 was a Sunday
    let now = time::macros::datetime!(2024-03-10 21:05:09 UTC);
    let clock = ClockTime::from(now);
    assert_eq!(
        clock,
        ClockTime { day_of_week: 7, hour: 21, minute: 5, second: 9 }
    );
    assert_eq!(clock.encode().unwrap(), vec![7, 21, 5, 9]);
}

#[test]
fn test_clock_validation() {
    let ok = ClockTime { day_of_week: 1, hour: 0, minute: 0, second: 0 };
    assert!(ok.encode().is_ok());
    assert!(ClockTime { day_of_week: 0, ..ok }.encode().is_err());
    assert!(ClockTime { hour: 24, ..ok }.encode().is_err());
    assert!(ClockTime { minute: 60, ..ok }.encode().is_err());
    assert!(ClockTime { second: 60, ..ok }.encode().is_err());
}
