use serde::{Deserialize, Serialize};

use super::{Decode, Encode, Fields, Payload};
use crate::characteristic::Characteristic;
use crate::error::Result;

/// Whether trickle ventilation runs on weekdays and weekends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickleDays {
    pub weekdays: u8,
    pub weekends: u8,
}

impl Payload for TrickleDays {
    const CHARACTERISTIC: Characteristic = Characteristic::TrickleDays;
}

impl Decode for TrickleDays {
    fn decode(data: &[u8]) -> Result<Self> {
        let mut f = Fields::new(Self::CHARACTERISTIC, data, 2)?;
        Ok(Self {
            weekdays: f.u8(),
            weekends: f.u8(),
        })
    }
}

impl Encode for TrickleDays {
    fn encode(&self) -> Result<Vec<u8>> {
        Ok(vec![self.weekdays, self.weekends])
    }
}

#[test]
fn test_trickle_days_round_trip() {
    let days = TrickleDays { weekdays: 1, weekends: 0 };
    assert_eq!(TrickleDays::decode(&days.encode().unwrap()).unwrap(), days);
}
