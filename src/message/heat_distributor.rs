use serde::{Deserialize, Serialize};

use super::{Decode, Fields, Payload};
use crate::characteristic::Characteristic;
use crate::error::Result;

/// Heat distribution mode thresholds. Read only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatDistributorSettings {
    /// Temperature in °C above which the fan switches to `fan_speed_above`
    pub temperature_limit: u8,
    pub fan_speed_below: u16,
    pub fan_speed_above: u16,
}

impl Payload for HeatDistributorSettings {
    const CHARACTERISTIC: Characteristic = Characteristic::HeatDistributor;
}

impl Decode for HeatDistributorSettings {
    fn decode(data: &[u8]) -> Result<Self> {
        let mut f = Fields::new(Self::CHARACTERISTIC, data, 5)?;
        Ok(Self {
            temperature_limit: f.u8(),
            fan_speed_below: f.u16(),
            fan_speed_above: f.u16(),
        })
    }
}

#[test]
fn test_decode_heat_distributor() {
    let data = hex::decode("16000000e803").unwrap();
    assert!(HeatDistributorSettings::decode(&data).is_err());

    let data = hex::decode("160000e803").unwrap();
    assert_eq!(
        HeatDistributorSettings::decode(&data).unwrap(),
        HeatDistributorSettings {
            temperature_limit: 22,
            fan_speed_below: 0,
            fan_speed_above: 1000
        }
    );
}
