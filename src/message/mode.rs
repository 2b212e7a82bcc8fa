use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Decode, Fields, Payload};
use crate::characteristic::Characteristic;
use crate::error::Result;

/// Operating mode of the fan. Reported by the fan, never written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FanMode {
    MultiMode,
    DraftShutterMode,
    WallSwitchExtendedRuntimeMode,
    WallSwitchNoExtendedRuntimeMode,
    HeatDistributionMode,
    /// A mode value this crate does not know about, kept as reported.
    Unknown(u8),
}

impl From<u8> for FanMode {
    fn from(value: u8) -> Self {
        match value {
            0 => FanMode::MultiMode,
            1 => FanMode::DraftShutterMode,
            2 => FanMode::WallSwitchExtendedRuntimeMode,
            3 => FanMode::WallSwitchNoExtendedRuntimeMode,
            4 => FanMode::HeatDistributionMode,
            other => FanMode::Unknown(other),
        }
    }
}

impl fmt::Display for FanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FanMode::MultiMode => f.write_str("MultiMode"),
            FanMode::DraftShutterMode => f.write_str("DraftShutterMode"),
            FanMode::WallSwitchExtendedRuntimeMode => f.write_str("WallSwitchExtendedRuntimeMode"),
            FanMode::WallSwitchNoExtendedRuntimeMode => {
                f.write_str("WallSwitchNoExtendedRuntimeMode")
            }
            FanMode::HeatDistributionMode => f.write_str("HeatDistributionMode"),
            FanMode::Unknown(v) => write!(f, "Unknown({v})"),
        }
    }
}

impl Payload for FanMode {
    const CHARACTERISTIC: Characteristic = Characteristic::Mode;
}

impl Decode for FanMode {
    fn decode(data: &[u8]) -> Result<Self> {
        let mut f = Fields::new(Self::CHARACTERISTIC, data, 1)?;
        Ok(f.u8().into())
    }
}

#[test]
fn test_decode_modes() {
    assert_eq!(FanMode::decode(&[0]).unwrap(), FanMode::MultiMode);
    assert_eq!(FanMode::decode(&[4]).unwrap(), FanMode::HeatDistributionMode);
    assert_eq!(FanMode::decode(&[5]).unwrap(), FanMode::Unknown(5));
    assert_eq!(FanMode::Unknown(9).to_string(), "Unknown(9)");
}
