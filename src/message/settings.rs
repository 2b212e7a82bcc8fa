use serde::{Deserialize, Serialize};

use super::{validate_range, Decode, Encode, Fields, Payload};
use crate::characteristic::Characteristic;
use crate::error::Result;

/// Set once any setting has been changed from its factory value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorySettingsChanged(pub bool);

impl Payload for FactorySettingsChanged {
    const CHARACTERISTIC: Characteristic = Characteristic::FactorySettingsChanged;
}

impl Decode for FactorySettingsChanged {
    fn decode(data: &[u8]) -> Result<Self> {
        let mut f = Fields::new(Self::CHARACTERISTIC, data, 1)?;
        Ok(Self(f.bool()))
    }
}

/// Automatic airing cycles setting, 0 (off) to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomaticCycles(pub u8);

impl AutomaticCycles {
    pub const MAX: u8 = 3;
}

impl Payload for AutomaticCycles {
    const CHARACTERISTIC: Characteristic = Characteristic::AutomaticCycles;
}

impl Decode for AutomaticCycles {
    fn decode(data: &[u8]) -> Result<Self> {
        let mut f = Fields::new(Self::CHARACTERISTIC, data, 1)?;
        Ok(Self(f.u8()))
    }
}

impl Encode for AutomaticCycles {
    fn encode(&self) -> Result<Vec<u8>> {
        validate_range("automatic cycles", self.0, Self::MAX)?;
        Ok(vec![self.0])
    }
}

/// Commands accepted by the reset characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCommand {
    /// Restart the fan firmware.
    Device,
    /// Restore every setting to its factory value.
    Values,
}

impl ResetCommand {
    fn code(self) -> u32 {
        match self {
            ResetCommand::Device => 120,
            ResetCommand::Values => 85,
        }
    }
}

impl Payload for ResetCommand {
    const CHARACTERISTIC: Characteristic = Characteristic::Reset;
}

impl Encode for ResetCommand {
    fn encode(&self) -> Result<Vec<u8>> {
        Ok(self.code().to_le_bytes().to_vec())
    }
}

#[test]
fn test_automatic_cycles() {
    for n in 0..=AutomaticCycles::MAX {
        let data = AutomaticCycles(n).encode().unwrap();
        assert_eq!(AutomaticCycles::decode(&data).unwrap(), AutomaticCycles(n));
    }
    assert!(AutomaticCycles(4).encode().is_err());
}

#[test]
fn test_factory_settings_changed() {
    assert!(FactorySettingsChanged::decode(&[1]).unwrap().0);
    assert!(!FactorySettingsChanged::decode(&[0]).unwrap().0);
    assert!(FactorySettingsChanged::decode(&[]).is_err());
}

#[test]
fn test_reset_commands() {
    assert_eq!(ResetCommand::Device.encode().unwrap(), vec![120, 0, 0, 0]);
    assert_eq!(ResetCommand::Values.encode().unwrap(), vec![85, 0, 0, 0]);
}
