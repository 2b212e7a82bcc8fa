use super::{Decode, Encode, Fields, Payload};
use crate::characteristic::Characteristic;
use crate::error::Result;

/// The PIN printed on the fan, written to unlock the settings characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinCode(pub u32);

impl Payload for PinCode {
    const CHARACTERISTIC: Characteristic = Characteristic::PinCode;
}

impl Encode for PinCode {
    fn encode(&self) -> Result<Vec<u8>> {
        Ok(self.0.to_le_bytes().to_vec())
    }
}

/// Whether the fan accepted the last PIN written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinConfirmation(pub bool);

impl Payload for PinConfirmation {
    const CHARACTERISTIC: Characteristic = Characteristic::PinConfirmation;
}

impl Decode for PinConfirmation {
    fn decode(data: &[u8]) -> Result<Self> {
        let mut f = Fields::new(Self::CHARACTERISTIC, data, 1)?;
        // Signed on the wire, but any nonzero value means authorized.
        Ok(Self(f.u8() as i8 != 0))
    }
}

#[test]
fn test_encode_pin() {
    assert_eq!(hex::encode(PinCode(12345678).encode().unwrap()), "4e61bc00");
}

#[test]
fn test_decode_confirmation() {
    assert_eq!(PinConfirmation::decode(&[0]).unwrap(), PinConfirmation(false));
    assert_eq!(PinConfirmation::decode(&[1]).unwrap(), PinConfirmation(true));
    assert_eq!(PinConfirmation::decode(&[0xff]).unwrap(), PinConfirmation(true));
}
