use super::{Decode, Encode, Fields, Payload};
use crate::characteristic::Characteristic;
use crate::error::{Error, Result};

/// The user assigned name of the fan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias(pub String);

impl Alias {
    pub const LEN: usize = 20;
}

impl Payload for Alias {
    const CHARACTERISTIC: Characteristic = Characteristic::Alias;
}

impl Decode for Alias {
    fn decode(data: &[u8]) -> Result<Self> {
        Fields::new(Self::CHARACTERISTIC, data, Self::LEN)?;
        let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        let text = std::str::from_utf8(&data[..end]).map_err(|_| Error::InvalidText {
            characteristic: Self::CHARACTERISTIC.name(),
            payload: hex::encode(data),
        })?;
        Ok(Self(text.to_string()))
    }
}

impl Encode for Alias {
    /// Names longer than the field are cut at the last whole character that fits.
    fn encode(&self) -> Result<Vec<u8>> {
        let mut end = self.0.len().min(Self::LEN);
        while !self.0.is_char_boundary(end) {
            end -= 1;
        }
        let mut data = self.0.as_bytes()[..end].to_vec();
        data.resize(Self::LEN, 0);
        Ok(data)
    }
}

#[test]
fn test_alias_padded() {
    let data = Alias("Bathroom".to_string()).encode().unwrap();
    assert_eq!(data.len(), Alias::LEN);
    assert_eq!(&data[..8], b"Bathroom");
    assert!(data[8..].iter().all(|&b| b == 0));
    assert_eq!(Alias::decode(&data).unwrap(), Alias("Bathroom".to_string()));
}

#[test]
fn test_alias_truncated() {
    let data = Alias("Upstairs bathroom fan #2".to_string()).encode().unwrap();
    assert_eq!(Alias::decode(&data).unwrap().0, "Upstairs bathroom fa");
}

#[test]
fn test_alias_truncated_on_char_boundary() {
    // 19 ASCII bytes followed by a two byte character
    let name = format!("{}é", "a".repeat(19));
    let data = Alias(name).encode().unwrap();
    assert_eq!(data.len(), Alias::LEN);
    assert_eq!(Alias::decode(&data).unwrap().0, "a".repeat(19));
}

#[test]
fn test_alias_invalid_utf8() {
    let mut data = vec![0u8; Alias::LEN];
    data[0] = 0xff;
    assert!(matches!(Alias::decode(&data), Err(Error::InvalidText { .. })));
}
