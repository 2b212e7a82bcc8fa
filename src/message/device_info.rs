use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identification strings published by the fan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub name: String,
    pub model_number: String,
    pub serial_number: String,
    pub hardware_revision: String,
    pub firmware_revision: String,
    pub software_revision: String,
    pub manufacturer: String,
}

/// Decode a plain ASCII string characteristic.
pub(crate) fn decode_ascii(characteristic: &'static str, data: &[u8]) -> Result<String> {
    let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    let text = &data[..end];
    if !text.is_ascii() {
        return Err(Error::InvalidText {
            characteristic,
            payload: hex::encode(data),
        });
    }
    Ok(text.iter().map(|&b| char::from(b)).collect())
}

#[test]
fn test_decode_ascii() {
    assert_eq!(decode_ascii("manufacturer", b"PAX\0\0").unwrap(), "PAX");
    assert_eq!(decode_ascii("manufacturer", b"").unwrap(), "");
    assert!(decode_ascii("manufacturer", &[0x50, 0xc3, 0xa9]).is_err());
}
