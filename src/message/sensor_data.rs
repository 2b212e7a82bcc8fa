use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Decode, Fields, Payload};
use crate::characteristic::Characteristic;
use crate::error::Result;

/// What the fan is currently running for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    None,
    Boost,
    Switch,
    Trickle,
    Light,
    Humidity,
}

impl Trigger {
    /// Decode the trigger bits of the sensor data mode byte.
    ///
    /// The checks overlap, so the order matters: boost wins over the wall switch,
    /// which wins over the ventilation bits.
    pub fn from_mode_byte(mode: u8) -> Self {
        if (mode >> 4) & 1 == 1 {
            Trigger::Boost
        } else if (mode >> 6) & 3 == 3 {
            Trigger::Switch
        } else {
            // The humidity trigger may be set while humidity mode itself is disabled.
            match mode & 3 {
                1 => Trigger::Trickle,
                2 => Trigger::Light,
                3 => Trigger::Humidity,
                _ => Trigger::None,
            }
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Trigger::None => "No trigger",
            Trigger::Boost => "Boost",
            Trigger::Switch => "Switch",
            Trigger::Trickle => "Trickle ventilation",
            Trigger::Light => "Light ventilation",
            Trigger::Humidity => "Humidity ventilation",
        })
    }
}

/// A snapshot of the fan sensors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FanState {
    /// Relative humidity in %, derived from the raw sensor count
    pub humidity: f64,
    /// Temperature in °C
    pub temperature: f64,
    /// Light level in raw sensor units
    pub light: u16,
    /// Fan speed in rpm
    pub speed: u16,
    pub trigger: Trigger,
}

impl FanState {
    // Short Short Short Short    Byte Short Byte
    // Hum   Temp  Light FanSpeed Mode Tbd   Tbd
    const LEN: usize = 12;

    /// The sensor reports humidity on a log scale offset by 30 counts.
    fn humidity(raw: u16) -> f64 {
        if raw > 30 {
            let h = f64::from(raw - 30).log2() * 10.0;
            (h * 100.0).round() / 100.0
        } else {
            0.0
        }
    }

    fn temperature(raw: u16) -> f64 {
        f64::from(raw) / 4.0 - 2.6
    }
}

impl Payload for FanState {
    const CHARACTERISTIC: Characteristic = Characteristic::SensorData;
}

impl Decode for FanState {
    fn decode(data: &[u8]) -> Result<Self> {
        let mut f = Fields::new(Self::CHARACTERISTIC, data, Self::LEN)?;
        let humidity = Self::humidity(f.u16());
        let temperature = Self::temperature(f.u16());
        let light = f.u16();
        let speed = f.u16();
        let trigger = Trigger::from_mode_byte(f.u8());

        Ok(Self {
            humidity,
            temperature,
            light,
            speed,
            trigger,
        })
    }
}

#[cfg(test)]
fn sensor_payload(hum: u16, temp: u16, light: u16, speed: u16, mode: u8) -> Vec<u8> {
    let mut data = Vec::new();
    for v in [hum, temp, light, speed] {
        data.extend_from_slice(&v.to_le_bytes());
    }
    data.push(mode);
    data.extend_from_slice(&[0, 0, 0]);
    data
}

#[test]
fn test_decode_state() {
    let state = FanState::decode(&sensor_payload(94, 50, 10, 1800, 0x10)).unwrap();
    assert_eq!(state.humidity, 60.0);
    assert!((state.temperature - 9.9).abs() < 1e-9);
    assert_eq!(state.light, 10);
    assert_eq!(state.speed, 1800);
    assert_eq!(state.trigger, Trigger::Boost);
}

#[test]
fn test_decode_state_from_wire() {
    let data = hex::decode("5e0032000a000807100000ff").unwrap();
    let state = FanState::decode(&data).unwrap();
    assert_eq!(state.humidity, 60.0);
    assert_eq!(state.speed, 1800);
    assert_eq!(state.trigger, Trigger::Boost);
}

#[test]
fn test_humidity_rounding() {
    // log2(20) * 10 = 43.219...
    let state = FanState::decode(&sensor_payload(50, 0, 0, 0, 0)).unwrap();
    assert_eq!(state.humidity, 43.22);
}

#[test]
fn test_humidity_at_or_below_offset_is_zero() {
    for raw in [0, 1, 30] {
        let state = FanState::decode(&sensor_payload(raw, 0, 0, 0, 0)).unwrap();
        assert_eq!(state.humidity, 0.0);
    }
    let state = FanState::decode(&sensor_payload(31, 0, 0, 0, 0)).unwrap();
    assert_eq!(state.humidity, 0.0);
    let state = FanState::decode(&sensor_payload(32, 0, 0, 0, 0)).unwrap();
    assert_eq!(state.humidity, 10.0);
}

#[test]
fn test_trigger_priority() {
    assert_eq!(Trigger::from_mode_byte(0x00), Trigger::None);
    assert_eq!(Trigger::from_mode_byte(0x10), Trigger::Boost);
    // Boost wins over the switch bits and the ventilation bits.
    assert_eq!(Trigger::from_mode_byte(0xd3), Trigger::Boost);
    assert_eq!(Trigger::from_mode_byte(0xc0), Trigger::Switch);
    assert_eq!(Trigger::from_mode_byte(0xc3), Trigger::Switch);
    assert_eq!(Trigger::from_mode_byte(0x40), Trigger::None);
    assert_eq!(Trigger::from_mode_byte(0x01), Trigger::Trickle);
    assert_eq!(Trigger::from_mode_byte(0x42), Trigger::Light);
    assert_eq!(Trigger::from_mode_byte(0x83), Trigger::Humidity);
}

#[test]
fn test_trigger_display() {
    assert_eq!(Trigger::None.to_string(), "No trigger");
    assert_eq!(Trigger::Trickle.to_string(), "Trickle ventilation");
}

#[test]
fn test_decode_state_short_payload() {
    assert!(FanState::decode(&[0u8; 11]).is_err());
}
