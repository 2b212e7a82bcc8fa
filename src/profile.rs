use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::characteristic::{pax, Characteristic, CharacteristicId};
use crate::error::Error;

/// The fan models this crate can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceModel {
    Calima,
    Svara,
}

impl DeviceModel {
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceModel::Calima => "Calima",
            DeviceModel::Svara => "Svara",
        }
    }
}

impl fmt::Display for DeviceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calima" => Ok(DeviceModel::Calima),
            "svara" => Ok(DeviceModel::Svara),
            _ => Err(Error::UnsupportedModel(s.to_string())),
        }
    }
}

/// Maps logical characteristics to the identifiers used by one device model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    model: DeviceModel,
}

impl DeviceProfile {
    pub fn new(model: DeviceModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> DeviceModel {
        self.model
    }

    /// The identifier of `characteristic` on this model.
    pub fn characteristic(&self, characteristic: Characteristic) -> CharacteristicId {
        let uuid = match characteristic {
            Characteristic::DeviceName => return self.device_name(),
            Characteristic::SensorData => pax::SENSOR_DATA,
            Characteristic::FanSpeed => pax::LEVEL_OF_FAN_SPEED,
            Characteristic::Sensitivity => pax::SENSITIVITY,
            Characteristic::LightSensor => pax::TIME_FUNCTIONS,
            Characteristic::HeatDistributor => pax::TEMP_HEAT_DISTRIBUTOR,
            Characteristic::TrickleDays => pax::BASIC_VENTILATION,
            Characteristic::Boost => pax::BOOST,
            Characteristic::Clock => pax::CLOCK,
            Characteristic::SilentHours => pax::NIGHT_MODE,
            Characteristic::PinCode => pax::PIN_CODE,
            Characteristic::PinConfirmation => pax::PIN_CONFIRMATION,
            Characteristic::FactorySettingsChanged => pax::FACTORY_SETTINGS_CHANGED,
            Characteristic::AutomaticCycles => pax::AUTOMATIC_CYCLES,
            Characteristic::Alias => pax::FAN_DESCRIPTION,
            Characteristic::Mode => pax::MODE,
            Characteristic::Status => pax::STATUS,
            Characteristic::Led => pax::LED,
            Characteristic::Reset => pax::RESET,
        };
        CharacteristicId::Uuid(uuid)
    }

    // Svara firmware publishes the GAP device name one attribute earlier.
    fn device_name(&self) -> CharacteristicId {
        match self.model {
            DeviceModel::Calima => CharacteristicId::Handle(0x03),
            DeviceModel::Svara => CharacteristicId::Handle(0x02),
        }
    }
}

impl FromStr for DeviceProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.parse()?))
    }
}

#[test]
fn test_parse_model() {
    assert_eq!("Calima".parse::<DeviceModel>().unwrap(), DeviceModel::Calima);
    assert_eq!("svara".parse::<DeviceModel>().unwrap(), DeviceModel::Svara);
    assert!(matches!(
        "Levante".parse::<DeviceModel>(),
        Err(Error::UnsupportedModel(m)) if m == "Levante"
    ));
}

#[test]
fn test_shared_characteristics() {
    let calima = DeviceProfile::new(DeviceModel::Calima);
    let svara = DeviceProfile::new(DeviceModel::Svara);
    for c in [
        Characteristic::Sensitivity,
        Characteristic::LightSensor,
        Characteristic::HeatDistributor,
        Characteristic::TrickleDays,
    ] {
        assert_eq!(calima.characteristic(c), svara.characteristic(c));
    }
    assert_eq!(
        calima.characteristic(Characteristic::SensorData),
        CharacteristicId::Uuid(pax::SENSOR_DATA)
    );
    assert_ne!(
        calima.characteristic(Characteristic::DeviceName),
        svara.characteristic(Characteristic::DeviceName)
    );
}

#[test]
fn test_models_differ_only_in_device_name() {
    let calima = DeviceProfile::new(DeviceModel::Calima);
    let svara = DeviceProfile::new(DeviceModel::Svara);
    for c in [
        Characteristic::SensorData,
        Characteristic::FanSpeed,
        Characteristic::Boost,
        Characteristic::Clock,
        Characteristic::SilentHours,
        Characteristic::PinCode,
        Characteristic::PinConfirmation,
        Characteristic::FactorySettingsChanged,
        Characteristic::AutomaticCycles,
        Characteristic::Alias,
        Characteristic::Mode,
        Characteristic::Status,
        Characteristic::Led,
        Characteristic::Reset,
    ] {
        assert_eq!(calima.characteristic(c), svara.characteristic(c), "{}", c.name());
    }
    assert_eq!(
        calima.characteristic(Characteristic::DeviceName),
        CharacteristicId::Handle(0x03)
    );
    assert_eq!(
        svara.characteristic(Characteristic::DeviceName),
        CharacteristicId::Handle(0x02)
    );
}
