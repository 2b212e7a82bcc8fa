use std::fmt;

use bluest::Uuid;

/// How a GATT characteristic is addressed on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacteristicId {
    Uuid(Uuid),
    /// An attribute handle, stable for a given firmware.
    Handle(u16),
}

impl fmt::Display for CharacteristicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacteristicId::Uuid(uuid) => write!(f, "{uuid}"),
            CharacteristicId::Handle(handle) => write!(f, "handle 0x{handle:02x}"),
        }
    }
}

/// The logical characteristics a fan exposes.
///
/// Which [`CharacteristicId`] backs each one depends on the device model, see
/// [`crate::DeviceProfile::characteristic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Characteristic {
    DeviceName,
    SensorData,
    FanSpeed,
    Sensitivity,
    LightSensor,
    HeatDistributor,
    TrickleDays,
    Boost,
    Clock,
    SilentHours,
    PinCode,
    PinConfirmation,
    FactorySettingsChanged,
    AutomaticCycles,
    Alias,
    Mode,
    Status,
    Led,
    Reset,
}

impl Characteristic {
    /// Human readable name, used in logs and errors.
    pub fn name(self) -> &'static str {
        match self {
            Characteristic::DeviceName => "device name",
            Characteristic::SensorData => "sensor data",
            Characteristic::FanSpeed => "fan speed settings",
            Characteristic::Sensitivity => "sensitivity",
            Characteristic::LightSensor => "light sensor settings",
            Characteristic::HeatDistributor => "heat distributor",
            Characteristic::TrickleDays => "trickle days",
            Characteristic::Boost => "boost mode",
            Characteristic::Clock => "clock",
            Characteristic::SilentHours => "silent hours",
            Characteristic::PinCode => "pin code",
            Characteristic::PinConfirmation => "pin confirmation",
            Characteristic::FactorySettingsChanged => "factory settings changed",
            Characteristic::AutomaticCycles => "automatic cycles",
            Characteristic::Alias => "alias",
            Characteristic::Mode => "mode",
            Characteristic::Status => "status",
            Characteristic::Led => "led",
            Characteristic::Reset => "reset",
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Standard Device Information strings, read through fixed attribute handles
/// that are the same on every model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceInfoField {
    ModelNumber,
    SerialNumber,
    HardwareRevision,
    FirmwareRevision,
    SoftwareRevision,
    Manufacturer,
}

impl DeviceInfoField {
    pub fn id(self) -> CharacteristicId {
        CharacteristicId::Handle(match self {
            DeviceInfoField::SerialNumber => 0x0b,
            DeviceInfoField::ModelNumber => 0x0d,
            DeviceInfoField::HardwareRevision => 0x0f,
            DeviceInfoField::FirmwareRevision => 0x11,
            DeviceInfoField::SoftwareRevision => 0x13,
            DeviceInfoField::Manufacturer => 0x15,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            DeviceInfoField::ModelNumber => "model number",
            DeviceInfoField::SerialNumber => "serial number",
            DeviceInfoField::HardwareRevision => "hardware revision",
            DeviceInfoField::FirmwareRevision => "firmware revision",
            DeviceInfoField::SoftwareRevision => "software revision",
            DeviceInfoField::Manufacturer => "manufacturer",
        }
    }
}

/// Pax vendor characteristics.
pub(crate) mod pax {
    use bluest::Uuid;

    // Shared by every model.
    pub const SENSITIVITY: Uuid = Uuid::from_u128(0xe782e131_6ce1_4191_a8db_f4304d7610f1);
    pub const TIME_FUNCTIONS: Uuid = Uuid::from_u128(0x49c616de_02b1_4b67_b237_90f66793a6f2);
    pub const TEMP_HEAT_DISTRIBUTOR: Uuid = Uuid::from_u128(0xa22eae12_dba8_49f3_9c69_1721dcff1d96);
    pub const BASIC_VENTILATION: Uuid = Uuid::from_u128(0xfaa49e09_a79c_4725_b197_bdc57c67dc32);

    pub const SENSOR_DATA: Uuid = Uuid::from_u128(0x528b80e8_c47a_4c0a_bdf1_916a7748f412);
    pub const LEVEL_OF_FAN_SPEED: Uuid = Uuid::from_u128(0x1488a757_35bc_4ec8_9a6b_9ecf1502778e);
    pub const BOOST: Uuid = Uuid::from_u128(0x118c949c_28c8_4139_b0b3_36657fd055a9);
    pub const CLOCK: Uuid = Uuid::from_u128(0x6dec478e_ae0b_4186_9d82_13dda03c0682);
    pub const NIGHT_MODE: Uuid = Uuid::from_u128(0xb5836b55_57bd_433e_8480_46e4993c5ac0);
    pub const PIN_CODE: Uuid = Uuid::from_u128(0x4cad343a_209a_40b7_b911_4d9b3df569b2);
    pub const PIN_CONFIRMATION: Uuid = Uuid::from_u128(0xd1ae6b70_ee12_4f6d_b166_d2063dcaffe1);
    pub const FACTORY_SETTINGS_CHANGED: Uuid =
        Uuid::from_u128(0x63b04af9_24c0_4e5d_a69c_94eb9c5707b4);
    pub const AUTOMATIC_CYCLES: Uuid = Uuid::from_u128(0xf508408a_508b_41c6_aa57_61d1fd0d5c39);
    pub const FAN_DESCRIPTION: Uuid = Uuid::from_u128(0xb85fa07a_9382_4838_871c_81d045dcc2ff);
    pub const MODE: Uuid = Uuid::from_u128(0x90cabcd1_bcda_4167_85d8_16dcd8ab6a6b);
    pub const STATUS: Uuid = Uuid::from_u128(0x25a824ad_3021_4de9_9f2f_60cf8d17bded);
    pub const LED: Uuid = Uuid::from_u128(0x8b850c04_dc18_44d2_9501_7662d65ba36e);
    pub const RESET: Uuid = Uuid::from_u128(0xff5f7c4f_2606_4c69_b360_15aaea58ad5f);
}

#[test]
fn test_device_info_handles() {
    assert_eq!(DeviceInfoField::SerialNumber.id(), CharacteristicId::Handle(0x0b));
    assert_eq!(DeviceInfoField::Manufacturer.id(), CharacteristicId::Handle(0x15));
    assert_eq!(DeviceInfoField::FirmwareRevision.id().to_string(), "handle 0x11");
}
