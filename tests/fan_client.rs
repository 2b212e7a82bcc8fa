mod common;

use common::{FakeTransport, ADDRESS};
use paxfan::{
    BoostMode, Characteristic, CharacteristicId, ClockTime, DeviceInfoField, DeviceProfile, Error,
    FanClient, FanMode, FanSpeedSettings, LightSensorSettings, Sensitivity, SilentHours,
    TrickleDays, Trigger,
};

async fn connected(model: &str, pin: Option<u32>) -> (FanClient<FakeTransport>, FakeTransport) {
    let transport = FakeTransport::reachable();
    let mut fan = FanClient::new(transport.clone(), model, ADDRESS, pin).unwrap();
    assert!(fan.connect().await);
    (fan, transport)
}

fn id(fan: &FanClient<FakeTransport>, characteristic: Characteristic) -> CharacteristicId {
    fan.profile().characteristic(characteristic)
}

#[tokio::test]
async fn test_get_state() {
    let (fan, transport) = connected("Calima", None).await;
    let data = hex::decode("5e0032000a000807100000ff").unwrap();
    transport.set_value(id(&fan, Characteristic::SensorData), &data);

    let state = fan.get_state().await.unwrap();
    assert_eq!(state.humidity, 60.0);
    assert!((state.temperature - 9.9).abs() < 1e-9);
    assert_eq!(state.light, 10);
    assert_eq!(state.speed, 1800);
    assert_eq!(state.trigger, Trigger::Boost);
}

#[tokio::test]
async fn test_every_get_reads_the_device() {
    let (fan, transport) = connected("Calima", None).await;
    transport.set_value(id(&fan, Characteristic::Mode), &[1]);

    assert_eq!(fan.get_mode().await.unwrap(), FanMode::DraftShutterMode);
    transport.set_value(id(&fan, Characteristic::Mode), &[9]);
    assert_eq!(fan.get_mode().await.unwrap(), FanMode::Unknown(9));
    assert_eq!(transport.state().reads.len(), 2);
}

#[tokio::test]
async fn test_set_fan_speed_settings() {
    let (fan, transport) = connected("Calima", None).await;
    fan.set_fan_speed_settings(FanSpeedSettings::default()).await.unwrap();

    let state = transport.state();
    assert_eq!(state.writes.len(), 1);
    let (written_id, value, with_response) = &state.writes[0];
    assert_eq!(*written_id, id(&fan, Characteristic::FanSpeed));
    assert_eq!(hex::encode(value), "ca085906e803");
    assert!(*with_response);
}

#[tokio::test]
async fn test_invalid_fan_speed_is_never_written() {
    let (fan, transport) = connected("Calima", None).await;
    let speeds = [
        FanSpeedSettings { humidity: 2255, light: 1000, trickle: 1000 },
        FanSpeedSettings { humidity: 1000, light: 2600, trickle: 1000 },
        FanSpeedSettings { humidity: 1000, light: 1000, trickle: 1 },
    ];
    for s in speeds {
        assert!(matches!(
            fan.set_fan_speed_settings(s).await,
            Err(Error::InvalidValue { .. })
        ));
    }
    assert!(transport.state().writes.is_empty());
}

#[tokio::test]
async fn test_fan_speed_round_trip_through_device() {
    let (fan, _transport) = connected("Svara", None).await;
    let speeds = FanSpeedSettings { humidity: 2500, light: 0, trickle: 825 };
    fan.set_fan_speed_settings(speeds).await.unwrap();
    assert_eq!(fan.get_fan_speed_settings().await.unwrap(), speeds);
}

#[tokio::test]
async fn test_boost_off_writes_zeroes() {
    let (fan, transport) = connected("Calima", None).await;
    fan.set_boost_mode(false, 500, 30).await.unwrap();

    assert_eq!(transport.state().writes[0].1, vec![0, 0, 0, 0, 0]);
    assert_eq!(fan.get_boost_mode().await.unwrap(), BoostMode::off());
}

#[tokio::test]
async fn test_sensitivity_normalized_on_read() {
    let (fan, transport) = connected("Calima", None).await;
    transport.set_value(id(&fan, Characteristic::Sensitivity), &[0, 3, 1, 2]);

    let sensitivity = fan.get_sensors_sensitivity().await.unwrap();
    assert_eq!(
        sensitivity,
        Sensitivity { humidity_on: 0, humidity: 0, light_on: 1, light: 2 }
    );

    assert!(fan.set_sensors_sensitivity(4, 0).await.is_err());
    fan.set_sensors_sensitivity(2, 0).await.unwrap();
    assert_eq!(transport.state().writes.last().unwrap().1, vec![1, 2, 0, 0]);
}

#[tokio::test]
async fn test_shared_characteristics_use_fixed_ids() {
    let (fan, transport) = connected("Svara", None).await;
    let calima = DeviceProfile::new(paxfan::DeviceModel::Calima);

    fan.set_light_sensor_settings(LightSensorSettings { delayed_start: 5, running_time: 30 })
        .await
        .unwrap();
    fan.set_trickle_days(TrickleDays { weekdays: 1, weekends: 1 }).await.unwrap();

    let state = transport.state();
    assert_eq!(state.writes[0].0, calima.characteristic(Characteristic::LightSensor));
    assert_eq!(state.writes[1].0, calima.characteristic(Characteristic::TrickleDays));
}

#[tokio::test]
async fn test_authorize() {
    let (fan, transport) = connected("Calima", Some(12345678)).await;
    fan.authorize().await.unwrap();

    let (written_id, value, _) = transport.state().writes[0].clone();
    assert_eq!(written_id, id(&fan, Characteristic::PinCode));
    assert_eq!(hex::encode(value), "4e61bc00");

    transport.set_value(id(&fan, Characteristic::PinConfirmation), &[1]);
    assert!(fan.check_auth().await.unwrap());
    transport.set_value(id(&fan, Characteristic::PinConfirmation), &[0]);
    assert!(!fan.check_auth().await.unwrap());
}

#[tokio::test]
async fn test_authorize_without_pin() {
    let (fan, transport) = connected("Calima", None).await;
    fan.authorize().await.unwrap();
    assert!(transport.state().writes.is_empty());
}

#[tokio::test]
async fn test_device_info() {
    let (fan, transport) = connected("Svara", None).await;
    transport.set_value(CharacteristicId::Handle(0x02), b"PAX Svara");
    let fields = [
        (DeviceInfoField::ModelNumber, "SVARA"),
        (DeviceInfoField::SerialNumber, "0123456789"),
        (DeviceInfoField::HardwareRevision, "1.0"),
        (DeviceInfoField::FirmwareRevision, "1.0.2"),
        (DeviceInfoField::SoftwareRevision, "1.1"),
        (DeviceInfoField::Manufacturer, "PAX"),
    ];
    for (field, value) in fields {
        transport.set_value(field.id(), value.as_bytes());
    }

    let info = fan.get_device_info().await.unwrap();
    assert_eq!(info.name, "PAX Svara");
    assert_eq!(info.serial_number, "0123456789");
    assert_eq!(info.manufacturer, "PAX");
    assert_eq!(fan.get_firmware_revision().await.unwrap(), "1.0.2");
}

#[tokio::test]
async fn test_device_info_stops_at_first_failed_read() {
    let (fan, transport) = connected("Calima", None).await;
    transport.set_value(CharacteristicId::Handle(0x03), b"PAX Calima");
    transport.set_value(DeviceInfoField::ModelNumber.id(), b"CALIMA");

    assert!(matches!(fan.get_device_info().await, Err(Error::Transport(_))));
    // Name and model were read, the serial number read failed and nothing after it ran.
    assert_eq!(fan.transport().state().reads.len(), 3);
}

#[tokio::test]
async fn test_alias_and_clock() {
    let (fan, _transport) = connected("Calima", None).await;
    fan.set_alias("Bathroom").await.unwrap();
    assert_eq!(fan.get_alias().await.unwrap(), "Bathroom");

    let time = ClockTime { day_of_week: 3, hour: 7, minute: 30, second: 0 };
    fan.set_time(time).await.unwrap();
    assert_eq!(fan.get_time().await.unwrap(), time);

    fan.set_time_to_now().await.unwrap();
    let now = fan.get_time().await.unwrap();
    assert!((1..=7).contains(&now.day_of_week));
}

#[tokio::test]
async fn test_silent_hours_and_cycles() {
    let (fan, transport) = connected("Calima", None).await;
    let hours = SilentHours {
        on: true,
        starting_hour: 23,
        starting_minute: 0,
        ending_hour: 7,
        ending_minute: 15,
    };
    fan.set_silent_hours(hours).await.unwrap();
    assert_eq!(fan.get_silent_hours().await.unwrap(), hours);

    assert!(fan.set_automatic_cycles(4).await.is_err());
    fan.set_automatic_cycles(2).await.unwrap();
    assert_eq!(fan.get_automatic_cycles().await.unwrap(), 2);
    assert_eq!(transport.state().writes.len(), 2);
}

#[tokio::test]
async fn test_raw_hex_and_reset() {
    let (fan, transport) = connected("Calima", None).await;
    transport.set_value(id(&fan, Characteristic::Led), &[0x01, 0xff]);
    transport.set_value(id(&fan, Characteristic::Status), &[0x00]);
    transport.set_value(id(&fan, Characteristic::FactorySettingsChanged), &[1]);
    transport.set_value(id(&fan, Characteristic::HeatDistributor), &[22, 0, 0, 0xe8, 0x03]);

    assert_eq!(fan.get_led().await.unwrap(), "01ff");
    assert_eq!(fan.get_is_clock_set().await.unwrap(), "00");
    assert!(fan.get_factory_settings_changed().await.unwrap());
    assert_eq!(fan.get_heat_distributor().await.unwrap().fan_speed_above, 1000);

    fan.reset_values().await.unwrap();
    fan.reset_device().await.unwrap();
    let state = transport.state();
    assert_eq!(state.writes[0].1, vec![85, 0, 0, 0]);
    assert_eq!(state.writes[1].1, vec![120, 0, 0, 0]);
}

#[tokio::test]
async fn test_short_payload_is_an_error() {
    let (fan, transport) = connected("Calima", None).await;
    transport.set_value(id(&fan, Characteristic::SensorData), &[0; 4]);
    assert!(matches!(
        fan.get_state().await,
        Err(Error::PayloadLength { expected: 12, actual: 4, .. })
    ));
}
