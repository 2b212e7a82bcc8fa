//! Read and configure Pax bathroom extractor fans over Bluetooth Low Energy
//!
//! Supported models are the Pax Calima and the Pax Svara.
//!
//! The fans expose each setting and the sensor readings as a separate GATT characteristic
//! holding a small fixed-size little-endian record. A [`FanClient`] wraps the connection
//! to one fan and offers one method per characteristic, translating the raw bytes to and
//! from typed values. Values are validated before being written, the fan firmware does not
//! reject illegal settings gracefully.
//!
//! Currently the following data can be accessed:
//!
//! - Humidity (%), temperature (°C), light level, fan speed (rpm) and what triggered the fan
//! - Fan speeds for humidity, light and trickle ventilation
//! - Sensor sensitivity, light sensor timing, heat distribution, boost mode
//! - Clock, silent hours, trickle ventilation days, automatic cycles, mode and name
//! - Device information strings
//!
//! The Bluetooth stack is abstracted by [`BleTransport`]. [`BluestTransport`] implements it
//! for the host adapter.
//!
//! # Example
//!
//! ```no_run
//! # use std::time::Duration;
//! #
//! # #[tokio::main]
//! # pub async fn main(){
//!     let transport = paxfan::BluestTransport::new().await.unwrap();
//!     let mut fan = paxfan::FanClient::new(transport, "Calima", "58:2B:DB:01:02:03", Some(12345678)).unwrap();
//!     loop {
//!         if fan.connect().await {
//!             fan.authorize().await.unwrap();
//!             let state = fan.get_state().await.unwrap();
//!             println!("{state:?}");
//!             fan.disconnect().await;
//!         }
//!         tokio::time::sleep(Duration::from_secs(60)).await;
//!     }
//! # }
//! ```

mod bluest_transport;
mod characteristic;
mod config;
mod connection;
mod error;
mod fan_client;
pub mod message;
mod profile;
mod transport;

pub use bluest_transport::BluestTransport;
pub use characteristic::{Characteristic, CharacteristicId, DeviceInfoField};
pub use config::FanConfig;
pub use connection::Connection;
pub use error::{Error, Result};
pub use fan_client::FanClient;
pub use message::{
    BoostMode, ClockTime, DeviceInfo, FanMode, FanSpeedSettings, FanState,
    HeatDistributorSettings, LightSensorSettings, Sensitivity, SilentHours, TrickleDays, Trigger,
};
pub use profile::{DeviceModel, DeviceProfile};
pub use transport::{BleTransport, DeviceAddress};
