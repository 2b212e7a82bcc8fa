mod common;

use common::{FakeTransport, ADDRESS};
use paxfan::{Characteristic, Error, FanClient, FanConfig};

fn client(transport: &FakeTransport) -> FanClient<FakeTransport> {
    FanClient::new(transport.clone(), "Calima", ADDRESS, None).unwrap()
}

#[test]
fn test_unknown_model_fails_construction() {
    let result = FanClient::new(FakeTransport::reachable(), "Levante", ADDRESS, None);
    assert!(matches!(result, Err(Error::UnsupportedModel(m)) if m == "Levante"));
}

#[tokio::test]
async fn test_connect_succeeds_on_third_attempt() {
    let transport = FakeTransport::reachable();
    transport.state().connect_results = [false, false, true].into();
    let mut fan = client(&transport);

    assert!(fan.connect_with_retries(3).await);
    assert!(fan.is_connected().await);
    assert_eq!(transport.state().connect_calls, 3);
}

#[tokio::test]
async fn test_connect_gives_up_after_retries() {
    let transport = FakeTransport::reachable();
    transport.state().connect_results = [false, false, false, true].into();
    let mut fan = client(&transport);

    assert!(!fan.connect_with_retries(3).await);
    assert!(!fan.is_connected().await);
    assert_eq!(transport.state().connect_calls, 3);
}

#[tokio::test]
async fn test_unresolved_address_counts_as_failed_attempt() {
    let transport = FakeTransport::default();
    let mut fan = client(&transport);

    assert!(!fan.connect_with_retries(3).await);
    let state = transport.state();
    assert_eq!(state.resolve_calls, 3);
    assert_eq!(state.connect_calls, 0);
}

#[tokio::test]
async fn test_zero_retries_still_attempts_once() {
    let transport = FakeTransport::reachable();
    let mut fan = client(&transport);

    assert!(fan.connect_with_retries(0).await);
    assert_eq!(transport.state().connect_calls, 1);
}

#[tokio::test]
async fn test_connect_when_connected_is_noop() {
    let transport = FakeTransport::reachable();
    let mut fan = client(&transport);

    assert!(fan.connect().await);
    assert!(fan.connect().await);
    assert_eq!(transport.state().connect_calls, 1);
    assert_eq!(transport.state().resolve_calls, 1);
}

#[tokio::test]
async fn test_silent_drop_reported_and_reconnect_replaces_handle() {
    let transport = FakeTransport::reachable();
    let mut fan = client(&transport);
    assert!(fan.connect().await);

    transport.state().live = false;
    assert!(!fan.is_connected().await);

    assert!(fan.connect().await);
    assert!(fan.is_connected().await);
    let state = transport.state();
    assert_eq!(state.connect_calls, 2);
    // The dropped link is released before connecting again.
    assert_eq!(state.disconnect_calls, 1);
}

#[tokio::test]
async fn test_failed_release_of_dropped_link_still_reconnects() {
    let transport = FakeTransport::reachable();
    let mut fan = client(&transport);
    assert!(fan.connect().await);

    {
        let mut state = transport.state();
        state.live = false;
        state.disconnect_fails = true;
    }
    assert!(fan.connect().await);
    assert!(fan.is_connected().await);
    assert_eq!(fan.transport().state().disconnect_calls, 1);
}

#[tokio::test]
async fn test_disconnect_error_is_suppressed_and_clears_handle() {
    let transport = FakeTransport::reachable();
    transport.state().disconnect_fails = true;
    let mut fan = client(&transport);
    assert!(fan.connect().await);

    fan.disconnect().await;
    assert_eq!(transport.state().disconnect_calls, 1);
    assert!(!fan.is_connected().await);

    // Pretend the platform still has the link up: the handle is gone regardless.
    transport.state().live = true;
    assert!(!fan.is_connected().await);
    assert!(matches!(fan.get_state().await, Err(Error::NotConnected)));
}

#[tokio::test]
async fn test_disconnect_without_connection_does_nothing() {
    let transport = FakeTransport::reachable();
    let mut fan = client(&transport);
    fan.disconnect().await;
    assert_eq!(transport.state().disconnect_calls, 0);
}

#[tokio::test]
async fn test_read_without_connection() {
    let transport = FakeTransport::reachable();
    let fan = client(&transport);

    assert!(matches!(fan.get_mode().await, Err(Error::NotConnected)));
    assert!(matches!(fan.set_automatic_cycles(1).await, Err(Error::NotConnected)));
    assert!(transport.state().reads.is_empty());
    assert!(transport.state().writes.is_empty());
}

#[tokio::test]
async fn test_io_error_is_not_retried() {
    let transport = FakeTransport::reachable();
    let mut fan = client(&transport);
    assert!(fan.connect().await);
    transport.state().io_fails = true;

    assert!(matches!(fan.get_boost_mode().await, Err(Error::Transport(_))));
    assert!(matches!(fan.set_boost_mode(true, 1500, 60).await, Err(Error::Transport(_))));
    let state = transport.state();
    assert_eq!(state.connect_calls, 1);
    assert_eq!(state.reads.len(), 1);
}

#[tokio::test]
async fn test_from_config_uses_configured_retries() {
    let transport = FakeTransport::reachable();
    transport.state().connect_results = [false, false, false].into();
    let config = FanConfig {
        connect_retries: 2,
        ..FanConfig::new("svara", ADDRESS)
    };
    let mut fan = FanClient::from_config(transport.clone(), &config).unwrap();

    assert!(!fan.connect().await);
    assert_eq!(transport.state().connect_calls, 2);
    assert_eq!(fan.profile().model(), paxfan::DeviceModel::Svara);
    assert_eq!(
        fan.profile().characteristic(Characteristic::DeviceName),
        paxfan::CharacteristicId::Handle(0x02)
    );
}
