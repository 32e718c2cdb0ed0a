//! Platform connection lifecycle through the facade

use std::sync::Arc;
use std::time::Duration;

use libsocialhub::platforms::simulated::SimulatedConnector;
use libsocialhub::{PlatformId, SocialHub, SocialHubError};

#[tokio::test]
async fn connect_resolves_after_simulated_latency() {
    let connector = Arc::new(SimulatedConnector::with_delay(Duration::from_millis(50)));
    let mut hub = SocialHub::new(connector.clone());

    let start = std::time::Instant::now();
    let platform = hub.connect("twitter").await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(50));
    assert!(platform.connected);
    assert_eq!(connector.attempted(), vec![PlatformId::Twitter]);

    // list() reflects the new state once the round-trip has resolved
    let twitter = hub
        .platforms()
        .iter()
        .find(|p| p.id == PlatformId::Twitter)
        .unwrap();
    assert!(twitter.connected);
}

#[tokio::test]
async fn connect_unknown_platform_fails_and_changes_nothing() {
    let connector = Arc::new(SimulatedConnector::instant());
    let mut hub = SocialHub::new(connector.clone());

    let err = hub.connect("unknown-platform").await.unwrap_err();

    assert!(matches!(err, SocialHubError::NotFound(_)));
    assert_eq!(err.exit_code(), 2);
    // The round-trip was never issued
    assert_eq!(connector.call_count(), 0);
    assert!(hub.platforms().iter().all(|p| !p.connected));
}

#[tokio::test]
async fn failed_connect_surfaces_error_and_leaves_flag_unset() {
    let mut hub = SocialHub::new(Arc::new(SimulatedConnector::failing(
        "authorization window closed",
    )));

    let err = hub.connect("instagram").await.unwrap_err();

    assert!(matches!(err, SocialHubError::Connection(_)));
    assert!(err.to_string().contains("authorization window closed"));
    assert!(hub.platforms().iter().all(|p| !p.connected));
    assert!(!hub.is_connecting(PlatformId::Instagram));
}

#[tokio::test]
async fn disconnect_is_synchronous_and_idempotent() {
    let mut hub = SocialHub::new(Arc::new(SimulatedConnector::instant()));

    hub.connect("facebook").await.unwrap();
    assert_eq!(hub.dashboard().connected_platforms, 1);

    let platform = hub.disconnect("facebook").unwrap();
    assert!(!platform.connected);

    // Second disconnect still succeeds
    let platform = hub.disconnect("facebook").unwrap();
    assert!(!platform.connected);
    assert_eq!(hub.dashboard().connected_platforms, 0);
}

#[tokio::test]
async fn reconnect_after_disconnect() {
    let connector = Arc::new(SimulatedConnector::instant());
    let mut hub = SocialHub::new(connector.clone());

    hub.connect("linkedin").await.unwrap();
    hub.disconnect("linkedin").unwrap();
    hub.connect("linkedin").await.unwrap();

    assert_eq!(connector.call_count(), 2);
    assert_eq!(hub.dashboard().connected_platforms, 1);
}

#[tokio::test]
async fn connections_are_independent_per_platform() {
    let mut hub = SocialHub::new(Arc::new(SimulatedConnector::instant()));

    hub.connect("twitter").await.unwrap();
    hub.connect("instagram").await.unwrap();

    let connected: Vec<PlatformId> = hub
        .platforms()
        .iter()
        .filter(|p| p.connected)
        .map(|p| p.id)
        .collect();

    assert_eq!(connected, vec![PlatformId::Twitter, PlatformId::Instagram]);
}
