//! Tests for UdpTransport
//!
//! These tests run against a plain blocking UDP socket on loopback.

use std::net::{SocketAddr, UdpSocket};
use std::time::Duration;

use colink::network::{Readiness, ReadinessInterest, Transport, UdpTransport};
use colink::ClientError;

// =============================================================================
// Helper Functions
// =============================================================================

fn loopback() -> SocketAddr {
    "127.0.0.1:0".parse().unwrap()
}

fn peer() -> UdpSocket {
    let socket = UdpSocket::bind(loopback()).unwrap();
    socket.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    socket
}

fn connected(peer: &UdpSocket, timeout: Option<Duration>) -> UdpTransport {
    let mut transport = UdpTransport::open(loopback(), timeout).unwrap();
    let port = peer.local_addr().unwrap().port();
    transport.connect("127.0.0.1", port).unwrap();
    transport
}

/// Wait (bounded) until the registered interest fires
fn wait_ready(transport: &mut UdpTransport) -> Readiness {
    for _ in 0..10 {
        match transport.await_readiness().unwrap() {
            Readiness::NoEvents => continue,
            ready => return ready,
        }
    }
    Readiness::NoEvents
}

// =============================================================================
// Setup Tests
// =============================================================================

#[test]
fn test_open_binds_local_endpoint() {
    let transport = UdpTransport::open(loopback(), None).unwrap();

    assert_ne!(transport.local_addr().unwrap().port(), 0);
    assert!(transport.peer_addr().is_none());
    assert!(transport.interest().is_none());
}

#[test]
fn test_bind_conflict_is_bind_error() {
    let taken = UdpSocket::bind(loopback()).unwrap();
    let result = UdpTransport::open(taken.local_addr().unwrap(), None);

    assert!(matches!(result, Err(ClientError::Bind { .. })));
}

#[test]
fn test_unresolvable_host() {
    let mut transport = UdpTransport::open(loopback(), None).unwrap();
    let result = transport.connect("no-such-host.invalid", 4000);

    assert!(matches!(result, Err(ClientError::AddressResolution(_))));
    assert!(transport.peer_addr().is_none());
}

#[test]
fn test_connect_fixes_peer() {
    let peer = peer();
    let transport = connected(&peer, None);

    assert_eq!(transport.peer_addr(), Some(peer.local_addr().unwrap()));
}

#[test]
fn test_send_before_connect_fails() {
    let mut transport = UdpTransport::open(loopback(), None).unwrap();
    let err = transport.send(b"hello").unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::NotConnected);
}

#[test]
fn test_await_without_interest_fails() {
    let peer = peer();
    let mut transport = connected(&peer, None);

    let err = transport.await_readiness().unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
}

// =============================================================================
// Readiness Tests
// =============================================================================

#[test]
fn test_write_interest_reports_writable() {
    let peer = peer();
    let mut transport = connected(&peer, Some(Duration::from_secs(1)));

    transport
        .register_interest(ReadinessInterest::AwaitingInput)
        .unwrap();

    match wait_ready(&mut transport) {
        Readiness::Ready(event) => assert!(event.writable),
        Readiness::NoEvents => panic!("socket never became writable"),
    }
    assert_eq!(transport.interest(), Some(ReadinessInterest::AwaitingInput));
}

#[test]
fn test_round_trip_with_read_interest() {
    let peer = peer();
    let mut transport = connected(&peer, Some(Duration::from_secs(1)));
    transport
        .register_interest(ReadinessInterest::AwaitingResponse)
        .unwrap();

    transport.send(b"ping").unwrap();

    let mut buf = [0u8; 64];
    let (len, from) = peer.recv_from(&mut buf).unwrap();
    assert_eq!(&buf[..len], b"ping");
    peer.send_to(b"pong", from).unwrap();

    match wait_ready(&mut transport) {
        Readiness::Ready(event) => assert!(event.readable),
        Readiness::NoEvents => panic!("reply never arrived"),
    }
    let len = transport.receive(&mut buf).unwrap();
    assert_eq!(&buf[..len], b"pong");
}

#[test]
fn test_receive_without_data_would_block() {
    let peer = peer();
    let mut transport = connected(&peer, None);
    let mut buf = [0u8; 16];

    let err = transport.receive(&mut buf).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::WouldBlock);
}

#[test]
fn test_silent_peer_times_out_as_no_events() {
    let peer = peer();
    let mut transport = connected(&peer, Some(Duration::from_millis(50)));
    transport
        .register_interest(ReadinessInterest::AwaitingResponse)
        .unwrap();

    assert_eq!(transport.await_readiness().unwrap(), Readiness::NoEvents);
}

#[test]
fn test_reregistration_switches_interest() {
    let peer = peer();
    let mut transport = connected(&peer, Some(Duration::from_millis(50)));

    transport
        .register_interest(ReadinessInterest::AwaitingInput)
        .unwrap();
    assert!(matches!(wait_ready(&mut transport), Readiness::Ready(_)));

    // Nothing to read: the read registration must not report writability
    transport
        .register_interest(ReadinessInterest::AwaitingResponse)
        .unwrap();
    assert_eq!(transport.await_readiness().unwrap(), Readiness::NoEvents);
}
