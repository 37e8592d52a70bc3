//! Network Module
//!
//! Datagram transport and readiness multiplexing.
//!
//! ## Architecture
//! - One non-blocking UDP socket with a fixed default peer
//! - One `mio::Poll` with the socket as its only source
//! - Read xor write interest registered at any time, which paces the
//!   session to one outstanding request

mod transport;
mod udp;

pub use transport::{Readiness, ReadinessInterest, ReadyEvent, Transport};
pub use udp::UdpTransport;
