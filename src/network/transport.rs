//! Transport abstraction
//!
//! The session drives any datagram endpoint through this trait, which keeps
//! the state machine testable without a socket.

use std::io;

/// Which readiness condition the socket is subscribed to
///
/// Exactly one is registered at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessInterest {
    /// Read-interest: a reply is expected
    AwaitingResponse,

    /// Write-interest: the next request may be sent
    AwaitingInput,
}

/// Readiness flags reported for the socket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadyEvent {
    pub readable: bool,
    pub writable: bool,

    /// The OS flagged a pending socket error (e.g. ICMP port unreachable)
    pub error: bool,
}

impl ReadyEvent {
    pub fn readable() -> Self {
        Self {
            readable: true,
            ..Self::default()
        }
    }

    pub fn writable() -> Self {
        Self {
            writable: true,
            ..Self::default()
        }
    }
}

/// Result of a readiness wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready(ReadyEvent),

    /// The multiplexer returned without any event; the peer is considered gone
    NoEvents,
}

/// Non-blocking datagram endpoint with a fixed peer
pub trait Transport {
    /// Send one datagram to the peer. `WouldBlock` means retry once writable.
    fn send(&mut self, bytes: &[u8]) -> io::Result<usize>;

    /// Receive one datagram into `buf`. `WouldBlock` means nothing is pending.
    fn receive(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Replace the registered interest
    fn register_interest(&mut self, interest: ReadinessInterest) -> io::Result<()>;

    /// Block until the registered interest is satisfiable
    fn await_readiness(&mut self) -> io::Result<Readiness>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, bytes: &[u8]) -> io::Result<usize> {
        (**self).send(bytes)
    }

    fn receive(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).receive(buf)
    }

    fn register_interest(&mut self, interest: ReadinessInterest) -> io::Result<()> {
        (**self).register_interest(interest)
    }

    fn await_readiness(&mut self) -> io::Result<Readiness> {
        (**self).await_readiness()
    }
}
