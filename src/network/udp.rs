//! UDP Transport
//!
//! Non-blocking UDP socket registered with a single-token `mio::Poll`.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use mio::net::UdpSocket;
use mio::{Events, Interest, Poll, Token};

use crate::error::{ClientError, Result};
use super::transport::{Readiness, ReadinessInterest, ReadyEvent, Transport};

/// The only source registered with the poll
const SOCKET: Token = Token(0);

/// Event capacity; one socket never yields more than a couple per wait
const EVENT_CAPACITY: usize = 8;

impl From<ReadinessInterest> for Interest {
    fn from(interest: ReadinessInterest) -> Self {
        match interest {
            ReadinessInterest::AwaitingResponse => Interest::READABLE,
            ReadinessInterest::AwaitingInput => Interest::WRITABLE,
        }
    }
}

/// Datagram transport over a mio UDP socket
pub struct UdpTransport {
    socket: UdpSocket,
    poll: Poll,
    events: Events,
    peer: Option<SocketAddr>,
    interest: Option<ReadinessInterest>,
    timeout: Option<Duration>,
}

impl UdpTransport {
    /// Bind a non-blocking socket on `bind_addr`
    ///
    /// `timeout` bounds every readiness wait; `None` waits indefinitely.
    pub fn open(bind_addr: SocketAddr, timeout: Option<Duration>) -> Result<Self> {
        let socket = UdpSocket::bind(bind_addr).map_err(|source| ClientError::Bind {
            addr: bind_addr.to_string(),
            source,
        })?;
        let poll = Poll::new()?;

        tracing::debug!("Bound datagram socket on {}", socket.local_addr()?);

        Ok(Self {
            socket,
            poll,
            events: Events::with_capacity(EVENT_CAPACITY),
            peer: None,
            interest: None,
            timeout,
        })
    }

    /// Resolve `host:port` and fix it as the default peer
    ///
    /// Only addresses of the bound socket's family are considered. No packet
    /// is exchanged; reachability is only learned from later traffic.
    pub fn connect(&mut self, host: &str, port: u16) -> Result<SocketAddr> {
        let target = format!("{}:{}", host, port);
        let want_v4 = self.socket.local_addr()?.is_ipv4();

        let addr = (host, port)
            .to_socket_addrs()
            .map_err(|e| ClientError::AddressResolution(format!("{}: {}", target, e)))?
            .find(|a| a.is_ipv4() == want_v4)
            .ok_or_else(|| ClientError::AddressResolution(target.clone()))?;

        self.socket.connect(addr)?;
        self.peer = Some(addr);

        tracing::debug!("Default peer set to {} ({})", addr, target);
        Ok(addr)
    }

    /// The fixed peer, once connected
    pub fn peer_addr(&self) -> Option<SocketAddr> {
        self.peer
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// The currently registered interest
    pub fn interest(&self) -> Option<ReadinessInterest> {
        self.interest
    }

    fn require_peer(&self) -> io::Result<()> {
        match self.peer {
            Some(_) => Ok(()),
            None => Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "no peer address set",
            )),
        }
    }
}

impl Transport for UdpTransport {
    fn send(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.require_peer()?;
        let sent = self.socket.send(bytes)?;
        tracing::trace!("Sent datagram of {} bytes", sent);
        Ok(sent)
    }

    fn receive(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.require_peer()?;
        let read = self.socket.recv(buf)?;
        tracing::trace!("Received datagram of {} bytes", read);
        Ok(read)
    }

    fn register_interest(&mut self, interest: ReadinessInterest) -> io::Result<()> {
        let registry = self.poll.registry();
        match self.interest {
            None => registry.register(&mut self.socket, SOCKET, interest.into())?,
            Some(_) => registry.reregister(&mut self.socket, SOCKET, interest.into())?,
        }
        self.interest = Some(interest);
        tracing::trace!("Registered interest {:?}", interest);
        Ok(())
    }

    fn await_readiness(&mut self) -> io::Result<Readiness> {
        if self.interest.is_none() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "await_readiness without a registered interest",
            ));
        }

        loop {
            match self.poll.poll(&mut self.events, self.timeout) {
                Ok(()) => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        if self.events.is_empty() {
            return Ok(Readiness::NoEvents);
        }

        let mut ready = ReadyEvent::default();
        for event in self.events.iter().filter(|e| e.token() == SOCKET) {
            ready.readable |= event.is_readable();
            ready.writable |= event.is_writable();
            ready.error |= event.is_error();
        }
        tracing::trace!("Readiness: {:?}", ready);
        Ok(Readiness::Ready(ready))
    }
}
