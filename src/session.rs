//! Session Module
//!
//! The lock-step request/response state machine.
//!
//! ## Phases
//!
//! ```text
//!   ┌───────────┐ send help  ┌───────────────────┐
//!   │ Handshake ├───────────►│ AwaitingResponse  │◄─────────┐
//!   └───────────┘            │  (read-interest)  │          │
//!                            └──┬─────────────┬──┘          │ send
//!                 completion    │             │ reply       │
//!                 / no events   ▼             ▼             │
//!                       ┌────────────┐  ┌───────────────────┴┐
//!                       │ Terminated │◄─┤   AwaitingInput    │
//!                       └────────────┘  │  (write-interest)  │
//!                         no events     └──┬──────────────▲──┘
//!                                          │ local refusal│
//!                                          └──────────────┘
//! ```
//!
//! Only one interest is ever registered, so the client never has two
//! requests in flight and needs no request ids or reordering.

use std::io;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::interaction::{messages, Interaction};
use crate::network::{Readiness, ReadinessInterest, Transport};
use crate::protocol::{
    decode_response, encode_command, Arity, Command, CommandTable, Response,
    INTROSPECTION_COMMAND,
};

/// How a session run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The service acknowledged saving the collection
    Completed,

    /// Empty readiness wait or OS-reported unreachable port
    PeerUnreachable,

    /// Malformed reply or any other transport failure
    TransportError,
}

/// Protocol phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Handshake,
    AwaitingResponse,
    AwaitingInput,
    Terminated(SessionOutcome),
}

/// Client session over a datagram transport
pub struct Session<T: Transport> {
    transport: T,
    table: CommandTable,
    config: ClientConfig,
    recv_buffer: Vec<u8>,
    state: SessionState,

    /// Set once the first reply of a run has been shown as the catalog
    established: bool,
}

impl<T: Transport> Session<T> {
    /// Create a session; nothing is sent until `run`
    pub fn new(transport: T, table: CommandTable, config: ClientConfig) -> Self {
        let recv_buffer = vec![0u8; config.recv_buffer_size];
        Self {
            transport,
            table,
            config,
            recv_buffer,
            state: SessionState::Handshake,
            established: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_established(&self) -> bool {
        self.established
    }

    /// Get the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Drive the protocol until it terminates
    ///
    /// Each call starts over with the handshake, so a caller may re-run the
    /// session after `PeerUnreachable`. Encode failures and a closed operator
    /// input escape as errors; every transport failure becomes an outcome.
    pub fn run<I: Interaction + ?Sized>(&mut self, ui: &mut I) -> Result<SessionOutcome> {
        self.state = SessionState::Handshake;
        self.established = false;

        loop {
            let step = match self.state {
                SessionState::Handshake => self.handshake(),
                SessionState::AwaitingResponse => self.await_response(ui),
                SessionState::AwaitingInput => self.await_input(ui),
                SessionState::Terminated(outcome) => {
                    tracing::debug!("Session terminated: {:?}", outcome);
                    return Ok(outcome);
                }
            };

            let next = match step {
                Ok(next) => next,
                Err(e) => self.fail(e, ui)?,
            };
            if next != self.state {
                tracing::debug!("Session {:?} -> {:?}", self.state, next);
            }
            self.state = next;
        }
    }

    // =========================================================================
    // Phases
    // =========================================================================

    fn handshake(&mut self) -> Result<SessionState> {
        self.transport
            .register_interest(ReadinessInterest::AwaitingResponse)?;
        let probe = match self.table.get(INTROSPECTION_COMMAND) {
            Some(descriptor) => descriptor.command(),
            None => Command::bare(INTROSPECTION_COMMAND),
        };
        self.send_command(&probe)?;
        Ok(SessionState::AwaitingResponse)
    }

    fn await_response<I: Interaction + ?Sized>(&mut self, ui: &mut I) -> Result<SessionState> {
        let event = match self.transport.await_readiness()? {
            Readiness::NoEvents => return Err(ClientError::PeerUnreachable),
            Readiness::Ready(event) => event,
        };
        if !event.readable && !event.error {
            return Ok(SessionState::AwaitingResponse);
        }

        let len = match self.transport.receive(&mut self.recv_buffer) {
            Ok(len) => len,
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => {
                return Ok(SessionState::AwaitingResponse)
            }
            Err(e) => return Err(e.into()),
        };
        tracing::debug!("Received reply of {} bytes", len);

        let response = decode_response(&self.recv_buffer[..len])?;
        self.on_response(response, ui)
    }

    fn on_response<I: Interaction + ?Sized>(
        &mut self,
        response: Response,
        ui: &mut I,
    ) -> Result<SessionState> {
        let mut shown = false;
        if !self.established {
            ui.display(&format!("{}\n{}", messages::CATALOG_HEADER, response.as_str()))?;
            self.established = true;
            shown = true;
        }

        if !response.is_continuation(&self.config.continuation_marker) {
            if !shown {
                ui.display(response.as_str())?;
            }
            if response.is_completion(&self.config.completion_marker) {
                ui.display(messages::FAREWELL)?;
                return Ok(SessionState::Terminated(SessionOutcome::Completed));
            }
        }

        self.transport
            .register_interest(ReadinessInterest::AwaitingInput)?;
        Ok(SessionState::AwaitingInput)
    }

    fn await_input<I: Interaction + ?Sized>(&mut self, ui: &mut I) -> Result<SessionState> {
        let event = match self.transport.await_readiness()? {
            Readiness::NoEvents => return Err(ClientError::PeerUnreachable),
            Readiness::Ready(event) => event,
        };
        if !event.writable {
            return Ok(SessionState::AwaitingInput);
        }

        // The next action is always a send followed by its reply.
        self.transport
            .register_interest(ReadinessInterest::AwaitingResponse)?;

        let line = ui.read_line()?;
        let args: Vec<&str> = line.split_whitespace().collect();

        match self.build_command(&args, ui)? {
            Some(command) => {
                self.send_command(&command)?;
                Ok(SessionState::AwaitingResponse)
            }
            None => {
                self.transport
                    .register_interest(ReadinessInterest::AwaitingInput)?;
                Ok(SessionState::AwaitingInput)
            }
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Turn operator tokens into a command, or `None` after a local refusal
    fn build_command<I: Interaction + ?Sized>(
        &self,
        args: &[&str],
        ui: &mut I,
    ) -> Result<Option<Command>> {
        let Some(name) = args.first() else {
            return Ok(None);
        };

        if self.config.is_reserved(name) {
            tracing::debug!("Refused reserved command '{}'", name);
            ui.display(messages::RESERVED_COMMAND)?;
            return Ok(None);
        }

        let Some(descriptor) = self.table.get(name) else {
            ui.display(messages::UNKNOWN_COMMAND)?;
            return Ok(None);
        };

        let argument = args.get(1).copied();
        if descriptor.needs_argument() && argument.is_none() {
            ui.display(&format!("{}: {}", messages::MISSING_ARGUMENT, descriptor.usage()))?;
            return Ok(None);
        }

        let command = descriptor.command();
        let command = match (descriptor.arity(), descriptor.needs_entity(), argument) {
            (Arity::Zero, _, _) => command,
            (Arity::One, true, _) => command.with_entity(ui.read_entity()?),
            (Arity::One, false, Some(argument)) => command.with_argument(argument),
            (Arity::Two, _, Some(argument)) => command
                .with_argument(argument)
                .with_entity(ui.read_entity()?),
            (_, _, None) => return Ok(None),
        };
        Ok(Some(command))
    }

    /// Encode and send, waiting for writability while the send buffer is full
    fn send_command(&mut self, command: &Command) -> Result<()> {
        let bytes = encode_command(command)?;

        loop {
            match self.transport.send(&bytes) {
                Ok(_) => break,
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => {
                    self.transport
                        .register_interest(ReadinessInterest::AwaitingInput)?;
                    if self.transport.await_readiness()? == Readiness::NoEvents {
                        return Err(ClientError::PeerUnreachable);
                    }
                    self.transport
                        .register_interest(ReadinessInterest::AwaitingResponse)?;
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::debug!("Sent '{}' ({} bytes)", command.name, bytes.len());
        Ok(())
    }

    /// Map a phase error to a terminal state, or let it escape `run`
    fn fail<I: Interaction + ?Sized>(&self, error: ClientError, ui: &mut I) -> Result<SessionState> {
        if error.is_peer_unreachable() {
            tracing::warn!("Peer unreachable: {}", error);
            ui.display(messages::PEER_UNREACHABLE)?;
            return Ok(SessionState::Terminated(SessionOutcome::PeerUnreachable));
        }

        match error {
            ClientError::Decode(ref reason) => {
                tracing::warn!("Malformed reply: {}", reason);
                ui.display(messages::MALFORMED_RESPONSE)?;
                Ok(SessionState::Terminated(SessionOutcome::TransportError))
            }
            ClientError::Io(ref e) => {
                tracing::warn!("Transport failure: {}", e);
                ui.display(messages::TRANSPORT_ERROR)?;
                Ok(SessionState::Terminated(SessionOutcome::TransportError))
            }
            other => Err(other),
        }
    }
}
