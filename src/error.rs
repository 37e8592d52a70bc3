//! Error types for colink
//!
//! Provides a unified error type for all client operations.

use thiserror::Error;

/// Result type alias using ClientError
pub type Result<T> = std::result::Result<T, ClientError>;

/// Unified error type for colink operations
#[derive(Debug, Error)]
pub enum ClientError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Setup Errors
    // -------------------------------------------------------------------------
    #[error("Cannot bind local endpoint {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot resolve address {0}")]
    AddressResolution(String),

    // -------------------------------------------------------------------------
    // Session Errors
    // -------------------------------------------------------------------------
    #[error("Peer unreachable")]
    PeerUnreachable,

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Decode error: {0}")]
    Decode(String),

    // -------------------------------------------------------------------------
    // Operator Errors
    // -------------------------------------------------------------------------
    #[error("Operator input is closed")]
    InputClosed,

    #[error("Console I/O error: {0}")]
    Console(#[source] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Whether the OS reported the peer as unreachable.
    ///
    /// A connected UDP socket surfaces an ICMP port-unreachable as
    /// `ConnectionRefused` on the next send or receive.
    pub fn is_peer_unreachable(&self) -> bool {
        match self {
            ClientError::PeerUnreachable => true,
            ClientError::Io(e) => e.kind() == std::io::ErrorKind::ConnectionRefused,
            _ => false,
        }
    }
}
