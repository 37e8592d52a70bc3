//! Configuration for colink
//!
//! Centralized configuration with sensible defaults.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ClientError, Result};

/// Lowest port an operator may connect to
pub const MIN_PORT: u16 = 1025;

/// Highest port an operator may connect to
pub const MAX_PORT: u16 = 65535;

/// Receive buffer size; above any encoded response the service produces
pub const DEFAULT_RECV_BUFFER_SIZE: usize = 65536;

/// Sent by the service when it waits for the next client command
pub const CONTINUATION_MARKER: &str = "Awaiting further client instructions.";

/// Sent by the service once the collection has been persisted
pub const COMPLETION_MARKER: &str = "Коллекция сохранена в файл";

/// Main configuration for a client instance
#[derive(Debug, Clone)]
pub struct ClientConfig {
    // -------------------------------------------------------------------------
    // Peer Configuration
    // -------------------------------------------------------------------------
    /// Service host name or IP literal
    pub host: String,

    /// Service port, within [MIN_PORT, MAX_PORT]
    pub port: u16,

    // -------------------------------------------------------------------------
    // Transport Configuration
    // -------------------------------------------------------------------------
    /// Local endpoint to bind (port 0 = auto-assign)
    pub bind_addr: SocketAddr,

    /// Size of the datagram receive buffer (bytes)
    pub recv_buffer_size: usize,

    /// Upper bound on a single readiness wait. `None` waits indefinitely.
    /// Expiry is treated exactly like an empty wait.
    pub response_timeout: Option<Duration>,

    // -------------------------------------------------------------------------
    // Protocol Configuration
    // -------------------------------------------------------------------------
    /// Substring that marks "peer expects the next command"
    pub continuation_marker: String,

    /// Exact text that marks "collection saved, session over"
    pub completion_marker: String,

    /// Command names accepted by the catalog but never forwarded
    pub reserved_commands: Vec<String>,

    // -------------------------------------------------------------------------
    // Process Configuration
    // -------------------------------------------------------------------------
    /// File that fatal setup errors are appended to
    pub error_log: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9999,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 0)),
            recv_buffer_size: DEFAULT_RECV_BUFFER_SIZE,
            response_timeout: None,
            continuation_marker: CONTINUATION_MARKER.to_string(),
            completion_marker: COMPLETION_MARKER.to_string(),
            reserved_commands: vec!["save".to_string()],
            error_log: PathBuf::from("errorLog.txt"),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Check the values an operator or flag could have gotten wrong
    pub fn validate(&self) -> Result<()> {
        if self.port < MIN_PORT {
            return Err(ClientError::Config(format!(
                "port {} is outside [{}, {}]",
                self.port, MIN_PORT, MAX_PORT
            )));
        }
        if self.host.trim().is_empty() {
            return Err(ClientError::Config("host must not be empty".to_string()));
        }
        if self.recv_buffer_size == 0 {
            return Err(ClientError::Config(
                "receive buffer size must be positive".to_string(),
            ));
        }
        if self.continuation_marker.is_empty() || self.completion_marker.is_empty() {
            return Err(ClientError::Config(
                "sentinel markers must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether `name` is a reserved, client-side-only command
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_commands.iter().any(|r| r == name)
    }
}

/// Builder for ClientConfig
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the service host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the service port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the local bind address
    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.config.bind_addr = addr;
        self
    }

    /// Set the receive buffer size (in bytes)
    pub fn recv_buffer_size(mut self, size: usize) -> Self {
        self.config.recv_buffer_size = size;
        self
    }

    /// Bound each readiness wait
    pub fn response_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.response_timeout = timeout;
        self
    }

    /// Set the continuation marker
    pub fn continuation_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.continuation_marker = marker.into();
        self
    }

    /// Set the completion marker
    pub fn completion_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.completion_marker = marker.into();
        self
    }

    /// Replace the reserved command list
    pub fn reserved_commands<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.config.reserved_commands = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the error log path
    pub fn error_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.error_log = path.into();
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
