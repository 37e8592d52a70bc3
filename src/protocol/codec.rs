//! Protocol codec
//!
//! Encoding and decoding functions for datagram payloads.
//!
//! ## Wire Format
//!
//! Both directions use bincode's default (fixed-int, little-endian)
//! encoding with no extra framing: a datagram is always exactly one
//! message, so no length prefix or resynchronization is needed.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │ bincode(Command)  or  bincode(String) ≤ 65507 bytes       │
//! └───────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ClientError, Result};
use super::{Command, Response};

/// Largest payload a single UDP datagram can carry over IPv4
pub const MAX_DATAGRAM_SIZE: usize = 65507;

// =============================================================================
// Command Encoding/Decoding
// =============================================================================

/// Encode a command to bytes
///
/// Fails if the command cannot be serialized or would not fit in one
/// datagram.
pub fn encode_command(command: &Command) -> Result<Vec<u8>> {
    let bytes = bincode::serialize(command).map_err(|e| ClientError::Encode(e.to_string()))?;
    if bytes.len() > MAX_DATAGRAM_SIZE {
        return Err(ClientError::Encode(format!(
            "command '{}' encodes to {} bytes (max {})",
            command.name,
            bytes.len(),
            MAX_DATAGRAM_SIZE
        )));
    }
    Ok(bytes)
}

/// Decode a command from bytes (service side)
pub fn decode_command(bytes: &[u8]) -> Result<Command> {
    bincode::deserialize(bytes).map_err(|e| ClientError::Decode(e.to_string()))
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a response to bytes (service side)
pub fn encode_response(response: &Response) -> Result<Vec<u8>> {
    bincode::serialize(response).map_err(|e| ClientError::Encode(e.to_string()))
}

/// Decode a response from bytes
///
/// Anything that is not a well-formed UTF-8 string payload is rejected.
pub fn decode_response(bytes: &[u8]) -> Result<Response> {
    if bytes.is_empty() {
        return Err(ClientError::Decode("empty datagram".to_string()));
    }
    bincode::deserialize(bytes).map_err(|e| ClientError::Decode(e.to_string()))
}
