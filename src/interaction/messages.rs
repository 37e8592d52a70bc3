//! Operator-facing texts
//!
//! Kept in one place so the dialogue can be localized without touching the
//! protocol code.

pub const CONNECTING: &str = "Connecting in non-blocking I/O mode";
pub const CATALOG_HEADER: &str = "Connection established! Available commands:";
pub const FAREWELL: &str = "See you next time";
pub const RESERVED_COMMAND: &str = "This command is not available to end users";
pub const UNKNOWN_COMMAND: &str =
    "Unknown command, use the help command to get the list of available commands";
pub const MISSING_ARGUMENT: &str = "This command needs an argument";
pub const MALFORMED_RESPONSE: &str = "The server sent a response that could not be read";
pub const PEER_UNREACHABLE: &str = "The server port is unreachable";
pub const TRANSPORT_ERROR: &str = "An unknown input/output error occurred";
pub const RETRY_PROMPT: &str =
    "The server is temporarily unavailable, retry the connection? (yes/no)";
pub const HOST_PROMPT: &str = "Enter the server address:";
pub const PORT_PROMPT: &str = "Enter the port:";
pub const PORT_NOT_A_NUMBER: &str = "The port must be a number";
pub const BIND_FAILED: &str = "Cannot connect through this port, or you have no rights to it";
pub const CONNECT_FAILED: &str = "Connecting to this address failed";
pub const INPUT_UNAVAILABLE: &str = "Input is unavailable";
pub const CONFIG_INVALID: &str = "The connection settings are invalid";
pub const ENCODE_FAILED: &str = "A serialization error occurred";

/// Answers to the retry prompt that count as "yes"
pub const AFFIRMATIVE: [&str; 3] = ["yes", "y", "да"];

pub fn connecting_to(host: &str, port: u16) -> String {
    format!("Connecting to address {} on port {}", host, port)
}

pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE.iter().any(|a| *a == answer)
}
