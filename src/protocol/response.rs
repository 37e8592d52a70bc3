//! Response definitions
//!
//! Represents the textual replies of the collection service.

use serde::{Deserialize, Serialize};

/// One decoded reply datagram
///
/// Encoded as a bare string: the service sends plain text and signals
/// protocol state through sentinel phrases inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Response {
    text: String,
}

impl Response {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the service is waiting for the next command
    pub fn is_continuation(&self, marker: &str) -> bool {
        self.text.contains(marker)
    }

    /// Whether the service acknowledged persisting the collection
    pub fn is_completion(&self, marker: &str) -> bool {
        self.text == marker
    }
}
