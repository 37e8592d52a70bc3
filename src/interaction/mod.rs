//! Interaction Module
//!
//! The operator-facing boundary of the client.
//!
//! ## Responsibilities
//! - Read raw command lines and prompted values
//! - Collect entity payloads for commands that need one
//! - Show server replies and local diagnostics
//!
//! The session only talks to the `Interaction` trait, so tests can drive it
//! with scripted input while the binary uses `ConsoleInteraction` over stdio.

mod console;
pub mod messages;

pub use console::ConsoleInteraction;

use crate::entity::Worker;
use crate::error::Result;

/// Operator input and output used by the session and bootstrap
pub trait Interaction {
    /// Read one raw line. End of input is `ClientError::InputClosed`.
    fn read_line(&mut self) -> Result<String>;

    /// Prompt until the answer parses as a number within `[min, max]`.
    /// Returns the trimmed answer; an empty answer only when `allow_empty`.
    fn read_bounded(&mut self, prompt: &str, min: f64, max: f64, allow_empty: bool) -> Result<String>;

    /// Prompt until the answer is non-empty (or `allow_empty`)
    fn read_unbounded(&mut self, prompt: &str, allow_empty: bool) -> Result<String>;

    /// Collect a structured payload for an entity command
    fn read_entity(&mut self) -> Result<Worker>;

    /// Show a message to the operator
    fn display(&mut self, message: &str) -> Result<()>;
}
