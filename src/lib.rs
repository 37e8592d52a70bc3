//! # colink
//!
//! Interactive client for a remote worker-collection service, speaking a
//! request/response protocol over plain UDP:
//! - Non-blocking datagram transport with a single readiness registration
//! - Lock-step pacing: at most one request in flight
//! - Explicit command catalog with arity and payload rules
//! - Operator-driven retry when the service is unreachable
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Bootstrap / Retry Loop                       │
//! │               (host, port, retry prompt)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Session State Machine                        │
//! │      Handshake → AwaitingResponse ⇄ AwaitingInput            │
//! └───────┬─────────────────────┬──────────────────────┬────────┘
//!         │                     │                      │
//!         ▼                     ▼                      ▼
//!  ┌─────────────┐       ┌─────────────┐        ┌─────────────┐
//!  │  Transport  │       │  Protocol   │        │ Interaction │
//!  │ (UDP + mio) │       │ (table,     │        │ (console,   │
//!  └─────────────┘       │  codec)     │        │  Worker)    │
//!                        └─────────────┘        └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod entity;
pub mod interaction;
pub mod network;
pub mod protocol;
pub mod session;
pub mod bootstrap;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ClientError, Result};
pub use config::ClientConfig;
pub use session::{Session, SessionOutcome, SessionState};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of colink
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
