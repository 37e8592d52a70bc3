//! Entity Module
//!
//! Structured records carried as command payloads.
//!
//! ## Responsibilities
//! - Define the `Worker` record and its nested value types
//! - Validate field constraints when a record is collected from the operator
//!
//! The session never looks inside a payload; it only attaches it to a
//! `Command` and lets the codec carry it.

mod worker;

pub use worker::{
    prompt_worker, Coordinates, Organization, Position, Status, Worker, MAX_COORDINATE_X,
};
