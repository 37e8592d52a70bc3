//! Protocol Module
//!
//! Defines what travels between the client and the collection service.
//!
//! ## Datagram Contents
//!
//! ```text
//! client ──► service   one bincode-encoded Command per datagram
//! client ◄── service   one bincode-encoded String per datagram
//! ```
//!
//! ### Command Shapes
//! - arity 0:            name only              (help, show, clear, ...)
//! - arity 1, argument:  name + argument        (remove_by_id id)
//! - arity 1, entity:    name + Worker          (add {element})
//! - arity 2, entity:    name + argument + Worker (update id {element})
//!
//! ### Sentinels
//! Replies are free text. A reply containing the continuation marker means
//! the service waits for the next command; a reply equal to the completion
//! marker means the collection was saved and the session is over.

mod command;
mod response;
mod table;
mod codec;

pub use command::{Arity, Command, CommandDescriptor};
pub use response::Response;
pub use table::{CommandTable, INTROSPECTION_COMMAND};
pub use codec::{
    decode_command, decode_response, encode_command, encode_response, MAX_DATAGRAM_SIZE,
};
