//! Command definitions
//!
//! Descriptors for the catalog and the commands built from them.

use serde::{Deserialize, Serialize};

use crate::entity::Worker;
use crate::error::{ClientError, Result};

/// Number of arguments a command takes, the entity payload included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Arity {
    Zero = 0,
    One = 1,
    Two = 2,
}

impl Arity {
    pub fn count(self) -> u8 {
        self as u8
    }
}

/// Static description of a catalog command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    name: String,
    arity: Arity,
    needs_entity: bool,
    usage: String,
}

impl CommandDescriptor {
    /// Create a descriptor
    ///
    /// Supported shapes are: no arguments, one plain argument, one entity,
    /// and one plain argument followed by an entity.
    pub fn new(
        name: impl Into<String>,
        arity: Arity,
        needs_entity: bool,
        usage: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(ClientError::Config(format!(
                "invalid command name '{}'",
                name
            )));
        }
        match (arity, needs_entity) {
            (Arity::Zero, true) | (Arity::Two, false) => Err(ClientError::Config(format!(
                "command '{}': unsupported shape (arity {}, entity {})",
                name,
                arity.count(),
                needs_entity
            ))),
            _ => Ok(Self {
                name,
                arity,
                needs_entity,
                usage: usage.into(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    pub fn needs_entity(&self) -> bool {
        self.needs_entity
    }

    /// Whether a plain (textual) argument must follow the name
    pub fn needs_argument(&self) -> bool {
        match self.arity {
            Arity::Zero => false,
            Arity::One => !self.needs_entity,
            Arity::Two => true,
        }
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Start an empty command of this kind
    pub fn command(&self) -> Command {
        Command {
            name: self.name.clone(),
            argument_count: self.arity,
            needs_entity: self.needs_entity,
            argument: None,
            entity: None,
        }
    }
}

/// A request ready to be encoded and sent once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    pub argument_count: Arity,
    pub needs_entity: bool,
    pub argument: Option<String>,
    pub entity: Option<Worker>,
}

impl Command {
    /// A parameterless command outside any catalog
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            argument_count: Arity::Zero,
            needs_entity: false,
            argument: None,
            entity: None,
        }
    }

    /// Attach the plain argument
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.argument = Some(argument.into());
        self
    }

    /// Attach the entity payload
    pub fn with_entity(mut self, entity: Worker) -> Self {
        self.entity = Some(entity);
        self
    }
}
