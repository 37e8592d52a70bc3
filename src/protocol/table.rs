//! Command Descriptor Table
//!
//! Maps command names to their descriptors. Built explicitly and handed to
//! the session; there is no process-wide registry.

use std::collections::BTreeMap;

use crate::error::{ClientError, Result};
use super::command::{Arity, CommandDescriptor};

/// Name of the parameterless command that lists the catalog
pub const INTROSPECTION_COMMAND: &str = "help";

/// Lookup table of known commands
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    descriptors: BTreeMap<String, CommandDescriptor>,
}

impl CommandTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The worker-collection catalog served by the collection service
    pub fn standard() -> Result<Self> {
        let entries: [(&str, Arity, bool, &str); 16] = [
            ("help", Arity::Zero, false, "list available commands"),
            ("info", Arity::Zero, false, "show collection information"),
            ("show", Arity::Zero, false, "show every element"),
            ("add", Arity::One, true, "add {element}"),
            ("update", Arity::Two, true, "update id {element}"),
            ("remove_by_id", Arity::One, false, "remove_by_id id"),
            ("clear", Arity::Zero, false, "remove every element"),
            ("save", Arity::Zero, false, "persist the collection (server only)"),
            ("execute_script", Arity::One, false, "execute_script file_name"),
            ("exit", Arity::Zero, false, "end the session"),
            ("remove_first", Arity::Zero, false, "remove the first element"),
            ("add_if_max", Arity::One, true, "add_if_max {element}"),
            ("remove_lower", Arity::One, true, "remove_lower {element}"),
            ("count_by_status", Arity::One, false, "count_by_status status"),
            ("filter_starts_with_name", Arity::One, false, "filter_starts_with_name name"),
            ("print_field_descending_salary", Arity::Zero, false, "print salaries, descending"),
        ];

        let mut table = Self::new();
        for (name, arity, needs_entity, usage) in entries {
            table.register(CommandDescriptor::new(name, arity, needs_entity, usage)?)?;
        }
        Ok(table)
    }

    /// Add a descriptor; names must be unique
    pub fn register(&mut self, descriptor: CommandDescriptor) -> Result<()> {
        if self.descriptors.contains_key(descriptor.name()) {
            return Err(ClientError::Config(format!(
                "command '{}' registered twice",
                descriptor.name()
            )));
        }
        self.descriptors.insert(descriptor.name().to_string(), descriptor);
        Ok(())
    }

    /// Look up a command by name
    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.descriptors.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.descriptors.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Iterate descriptors in name order
    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.descriptors.values()
    }
}
