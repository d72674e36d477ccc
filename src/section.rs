use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::parser::DEFAULT_INDENT_UNIT;

/// One nesting level of a hierarchical device configuration: the command
/// that enters the mode plus the commands issued directly inside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Mode-entry command. Empty for the global (root) section.
    pub line: String,
    /// Commands issued directly in this mode. Insertion-ordered, no duplicates.
    pub commands: Vec<String>,
    /// Nested modes entered from this one, keyed by their `line` for lookup.
    pub children: Vec<Section>,
}

impl Section {
    /// Create an empty section entered by `line`.
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            commands: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create the synthetic global section that roots a configuration tree.
    pub fn global() -> Self {
        Self::new("")
    }

    /// Append a command unless an identical one is already present.
    pub fn add_command(&mut self, command: impl Into<String>) {
        let command = command.into();
        if !self.commands.iter().any(|c| c == &command) {
            self.commands.push(command);
        }
    }

    /// Return the first child whose mode-entry line matches.
    pub fn get_child(&self, line: &str) -> Option<&Section> {
        self.children.iter().find(|child| child.line == line)
    }

    /// True when the section holds no commands and no children.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.children.is_empty()
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::format_text(self, DEFAULT_INDENT_UNIT))
    }
}
