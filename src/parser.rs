use std::cmp::Ordering;

use thiserror::Error;

use crate::section::Section;

/// Spaces per nesting level in device configuration output.
pub const DEFAULT_INDENT_UNIT: usize = 3;

/// Sentinel that closes a multi-line literal block.
pub const LITERAL_TERMINATOR: &str = "EOF";

/// Errors that can occur while turning configuration text into a
/// [`Section`] tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A line outside any literal block is indented off the configured unit.
    #[error("invalid indentation of {width} spaces (unit {unit}) on line: {line:?}")]
    Indentation {
        /// The offending raw line.
        line: String,
        /// Its leading-whitespace width.
        width: usize,
        /// The indentation unit in effect.
        unit: usize,
    },
    /// Failed to read an input file.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
}

/// Configures parsing and validation behavior.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Number of spaces per nesting level.
    pub indent_unit: usize,
    /// Lines starting with this marker are ignored entirely.
    pub comment_marker: char,
    /// Lines equal to or starting with this token are skipped; the token
    /// conventionally ends the configuration body.
    pub end_marker: String,
    /// Command prefixes that open a multi-line literal block whose body is
    /// exempt from indentation rules.
    pub literal_openers: Vec<String>,
    /// Token that closes a literal block, compared after stripping leading
    /// whitespace.
    pub literal_terminator: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT_UNIT,
            comment_marker: '!',
            end_marker: "end".to_string(),
            literal_openers: vec![
                "banner ".to_string(),
                "ssl key ".to_string(),
                "ssl certificate ".to_string(),
                "protocol https certificate ".to_string(),
            ],
            literal_terminator: LITERAL_TERMINATOR.to_string(),
        }
    }
}

/// Leading-whitespace width of a raw line, in characters.
pub(crate) fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// True when the line begins a multi-line literal block.
pub(crate) fn opens_literal(line: &str, opts: &ParseOptions) -> bool {
    let trimmed = line.trim_start();
    opts.literal_openers
        .iter()
        .any(|prefix| trimmed.starts_with(prefix.as_str()))
}

/// True when the line closes a multi-line literal block.
pub(crate) fn ends_literal(line: &str, opts: &ParseOptions) -> bool {
    line.trim_start() == opts.literal_terminator
}

/// Arena node used only during the single parse pass. The parent handle is
/// what lets the builder pop back out of a nested mode without reference
/// cycles; it is not part of the public tree.
struct Node {
    line: String,
    commands: Vec<String>,
    children: Vec<usize>,
    parent: Option<usize>,
}

impl Node {
    fn new(line: String, parent: Option<usize>) -> Self {
        Self {
            line,
            commands: Vec::new(),
            children: Vec::new(),
            parent,
        }
    }

    fn add_command(&mut self, command: &str) {
        if !self.commands.iter().any(|c| c == command) {
            self.commands.push(command.to_string());
        }
    }
}

/// Build a [`Section`] tree from already-validated configuration text.
///
/// Assumes [`crate::validate::validate`] has accepted the input; indentation
/// is not re-checked here.
pub fn build_tree(text: &str, opts: &ParseOptions) -> Section {
    let mut arena: Vec<Node> = vec![Node::new(String::new(), None)];
    let mut current = 0usize;
    let mut previous_level = 0usize;
    let mut previous_line = String::new();

    let mut lines = text.lines();
    while let Some(raw) = lines.next() {
        // A literal block is buffered, opener through terminator inclusive,
        // and treated as one opaque command for the remaining steps.
        let command: String = if opens_literal(raw, opts) {
            let mut buffered = vec![raw.to_string()];
            for follow in lines.by_ref() {
                let done = ends_literal(follow, opts);
                buffered.push(follow.to_string());
                if done {
                    break;
                }
            }
            buffered.join("\n")
        } else {
            let trimmed = raw.trim();
            if trimmed.is_empty()
                || trimmed.starts_with(opts.comment_marker)
                || trimmed.starts_with(opts.end_marker.as_str())
            {
                continue;
            }
            trimmed.to_string()
        };

        let level = indent_width(raw) / opts.indent_unit;
        match level.cmp(&previous_level) {
            Ordering::Greater => {
                let child = arena.len();
                arena.push(Node::new(previous_line.clone(), Some(current)));
                arena[current].children.push(child);
                current = child;
                previous_level = level;
            }
            Ordering::Less => {
                // Pops exactly one level even when the indentation dropped
                // by several units in one step. Known limitation of the
                // format, kept as documented behavior.
                if let Some(parent) = arena[current].parent {
                    current = parent;
                }
                previous_level = level;
            }
            Ordering::Equal => {}
        }

        arena[current].add_command(&command);
        previous_line = command;
    }

    freeze(&arena, 0)
}

fn freeze(arena: &[Node], index: usize) -> Section {
    let node = &arena[index];
    Section {
        line: node.line.clone(),
        commands: node.commands.clone(),
        children: node
            .children
            .iter()
            .map(|&child| freeze(arena, child))
            .collect(),
    }
}
