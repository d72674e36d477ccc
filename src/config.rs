use std::fs;
use std::path::Path;

use crate::diff::compare;
use crate::parser::{build_tree, ParseError, ParseOptions};
use crate::section::Section;
use crate::validate::validate;

/// An owned, parsed configuration tree.
///
/// Built by running the format validator and then the tree builder over a
/// raw configuration blob. Once built the tree is read-only; comparisons
/// allocate fresh result trees and never touch the inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    root: Section,
}

impl Config {
    /// Validate and parse configuration text with default options.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::parse_with_options(text, &ParseOptions::default())
    }

    /// Validate and parse configuration text with explicit options.
    pub fn parse_with_options(text: &str, opts: &ParseOptions) -> Result<Self, ParseError> {
        validate(text, opts)?;
        Ok(Self {
            root: build_tree(text, opts),
        })
    }

    /// Read a configuration file and parse it with default options.
    pub fn parse_file(path: &Path) -> Result<Self, ParseError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// The global section rooting the whole tree.
    pub fn root(&self) -> &Section {
        &self.root
    }

    /// Structural difference against another configuration.
    ///
    /// Returns `(what self has that other lacks, what other has that self
    /// lacks)`. Both roots are global sections, so the differ's shared-mode
    /// precondition holds trivially.
    pub fn compare(&self, other: &Config) -> (Section, Section) {
        compare(&self.root, &other.root)
    }
}
