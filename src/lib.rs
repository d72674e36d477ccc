//! Hierarchical device-configuration parsing and structural diffing.
//!
//! Turns an indentation-nested configuration blob into a [`Section`] tree
//! and computes, for any two trees, the substructure each side carries that
//! the other lacks.

pub mod config;
pub mod diff;
pub mod format;
pub mod parser;
pub mod section;
pub mod validate;

pub use config::Config;
pub use diff::{compare, compare_one_sided};
pub use format::{flatten, format_json, format_text};
pub use parser::{build_tree, ParseError, ParseOptions};
pub use section::Section;
pub use validate::validate;
