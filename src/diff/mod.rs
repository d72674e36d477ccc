//! Core section-tree diffing.

pub mod engine;

pub use engine::{compare, compare_one_sided};
