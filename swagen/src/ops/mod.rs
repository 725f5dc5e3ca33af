//! Core operations.
//!
//! Business logic for swagen commands, separated from argument parsing
//! and output rendering.

pub mod generate;
pub mod validate;

pub use generate::{GenerateOptions, generate};
pub use validate::validate;
