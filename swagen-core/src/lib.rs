//! Core utilities and types for swagen.
//!
//! This crate provides fundamental types and utilities used across
//! the swagen crates: HTTP verbs and parameter locations, identifier
//! helpers, generated-file writing and the generator configuration record.

mod config;
mod file;
mod types;
mod utils;

pub use config::{DEFAULT_CONFIG_FILE, DEFAULT_INSTANCE_NAME, GeneratorConfig};
// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Fundamental types
pub use types::{HttpMethod, ParameterLocation};
// String utilities
pub use utils::{capitalize, is_identifier, single_quoted, to_camel_case};
