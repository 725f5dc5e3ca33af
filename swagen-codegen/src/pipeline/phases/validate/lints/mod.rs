//! Built-in lints for document validation.

mod dialect;
mod empty_paths;
mod non_ascii;
mod operation_id;
mod unresolved_ref;

pub use dialect::UnknownDialectLint;
pub use empty_paths::EmptyPathsLint;
pub use non_ascii::NonAsciiIdentifierLint;
pub use operation_id::{DuplicateOperationIdLint, MissingOperationIdLint};
pub use unresolved_ref::UnresolvedRefLint;

/// Location string for an operation, e.g. `paths./pets.get`.
fn operation_location(path: &str, method: swagen_schema::HttpMethod) -> String {
    format!("paths.{}.{}", path, method)
}
