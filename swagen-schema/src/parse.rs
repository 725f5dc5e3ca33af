//! Document parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Dialect, Error, Result, SchemaDocument, error::SourceContext};

/// Top-level fields without which generation cannot start.
const REQUIRED_FIELDS: [&str; 2] = ["info", "paths"];

impl FromStr for SchemaDocument {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_document(s, "swagger.json")
    }
}

impl SchemaDocument {
    /// Parse a document from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_document(&content, &path.display().to_string())
    }

    /// Parse a document from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_document(content, filename)
    }

    /// Return the dialect, failing for documents without a version marker.
    pub fn require_dialect(&self) -> Result<Dialect> {
        match self.dialect() {
            Dialect::Unknown => Err(Box::new(Error::UnknownDialect)),
            dialect => Ok(dialect),
        }
    }
}

/// Parse a document from content with the given filename for error reporting.
///
/// The root must be an object carrying `info` and `paths`; anything else is
/// rejected before typed deserialization.
pub fn parse_document(content: &str, filename: &str) -> Result<SchemaDocument> {
    let source_ctx = SourceContext::new(content, filename);

    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    let Some(root) = value.as_object() else {
        return Err(source_ctx.not_an_object());
    };
    if let Some(field) = REQUIRED_FIELDS.into_iter().find(|f| !root.contains_key(*f)) {
        return Err(source_ctx.missing_field(field));
    }

    serde_json::from_str(content).map_err(|e| source_ctx.parse_error(e))
}
