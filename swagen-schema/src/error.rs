//! Loading errors, rendered with source snippets through `miette`.

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Boxed so that `Result<SchemaDocument>` stays small.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The text being parsed plus the name to show for it.
///
/// Every error raised while parsing one input is built from here so it can
/// carry the original text for miette to underline.
#[derive(Debug, Clone)]
pub struct SourceContext {
    text: String,
    name: String,
}

impl SourceContext {
    pub fn new(text: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            name: name.into(),
        }
    }

    /// Point a single-character label at the line and column serde_json reported.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.text, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, usize::from(offset < self.text.len()))));
        Box::new(Error::Parse {
            src: NamedSource::new(&self.name, self.text.clone()),
            span,
            source,
        })
    }

    pub fn missing_field(&self, field: &'static str) -> Box<Error> {
        Box::new(Error::MissingField {
            filename: self.name.clone(),
            field,
        })
    }

    pub fn not_an_object(&self) -> Box<Error> {
        Box::new(Error::NotAnObject {
            filename: self.name.clone(),
        })
    }
}

/// Convert a 1-based line/column pair into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(swagen::io),
        help("pass a path to a JSON document or an http(s) URL")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse API description")]
    #[diagnostic(code(swagen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{filename}' is missing the required '{field}' field")]
    #[diagnostic(
        code(swagen::missing_field),
        help("a Swagger/OpenAPI document needs top-level 'info' and 'paths' objects")
    )]
    MissingField {
        filename: String,
        field: &'static str,
    },

    #[error("'{filename}' is not a JSON object")]
    #[diagnostic(code(swagen::not_an_object))]
    NotAnObject { filename: String },

    #[error("not a Swagger/OpenAPI document")]
    #[diagnostic(
        code(swagen::unknown_dialect),
        help("add a top-level \"swagger\": \"2.0\" or \"openapi\": \"3.0.0\" marker")
    )]
    UnknownDialect,
}
