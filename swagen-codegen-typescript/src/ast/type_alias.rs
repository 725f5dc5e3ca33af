//! `type` declarations.

use swagen_codegen::{CodeFragment, Renderable};

use super::{documented, export_keyword};

/// `type Name = ...;`, exported unless made private.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    target: String,
    doc: Option<String>,
    exported: bool,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            doc: None,
            exported: true,
        }
    }

    pub fn doc(self, doc: Option<impl Into<String>>) -> Self {
        Self {
            doc: doc.map(Into::into),
            ..self
        }
    }

    pub fn private(self) -> Self {
        Self {
            exported: false,
            ..self
        }
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let decl = format!(
            "{}type {} = {};",
            export_keyword(self.exported),
            self.name,
            self.target
        );
        documented(self.doc.as_deref(), CodeFragment::Line(decl))
    }
}
