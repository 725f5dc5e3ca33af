//! `const` declarations.

use swagen_codegen::{CodeFragment, Renderable};

use super::export_keyword;

/// `const name = value;`, private unless exported.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
    exported: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            exported: false,
        }
    }

    pub fn export(self) -> Self {
        Self {
            exported: true,
            ..self
        }
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!(
            "{}const {} = {};",
            export_keyword(self.exported),
            self.name,
            self.value
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::render;

    #[test]
    fn test_exported_const() {
        let client = Const::new("apiClient", "new ApiClient()").export();
        assert_eq!(render(&client), "export const apiClient = new ApiClient();\n");
    }

    #[test]
    fn test_private_const() {
        assert_eq!(render(&Const::new("limit", "10")), "const limit = 10;\n");
    }
}
