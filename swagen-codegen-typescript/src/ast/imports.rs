//! `import` statements.

use swagen_codegen::{CodeFragment, Renderable};

/// One `import ... from 'module';` line.
///
/// Clauses print in the order TypeScript requires: default, namespace,
/// then the named list. With no clauses the import is side-effect only.
#[derive(Debug, Clone)]
pub struct Import {
    module: String,
    default: Option<String>,
    namespace: Option<String>,
    named: Vec<String>,
}

impl Import {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            default: None,
            namespace: None,
            named: Vec::new(),
        }
    }

    pub fn default(self, name: impl Into<String>) -> Self {
        Self {
            default: Some(name.into()),
            ..self
        }
    }

    /// `* as name`
    pub fn namespace(self, name: impl Into<String>) -> Self {
        Self {
            namespace: Some(name.into()),
            ..self
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    fn statement(&self) -> String {
        let named = (!self.named.is_empty()).then(|| format!("{{ {} }}", self.named.join(", ")));
        let clauses: Vec<String> = self
            .default
            .iter()
            .cloned()
            .chain(self.namespace.iter().map(|ns| format!("* as {}", ns)))
            .chain(named)
            .collect();

        if clauses.is_empty() {
            format!("import '{}';", self.module)
        } else {
            format!("import {} from '{}';", clauses.join(", "), self.module)
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::render;

    #[test]
    fn test_axios_import() {
        let import = Import::new("axios")
            .default("axios")
            .named("AxiosInstance")
            .named("AxiosRequestConfig");
        assert_eq!(
            render(&import),
            "import axios, { AxiosInstance, AxiosRequestConfig } from 'axios';\n"
        );
    }

    #[test]
    fn test_namespace_import() {
        let import = Import::new("./types").namespace("Types");
        assert_eq!(render(&import), "import * as Types from './types';\n");
    }

    #[test]
    fn test_side_effect_import() {
        assert_eq!(render(&Import::new("./polyfill")), "import './polyfill';\n");
    }
}
