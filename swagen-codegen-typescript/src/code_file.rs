//! Whole-module assembly.

use swagen_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::{Export, Import};

/// A TypeScript module: imports, then body items, then exports.
///
/// Body items are separated from each other and from the import and export
/// groups by one blank line. Imports and exports are not separated among
/// themselves.
///
/// ```ignore
/// let text = CodeFile::new()
///     .import(Import::new("./types").namespace("Types"))
///     .add(client_class)
///     .export(Export::default_of("apiClient"))
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    items: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, item: R) -> Self {
        self.items.push(item.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, items: impl IntoIterator<Item = R>) -> Self {
        self.items
            .extend(items.into_iter().map(|item| item.to_fragments()));
        self
    }

    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.items.is_empty() && self.exports.is_empty()
    }

    pub fn render(&self) -> String {
        let group = |nodes: Vec<CodeFragment>| (!nodes.is_empty()).then_some(nodes);
        let imports = group(self.imports.iter().flat_map(|import| import.to_fragments()).collect());
        let exports = group(self.exports.iter().flat_map(|export| export.to_fragments()).collect());
        let sections = imports
            .into_iter()
            .chain(self.items.iter().cloned())
            .chain(exports);

        let mut builder = CodeBuilder::typescript();
        for (i, section) in sections.enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in section {
                builder.apply_fragment(fragment);
            }
        }
        builder.build()
    }
}

/// Verbatim lines used as a body item.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(
            lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| {
                if line.is_empty() {
                    CodeFragment::Blank
                } else {
                    CodeFragment::Line(line.to_string())
                }
            })
            .collect()
    }
}
