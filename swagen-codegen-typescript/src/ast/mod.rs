//! Builders for the TypeScript declarations the generator emits.
//!
//! Every node implements [`Renderable`]; [`render`] prints one node on its
//! own, [`CodeFile`](crate::CodeFile) assembles whole modules.

mod class;
mod consts;
mod exports;
mod imports;
mod interface;
mod type_alias;

pub use class::{Class, Method};
pub use consts::Const;
pub use exports::Export;
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
use swagen_codegen::{CodeBuilder, CodeFragment, Renderable};
pub use type_alias::TypeAlias;

/// Render a single node with two-space indentation.
pub fn render(node: &impl Renderable) -> String {
    let mut builder = CodeBuilder::typescript();
    builder.emit(node);
    builder.build()
}

fn export_keyword(exported: bool) -> &'static str {
    if exported { "export " } else { "" }
}

/// `decl`, preceded by a JSDoc block when `doc` is set.
fn documented(doc: Option<&str>, decl: CodeFragment) -> Vec<CodeFragment> {
    doc.map(CodeFragment::jsdoc)
        .into_iter()
        .chain(std::iter::once(decl))
        .collect()
}
