//! Fragments: the text-free shape of generated code.
//!
//! AST nodes produce fragments; [`CodeBuilder`](super::CodeBuilder) lays them
//! out with indentation.

#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// One line; a newline is appended.
    Line(String),
    Blank,
    /// `header`, then `body` one level deeper, then `close` if any.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A JSDoc comment, one entry per line.
    JsDoc(Vec<String>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// A JSDoc comment with one line per line of `text`.
    pub fn jsdoc(text: &str) -> Self {
        Self::JsDoc(text.lines().map(str::to_string).collect())
    }
}

/// Anything that can describe itself as code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (**self).to_fragments()
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (**self).to_fragments()
    }
}
