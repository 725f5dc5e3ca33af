//! Code generation building blocks: [`CodeFragment`]s produced by
//! [`Renderable`] nodes, laid out by a [`CodeBuilder`].

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
