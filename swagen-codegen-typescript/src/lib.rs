//! TypeScript code generator for swagen.
//!
//! Renders a resolved [`ApiModel`](swagen_ir::ApiModel) into three modules:
//!
//! - `types.ts` - runtime wrapper types and one declaration per definition
//! - `api.ts` - an axios based `ApiClient` class with one method per endpoint
//! - `index.ts` - a barrel re-exporting both
//!
//! ```ignore
//! use swagen_codegen::{LanguageCodegen, pipeline::Pipeline};
//! use swagen_codegen_typescript::{ClientOptions, Generator, TS_NAMING};
//!
//! let ctx = Pipeline::new(TS_NAMING).run(document)?;
//! let generator = Generator::from_context(ctx, ClientOptions::default())?;
//! generator.generate(Path::new("src/api"))?;
//! ```

mod code_file;
mod generator;
mod naming;
mod qualify;
mod signature;

pub mod ast;
pub mod files;

pub use code_file::{CodeFile, RawCode};
pub use generator::{ClientOptions, Generator};
pub use naming::TS_NAMING;
pub use qualify::{TYPES_NAMESPACE, TypeQualifier};
pub use signature::{Formal, MethodSignature};
pub use swagen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
