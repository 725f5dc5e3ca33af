//! What a target language plugs into: a [`NamingConvention`] for the
//! resolver and a [`LanguageCodegen`] for output.

mod naming;
mod traits;

pub use naming::{NamingConvention, underscore_escape};
pub use traits::{GenerateResult, LanguageCodegen, PreviewFile};
