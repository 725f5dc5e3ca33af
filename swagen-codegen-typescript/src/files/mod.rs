//! TypeScript file generators.

mod api_ts;
mod index_ts;
mod types_ts;

pub use api_ts::{ApiTs, CLIENT_METHODS, CLIENT_TYPES, DEFAULT_TIMEOUT_MS};
pub use index_ts::IndexTs;
pub use types_ts::{TypesTs, WRAPPER_TYPES};
