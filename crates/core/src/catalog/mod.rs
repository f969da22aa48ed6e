//! Product catalog - the canonical item list orders are resolved against.
//!
//! The catalog is loaded from a JSON document, indexed for code/name
//! lookups, and never mutated after load.

mod index;
mod loader;
mod types;

pub use index::Catalog;
pub use loader::load_catalog;
pub use types::*;
