//! Source retrieval for the iconhdr generator.
//!
//! Font metadata documents and glyph binaries come either from a network
//! location or a local file. [`load`] dispatches on the location shape and
//! returns the raw bytes either way. One attempt per location, no retries —
//! a failed unit is skipped by the batch driver, never retried.

mod error;
mod loader;

pub use error::RetrievalError;
pub use loader::{is_url, load};
