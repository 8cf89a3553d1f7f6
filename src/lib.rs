//! # Salvia
//!
//! A fast, lightweight spelling suggestion library for Rust.
//!
//! ## Features
//!
//! - Positional repair distance tuned for single-word typos
//! - "Did you mean?" ranking over any word corpus
//! - Async corpus sources with case-insensitive membership checks
//! - No shared state between calls
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use salvia::{MemoryCorpus, SuggestionEngine};
//!
//! # fn main() -> salvia::Result<()> {
//! let corpus = Arc::new(MemoryCorpus::from_words(["hello", "world"]));
//! let engine = SuggestionEngine::new(corpus);
//!
//! let suggestions = tokio_test::block_on(engine.suggest("hellp", 1.0, 5))?;
//! assert_eq!(suggestions[0].word, "hello");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod spelling;

// Re-exports for the public API
pub use error::{Result, SalviaError};
pub use spelling::corpus::{CorpusSource, MemoryCorpus};
pub use spelling::distance::{DistanceMatcher, distance};
pub use spelling::suggest::{Suggestion, SuggestionEngine};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
