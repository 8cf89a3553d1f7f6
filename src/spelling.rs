//! Spelling suggestion primitives.
//!
//! This module provides the positional word-distance metric and the
//! corpus-backed "Did you mean?" ranking built on top of it, together with
//! the [`CorpusSource`] collaborator contract the ranking consumes.

pub mod corpus;
pub mod distance;
pub mod suggest;

// Re-export commonly used types
pub use corpus::{CorpusSource, MemoryCorpus};
pub use distance::{DistanceMatcher, distance};
pub use suggest::{Suggestion, SuggestionEngine};
