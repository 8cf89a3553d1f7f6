//! "Did you mean?" suggestion generation over a word corpus.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::corpus::CorpusSource;
use crate::spelling::distance::{DistanceMatcher, distance};

/// A single ranked suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word, as the corpus provides it.
    pub word: String,
    /// Ranking cost (lower is closer): the repair cost from the candidate
    /// to the input plus a penalty for the difference in length.
    pub distance: f64,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, distance: f64) -> Self {
        Suggestion { word, distance }
    }
}

/// Ranks corpus words against a possibly misspelled input word.
///
/// The corpus dependency is injected at construction and never mutated; the
/// engine holds no other state, so one instance can serve concurrent calls.
pub struct SuggestionEngine {
    corpus: Arc<dyn CorpusSource>,
}

impl SuggestionEngine {
    /// Create a new engine over the given corpus.
    pub fn new(corpus: Arc<dyn CorpusSource>) -> Self {
        SuggestionEngine { corpus }
    }

    /// Get suggestions for a possibly misspelled word.
    ///
    /// If the input is already a corpus member (ignoring case) the result is
    /// empty: the word needs no correction and the full corpus scan is
    /// skipped. Otherwise behaves like [`suggest_force`](Self::suggest_force).
    ///
    /// `max_amount` caps the result length; `0` means unlimited. Returns an
    /// invalid-argument error, before any corpus interaction, if the input
    /// is empty or whitespace-only. Corpus failures propagate unchanged.
    pub async fn suggest(
        &self,
        input: &str,
        max_distance: f64,
        max_amount: usize,
    ) -> Result<Vec<Suggestion>> {
        let matcher = DistanceMatcher::new(input)?;

        if self.corpus.exists(input).await? {
            return Ok(Vec::new());
        }

        let words = self.corpus.get_all().await?;
        rank(&matcher, &words, max_distance, max_amount)
    }

    /// Get suggestions without the exact-membership short-circuit.
    ///
    /// Every corpus word is ranked, including one equal to the input (which
    /// scores 0 and sorts first when within `max_distance`).
    pub async fn suggest_force(
        &self,
        input: &str,
        max_distance: f64,
        max_amount: usize,
    ) -> Result<Vec<Suggestion>> {
        let matcher = DistanceMatcher::new(input)?;

        let words = self.corpus.get_all().await?;
        rank(&matcher, &words, max_distance, max_amount)
    }

    /// Calculate the repair cost of transforming `a` into `b`.
    ///
    /// See [`distance`](crate::spelling::distance::distance).
    pub fn distance(&self, a: &str, b: &str) -> Result<f64> {
        distance(a, b)
    }
}

/// Score every candidate against the matcher's reference word, keep those
/// within the threshold, and order them.
///
/// The sort is stable, so candidates with equal scores keep the corpus's
/// enumeration order.
fn rank(
    matcher: &DistanceMatcher,
    words: &[String],
    max_distance: f64,
    max_amount: usize,
) -> Result<Vec<Suggestion>> {
    let mut suggestions = Vec::new();

    for word in words {
        let folded = word.to_lowercase();
        let gap = folded.chars().count().abs_diff(matcher.target_len()) as f64;
        let score = matcher.distance(&folded)? + gap;

        if score <= max_distance {
            suggestions.push(Suggestion::new(word.clone(), score));
        }
    }

    suggestions.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    if max_amount > 0 {
        suggestions.truncate(max_amount);
    }

    log::debug!(
        "ranked {} of {} candidates for {:?}",
        suggestions.len(),
        words.len(),
        matcher.target(),
    );

    Ok(suggestions)
}
