//! Positional word distance for spelling suggestion.
//!
//! The metric repairs one word toward another with a fixed, ordered set of
//! rules and returns the accumulated repair cost. It is a greedy alignment
//! heuristic tuned for single-word typos, not a minimum-cost edit distance:
//! at the first mismatching position the first applicable rule always wins,
//! so results are deterministic but may differ from Levenshtein values.

use crate::error::{Result, SalviaError};

/// Cost of swapping two adjacent characters.
const TRANSPOSITION_COST: f64 = 0.75;
/// Cost of shifting the tail right to re-insert a missing character.
const INSERTION_COST: f64 = 2.0;
/// Cost of dropping a surplus trailing character.
const DELETION_COST: f64 = 1.0;
/// Cost of replacing one character with another.
const SUBSTITUTION_COST: f64 = 0.5;

/// Calculate the repair cost of transforming `a` into `b`.
///
/// Both words are folded to lowercase before measurement, so
/// `distance(w, w)` is `0.0` for any casing of `w`. Costs accumulate in
/// multiples of 0.25 and the result is always non-negative.
///
/// Returns an invalid-argument error if either word is empty or
/// whitespace-only.
pub fn distance(a: &str, b: &str) -> Result<f64> {
    let current = checked_chars(a)?;
    let target = checked_chars(b)?;
    Ok(measure(&current, &target))
}

/// Measures many candidate words against one reference word.
///
/// Folds and validates the reference once; each call to
/// [`distance`](DistanceMatcher::distance) then repairs the candidate toward
/// that reference.
pub struct DistanceMatcher {
    target: String,
    target_chars: Vec<char>,
}

impl DistanceMatcher {
    /// Create a new matcher for the given reference word.
    pub fn new(target: &str) -> Result<Self> {
        let target_chars = checked_chars(target)?;
        Ok(DistanceMatcher {
            target: target_chars.iter().collect(),
            target_chars,
        })
    }

    /// The folded reference word.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Number of characters in the folded reference word.
    pub fn target_len(&self) -> usize {
        self.target_chars.len()
    }

    /// Calculate the repair cost from a candidate to the reference word.
    pub fn distance(&self, candidate: &str) -> Result<f64> {
        let candidate_chars = checked_chars(candidate)?;
        Ok(measure(&candidate_chars, &self.target_chars))
    }

    /// Check if a candidate is within the given repair cost.
    pub fn is_match(&self, candidate: &str, max_distance: f64) -> bool {
        self.distance(candidate)
            .is_ok_and(|distance| distance <= max_distance)
    }
}

/// Fold a word to lowercase and split it into characters, rejecting empty
/// and whitespace-only input.
fn checked_chars(word: &str) -> Result<Vec<char>> {
    if word.trim().is_empty() {
        return Err(SalviaError::invalid_argument(
            "word must not be empty or whitespace-only",
        ));
    }
    Ok(word.to_lowercase().chars().collect())
}

/// Run the repair loop over two sentinel-padded working buffers.
///
/// Each pass scans for the first mismatch and applies exactly one rule.
/// Every rule makes the mismatching position agree with the target while
/// leaving earlier positions untouched, so the first-mismatch index moves
/// strictly right and the loop is bounded by the buffer length.
fn measure(a: &[char], b: &[char]) -> f64 {
    let len = a.len().max(b.len());
    let mut current = pad(a, len);
    let target = pad(b, len);
    let mut cost = 0.0;

    loop {
        log::debug!(
            "repair pass: target=[{}] current=[{}] cost={cost}",
            render(&target),
            render(&current),
        );

        let Some(i) = (0..len).find(|&i| current[i] != target[i]) else {
            return cost;
        };

        let expected = target[i];
        let expected_next = target.get(i + 1).copied().flatten();
        let actual = current[i];
        let actual_next = current.get(i + 1).copied().flatten();
        let actual_prev = if i == 0 { None } else { current[i - 1] };

        if actual == expected_next && actual_next == expected {
            // The two characters are one position off: swap them.
            current.swap(i, i + 1);
            cost += TRANSPOSITION_COST;
        } else if actual_prev == expected && actual == expected_next {
            // A character is missing here: shift the tail right (the last
            // slot falls off) and insert the expected one.
            for j in (i + 1..len).rev() {
                current[j] = current[j - 1];
            }
            current[i] = target[i];
            cost += INSERTION_COST;
        } else if expected.is_none() {
            // The target is exhausted at this position: drop the surplus.
            current[i] = None;
            cost += DELETION_COST;
        } else {
            current[i] = target[i];
            cost += SUBSTITUTION_COST;
        }
    }
}

/// Pad a word out to `len` slots, marking absent positions with `None`.
fn pad(chars: &[char], len: usize) -> Vec<Option<char>> {
    let mut buffer: Vec<Option<char>> = chars.iter().copied().map(Some).collect();
    buffer.resize(len, None);
    buffer
}

fn render(buffer: &[Option<char>]) -> String {
    buffer.iter().map(|slot| slot.unwrap_or('\u{00b7}')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_known_repairs() {
        let cases = [
            ("Piza", "Pizza", 2.00),
            ("Pizza", "Pizza", 0.00),
            ("Pixxa", "Pizza", 1.00),
            ("Pizaz", "Pizza", 0.75),
            ("Pizzas", "Pizza", 1.00),
            ("Pixxas", "Pizza", 2.00),
            ("c", "cc", 2.00),
            ("ab", "ac", 0.50),
            ("abc", "acb", 0.75),
            ("ccc", "cc", 1.00),
            ("abcd", "acbc", 1.25),
            ("cc", "cc", 0.00),
        ];

        for (a, b, expected) in cases {
            assert_eq!(distance(a, b).unwrap(), expected, "{a} -> {b}");
        }
    }

    #[test]
    fn test_distance_folds_case() {
        assert_eq!(distance("PIZZA", "pizza").unwrap(), 0.0);
        assert_eq!(distance("piZaZ", "PIZZA").unwrap(), 0.75);
    }

    #[test]
    fn test_distance_is_asymmetric() {
        // Dropping a surplus character and filling a missing one carry
        // different costs, so the argument order matters.
        assert_eq!(distance("ccc", "cc").unwrap(), 1.0);
        assert_eq!(distance("cc", "ccc").unwrap(), 2.0);
    }

    #[test]
    fn test_distance_rejects_blank_operands() {
        for (a, b) in [("", "pizza"), ("pizza", ""), ("   ", "pizza"), ("pizza", "\t")] {
            let err = distance(a, b).unwrap_err();
            assert!(
                matches!(err, SalviaError::InvalidArgument(_)),
                "{a:?} vs {b:?}: {err}"
            );
        }
    }

    #[test]
    fn test_distance_terminates_on_disjoint_words() {
        // Every position needs a repair; the scan still converges.
        let d = distance("abcdefgh", "ijklmnop").unwrap();
        assert_eq!(d, 4.0);
    }

    #[test]
    fn test_matcher() {
        let matcher = DistanceMatcher::new("Pizza").unwrap();

        assert_eq!(matcher.target(), "pizza");
        assert_eq!(matcher.target_len(), 5);
        assert_eq!(matcher.distance("piza").unwrap(), 2.0);
        assert_eq!(matcher.distance("pizza").unwrap(), 0.0);
        assert!(matcher.is_match("pizaz", 1.0));
        assert!(!matcher.is_match("pixxas", 1.0));
    }

    #[test]
    fn test_matcher_rejects_blank_reference() {
        assert!(DistanceMatcher::new(" ").is_err());
    }
}
