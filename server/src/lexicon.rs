//! # Lexicon
//!
//! Fixed keyword dictionaries, one flat word set per polarity. Loaded once
//! at startup and only ever consulted for membership; entries are stored
//! lowercase to match what the tokenizer emits.

use std::collections::HashSet;

pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "fantastic",
    "awesome",
    "brilliant",
    "outstanding",
    "perfect",
    "love",
    "like",
    "happy",
    "pleased",
    "satisfied",
    "impressed",
    "recommend",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "disappointing",
    "hate",
    "dislike",
    "angry",
    "frustrated",
    "annoyed",
    "poor",
    "worst",
    "useless",
    "broken",
    "failed",
    "error",
    "problem",
    "issue",
];

#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Lexicon {
    pub fn new(positive: &[&str], negative: &[&str]) -> Self {
        Self {
            positive: positive.iter().map(|word| word.to_string()).collect(),
            negative: negative.iter().map(|word| word.to_string()).collect(),
        }
    }

    /// The built-in English word sets.
    pub fn builtin() -> Self {
        Self::new(POSITIVE_WORDS, NEGATIVE_WORDS)
    }

    pub fn is_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    pub fn is_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_membership() {
        let lexicon = Lexicon::builtin();

        assert!(lexicon.is_positive("amazing"));
        assert!(lexicon.is_negative("terrible"));
        assert!(!lexicon.is_positive("terrible"));
        assert!(!lexicon.is_negative("amazing"));
        assert!(!lexicon.is_positive("okay"));
        assert!(!lexicon.is_negative("okay"));
    }

    #[test]
    fn test_builtin_sets_disjoint() {
        for word in POSITIVE_WORDS {
            assert!(
                !NEGATIVE_WORDS.contains(word),
                "{word} appears in both polarities"
            );
        }
    }

    #[test]
    fn test_custom_words() {
        let lexicon = Lexicon::new(&["up"], &["down"]);

        assert!(lexicon.is_positive("up"));
        assert!(lexicon.is_negative("down"));
        assert!(!lexicon.is_positive("good"));
    }
}
