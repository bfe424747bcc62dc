//! # Scoring
//!
//! [`tokenize`] normalizes raw text into lowercase words; [`SentimentModel`]
//! counts lexicon hits among them and turns the counts into a label plus a
//! confidence score. Both are pure functions of their input and safe to
//! call from any number of requests at once.

use std::fmt;

use serde::Serialize;

use crate::lexicon::Lexicon;

/// Version string attached to every prediction response.
pub const MODEL_VERSION: &str = "1.0.0";

/// Confidence reported when no lexicon word appears at all: neutral by
/// absence of evidence, not a measured probability.
pub const NEUTRAL_CONFIDENCE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        };

        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub positive_words: usize,
    pub negative_words: usize,
}

/// Strips ASCII punctuation and lowercases, then splits on whitespace.
///
/// Empty or punctuation-only input yields an empty token list, never an
/// error; validation happens before text reaches this layer.
pub fn tokenize(text: &str) -> Vec<String> {
    text.chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone)]
pub struct SentimentModel {
    lexicon: Lexicon,
}

impl SentimentModel {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::builtin(),
        }
    }

    /// Score against an alternate dictionary.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Count lexicon hits per polarity and derive the label.
    ///
    /// The label follows the counts exactly: whichever polarity has more
    /// hits wins, equal counts (including zero) are neutral. Confidence is
    /// the winning count over all hits, so a single-polarity text scores
    /// 1.0 and an even split scores 0.5.
    pub fn predict(&self, text: &str) -> Prediction {
        let tokens = tokenize(text);

        let positive_words = tokens.iter().filter(|t| self.lexicon.is_positive(t)).count();
        let negative_words = tokens.iter().filter(|t| self.lexicon.is_negative(t)).count();
        let total = positive_words + negative_words;

        let (sentiment, confidence) = if total == 0 {
            (Sentiment::Neutral, NEUTRAL_CONFIDENCE)
        } else if positive_words > negative_words {
            (Sentiment::Positive, positive_words as f64 / total as f64)
        } else if negative_words > positive_words {
            (Sentiment::Negative, negative_words as f64 / total as f64)
        } else {
            (Sentiment::Neutral, NEUTRAL_CONFIDENCE)
        };

        Prediction {
            sentiment,
            confidence: round_confidence(confidence.clamp(0.0, 1.0)),
            positive_words,
            negative_words,
        }
    }
}

impl Default for SentimentModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Three decimal places, the precision callers see in the JSON.
fn round_confidence(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
