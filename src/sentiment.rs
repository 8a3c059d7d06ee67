// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Sentiment engine wrapping the VADER lexicon analyzer

use serde::Serialize;
use tracing::debug;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::{EuthymiaError, Result};

/// Scores produced for one journal entry.
///
/// Created per request and discarded after rendering; never stored.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentResult {
    /// Compound polarity in [-1.0, 1.0]
    pub polarity: f64,
    /// Proportion of the entry scored positive
    pub positive: f64,
    /// Proportion of the entry scored neutral
    pub neutral: f64,
    /// Proportion of the entry scored negative
    pub negative: f64,
}

/// Sentiment analysis engine.
///
/// The scoring algorithm is the library's concern; this wrapper only
/// validates input and normalizes the output shape.
pub struct SentimentEngine {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl SentimentEngine {
    /// Create a new engine with the built-in VADER lexicon
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Score a journal entry.
    ///
    /// Empty or whitespace-only input is rejected before the analyzer
    /// runs; anything the analyzer fails to produce is surfaced as an
    /// [`EuthymiaError::Analysis`].
    pub fn analyze(&self, text: &str) -> Result<SentimentResult> {
        let entry = text.trim();
        if entry.is_empty() {
            return Err(EuthymiaError::EmptyEntry);
        }

        debug!("Scoring entry ({} chars)", entry.len());

        let scores = self.analyzer.polarity_scores(entry);
        let score = |key: &str| {
            scores.get(key).copied().ok_or_else(|| {
                EuthymiaError::Analysis(format!("analyzer returned no '{}' score", key))
            })
        };

        Ok(SentimentResult {
            polarity: score("compound")?.clamp(-1.0, 1.0),
            positive: score("pos")?,
            neutral: score("neu")?,
            negative: score("neg")?,
        })
    }
}

impl Default for SentimentEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_entry_rejected() {
        let engine = SentimentEngine::new();
        assert!(matches!(engine.analyze(""), Err(EuthymiaError::EmptyEntry)));
    }

    #[test]
    fn test_whitespace_entry_rejected() {
        let engine = SentimentEngine::new();
        assert!(matches!(
            engine.analyze("   \n\t  "),
            Err(EuthymiaError::EmptyEntry)
        ));
    }

    #[test]
    fn test_positive_entry_scores_positive() {
        let engine = SentimentEngine::new();
        let result = engine
            .analyze("I love this! Today was wonderful, amazing, and great.")
            .unwrap();
        assert!(result.polarity > 0.05, "polarity was {}", result.polarity);
    }

    #[test]
    fn test_negative_entry_scores_negative() {
        let engine = SentimentEngine::new();
        let result = engine
            .analyze("I hate this. Today was terrible, awful, and horrible.")
            .unwrap();
        assert!(result.polarity < -0.05, "polarity was {}", result.polarity);
    }

    #[test]
    fn test_polarity_stays_in_domain() {
        let engine = SentimentEngine::new();
        for entry in [
            "best best best best best best best best",
            "worst worst worst worst worst worst worst",
            "the cat sat on the mat",
        ] {
            let result = engine.analyze(entry).unwrap();
            assert!((-1.0..=1.0).contains(&result.polarity));
        }
    }

    #[test]
    fn test_channel_proportions_are_fractions() {
        let engine = SentimentEngine::new();
        let result = engine.analyze("A mixed day, good and bad.").unwrap();
        for channel in [result.positive, result.neutral, result.negative] {
            assert!((0.0..=1.0).contains(&channel));
        }
    }
}
