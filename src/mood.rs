// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Mood classification over sentiment polarity.
//!
//! Pure functions, no I/O.

use serde::{Deserialize, Serialize};

/// Upper bound of the Neutral band; anything above up to [`STRONG_BAND`]
/// is Positive, symmetric on the negative side.
const NEUTRAL_BAND: f64 = 0.05;

/// Boundary between Positive and Very Positive (and the mirrored
/// Negative / Very Negative boundary). The boundary value itself belongs
/// to the inner band.
const STRONG_BAND: f64 = 0.3;

/// Mood category derived from a polarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

/// Message styling tag for a mood, controls the result box color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// Map a polarity score to its mood category.
///
/// Total over all of `f64`. The five bands partition [-1.0, 1.0]:
/// the Neutral band is closed on both sides, and both ±0.3 boundaries
/// belong to the inner (Positive/Negative) bands.
pub fn classify(polarity: f64) -> Mood {
    if polarity > STRONG_BAND {
        Mood::VeryPositive
    } else if polarity > NEUTRAL_BAND {
        Mood::Positive
    } else if polarity >= -NEUTRAL_BAND {
        Mood::Neutral
    } else if polarity >= -STRONG_BAND {
        Mood::Negative
    } else {
        Mood::VeryNegative
    }
}

impl Mood {
    /// Human-readable category label
    pub fn label(&self) -> &'static str {
        match self {
            Mood::VeryPositive => "Very Positive",
            Mood::Positive => "Positive",
            Mood::Neutral => "Neutral",
            Mood::Negative => "Negative",
            Mood::VeryNegative => "Very Negative",
        }
    }

    /// Emoji shown next to the label
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::VeryPositive => "😊",
            Mood::Positive => "🙂",
            Mood::Neutral => "😐",
            Mood::Negative => "🙁",
            Mood::VeryNegative => "😞",
        }
    }

    /// Styling tag for the result display
    pub fn severity(&self) -> Severity {
        match self {
            Mood::VeryPositive | Mood::Positive => Severity::Success,
            Mood::Neutral => Severity::Info,
            Mood::Negative => Severity::Warning,
            Mood::VeryNegative => Severity::Error,
        }
    }
}

impl Severity {
    /// CSS class used by the web renderer
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Summary insight paragraph shown under the result
    pub fn insight(&self) -> &'static str {
        match self {
            Severity::Success => {
                "Your journal shows a strong positive focus. Keep this momentum \
                 going! What steps can you take to build on this positive energy?"
            }
            Severity::Info => {
                "Your emotions are balanced and reflective. This is a great time \
                 to observe your thoughts without judgment or attachment."
            }
            Severity::Warning => {
                "You're experiencing some negative feelings. Identify the source \
                 of the stress and see if you can address it or talk to someone."
            }
            Severity::Error => {
                "It looks like you're going through a challenging or difficult \
                 moment. Prioritize a moment for self-care and reach out to a \
                 trusted person if you need support."
            }
        }
    }
}
