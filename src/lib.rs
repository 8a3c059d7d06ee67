// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Euthymia: Journal Mood Tracker
//!
//! A single-page journal application that scores free-text entries with a
//! lexicon sentiment analyzer and maps the polarity to a mood category.

pub mod config;
pub mod error;
pub mod mood;
pub mod sentiment;
pub mod theme;
pub mod web;

pub use config::AppConfig;
pub use error::{EuthymiaError, Result};
