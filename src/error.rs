// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Error types for Euthymia

use thiserror::Error;

/// Result type alias for Euthymia operations
pub type Result<T> = std::result::Result<T, EuthymiaError>;

/// Euthymia error types
#[derive(Error, Debug)]
pub enum EuthymiaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("The journal entry is empty")]
    EmptyEntry,

    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("Server error: {0}")]
    Server(String),
}
