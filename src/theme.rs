// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! UI theme state and display palettes

use serde::{Deserialize, Serialize};

/// UI theme mode
///
/// One flag per server session: created at startup from the config
/// default, flipped by the toggle action, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Fixed display colors for one theme mode
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub input_background: &'static str,
    pub footer_background: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_shadow: &'static str,
}

impl Theme {
    /// Check if dark mode is active
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Flip between light and dark
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    /// Caption for the toggle button (names the mode it switches to)
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark Mode",
            Theme::Dark => "☀️ Light Mode",
        }
    }

    /// Display palette for this mode
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: "#ffffff",
                text: "#1a1a1a",
                input_background: "#f8f9fa",
                footer_background: "#f8f9fa",
                border: "#ced4da",
                accent: "#007bff",
                accent_shadow: "rgba(0, 123, 255, 0.3)",
            },
            Theme::Dark => Palette {
                background: "#1e1e1e",
                text: "#ffffff",
                input_background: "#2a2a2a",
                footer_background: "#333333",
                border: "#444444",
                // Lighter blue for dark backgrounds
                accent: "#3a8ee6",
                accent_shadow: "rgba(58, 142, 230, 0.5)",
            },
        }
    }
}
