// SPDX-License-Identifier: PMPL-1.0-or-later

//! Colour tokens per theme.

use crate::lang::Theme;
use serde::Serialize;

/// The palette a theme resolves to. Values are CSS hex colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeTokens {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted_text: &'static str,
    pub accent: &'static str,
    pub border: &'static str,
}

const LIGHT: ThemeTokens = ThemeTokens {
    background: "#f8fafc",
    surface: "#ffffff",
    text: "#0f172a",
    muted_text: "#475569",
    accent: "#6366f1",
    border: "#e2e8f0",
};

const DARK: ThemeTokens = ThemeTokens {
    background: "#0b1120",
    surface: "#111827",
    text: "#f1f5f9",
    muted_text: "#94a3b8",
    accent: "#818cf8",
    border: "#1f2937",
};

impl Theme {
    pub fn tokens(&self) -> &'static ThemeTokens {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

impl ThemeTokens {
    /// `(name, value)` pairs in declaration order, for printing.
    pub fn entries(&self) -> [(&'static str, &'static str); 6] {
        [
            ("background", self.background),
            ("surface", self.surface),
            ("text", self.text),
            ("muted_text", self.muted_text),
            ("accent", self.accent),
            ("border", self.border),
        ]
    }
}
