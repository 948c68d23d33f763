// SPDX-License-Identifier: PMPL-1.0-or-later

//! Supported languages and themes.
//!
//! Both sets are closed: adding a language means adding a variant here, an
//! arm to every exhaustive match below, and a content document under
//! `content/`. The catalog loader matches on [`Lang`] exhaustively, so a
//! variant without a document does not compile.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages the portfolio is published in.
///
/// The codes follow the site's URL/selector convention (`jp`, not the
/// ISO 639-1 `ja`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Jp,
    Ko,
}

impl Lang {
    /// Short selector code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Jp => "jp",
            Lang::Ko => "ko",
        }
    }

    /// Parse a selector code. Case-sensitive, surrounding whitespace ignored.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code.trim() {
            "en" => Some(Lang::En),
            "jp" => Some(Lang::Jp),
            "ko" => Some(Lang::Ko),
            _ => None,
        }
    }

    /// All supported languages, in cycle order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Jp, Lang::Ko]
    }

    /// The language after this one in the selector cycle (`en -> jp -> ko -> en`).
    pub fn next(&self) -> Lang {
        match self {
            Lang::En => Lang::Jp,
            Lang::Jp => Lang::Ko,
            Lang::Ko => Lang::En,
        }
    }

    /// Name of the language written in that language, as shown in the switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Jp => "日本語",
            Lang::Ko => "한국어",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s).ok_or_else(|| ParseKeyError::Language(s.to_string()))
    }
}

/// Colour scheme of the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark]
    }

    /// The other theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::parse(s).ok_or_else(|| ParseKeyError::Theme(s.to_string()))
    }
}

/// A selector code outside the supported set.
///
/// Only string entry points (CLI flags, config files) can produce this; the
/// typed store operations take [`Lang`] / [`Theme`] directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseKeyError {
    Language(String),
    Theme(String),
}

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseKeyError::Language(code) => {
                let supported: Vec<&str> = Lang::all().iter().map(Lang::code).collect();
                write!(
                    f,
                    "unsupported language '{}' (expected one of: {})",
                    code,
                    supported.join(", ")
                )
            }
            ParseKeyError::Theme(value) => {
                write!(f, "unsupported theme '{}' (expected light or dark)", value)
            }
        }
    }
}

impl std::error::Error for ParseKeyError {}
