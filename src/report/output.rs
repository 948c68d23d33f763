// SPDX-License-Identifier: PMPL-1.0-or-later

//! Machine-readable output formats

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Coloured, human-readable
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Serialize `value` for the structured formats. `Text` falls back to
    /// YAML; callers with a dedicated text rendering branch before this.
    pub fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml | OutputFormat::Text => Ok(serde_yaml::to_string(value)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{Lang, Theme};
    use crate::store::LocaleThemeState;

    #[test]
    fn state_serializes_with_selector_codes() {
        let state = LocaleThemeState {
            language: Lang::Jp,
            theme: Theme::Dark,
        };
        let json = OutputFormat::Json.serialize(&state).expect("serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["language"], "jp");
        assert_eq!(value["theme"], "dark");

        let yaml = OutputFormat::Yaml.serialize(&state).expect("serializes");
        assert!(yaml.contains("language: jp"));
    }
}
