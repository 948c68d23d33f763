// SPDX-License-Identifier: PMPL-1.0-or-later

//! Startup configuration for the `folio` command.
//!
//! Read once from `folio.yaml` (or `--config <path>`); command-line flags
//! override it. This only chooses the starting selection and output style;
//! the session state itself is never written back.

use crate::content::{embedded_source, Catalog};
use crate::lang::{Lang, Theme};
use crate::report::OutputFormat;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "folio.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub language: Lang,
    pub theme: Theme,
    pub format: OutputFormat,
    /// Directory with `en.yaml`, `jp.yaml` and `ko.yaml` replacing the
    /// embedded content.
    pub content_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Lang::En,
            theme: Theme::Light,
            format: OutputFormat::Text,
            content_dir: None,
        }
    }
}

impl Config {
    /// Load `path` if given (must exist), else `folio.yaml` in the working
    /// directory if present, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config = Self::parse(&text).with_context(|| format!("parsing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Config> {
        // An empty document deserializes as null, which serde_yaml will not
        // turn into a struct.
        if text.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Raw content document for `lang`: `<content_dir>/<code>.yaml` when a
    /// content directory is configured, the embedded document otherwise.
    pub fn read_content(&self, lang: Lang) -> Result<String> {
        match &self.content_dir {
            Some(dir) => {
                let path = dir.join(format!("{}.yaml", lang.code()));
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
            }
            None => Ok(embedded_source(lang).to_string()),
        }
    }

    /// The validated catalog this configuration points at.
    pub fn catalog(&self) -> Result<Catalog> {
        Catalog::load(|lang| self.read_content(lang))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::parse("").expect("parses"), Config::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = Config::parse("language: ko\n").expect("parses");
        assert_eq!(config.language, Lang::Ko);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn unknown_language_is_rejected() {
        assert!(Config::parse("language: fr\n").is_err());
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(Config::parse("persist: true\n").is_err());
    }

    #[test]
    fn reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "theme: dark\nformat: json").expect("write");
        let config = Config::load(Some(file.path())).expect("loads");
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn content_dir_overrides_embedded_documents() {
        let dir = tempfile::tempdir().expect("tempdir");
        for lang in Lang::all() {
            let text = embedded_source(*lang).replace("© ", "(c) ");
            std::fs::write(dir.path().join(format!("{}.yaml", lang.code())), text)
                .expect("write");
        }
        let config = Config {
            content_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };
        let catalog = config.catalog().expect("copied content validates");
        assert!(catalog.get(Lang::En).footer.copyright.starts_with("(c) "));
    }

    #[test]
    fn content_dir_missing_a_language_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("en.yaml"), embedded_source(Lang::En)).expect("write");
        let config = Config {
            content_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };
        let err = config.catalog().expect_err("jp.yaml is missing");
        assert!(format!("{:#}", err).contains("jp.yaml"));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(Config::load(Some(&dir.path().join("nope.yaml"))).is_err());
    }
}
