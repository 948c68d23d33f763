// SPDX-License-Identifier: PMPL-1.0-or-later

//! The language-keyed content catalog.
//!
//! Content documents are embedded at compile time as static data, one YAML
//! document per language. Loading parses every document into the same typed
//! [`ContentRecord`] shape and then runs the cross-language validation pass;
//! any failure rejects the whole catalog so the site never renders a partial
//! record.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Create `content/xx.yaml` with every field of [`ContentRecord`]
//! 3. Add the `Lang::Xx` arm to `embedded_source()` and a field to [`Catalog`]

use super::validate::{validate, ContentIssue};
use super::ContentRecord;
use crate::lang::Lang;
use anyhow::{bail, Context, Result};

/// Static `Lang -> ContentRecord` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    en: ContentRecord,
    jp: ContentRecord,
    ko: ContentRecord,
}

/// The document compiled into the binary for `lang`.
pub fn embedded_source(lang: Lang) -> &'static str {
    match lang {
        Lang::En => include_str!("../../content/en.yaml"),
        Lang::Jp => include_str!("../../content/jp.yaml"),
        Lang::Ko => include_str!("../../content/ko.yaml"),
    }
}

impl Catalog {
    /// Load and validate the content compiled into the binary.
    pub fn builtin() -> Result<Catalog> {
        Self::load(|lang| Ok(embedded_source(lang).to_string()))
    }

    /// Parse every language's document from `source` and validate the result.
    ///
    /// Fails on the first document that does not parse, or with every
    /// validation issue if the parsed records are inconsistent.
    pub fn load<F>(source: F) -> Result<Catalog>
    where
        F: FnMut(Lang) -> Result<String>,
    {
        let catalog = Self::parse(source)?;
        let issues = validate(&catalog);
        if !issues.is_empty() {
            for issue in &issues {
                tracing::warn!(%issue, "content validation issue");
            }
            let listed: Vec<String> = issues.iter().map(ContentIssue::to_string).collect();
            bail!(
                "content catalog failed validation ({} issues):\n  {}",
                issues.len(),
                listed.join("\n  ")
            );
        }
        tracing::info!(languages = Lang::all().len(), "content catalog loaded");
        Ok(catalog)
    }

    /// Parse without the validation pass. Used by `folio validate` to report
    /// issues instead of failing on them.
    pub fn parse<F>(mut source: F) -> Result<Catalog>
    where
        F: FnMut(Lang) -> Result<String>,
    {
        let mut parse_one = |lang: Lang| -> Result<ContentRecord> {
            let text = source(lang)?;
            serde_yaml::from_str(&text).with_context(|| format!("parsing {} content", lang))
        };
        Ok(Catalog {
            en: parse_one(Lang::En)?,
            jp: parse_one(Lang::Jp)?,
            ko: parse_one(Lang::Ko)?,
        })
    }

    /// The complete record for `lang`.
    pub fn get(&self, lang: Lang) -> &ContentRecord {
        match lang {
            Lang::En => &self.en,
            Lang::Jp => &self.jp,
            Lang::Ko => &self.ko,
        }
    }

    /// Every record, in [`Lang::all`] order.
    pub fn records(&self) -> impl Iterator<Item = (Lang, &ContentRecord)> {
        Lang::all().iter().map(move |lang| (*lang, self.get(*lang)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().expect("embedded content should validate");
        assert_eq!(catalog.records().count(), 3);
    }

    #[test]
    fn each_language_gets_its_own_record() {
        let catalog = Catalog::builtin().expect("embedded content should validate");
        let en = catalog.get(Lang::En);
        let jp = catalog.get(Lang::Jp);
        let ko = catalog.get(Lang::Ko);
        assert_ne!(en.header.nav.home, jp.header.nav.home);
        assert_ne!(jp.header.nav.home, ko.header.nav.home);
    }

    #[test]
    fn parse_error_names_the_language() {
        let err = Catalog::parse(|lang| {
            if lang == Lang::Ko {
                Ok("header: {}".to_string())
            } else {
                Ok(embedded_source(lang).to_string())
            }
        })
        .expect_err("truncated ko document should fail");
        assert!(format!("{:#}", err).contains("parsing ko content"));
    }

    #[test]
    fn source_errors_propagate() {
        let result = Catalog::parse(|_| anyhow::bail!("disk on fire"));
        assert!(result.is_err());
    }
}
