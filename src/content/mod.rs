// SPDX-License-Identifier: PMPL-1.0-or-later

//! Typed content records for the portfolio.
//!
//! One [`ContentRecord`] exists per [`Lang`](crate::lang::Lang). The records
//! are authored as YAML documents under `content/` and embedded at compile
//! time; [`Catalog`] parses and validates them once at startup.
//!
//! Every struct here rejects unknown fields and requires every field, so a
//! document that parses is already complete. The remaining cross-language
//! checks (map keys, service ids, non-empty text) live in [`validate`].

mod catalog;
pub mod validate;

pub use catalog::{embedded_source, Catalog};
pub use validate::{shape_of, validate, ContentIssue};

use crate::projects::Category;
use anyhow::Result;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// All user-facing text and structured content for one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContentRecord {
    pub header: HeaderContent,
    pub home: HomeContent,
    pub skills: SkillsContent,
    pub projects: ProjectsContent,
    pub services: ServicesContent,
    pub contact: ContactContent,
    pub loading_screen: LoadingScreenContent,
    pub footer: FooterContent,
}

/// Top-level sections of a [`ContentRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Section {
    Header,
    Home,
    Skills,
    Projects,
    Services,
    Contact,
    LoadingScreen,
    Footer,
}

impl ContentRecord {
    /// One section as a JSON value, for printing.
    pub fn section_json(&self, section: Section) -> Result<serde_json::Value> {
        let value = match section {
            Section::Header => serde_json::to_value(&self.header)?,
            Section::Home => serde_json::to_value(&self.home)?,
            Section::Skills => serde_json::to_value(&self.skills)?,
            Section::Projects => serde_json::to_value(&self.projects)?,
            Section::Services => serde_json::to_value(&self.services)?,
            Section::Contact => serde_json::to_value(&self.contact)?,
            Section::LoadingScreen => serde_json::to_value(&self.loading_screen)?,
            Section::Footer => serde_json::to_value(&self.footer)?,
        };
        Ok(value)
    }

    /// Detail block for a service id, if one was authored.
    pub fn service_detail(&self, id: &str) -> Option<&ServiceDetail> {
        self.services.details.get(id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeaderContent {
    pub nav: NavLabels,
    pub language_label: String,
    pub theme_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NavLabels {
    pub home: String,
    pub skills: String,
    pub projects: String,
    pub services: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HomeContent {
    pub greeting: String,
    pub name: String,
    pub role: String,
    pub intro: String,
    /// Rotating phrases shown by the typewriter effect.
    pub phrases: Vec<String>,
    pub cta: CtaLabels,
    pub about: AboutModal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CtaLabels {
    pub projects: String,
    pub contact: String,
    pub about: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AboutModal {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub close: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SkillsContent {
    pub title: String,
    pub description: String,
    /// Spoken-language proficiency, keyed by a stable id (`english`, ...).
    pub languages: BTreeMap<String, SpokenLanguage>,
    pub domains: SkillDomains,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpokenLanguage {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SkillDomains {
    pub frontend: SkillDomain,
    pub backend: SkillDomain,
    pub ai_ml: SkillDomain,
    pub tools: SkillDomain,
}

impl SkillDomains {
    /// Domains in display order.
    pub fn iter(&self) -> impl Iterator<Item = &SkillDomain> {
        [&self.frontend, &self.backend, &self.ai_ml, &self.tools].into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SkillDomain {
    pub title: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectsContent {
    pub title: String,
    pub description: String,
    pub filters: FilterLabels,
    /// Shown when a filter matches nothing.
    pub empty: String,
    pub view_code: String,
    pub live_demo: String,
    /// Shown in place of a link that is not available yet.
    pub unavailable: String,
    pub items: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterLabels {
    pub all: String,
    pub web: String,
    pub ai: String,
}

/// One portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_link")]
    pub repo_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_link")]
    pub demo_url: Option<String>,
    /// Explicit category tag; when absent the category is derived from `tech`.
    #[serde(default)]
    pub category: Option<Category>,
}

impl ProjectEntry {
    /// Entry with no links and no explicit category.
    pub fn new(name: impl Into<String>, tech: &[&str]) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            tech: tech.iter().map(|t| t.to_string()).collect(),
            repo_url: None,
            demo_url: None,
            category: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}

/// One offered service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceEntry {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServicesContent {
    pub title: String,
    pub description: String,
    pub items: Vec<ServiceEntry>,
    /// Expanded detail per service, keyed by [`ServiceEntry::id`].
    pub details: BTreeMap<String, ServiceDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceDetail {
    pub summary: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactContent {
    pub title: String,
    pub description: String,
    pub email_label: String,
    pub email: String,
    pub location_label: String,
    pub location: String,
    pub form: ContactForm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub send: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoadingScreenContent {
    pub prompts: Vec<String>,
    pub ready: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FooterContent {
    pub copyright: String,
    pub built_with: String,
    pub back_to_top: String,
}

/// Collapse the "not available yet" spellings (`""`, `"#"`) into `None`.
pub fn normalize_link(raw: Option<String>) -> Option<String> {
    raw.and_then(|url| {
        let trimmed = url.trim();
        if trimmed.is_empty() || trimmed == "#" {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn deserialize_link<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_link(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_links_become_none() {
        assert_eq!(normalize_link(Some(String::new())), None);
        assert_eq!(normalize_link(Some("#".to_string())), None);
        assert_eq!(normalize_link(Some("  # ".to_string())), None);
        assert_eq!(normalize_link(None), None);
        assert_eq!(
            normalize_link(Some("https://example.com".to_string())),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn project_entry_normalizes_links_on_parse() {
        let yaml = "name: A\ndescription: d\ntech: [React]\nrepoUrl: '#'\ndemoUrl: ''\n";
        let entry: ProjectEntry = serde_yaml::from_str(yaml).expect("should parse");
        assert_eq!(entry.repo_url, None);
        assert_eq!(entry.demo_url, None);
        assert_eq!(entry.category, None);
    }

    #[test]
    fn project_entry_reads_explicit_category() {
        let yaml = "name: A\ndescription: d\ntech: []\ncategory: ai\n";
        let entry: ProjectEntry = serde_yaml::from_str(yaml).expect("should parse");
        assert_eq!(entry.category, Some(Category::Ai));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let yaml = "name: A\ndescription: d\ntech: []\nstars: 4\n";
        assert!(serde_yaml::from_str::<ProjectEntry>(yaml).is_err());
    }
}
