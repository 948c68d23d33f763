// SPDX-License-Identifier: PMPL-1.0-or-later

//! Load-time integrity checks for the content catalog.
//!
//! Typed parsing already guarantees every record has every field. What it
//! cannot see is agreement *between* languages (map keys such as service ids
//! and spoken-language ids) and authoring slips inside a single record
//! (blank strings, malformed links, services without detail blocks).

use super::{Catalog, ContentRecord};
use crate::lang::Lang;
use regex::Regex;
use serde_json::Value;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::OnceLock;

/// A single authoring defect found by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIssue {
    pub lang: Lang,
    /// Dotted path into the record, e.g. `services.details.web`.
    pub path: String,
    pub message: String,
}

impl ContentIssue {
    fn new(lang: Lang, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            lang,
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.lang, self.path, self.message)
    }
}

/// Run every check over the catalog. An empty result means the catalog is
/// safe to serve.
pub fn validate(catalog: &Catalog) -> Vec<ContentIssue> {
    let mut issues = check_parity(catalog);
    for (lang, record) in catalog.records() {
        issues.extend(check_record(lang, record));
    }
    issues
}

/// Compare every record's key set against the English record.
pub fn check_parity(catalog: &Catalog) -> Vec<ContentIssue> {
    let mut issues = Vec::new();
    let reference = record_shape(catalog.get(Lang::En));

    for (lang, record) in catalog.records().filter(|(lang, _)| *lang != Lang::En) {
        let shape = record_shape(record);
        for missing in reference.difference(&shape) {
            issues.push(ContentIssue::new(lang, missing.as_str(), "missing (present in en)"));
        }
        for extra in shape.difference(&reference) {
            issues.push(ContentIssue::new(lang, extra.as_str(), "not present in en"));
        }
    }
    issues
}

fn record_shape(record: &ContentRecord) -> BTreeSet<String> {
    // ContentRecord only holds strings, lists and string-keyed maps, so
    // serialization cannot fail.
    serde_json::to_value(record)
        .map(|value| shape_of(&value))
        .unwrap_or_default()
}

/// Every key path in a JSON value.
///
/// Object keys are joined with `.`; array elements are merged under `[]`, so
/// arrays of different lengths with the same element fields have the same
/// shape.
pub fn shape_of(value: &Value) -> BTreeSet<String> {
    let mut paths = BTreeSet::new();
    collect_paths(value, "", &mut paths);
    paths
}

fn collect_paths(value: &Value, prefix: &str, paths: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                paths.insert(path.clone());
                collect_paths(child, &path, paths);
            }
        }
        Value::Array(items) => {
            let path = format!("{}[]", prefix);
            for item in items {
                collect_paths(item, &path, paths);
            }
        }
        _ => {}
    }
}

fn link_pattern() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| Regex::new(r"^(https?://|mailto:|/)\S+$").unwrap())
}

fn check_record(lang: Lang, record: &ContentRecord) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    if let Ok(value) = serde_json::to_value(record) {
        check_blank_strings(lang, &value, "", &mut issues);
    }

    if record.home.phrases.is_empty() {
        issues.push(ContentIssue::new(lang, "home.phrases", "needs at least one phrase"));
    }
    if record.loading_screen.prompts.is_empty() {
        issues.push(ContentIssue::new(
            lang,
            "loadingScreen.prompts",
            "needs at least one prompt",
        ));
    }

    for (i, project) in record.projects.items.iter().enumerate() {
        let links = [("repoUrl", &project.repo_url), ("demoUrl", &project.demo_url)];
        for (field, link) in links {
            let Some(url) = link else { continue };
            if !link_pattern().is_match(url) {
                issues.push(ContentIssue::new(
                    lang,
                    format!("projects.items[{}].{}", i, field),
                    format!("'{}' is not an absolute URL or site path", url),
                ));
            }
        }
    }

    let mut seen = HashSet::new();
    for service in &record.services.items {
        if !seen.insert(service.id.as_str()) {
            issues.push(ContentIssue::new(
                lang,
                "services.items",
                format!("duplicate service id '{}'", service.id),
            ));
        }
        if !record.services.details.contains_key(&service.id) {
            issues.push(ContentIssue::new(
                lang,
                format!("services.details.{}", service.id),
                "service has no detail block",
            ));
        }
    }
    for id in record.services.details.keys() {
        if !seen.contains(id.as_str()) {
            issues.push(ContentIssue::new(
                lang,
                format!("services.details.{}", id),
                "detail block for an unknown service",
            ));
        }
    }

    issues
}

fn check_blank_strings(lang: Lang, value: &Value, path: &str, issues: &mut Vec<ContentIssue>) {
    match value {
        Value::String(text) if text.trim().is_empty() => {
            issues.push(ContentIssue::new(lang, path, "blank text"));
        }
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                check_blank_strings(lang, child, &child_path, issues);
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                check_blank_strings(lang, item, &format!("{}[{}]", path, i), issues);
            }
        }
        _ => {}
    }
}
