// SPDX-License-Identifier: PMPL-1.0-or-later

//! Project categories, counts, filtering and card transformation.
//!
//! Classification is a single pure function over a [`ProjectEntry`]: an
//! explicit `category` tag wins, otherwise the tech list is matched against
//! the keyword rules below in order, otherwise the project is `web`. Every
//! entry therefore lands in exactly one category.

use crate::content::{ContentRecord, ProjectEntry};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Closed set of project categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    #[serde(alias = "ml", alias = "ai/ml")]
    Ai,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Ai => "ai",
        }
    }

    /// Every concrete category, in filter-bar order.
    pub fn all() -> &'static [Category] {
        &[Category::Web, Category::Ai]
    }

    /// Localized filter label.
    pub fn label<'a>(&self, content: &'a ContentRecord) -> &'a str {
        match self {
            Category::Web => &content.projects.filters.web,
            Category::Ai => &content.projects.filters.ai,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filter-bar selection: everything, or one concrete category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(CategoryFilter::All),
            "web" => Some(CategoryFilter::Only(Category::Web)),
            "ai" | "ml" | "ai/ml" => Some(CategoryFilter::Only(Category::Ai)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn matches(&self, entry: &ProjectEntry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => resolve_category(entry) == *category,
        }
    }

    /// Localized filter label.
    pub fn label<'a>(&self, content: &'a ContentRecord) -> &'a str {
        match self {
            CategoryFilter::All => &content.projects.filters.all,
            CategoryFilter::Only(category) => category.label(content),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Keyword rules, evaluated in order. Each keyword is a case-insensitive
/// substring of a tech item, so `Database` and `HTML` both hit `ai`; entries
/// that belong elsewhere carry an explicit tag.
const KEYWORD_RULES: &[(Category, &str)] = &[(
    Category::Ai,
    r"(?i)tensorflow|pytorch|scikit|pandas|numpy|machine learning|ml|data",
)];

fn keyword_rules() -> &'static [(Category, Regex)] {
    static RULES: OnceLock<Vec<(Category, Regex)>> = OnceLock::new();
    RULES.get_or_init(|| {
        KEYWORD_RULES
            .iter()
            .map(|(category, pattern)| (*category, Regex::new(pattern).unwrap()))
            .collect()
    })
}

/// The single category `entry` belongs to.
pub fn resolve_category(entry: &ProjectEntry) -> Category {
    if let Some(category) = entry.category {
        return category;
    }
    for (category, re) in keyword_rules() {
        if entry.tech.iter().any(|tech| re.is_match(tech)) {
            return *category;
        }
    }
    Category::Web
}

/// Per-category counts plus the synthetic `all` total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub all: usize,
    #[serde(flatten)]
    pub by_category: BTreeMap<Category, usize>,
}

impl CategoryCounts {
    pub fn get(&self, filter: CategoryFilter) -> usize {
        match filter {
            CategoryFilter::All => self.all,
            CategoryFilter::Only(category) => {
                self.by_category.get(&category).copied().unwrap_or(0)
            }
        }
    }
}

/// Count entries per category. Every concrete category is present, zero
/// included.
pub fn category_counts(entries: &[ProjectEntry]) -> CategoryCounts {
    let mut by_category: BTreeMap<Category, usize> =
        Category::all().iter().map(|c| (*c, 0)).collect();
    for entry in entries {
        *by_category.entry(resolve_category(entry)).or_insert(0) += 1;
    }
    CategoryCounts {
        all: entries.len(),
        by_category,
    }
}

/// Entries matching `filter`, in their original order.
pub fn filter_by_category(entries: &[ProjectEntry], filter: CategoryFilter) -> Vec<&ProjectEntry> {
    entries.iter().filter(|entry| filter.matches(entry)).collect()
}

/// Display-ready view of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub category: Category,
    pub tech: &'a [String],
    pub repo_url: Option<&'a str>,
    pub demo_url: Option<&'a str>,
}

impl<'a> ProjectCard<'a> {
    pub fn from_entry(entry: &'a ProjectEntry) -> Self {
        Self {
            name: &entry.name,
            description: &entry.description,
            category: resolve_category(entry),
            tech: &entry.tech,
            repo_url: entry.repo_url.as_deref(),
            demo_url: entry.demo_url.as_deref(),
        }
    }

    pub fn has_links(&self) -> bool {
        self.repo_url.is_some() || self.demo_url.is_some()
    }
}

/// Filter, then transform into cards.
pub fn project_cards(entries: &[ProjectEntry], filter: CategoryFilter) -> Vec<ProjectCard<'_>> {
    filter_by_category(entries, filter)
        .into_iter()
        .map(ProjectCard::from_entry)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ProjectEntry> {
        vec![
            ProjectEntry::new("A", &["React"]),
            ProjectEntry::new("B", &["TensorFlow"]),
        ]
    }

    #[test]
    fn example_counts_and_filter() {
        let entries = sample();
        let counts = category_counts(&entries);
        assert_eq!(counts.get(CategoryFilter::All), 2);
        assert_eq!(counts.get(Category::Web.into()), 1);
        assert_eq!(counts.get(Category::Ai.into()), 1);

        let ai = filter_by_category(&entries, Category::Ai.into());
        assert_eq!(ai.len(), 1);
        assert_eq!(ai[0].name, "B");
    }

    #[test]
    fn explicit_tag_beats_keywords() {
        let entry = ProjectEntry::new("C", &["PyTorch"]).with_category(Category::Web);
        assert_eq!(resolve_category(&entry), Category::Web);
    }

    #[test]
    fn keywords_are_case_insensitive_substrings() {
        assert_eq!(
            resolve_category(&ProjectEntry::new("x", &["scikit-learn"])),
            Category::Ai
        );
        assert_eq!(
            resolve_category(&ProjectEntry::new("x", &["Machine Learning"])),
            Category::Ai
        );
        assert_eq!(resolve_category(&ProjectEntry::new("x", &["ML"])), Category::Ai);
        assert_eq!(
            resolve_category(&ProjectEntry::new("x", &["Data Visualization"])),
            Category::Ai
        );
    }

    #[test]
    fn short_keywords_match_inside_longer_names() {
        for tech in ["Database", "MLflow", "DataFrames", "HTML"] {
            assert_eq!(
                resolve_category(&ProjectEntry::new("x", &[tech])),
                Category::Ai,
                "{tech}"
            );
        }
    }

    #[test]
    fn web_tag_overrides_html_keyword_hit() {
        let entry = ProjectEntry::new("x", &["HTML", "CSS"]).with_category(Category::Web);
        assert_eq!(resolve_category(&entry), Category::Web);
    }

    #[test]
    fn keyword_rules_compile() {
        assert_eq!(keyword_rules().len(), KEYWORD_RULES.len());
    }

    #[test]
    fn counts_serialize_as_flat_mapping() {
        let json = serde_json::to_string(&category_counts(&sample())).unwrap();
        assert_eq!(json, r#"{"all":2,"web":1,"ai":1}"#);
    }

    #[test]
    fn no_tech_defaults_to_web() {
        assert_eq!(resolve_category(&ProjectEntry::new("x", &[])), Category::Web);
    }

    #[test]
    fn empty_list_counts_zero_everywhere() {
        let counts = category_counts(&[]);
        assert_eq!(counts.all, 0);
        for category in Category::all() {
            assert_eq!(counts.get((*category).into()), 0);
        }
        assert!(filter_by_category(&[], CategoryFilter::All).is_empty());
    }

    #[test]
    fn filter_is_stable() {
        let entries = vec![
            ProjectEntry::new("1", &["Vue"]),
            ProjectEntry::new("2", &["NumPy"]),
            ProjectEntry::new("3", &["Next.js"]),
            ProjectEntry::new("4", &["Pandas"]),
        ];
        let web: Vec<&str> = filter_by_category(&entries, Category::Web.into())
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(web, vec!["1", "3"]);
    }

    #[test]
    fn filter_parse_aliases() {
        assert_eq!(CategoryFilter::parse("ALL"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("ai/ml"),
            Some(CategoryFilter::Only(Category::Ai))
        );
        assert_eq!(CategoryFilter::parse("mobile"), None);
    }

    #[test]
    fn cards_carry_resolved_category_and_links() {
        let mut entry = ProjectEntry::new("B", &["TensorFlow"]);
        entry.demo_url = Some("https://demo.example".to_string());
        let entries = vec![entry];
        let cards = project_cards(&entries, CategoryFilter::All);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].category, Category::Ai);
        assert!(cards[0].has_links());
        assert_eq!(cards[0].repo_url, None);

        let bare = vec![ProjectEntry::new("C", &["Vue"])];
        assert!(!project_cards(&bare, CategoryFilter::All)[0].has_links());
    }
}
