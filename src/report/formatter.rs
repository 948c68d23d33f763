// SPDX-License-Identifier: PMPL-1.0-or-later

//! Coloured text rendering

use crate::content::ContentRecord;
use crate::lang::Theme;
use crate::projects::{Category, CategoryCounts, CategoryFilter, ProjectCard};
use crate::store::DerivedView;
use crate::ui::NavTarget;
use colored::*;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_view(&self, view: &DerivedView<'_>) {
        let content = view.content;
        println!(
            "\n{}",
            format!("=== {} ({}) ===", content.home.name, view.language.native_name())
                .bold()
                .cyan()
        );
        println!("  Language: {}", view.language.to_string().bold());
        println!("  Theme:    {}", view.theme.to_string().bold());
        println!();

        let labels: Vec<&str> = NavTarget::all().iter().map(|t| t.label(content)).collect();
        println!("  {}", labels.join(" | ").dimmed());
        println!();
        println!("  {} {}", content.home.greeting, content.home.name.bold());
        println!("  {}", content.home.role.yellow());
        if let Some(first) = content.home.phrases.first() {
            println!("  > {}", first.italic());
        }
    }

    pub fn print_projects(
        &self,
        content: &ContentRecord,
        filter: CategoryFilter,
        counts: &CategoryCounts,
        cards: &[ProjectCard<'_>],
    ) {
        println!("\n{}", content.projects.title.bold().yellow());

        let mut bar = vec![self.filter_chip(content, CategoryFilter::All, filter, counts)];
        for category in Category::all() {
            bar.push(self.filter_chip(content, (*category).into(), filter, counts));
        }
        println!("  {}", bar.join("  "));
        println!();

        if cards.is_empty() {
            println!("  {}", content.projects.empty.dimmed());
            return;
        }

        for (i, card) in cards.iter().enumerate() {
            let tag = match card.category {
                Category::Web => card.category.label(content).blue(),
                Category::Ai => card.category.label(content).magenta(),
            };
            println!("  {}. {} [{}]", i + 1, card.name.bold(), tag);
            println!("     {}", card.description);
            println!("     {}", card.tech.join(", ").dimmed());
            if !card.has_links() {
                println!("     {}", content.projects.unavailable.dimmed());
                continue;
            }
            println!(
                "     {}: {}",
                content.projects.view_code,
                self.link(content, card.repo_url)
            );
            println!(
                "     {}: {}",
                content.projects.live_demo,
                self.link(content, card.demo_url)
            );
        }
    }

    pub fn print_tokens(&self, theme: Theme) {
        println!("\n{}", format!("{} theme", theme).bold().yellow());
        for (name, value) in theme.tokens().entries() {
            println!("  {:12} {}", name, value);
        }
    }

    fn filter_chip(
        &self,
        content: &ContentRecord,
        chip: CategoryFilter,
        selected: CategoryFilter,
        counts: &CategoryCounts,
    ) -> String {
        let text = format!("{} ({})", chip.label(content), counts.get(chip));
        if chip == selected {
            format!("[{}]", text).green().bold().to_string()
        } else {
            text
        }
    }

    fn link(&self, content: &ContentRecord, url: Option<&str>) -> String {
        match url {
            Some(url) => url.underline().to_string(),
            None => content.projects.unavailable.dimmed().to_string(),
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
