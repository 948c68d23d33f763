// SPDX-License-Identifier: PMPL-1.0-or-later

//! `folio validate`: check the content catalog and print one line per check.

use crate::content::{validate, Catalog, ContentIssue};
use crate::lang::Lang;
use anyhow::{anyhow, Result};
use colored::*;

/// Parse and validate the catalog from `source`, print the results, and fail
/// if any check reported an error.
pub fn run_content_diagnostics<F>(source: F) -> Result<()>
where
    F: FnMut(Lang) -> Result<String>,
{
    println!("folio content diagnostics");

    let checks = collect(source);

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("content diagnostics reported issues"))
    } else {
        Ok(())
    }
}

fn collect<F>(source: F) -> Vec<Diagnostic>
where
    F: FnMut(Lang) -> Result<String>,
{
    let mut checks = vec![Diagnostic::ok(
        "version".to_string(),
        format!("folio {}", env!("CARGO_PKG_VERSION")),
    )];

    let catalog = match Catalog::parse(source) {
        Ok(catalog) => catalog,
        Err(err) => {
            checks.push(Diagnostic::error("parse".to_string(), format!("{:#}", err)));
            return checks;
        }
    };
    checks.push(Diagnostic::ok(
        "parse".to_string(),
        format!("{} languages", Lang::all().len()),
    ));

    let issues = validate(&catalog);
    for lang in Lang::all() {
        let label = format!("content [{}]", lang);
        let own: Vec<&ContentIssue> = issues.iter().filter(|i| i.lang == *lang).collect();
        if own.is_empty() {
            let record = catalog.get(*lang);
            checks.push(Diagnostic::ok(
                label,
                format!(
                    "{} projects, {} services",
                    record.projects.items.len(),
                    record.services.items.len()
                ),
            ));
        } else {
            for issue in own {
                checks.push(Diagnostic::error(
                    label.clone(),
                    format!("{}: {}", issue.path, issue.message),
                ));
            }
        }
    }

    checks
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Ok,
    Error,
}

struct Diagnostic {
    label: String,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn ok(label: String, detail: String) -> Self {
        Self {
            label,
            level: Level::Ok,
            detail,
        }
    }

    fn error(label: String, detail: String) -> Self {
        Self {
            label,
            level: Level::Error,
            detail,
        }
    }

    fn print(&self) {
        let tag = match self.level {
            Level::Ok => "OK".green(),
            Level::Error => "ERR".red().bold(),
        };
        println!("  [{}] {:14} {}", tag, self.label, self.detail);
    }
}
