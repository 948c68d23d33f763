// SPDX-License-Identifier: PMPL-1.0-or-later

//! folio: inspect and validate the portfolio's localized content
//!
//! Loads the content catalog, drives a locale/theme store and prints what the
//! site would render for a given language, theme and project filter.

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio::config::Config;
use folio::content::Section;
use folio::report::{OutputFormat, ReportFormatter};
use folio::{
    category_counts, project_cards, CategoryCounts, CategoryFilter, Lang, LocaleThemeState,
    ProjectCard, Store, Theme,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Inspect and validate the portfolio's localized content")]
#[command(long_about = None)]
struct Cli {
    /// Config file (default: ./folio.yaml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check every language's content for parse, parity and integrity errors
    Validate,

    /// Print a language's content record, or one section of it
    Show {
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,

        #[arg(short, long, value_enum)]
        section: Option<Section>,
    },

    /// List projects with category counts
    Projects {
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,

        /// Category filter: all, web or ai (aliases: ml, ai/ml)
        #[arg(short, long, value_parser = parse_category, default_value = "all")]
        category: CategoryFilter,
    },

    /// Print the colour tokens of a theme
    Theme {
        #[arg(short, long, value_enum)]
        theme: Option<ThemeArg>,
    },

    /// Apply language/theme operations to a fresh session and print the result
    State {
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,

        #[arg(short, long, value_enum)]
        theme: Option<ThemeArg>,

        /// Advance the language this many times (en -> jp -> ko -> en)
        #[arg(long, default_value = "0")]
        cycle: u32,

        /// Flip the theme once after the other operations
        #[arg(long)]
        toggle_theme: bool,
    },
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    En,
    Jp,
    Ko,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::En => Lang::En,
            LangArg::Jp => Lang::Jp,
            LangArg::Ko => Lang::Ko,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

fn parse_category(value: &str) -> Result<CategoryFilter, String> {
    CategoryFilter::parse(value)
        .ok_or_else(|| format!("unknown category '{}' (expected all, web or ai)", value))
}

#[derive(Serialize)]
struct ProjectListing<'a> {
    language: Lang,
    filter: &'static str,
    counts: CategoryCounts,
    projects: Vec<ProjectCard<'a>>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.format);
    let formatter = ReportFormatter::new();

    match cli.command {
        Commands::Validate => {
            folio::diagnostics::run_content_diagnostics(|lang| config.read_content(lang))?;
        }

        Commands::Show { lang, section } => {
            let catalog = config.catalog()?;
            let lang = lang.map(Lang::from).unwrap_or(config.language);
            let record = catalog.get(lang);
            let output = match section {
                Some(section) => format.serialize(&record.section_json(section)?)?,
                None => format.serialize(record)?,
            };
            print!("{}", output);
            if format == OutputFormat::Json {
                println!();
            }
        }

        Commands::Projects {
            lang,
            category: filter,
        } => {
            let catalog = config.catalog()?;
            let lang = lang.map(Lang::from).unwrap_or(config.language);
            let content = catalog.get(lang);
            let entries = &content.projects.items;
            let counts = category_counts(entries);
            let cards = project_cards(entries, filter);

            if format == OutputFormat::Text {
                formatter.print_projects(content, filter, &counts, &cards);
            } else {
                let listing = ProjectListing {
                    language: lang,
                    filter: filter.as_str(),
                    counts,
                    projects: cards,
                };
                println!("{}", format.serialize(&listing)?);
            }
        }

        Commands::Theme { theme } => {
            let theme = theme.map(Theme::from).unwrap_or(config.theme);
            if format == OutputFormat::Text {
                formatter.print_tokens(theme);
            } else {
                println!("{}", format.serialize(theme.tokens())?);
            }
        }

        Commands::State {
            lang,
            theme,
            cycle,
            toggle_theme,
        } => {
            let initial = LocaleThemeState {
                language: config.language,
                theme: config.theme,
            };
            let mut store = Store::with_state(config.catalog()?, initial);
            if let Some(lang) = lang {
                store.set_language(lang.into());
            }
            if let Some(theme) = theme {
                store.set_theme(theme.into());
            }
            for _ in 0..cycle {
                store.cycle_language();
            }
            if toggle_theme {
                store.toggle_theme();
            }

            if format == OutputFormat::Text {
                formatter.print_view(&store.view());
            } else {
                println!("{}", format.serialize(&store.state())?);
            }
        }
    }

    Ok(())
}
