// SPDX-License-Identifier: PMPL-1.0-or-later

//! folio — content and state core of a trilingual portfolio site.
//!
//! The rendering layer is an external consumer. It reads a [`DerivedView`]
//! from the [`Store`] and calls the store's mutators in response to user
//! input; everything it displays comes from the [`Catalog`].
//!
//! PIECES:
//! 1. **Content**: typed per-language records embedded at compile time and
//!    validated once at load.
//! 2. **Store**: the single owner of the language/theme selection, with
//!    synchronous change notification.
//! 3. **Projects**: category resolution, counts, filtering and cards.
//! 4. **Theme / UI**: colour tokens, mobile menu and typewriter state.

pub mod config;
pub mod content;
pub mod diagnostics;
pub mod lang;
pub mod projects;
pub mod report;
pub mod store;
pub mod theme;
pub mod ui;

pub use content::{Catalog, ContentRecord, ProjectEntry, ServiceEntry};
pub use lang::{Lang, ParseKeyError, Theme};
pub use projects::{
    category_counts, filter_by_category, project_cards, resolve_category, Category,
    CategoryCounts, CategoryFilter, ProjectCard,
};
pub use store::{DerivedView, LocaleThemeState, Store, SubscriptionId};
