// SPDX-License-Identifier: PMPL-1.0-or-later

//! Session state: the selected language and theme.
//!
//! [`Store`] is the only owner of [`LocaleThemeState`]. Consumers read
//! snapshots through [`Store::state`] or the recomputed [`DerivedView`], and
//! change state only through the named mutators. Subscribers are called
//! synchronously, in subscription order, after every mutation that changed
//! something; a setter that writes the current value notifies nobody.
//!
//! Nothing here is persisted. A new `Store` always starts from
//! [`LocaleThemeState::default`] unless the caller says otherwise.

use crate::content::{Catalog, ContentRecord};
use crate::lang::{Lang, ParseKeyError, Theme};
use serde::Serialize;

/// Current language and theme selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LocaleThemeState {
    pub language: Lang,
    pub theme: Theme,
}

/// State plus the content record it resolves to. Computed on every read.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DerivedView<'a> {
    pub language: Lang,
    pub theme: Theme,
    pub content: &'a ContentRecord,
}

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&DerivedView<'_>)>;

pub struct Store {
    catalog: Catalog,
    state: LocaleThemeState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl Store {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_state(catalog, LocaleThemeState::default())
    }

    /// Start from a caller-chosen selection (e.g. CLI flags).
    pub fn with_state(catalog: Catalog, state: LocaleThemeState) -> Self {
        Self {
            catalog,
            state,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> LocaleThemeState {
        self.state
    }

    pub fn language(&self) -> Lang {
        self.state.language
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Content for any language, independent of the current selection.
    pub fn content(&self, lang: Lang) -> &ContentRecord {
        self.catalog.get(lang)
    }

    pub fn view(&self) -> DerivedView<'_> {
        DerivedView {
            language: self.state.language,
            theme: self.state.theme,
            content: self.catalog.get(self.state.language),
        }
    }

    pub fn set_language(&mut self, lang: Lang) {
        if self.state.language == lang {
            return;
        }
        tracing::debug!(from = %self.state.language, to = %lang, "language changed");
        self.state.language = lang;
        self.notify();
    }

    /// String entry point for [`Store::set_language`]. Unknown codes are
    /// rejected and leave the state untouched.
    pub fn set_language_code(&mut self, code: &str) -> Result<(), ParseKeyError> {
        let lang = code.parse::<Lang>()?;
        self.set_language(lang);
        Ok(())
    }

    /// Advance `en -> jp -> ko -> en`.
    pub fn cycle_language(&mut self) -> Lang {
        let next = self.state.language.next();
        self.set_language(next);
        next
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.state.theme == theme {
            return;
        }
        tracing::debug!(from = %self.state.theme, to = %theme, "theme changed");
        self.state.theme = theme;
        self.notify();
    }

    /// String entry point for [`Store::set_theme`]. Same rejection policy as
    /// [`Store::set_language_code`].
    pub fn set_theme_code(&mut self, value: &str) -> Result<(), ParseKeyError> {
        let theme = value.parse::<Theme>()?;
        self.set_theme(theme);
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.state.theme.toggled();
        self.set_theme(next);
        next
    }

    /// Register a callback run after every effective mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&DerivedView<'_>) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self) {
        let view = DerivedView {
            language: self.state.language,
            theme: self.state.theme,
            content: self.catalog.get(self.state.language),
        };
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&view);
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
