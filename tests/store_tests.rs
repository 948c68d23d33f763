// SPDX-License-Identifier: PMPL-1.0-or-later

//! Integration tests for the locale/theme store

use folio::ui::Typewriter;
use folio::{Catalog, Lang, LocaleThemeState, Store, Theme};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

fn store() -> Store {
    Store::new(Catalog::builtin().expect("embedded content should validate"))
}

fn any_lang() -> impl Strategy<Value = Lang> {
    prop::sample::select(Lang::all().to_vec())
}

fn any_theme() -> impl Strategy<Value = Theme> {
    prop::sample::select(Theme::all().to_vec())
}

#[test]
fn set_language_then_toggle_theme() {
    let mut store = store();
    assert_eq!(
        store.state(),
        LocaleThemeState {
            language: Lang::En,
            theme: Theme::Light
        }
    );

    store.set_language(Lang::Jp);
    // The view switches before the theme call happens.
    let view = store.view();
    assert_eq!(view.language, Lang::Jp);
    assert_eq!(view.theme, Theme::Light);
    assert_eq!(view.content, store.content(Lang::Jp));

    store.toggle_theme();
    assert_eq!(
        store.state(),
        LocaleThemeState {
            language: Lang::Jp,
            theme: Theme::Dark
        }
    );
}

#[test]
fn subscriber_receives_resolved_content() {
    let mut store = store();
    let titles: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = Rc::clone(&titles);
    store.subscribe(move |view| sink.borrow_mut().push(view.content.projects.title.clone()));

    store.set_language(Lang::Ko);
    store.set_language(Lang::Jp);

    let expected = vec![
        store.content(Lang::Ko).projects.title.clone(),
        store.content(Lang::Jp).projects.title.clone(),
    ];
    assert_eq!(*titles.borrow(), expected);
}

#[test]
fn typewriter_follows_language_switch() {
    let mut store = store();
    let phrases = Rc::new(RefCell::new(Typewriter::new(
        &store.view().content.home.phrases,
    )));
    let tw = Rc::clone(&phrases);
    store.subscribe(move |view| tw.borrow_mut().reset(&view.content.home.phrases));

    store.set_language(Lang::Ko);
    let first_char = phrases.borrow_mut().tick();
    let expected: String = store.content(Lang::Ko).home.phrases[0]
        .chars()
        .take(1)
        .collect();
    assert_eq!(first_char, expected);
}

#[test]
fn string_setters_reject_unknown_keys_without_side_effects() {
    let mut store = store();
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    store.subscribe(move |_| *counter.borrow_mut() += 1);

    assert!(store.set_language_code("ja").is_err());
    assert!(store.set_theme_code("Dark").is_err());
    assert_eq!(store.state(), LocaleThemeState::default());
    assert_eq!(*calls.borrow(), 0);

    store.set_language_code("ko").expect("ko is supported");
    assert_eq!(store.language(), Lang::Ko);
    assert_eq!(*calls.borrow(), 1);
}

proptest! {
    #[test]
    fn cycling_three_times_returns_to_start(lang in any_lang(), theme in any_theme()) {
        let mut store = Store::with_state(
            Catalog::builtin().expect("embedded content should validate"),
            LocaleThemeState { language: lang, theme },
        );
        let first = store.cycle_language();
        prop_assert_eq!(first, lang.next());
        store.cycle_language();
        store.cycle_language();
        prop_assert_eq!(store.language(), lang);
        prop_assert_eq!(store.theme(), theme);
    }

    #[test]
    fn toggling_theme_twice_is_identity(lang in any_lang(), theme in any_theme()) {
        let mut store = Store::with_state(
            Catalog::builtin().expect("embedded content should validate"),
            LocaleThemeState { language: lang, theme },
        );
        store.toggle_theme();
        prop_assert_ne!(store.theme(), theme);
        store.toggle_theme();
        prop_assert_eq!(store.state(), LocaleThemeState { language: lang, theme });
    }

    #[test]
    fn view_always_matches_catalog(ops in prop::collection::vec(0u8..4, 0..20)) {
        let mut store = store();
        for op in ops {
            match op {
                0 => { store.cycle_language(); }
                1 => { store.toggle_theme(); }
                2 => store.set_language(Lang::Ko),
                _ => store.set_theme(Theme::Dark),
            }
            let view = store.view();
            prop_assert_eq!(view.language, store.language());
            prop_assert_eq!(view.theme, store.theme());
            prop_assert!(std::ptr::eq(view.content, store.content(view.language)));
        }
    }
}
