// SPDX-License-Identifier: PMPL-1.0-or-later

//! Mobile navigation menu.

use crate::content::ContentRecord;

/// Sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    Skills,
    Projects,
    Services,
    Contact,
}

impl NavTarget {
    pub fn all() -> &'static [NavTarget] {
        &[
            NavTarget::Home,
            NavTarget::Skills,
            NavTarget::Projects,
            NavTarget::Services,
            NavTarget::Contact,
        ]
    }

    /// In-page anchor of the section.
    pub fn anchor(&self) -> &'static str {
        match self {
            NavTarget::Home => "#home",
            NavTarget::Skills => "#skills",
            NavTarget::Projects => "#projects",
            NavTarget::Services => "#services",
            NavTarget::Contact => "#contact",
        }
    }

    pub fn label<'a>(&self, content: &'a ContentRecord) -> &'a str {
        let nav = &content.header.nav;
        match self {
            NavTarget::Home => &nav.home,
            NavTarget::Skills => &nav.skills,
            NavTarget::Projects => &nav.projects,
            NavTarget::Services => &nav.services,
            NavTarget::Contact => &nav.contact,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Follow a menu link: the menu closes and the target anchor is returned.
    pub fn navigate(&mut self, target: NavTarget) -> &'static str {
        self.close();
        target.anchor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_toggles() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn navigating_closes_the_menu() {
        let mut menu = MenuState::default();
        menu.open();
        assert_eq!(menu.navigate(NavTarget::Projects), "#projects");
        assert!(!menu.is_open());
    }
}
