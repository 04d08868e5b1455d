//! Dark/light theme store.
//!
//! DESIGN
//! ======
//! The flag lives in a signal so any view can react to it; persistence goes
//! through `PreferenceStorage` under the `theme` key as `"dark"`/`"light"`.
//! With nothing stored, the OS color-scheme preference seeds the flag.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

use crate::util::dark_mode;
use crate::util::storage::{LocalStorage, PreferenceStorage};

/// `localStorage` key holding `"dark"` or `"light"`.
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub is_dark_mode: bool,
}

impl ThemeState {
    /// Root CSS class for the current theme.
    #[must_use]
    pub fn theme_class(self) -> &'static str {
        if self.is_dark_mode { "dark-mode" } else { "light-mode" }
    }
}

/// Theme flag plus the storage it persists to.
#[derive(Clone, Copy, Debug)]
pub struct ThemeStore<S = LocalStorage> {
    state: RwSignal<ThemeState>,
    storage: S,
}

impl<S: PreferenceStorage> ThemeStore<S> {
    pub fn new(storage: S) -> Self {
        Self { state: RwSignal::new(ThemeState::default()), storage }
    }

    /// Reactive handle for views.
    pub fn state(&self) -> RwSignal<ThemeState> {
        self.state
    }

    pub fn is_dark_mode(&self) -> bool {
        self.state.get_untracked().is_dark_mode
    }

    /// Flip the flag and persist the new value.
    pub fn toggle_theme(&self) {
        let next = !self.is_dark_mode();
        self.state.set(ThemeState { is_dark_mode: next });
        self.storage.set_item(THEME_KEY, dark_mode::theme_attribute(next));
        dark_mode::apply(next);
    }

    /// Load the flag from storage, falling back to the OS preference.
    pub fn init_theme(&self) {
        let dark = match self.storage.get_item(THEME_KEY).filter(|saved| !saved.is_empty()) {
            Some(saved) => saved == "dark",
            None => self.storage.prefers_dark_scheme(),
        };
        self.state.set(ThemeState { is_dark_mode: dark });
        dark_mode::apply(dark);
    }
}
