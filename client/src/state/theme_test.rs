use super::*;
use crate::test_support::MemoryPrefs;

#[test]
fn theme_state_default_is_light() {
    let state = ThemeState::default();
    assert!(!state.is_dark_mode);
    assert_eq!(state.theme_class(), "light-mode");
}

#[test]
fn theme_class_follows_flag() {
    assert_eq!(ThemeState { is_dark_mode: true }.theme_class(), "dark-mode");
}

#[test]
fn toggle_flips_and_persists() {
    let prefs = MemoryPrefs::default();
    let store = ThemeStore::new(prefs.clone());

    store.toggle_theme();
    assert!(store.is_dark_mode());
    assert_eq!(prefs.item(THEME_KEY).as_deref(), Some("dark"));

    store.toggle_theme();
    assert!(!store.is_dark_mode());
    assert_eq!(prefs.item(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn init_prefers_stored_value_over_os() {
    let prefs = MemoryPrefs::with_system_dark(true);
    prefs.set_item(THEME_KEY, "light");
    let store = ThemeStore::new(prefs);
    store.init_theme();
    assert!(!store.is_dark_mode());
}

#[test]
fn init_falls_back_to_os_preference() {
    let store = ThemeStore::new(MemoryPrefs::with_system_dark(true));
    store.init_theme();
    assert!(store.is_dark_mode());

    let store = ThemeStore::new(MemoryPrefs::with_system_dark(false));
    store.init_theme();
    assert!(!store.is_dark_mode());
}

#[test]
fn init_treats_empty_stored_value_as_absent() {
    let prefs = MemoryPrefs::with_system_dark(true);
    prefs.set_item(THEME_KEY, "");
    let store = ThemeStore::new(prefs);
    store.init_theme();
    assert!(store.is_dark_mode());
}

#[test]
fn toggle_then_init_in_fresh_store_round_trips() {
    let prefs = MemoryPrefs::with_system_dark(false);
    let first = ThemeStore::new(prefs.clone());
    first.init_theme();
    first.toggle_theme();

    let fresh = ThemeStore::new(prefs);
    fresh.init_theme();
    assert_eq!(fresh.is_dark_mode(), first.is_dark_mode());
    assert!(fresh.is_dark_mode());
}

#[test]
fn state_signal_tracks_store() {
    let store = ThemeStore::new(MemoryPrefs::default());
    store.toggle_theme();
    assert_eq!(store.state().get_untracked().theme_class(), "dark-mode");
}
