//! Browser preference storage (`localStorage` + color-scheme media query).
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort: when `localStorage` is unavailable (private mode,
//! sandboxed frames, non-browser builds) reads come back empty and writes are
//! dropped with a warning rather than failing the caller.

/// Key/value preference storage plus the OS dark-scheme hint.
pub trait PreferenceStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    /// Whether the OS reports `prefers-color-scheme: dark`.
    fn prefers_dark_scheme(&self) -> bool;
}

/// `window.localStorage`-backed storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let stored = local_storage().is_some_and(|storage| storage.set_item(key, value).is_ok());
            if !stored {
                log::warn!("localStorage unavailable; `{key}` not persisted");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::warn!("localStorage unavailable; `{key}`={value} not persisted");
        }
    }

    fn prefers_dark_scheme(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
                .is_some_and(|mq| mq.matches())
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
