//! `localStorage`-backed key/value store.
//!
//! Synchronous at the browser boundary, while also implementing the async
//! [`platform_host::PrefsStore`] contract consumed by apps.

use platform_host::{PrefsStore, PrefsStoreFuture};

use crate::interop;

#[derive(Debug, Clone, Copy, Default)]
/// Store backed by `window.localStorage`.
pub struct WebPrefsStore;

impl WebPrefsStore {
    /// Reads the raw text under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable (for example in private browsing) or the
    /// read throws.
    pub fn load_raw(self, key: &str) -> Result<Option<String>, String> {
        interop::local_storage_get(key)
    }

    /// Writes raw text under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the quota is exceeded.
    pub fn save_raw(self, key: &str, raw: &str) -> Result<(), String> {
        interop::local_storage_set(key, raw)
    }

    /// Removes `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the delete throws.
    pub fn delete_raw(self, key: &str) -> Result<(), String> {
        interop::local_storage_remove(key)
    }
}

impl PrefsStore for WebPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        let store = *self;
        Box::pin(async move { store.load_raw(key) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.save_raw(key, raw_json) })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.delete_raw(key) })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_build_reads_nothing_and_rejects_writes() {
        let store = WebPrefsStore;
        assert_eq!(block_on(store.load_pref("pet.v1")).expect("load"), None);
        assert!(block_on(store.save_pref("pet.v1", "{}")).is_err());
    }
}
