//! Lightweight key/value storage contracts and adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for small JSON documents stored as text under a namespaced key.
pub trait PrefsStore {
    /// Loads the raw text stored under `key`.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Replaces the raw text stored under `key`.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;

    /// Removes `key`.
    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Store that remembers nothing. Used where the host has no durable storage.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn delete_pref<'a>(&'a self, _key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store keyed by string. Clones share the same backing map.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Seeds `key` with arbitrary raw text, bypassing serialization.
    ///
    /// Tests use this to plant corrupt documents.
    pub fn insert_raw(&self, key: impl Into<String>, raw: impl Into<String>) {
        self.inner.borrow_mut().insert(key.into(), raw.into());
    }

    /// Returns the raw text currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.raw(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.insert_raw(key, raw_json);
            Ok(())
        })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().remove(key);
            Ok(())
        })
    }
}

/// Loads and deserializes a typed value through a [`PrefsStore`].
///
/// # Errors
///
/// Returns an error when the store read fails or the stored text is not valid JSON for `T`.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key).await? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| format!("{key}: {e}"))?;
    Ok(Some(value))
}

/// Serializes and saves a typed value through a [`PrefsStore`].
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub async fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_pref(key, &raw).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Meters {
        hunger: u8,
        dirt: u8,
    }

    #[test]
    fn clones_share_backing_map() {
        let store = MemoryPrefsStore::default();
        let other = store.clone();
        let store_obj: &dyn PrefsStore = &store;

        block_on(store_obj.save_pref("pet.v1", "{\"hunger\":3,\"dirt\":4}")).expect("save");
        assert_eq!(
            other.raw("pet.v1").as_deref(),
            Some("{\"hunger\":3,\"dirt\":4}")
        );

        block_on(store_obj.delete_pref("pet.v1")).expect("delete");
        assert_eq!(other.raw("pet.v1"), None);
    }

    #[test]
    fn typed_helpers_read_back_what_they_wrote() {
        let store = MemoryPrefsStore::default();
        block_on(save_pref_with(&store, "pet.v1", &Meters { hunger: 10, dirt: 2 }))
            .expect("save typed");

        let loaded: Option<Meters> = block_on(load_pref_with(&store, "pet.v1")).expect("load");
        assert_eq!(loaded, Some(Meters { hunger: 10, dirt: 2 }));
    }

    #[test]
    fn corrupt_text_is_an_error_naming_the_key() {
        let store = MemoryPrefsStore::default();
        store.insert_raw("pet.v1", "{not json");

        let err = block_on(load_pref_with::<_, Meters>(&store, "pet.v1")).unwrap_err();
        assert!(err.starts_with("pet.v1:"), "unexpected error: {err}");
    }

    #[test]
    fn noop_store_never_returns_data() {
        let store = NoopPrefsStore;
        block_on(save_pref_with(&store, "k", &Meters { hunger: 1, dirt: 1 })).expect("save");
        let loaded: Option<Meters> = block_on(load_pref_with(&store, "k")).expect("load");
        assert_eq!(loaded, None);
    }
}
