//! Synchronous key-value persistence port and typed JSON blob helpers.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Failure reported by a [`KeyValueStore`] backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backing store is disabled or not reachable on this host.
    #[error("storage unavailable")]
    Unavailable,
    /// The backend failed to read a key.
    #[error("storage read failed for `{key}`: {message}")]
    Read {
        /// Key being read.
        key: String,
        /// Backend-provided failure detail.
        message: String,
    },
    /// The backend rejected a write or delete.
    #[error("storage write failed for `{key}`: {message}")]
    Write {
        /// Key being written.
        key: String,
        /// Backend-provided failure detail.
        message: String,
    },
    /// A stored value could not be decoded as the requested type.
    #[error("malformed value for `{key}`: {message}")]
    Malformed {
        /// Key being read.
        key: String,
        /// Decoder failure detail.
        message: String,
    },
}

/// Host service for string values keyed by string.
///
/// Reads and writes are synchronous. Concurrent writers to the same key follow
/// last-write-wins.
pub trait KeyValueStore {
    /// Returns the raw value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op store for non-browser targets and baseline tests.
pub struct NoopKeyValueStore;

impl KeyValueStore for NoopKeyValueStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store keyed by string.
///
/// Clones share the same backing map, which lets tests simulate a reload by building a second
/// consumer over the same store.
pub struct MemoryKeyValueStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns `true` when no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and deserializes a typed JSON blob through a [`KeyValueStore`].
///
/// # Errors
///
/// Returns [`StorageError::Malformed`] when the stored text is not valid JSON for `T`, or the
/// backend error when the read fails.
pub fn load_json_with<S: KeyValueStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Malformed {
            key: key.to_string(),
            message: e.to_string(),
        })
}

/// Loads a typed JSON blob, falling back to `T::default()` when it is missing, malformed, or
/// the read fails.
pub fn load_json_or_default<S: KeyValueStore + ?Sized, T: DeserializeOwned + Default>(
    store: &S,
    key: &str,
) -> T {
    load_json_with(store, key).ok().flatten().unwrap_or_default()
}

/// Serializes and saves a typed JSON blob through a [`KeyValueStore`].
///
/// # Errors
///
/// Returns an error when serialization or the backend write fails.
pub fn save_json_with<S: KeyValueStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Write {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct DocThing {
        title: String,
        pinned: bool,
    }

    #[test]
    fn memory_store_round_trip_and_remove() {
        let store = MemoryKeyValueStore::default();
        let store_obj: &dyn KeyValueStore = &store;

        store_obj.set("wallpaper", "https://x").expect("set");
        assert_eq!(
            store_obj.get("wallpaper").expect("get"),
            Some("https://x".to_string())
        );
        store_obj.set("wallpaper", "https://y").expect("overwrite");
        assert_eq!(
            store_obj.get("wallpaper").expect("get"),
            Some("https://y".to_string())
        );
        store_obj.remove("wallpaper").expect("remove");
        assert_eq!(store_obj.get("wallpaper").expect("get"), None);
        store_obj.remove("wallpaper").expect("remove missing");
    }

    #[test]
    fn clones_share_backing_map() {
        let store = MemoryKeyValueStore::default();
        let reloaded = store.clone();
        store.set("isLoggedIn", "true").expect("set");
        assert_eq!(
            reloaded.get("isLoggedIn").expect("get"),
            Some("true".to_string())
        );
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn typed_helpers_round_trip() {
        let store = MemoryKeyValueStore::default();
        save_json_with(
            &store,
            "doc",
            &DocThing {
                title: "Notes".into(),
                pinned: true,
            },
        )
        .expect("save typed");

        let loaded: Option<DocThing> = load_json_with(&store, "doc").expect("load typed");
        assert_eq!(
            loaded,
            Some(DocThing {
                title: "Notes".into(),
                pinned: true,
            })
        );
    }

    #[test]
    fn malformed_json_reports_error_and_defaults() {
        let store = MemoryKeyValueStore::default();
        store.set("doc", "{not json").expect("set");

        let err = load_json_with::<_, DocThing>(&store, "doc").expect_err("malformed");
        assert!(matches!(err, StorageError::Malformed { ref key, .. } if key == "doc"));

        let fallback: DocThing = load_json_or_default(&store, "doc");
        assert_eq!(fallback, DocThing::default());
    }

    struct UnreadableStore;

    impl KeyValueStore for UnreadableStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                message: "SecurityError".to_string(),
            })
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Ok(())
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn read_failure_is_an_error_not_an_absent_value() {
        let err = load_json_with::<_, DocThing>(&UnreadableStore, "doc").expect_err("read fails");
        assert_eq!(
            err,
            StorageError::Read {
                key: "doc".to_string(),
                message: "SecurityError".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "storage read failed for `doc`: SecurityError"
        );

        let fallback: DocThing = load_json_or_default(&UnreadableStore, "doc");
        assert_eq!(fallback, DocThing::default());
    }

    #[test]
    fn noop_store_is_empty_and_successful() {
        let store = NoopKeyValueStore;
        let store_obj: &dyn KeyValueStore = &store;
        assert_eq!(store_obj.get("k").expect("get"), None);
        store_obj.set("k", "v").expect("set");
        store_obj.remove("k").expect("remove");
        assert_eq!(store_obj.get("k").expect("get"), None);
    }
}
