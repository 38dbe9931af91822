//! `localStorage`-backed key-value store implementation.
//!
//! The browser API is synchronous, which maps directly onto [`platform_host::KeyValueStore`].
//! On non-wasm targets every read misses and every write succeeds.

use platform_host::{KeyValueStore, StorageError};

#[derive(Debug, Clone, Copy, Default)]
/// Browser key-value store backed by `window.localStorage`.
pub struct WebKeyValueStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn read_failure(key: &str, detail: impl std::fmt::Debug) -> StorageError {
    StorageError::Read {
        key: key.to_string(),
        message: format!("localStorage get_item failed: {detail:?}"),
    }
}

impl KeyValueStore for WebKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| read_failure(key, e))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write {
                    key: key.to_string(),
                    message: format!("localStorage set_item failed: {e:?}"),
                })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Write {
                    key: key.to_string(),
                    message: format!("localStorage remove_item failed: {e:?}"),
                })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn non_wasm_store_misses_and_accepts_writes() {
        let store = WebKeyValueStore;
        store.set("wallpaper", "https://x").expect("set");
        assert_eq!(store.get("wallpaper").expect("get"), None);
        store.remove("wallpaper").expect("remove");
    }

    #[test]
    fn read_failures_keep_the_key_and_backend_detail() {
        assert_eq!(
            read_failure("wallpaper", "SecurityError"),
            StorageError::Read {
                key: "wallpaper".to_string(),
                message: "localStorage get_item failed: \"SecurityError\"".to_string(),
            }
        );
    }
}
