//! Session and wallpaper persistence over the injected key-value store.

use platform_host::{keys, KeyValueStore, StorageError};

use crate::model::DesktopState;

const LOGGED_IN_VALUE: &str = "true";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Shell state restored at boot.
pub struct BootSnapshot {
    /// Whether the previous session was still logged in.
    pub logged_in: bool,
    /// Persisted wallpaper URL, if one was saved.
    pub wallpaper_url: Option<String>,
}

/// Reads the boot snapshot. Read failures fall back to a logged-out session and the default
/// wallpaper.
pub fn load_boot_snapshot(store: &dyn KeyValueStore) -> BootSnapshot {
    let read = |key: &str| match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            leptos::logging::warn!("boot read `{key}` failed: {err}");
            None
        }
    };

    BootSnapshot {
        logged_in: read(keys::LOGGED_IN_KEY).as_deref() == Some(LOGGED_IN_VALUE),
        wallpaper_url: read(keys::WALLPAPER_KEY).filter(|url| !url.trim().is_empty()),
    }
}

/// Persists the logged-in flag.
///
/// # Errors
///
/// Propagates the store's write error.
pub fn persist_session(store: &dyn KeyValueStore) -> Result<(), StorageError> {
    store.set(keys::LOGGED_IN_KEY, LOGGED_IN_VALUE)
}

/// Removes the logged-in flag.
///
/// # Errors
///
/// Propagates the store's remove error.
pub fn clear_session(store: &dyn KeyValueStore) -> Result<(), StorageError> {
    store.remove(keys::LOGGED_IN_KEY)
}

/// Persists the current wallpaper URL.
///
/// # Errors
///
/// Propagates the store's write error.
pub fn persist_wallpaper(
    store: &dyn KeyValueStore,
    state: &DesktopState,
) -> Result<(), StorageError> {
    store.set(keys::WALLPAPER_KEY, &state.wallpaper_url)
}

#[cfg(test)]
mod tests {
    use platform_host::MemoryKeyValueStore;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reducer::{reduce_desktop, DesktopAction};

    #[test]
    fn empty_store_boots_logged_out() {
        let store = MemoryKeyValueStore::default();
        assert_eq!(load_boot_snapshot(&store), BootSnapshot::default());
    }

    #[test]
    fn session_flag_round_trips() {
        let store = MemoryKeyValueStore::default();
        persist_session(&store).expect("persist");
        assert!(load_boot_snapshot(&store).logged_in);

        clear_session(&store).expect("clear");
        assert!(!load_boot_snapshot(&store).logged_in);
    }

    #[test]
    fn wallpaper_survives_reload() {
        let store = MemoryKeyValueStore::default();
        let mut state = DesktopState::default();
        reduce_desktop(
            &mut state,
            DesktopAction::SetWallpaper {
                url: "https://example.com/x.jpg".to_string(),
            },
        )
        .expect("set wallpaper");
        persist_wallpaper(&store, &state).expect("persist");

        let snapshot = load_boot_snapshot(&store);
        assert_eq!(
            snapshot.wallpaper_url.as_deref(),
            Some("https://example.com/x.jpg")
        );

        let mut reloaded = DesktopState::default();
        reduce_desktop(
            &mut reloaded,
            DesktopAction::Hydrate {
                logged_in: snapshot.logged_in,
                wallpaper_url: snapshot.wallpaper_url,
            },
        )
        .expect("hydrate");
        assert_eq!(reloaded.wallpaper_url, "https://example.com/x.jpg");
    }
}
