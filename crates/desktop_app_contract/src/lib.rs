//! Shared contract types between the desktop window manager runtime and managed apps.
//!
//! The runtime mounts each app with an [`AppMountContext`]: an injected [`AppServices`] bundle
//! (persistence port, assistant transports, shell commands) and a [`WindowLifetime`] token that
//! is cancelled when the owning window closes.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{cell::Cell, future::Future, rc::Rc};

use leptos::{logging, view, Callable, Callback, IntoView, View};
use platform_host::{
    load_json_with, save_json_with, ChatCompletionService, KeyValueStore, SpeechService,
};
use serde::{de::DeserializeOwned, Serialize};

/// Cancellation token tied to one open window.
///
/// Clones share state. Async work started by an app captures a clone and checks
/// [`WindowLifetime::is_alive`] before applying its result, so responses that arrive after the
/// window closed are dropped instead of touching disposed reactive state.
#[derive(Debug, Clone)]
pub struct WindowLifetime {
    alive: Rc<Cell<bool>>,
}

impl Default for WindowLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowLifetime {
    /// Creates a live token.
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    /// Returns whether the owning window is still open.
    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Marks the owning window as closed. Idempotent.
    pub fn cancel(&self) {
        self.alive.set(false);
    }

    /// Awaits `future` and passes its output to `apply` only if the window is still open.
    ///
    /// Returns `true` when the output was applied.
    pub async fn settle<T>(
        &self,
        future: impl Future<Output = T>,
        apply: impl FnOnce(T),
    ) -> bool {
        let value = future.await;
        if !self.is_alive() {
            return false;
        }
        apply(value);
        true
    }

    /// Spawns `future` on the local executor with [`WindowLifetime::settle`] semantics.
    pub fn spawn<T: 'static>(
        &self,
        future: impl Future<Output = T> + 'static,
        apply: impl FnOnce(T) + 'static,
    ) {
        let lifetime = self.clone();
        leptos::spawn_local(async move {
            lifetime.settle(future, apply).await;
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Commands an app may send to the desktop runtime.
pub enum AppCommand {
    /// Replace and persist the desktop wallpaper.
    SetWallpaper {
        /// New wallpaper URL.
        url: String,
    },
    /// End the session.
    Logout,
    /// Open or focus the Settings window.
    OpenSettings,
}

#[derive(Clone)]
/// Persistence handle over the shared key-value store.
///
/// Write failures are logged and otherwise ignored; reads of malformed blobs fall back to the
/// type's default.
pub struct StateService {
    store: Rc<dyn KeyValueStore>,
}

impl StateService {
    /// Wraps a store.
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> Rc<dyn KeyValueStore> {
        self.store.clone()
    }

    /// Reads a raw string value. Read failures count as absent.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                logging::warn!("state read `{key}` failed: {err}");
                None
            }
        }
    }

    /// Writes a raw string value.
    pub fn set(&self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            logging::warn!("state write `{key}` failed: {err}");
        }
    }

    /// Removes a key.
    pub fn remove(&self, key: &str) {
        if let Err(err) = self.store.remove(key) {
            logging::warn!("state remove `{key}` failed: {err}");
        }
    }

    /// Loads a typed JSON blob or its default. Read and decode failures are logged.
    pub fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match load_json_with(self.store.as_ref(), key) {
            Ok(value) => value.unwrap_or_default(),
            Err(err) => {
                logging::warn!("state load `{key}` failed: {err}");
                T::default()
            }
        }
    }

    /// Saves a typed JSON blob.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(err) = save_json_with(self.store.as_ref(), key, value) {
            logging::warn!("state save `{key}` failed: {err}");
        }
    }
}

#[derive(Clone)]
/// Assistant transports available to apps.
pub struct AssistantServices {
    /// Chat-completion transport.
    pub chat: Rc<dyn ChatCompletionService>,
    /// Text-to-speech transport.
    pub speech: Rc<dyn SpeechService>,
}

#[derive(Clone)]
/// Injected app services bundle.
pub struct AppServices {
    /// Persistence service.
    pub state: StateService,
    /// Chat and speech transports.
    pub assistants: AssistantServices,
    sender: Callback<AppCommand>,
}

impl AppServices {
    /// Creates service handles from host services and the runtime command callback.
    pub fn new(
        store: Rc<dyn KeyValueStore>,
        chat: Rc<dyn ChatCompletionService>,
        speech: Rc<dyn SpeechService>,
        sender: Callback<AppCommand>,
    ) -> Self {
        Self {
            state: StateService::new(store),
            assistants: AssistantServices { chat, speech },
            sender,
        }
    }

    /// Low-level transport send.
    pub fn send(&self, command: AppCommand) {
        self.sender.call(command);
    }

    /// Requests a wallpaper change.
    pub fn set_wallpaper(&self, url: impl Into<String>) {
        self.send(AppCommand::SetWallpaper { url: url.into() });
    }

    /// Requests logout.
    pub fn logout(&self) {
        self.send(AppCommand::Logout);
    }

    /// Requests the Settings window.
    pub fn open_settings(&self) {
        self.send(AppCommand::OpenSettings);
    }
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// Stable window label (`"Word"`, `"ChatGPT"`, ...).
    pub window_label: &'static str,
    /// Cancellation token for this window.
    pub lifetime: WindowLifetime,
    /// Runtime service bundle.
    pub services: AppServices,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: Option<AppMountFn>,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self {
            mount_fn: Some(mount_fn),
        }
    }

    /// Module rendering an empty pane, used for identifiers with no provider.
    pub const fn empty() -> Self {
        Self { mount_fn: None }
    }

    /// Returns whether this is the empty module.
    pub const fn is_empty(self) -> bool {
        self.mount_fn.is_none()
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        match self.mount_fn {
            Some(mount_fn) => mount_fn(context),
            None => view! { <div class="app-empty" data-app-empty="true"></div> }.into_view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use platform_host::{MemoryKeyValueStore, StorageError};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn settle_applies_while_alive() {
        let lifetime = WindowLifetime::new();
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();

        let applied = block_on(lifetime.settle(async { 7 }, move |v| *sink.borrow_mut() = Some(v)));

        assert!(applied);
        assert_eq!(*seen.borrow(), Some(7));
    }

    #[test]
    fn settle_discards_after_cancel() {
        let lifetime = WindowLifetime::new();
        let observer = lifetime.clone();
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();

        let applied = block_on(lifetime.settle(
            async move {
                // Window closes while the request is in flight.
                observer.cancel();
                "late reply"
            },
            move |v| *sink.borrow_mut() = Some(v),
        ));

        assert!(!applied);
        assert_eq!(*seen.borrow(), None);
        assert!(!lifetime.is_alive());
    }

    #[test]
    fn state_service_defaults_on_malformed_blob() {
        let store = MemoryKeyValueStore::default();
        store.set("word_document", "{oops").expect("seed");
        let state = StateService::new(Rc::new(store));

        let doc: Vec<String> = state.load("word_document");
        assert!(doc.is_empty());

        state.save("word_document", &vec!["a".to_string()]);
        let doc: Vec<String> = state.load("word_document");
        assert_eq!(doc, vec!["a".to_string()]);
    }

    struct UnreadableStore;

    impl KeyValueStore for UnreadableStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                message: "denied".to_string(),
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
    fn state_service_treats_read_failures_as_absent() {
        let state = StateService::new(Rc::new(UnreadableStore));
        assert_eq!(state.get("wallpaper"), None);
        let doc: Vec<String> = state.load("word_document");
        assert!(doc.is_empty());
    }

    #[test]
    fn empty_module_is_recognized() {
        assert!(AppModule::empty().is_empty());
        assert!(!AppModule::new(|_| ().into_view()).is_empty());
    }
}
