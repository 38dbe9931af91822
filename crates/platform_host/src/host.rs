//! Host service bundle injected into the desktop runtime.

use std::rc::Rc;

use crate::{
    ChatCompletionService, KeyValueStore, MemoryKeyValueStore, NoopChatCompletionService,
    NoopSpeechService, SpeechService,
};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed adapters (`localStorage`, `fetch`).
    Browser,
    /// In-memory storage and offline assistant services.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle.
///
/// All environment-specific selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the runtime and app crates decoupled from adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Key-value persistence port shared by the shell and every app.
    pub storage: Rc<dyn KeyValueStore>,
    /// Chat-completion transport.
    pub chat: Rc<dyn ChatCompletionService>,
    /// Text-to-speech transport.
    pub speech: Rc<dyn SpeechService>,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a headless bundle over `storage` with offline assistant services.
    pub fn headless(storage: Rc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            chat: Rc::new(NoopChatCompletionService),
            speech: Rc::new(NoopSpeechService),
            host_strategy: HostStrategy::Headless,
        }
    }
}

impl Default for HostServices {
    fn default() -> Self {
        Self::headless(Rc::new(MemoryKeyValueStore::default()))
    }
}
