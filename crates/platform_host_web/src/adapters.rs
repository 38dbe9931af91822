use std::rc::Rc;

use platform_host::{
    ChatCompletionService, HostServices, HostStrategy, KeyValueStore, MemoryKeyValueStore,
    NoopChatCompletionService, NoopSpeechService, SpeechService,
};

use crate::{HttpChatCompletionService, HttpSpeechService, WebKeyValueStore};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "headless-host")]
    {
        HostStrategy::Headless
    }

    #[cfg(not(feature = "headless-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Builds the key-value store for the selected host strategy.
pub fn key_value_store() -> Rc<dyn KeyValueStore> {
    match selected_host_strategy() {
        HostStrategy::Browser => Rc::new(WebKeyValueStore),
        HostStrategy::Headless => Rc::new(MemoryKeyValueStore::default()),
    }
}

/// Builds the chat-completion transport for the selected host strategy.
pub fn chat_completion_service() -> Rc<dyn ChatCompletionService> {
    match selected_host_strategy() {
        HostStrategy::Browser => Rc::new(HttpChatCompletionService::new()),
        HostStrategy::Headless => Rc::new(NoopChatCompletionService),
    }
}

/// Builds the speech transport for the selected host strategy.
pub fn speech_service() -> Rc<dyn SpeechService> {
    match selected_host_strategy() {
        HostStrategy::Browser => Rc::new(HttpSpeechService::new()),
        HostStrategy::Headless => Rc::new(NoopSpeechService),
    }
}

/// Assembles the full host bundle consumed by `desktop_runtime`.
pub fn build_host_services() -> HostServices {
    HostServices {
        storage: key_value_store(),
        chat: chat_completion_service(),
        speech: speech_service(),
        host_strategy: selected_host_strategy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_reports_selected_strategy() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, selected_host_strategy());
        assert_eq!(host_strategy_name(), selected_host_strategy().as_str());
    }
}
