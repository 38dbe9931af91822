//! Typed host-domain contracts and shared models used across runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the key-value
//! persistence port, the persisted key catalog, chat-completion and speech service contracts,
//! and time helpers, while concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod assistant;
pub mod host;
pub mod storage;
pub mod time;

pub use assistant::{
    build_chat_request_body, build_speech_body, chat_auth, chat_endpoint, parse_chat_response,
    speech_endpoint, AssistantError, AssistantFuture, AssistantProvider, ChatCompletionRequest,
    ChatAuth, ChatCompletionService, ChatMessage, ChatRole, NoopChatCompletionService, NoopSpeechService,
    RecordingChatCompletionService, SpeechRequest, SpeechService, ELEVENLABS_MODEL_ID,
    ELEVENLABS_TTS_ENDPOINT,
};
pub use host::{HostServices, HostStrategy};
pub use storage::keys;
pub use storage::kv::{
    load_json_or_default, load_json_with, save_json_with, KeyValueStore, MemoryKeyValueStore,
    NoopKeyValueStore, StorageError,
};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now};
