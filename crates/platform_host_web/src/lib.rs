//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer: `localStorage` persistence and
//! `reqwest` transports for the chat-completion and text-to-speech services.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod assistant;
pub mod storage;

pub use adapters::{
    build_host_services, chat_completion_service, host_strategy_name, key_value_store,
    selected_host_strategy, speech_service,
};
pub use assistant::{HttpChatCompletionService, HttpSpeechService};
pub use storage::local_storage::WebKeyValueStore;
