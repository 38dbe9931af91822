//! HTTP transports for the assistant service contracts.

mod http;

pub use http::{HttpChatCompletionService, HttpSpeechService};
