//! Chat-completion and text-to-speech service contracts.
//!
//! Apps build a [`ChatCompletionRequest`] from persisted API keys and hand it to a
//! [`ChatCompletionService`]. The HTTP transport lives in `platform_host_web`; the wire shapes
//! are built here so they can be tested without a network.

mod wire;

use std::{
    cell::RefCell, collections::VecDeque, fmt, future::Future, pin::Pin, rc::Rc,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::keys;

pub use wire::{
    build_chat_request_body, build_speech_body, chat_auth, chat_endpoint, parse_chat_response,
    speech_endpoint, ChatAuth, ELEVENLABS_MODEL_ID, ELEVENLABS_TTS_ENDPOINT,
};

/// Object-safe boxed future used by assistant service methods.
pub type AssistantFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Third-party chat-completion backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssistantProvider {
    /// OpenAI chat completions.
    OpenAi,
    /// Google Gemini `generateContent`.
    Gemini,
    /// Groq OpenAI-compatible chat completions.
    Groq,
}

impl AssistantProvider {
    /// Human-readable provider name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Gemini => "Gemini",
            Self::Groq => "Groq",
        }
    }

    /// Storage key holding the user-supplied API key for this provider.
    pub const fn api_key_pref(self) -> &'static str {
        match self {
            Self::OpenAi => keys::OPENAI_KEY,
            Self::Gemini => keys::GEMINI_KEY,
            Self::Groq => keys::GROQ_KEY,
        }
    }

    /// Model requested when the caller does not pick one.
    pub const fn default_model(self) -> &'static str {
        match self {
            Self::OpenAi => "gpt-3.5-turbo",
            Self::Gemini => "gemini-pro",
            Self::Groq => "mixtral-8x7b-32768",
        }
    }
}

impl fmt::Display for AssistantProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Speaker of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Persona or instruction message.
    System,
    /// Message typed by the user.
    User,
    /// Reply produced by the model.
    Assistant,
}

impl ChatRole {
    /// Role token used by OpenAI-compatible APIs.
    pub const fn token(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One chat turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Speaker.
    pub role: ChatRole,
    /// Plain-text content.
    pub content: String,
}

impl ChatMessage {
    /// Builds a message for `role`.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Fully resolved chat-completion request, including the API key.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    /// Target backend.
    pub provider: AssistantProvider,
    /// User-supplied credential.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Conversation sent to the model, oldest first.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion length cap.
    pub max_tokens: u32,
}

impl ChatCompletionRequest {
    /// Builds a request with the provider's default model, temperature `0.7` and a 1024 token cap.
    pub fn new(
        provider: AssistantProvider,
        api_key: impl Into<String>,
        messages: Vec<ChatMessage>,
    ) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            model: provider.default_model().to_string(),
            messages,
            temperature: 0.7,
            max_tokens: 1024,
        }
    }

    /// Overrides the completion length cap.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Text-to-speech request for the ElevenLabs API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    /// User-supplied credential.
    pub api_key: String,
    /// ElevenLabs voice id.
    pub voice_id: String,
    /// Text to speak.
    pub text: String,
}

/// Failure of an assistant or speech call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistantError {
    /// No API key is stored for the provider; no request was sent.
    #[error("{provider} API key not found. Please add it in Settings.")]
    MissingApiKey {
        /// Provider whose key is missing.
        provider: &'static str,
    },
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("request failed with status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },
    /// The response decoded but carried no text.
    #[error("the service returned an empty response")]
    EmptyResponse,
    /// The response body was not the expected JSON.
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl AssistantError {
    /// Missing-key error for `provider`.
    pub const fn missing_key(provider: AssistantProvider) -> Self {
        Self::MissingApiKey {
            provider: provider.label(),
        }
    }
}

/// Host service issuing chat-completion calls.
pub trait ChatCompletionService {
    /// Sends `request` and resolves with the reply text.
    fn complete<'a>(
        &'a self,
        request: ChatCompletionRequest,
    ) -> AssistantFuture<'a, Result<String, AssistantError>>;
}

/// Host service synthesizing speech audio.
pub trait SpeechService {
    /// Sends `request` and resolves with encoded audio bytes (`audio/mpeg`).
    fn synthesize<'a>(
        &'a self,
        request: SpeechRequest,
    ) -> AssistantFuture<'a, Result<Vec<u8>, AssistantError>>;
}

const UNAVAILABLE: &str = "assistant services are unavailable on this host";

#[derive(Debug, Clone, Copy, Default)]
/// Chat service for hosts without network access.
pub struct NoopChatCompletionService;

impl ChatCompletionService for NoopChatCompletionService {
    fn complete<'a>(
        &'a self,
        _request: ChatCompletionRequest,
    ) -> AssistantFuture<'a, Result<String, AssistantError>> {
        Box::pin(async { Err(AssistantError::Transport(UNAVAILABLE.to_string())) })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Speech service for hosts without network access.
pub struct NoopSpeechService;

impl SpeechService for NoopSpeechService {
    fn synthesize<'a>(
        &'a self,
        _request: SpeechRequest,
    ) -> AssistantFuture<'a, Result<Vec<u8>, AssistantError>> {
        Box::pin(async { Err(AssistantError::Transport(UNAVAILABLE.to_string())) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory chat service that records requests and replays scripted replies.
///
/// Replies are consumed in order; once exhausted every call yields
/// [`AssistantError::EmptyResponse`].
pub struct RecordingChatCompletionService {
    calls: Rc<RefCell<Vec<ChatCompletionRequest>>>,
    replies: Rc<RefCell<VecDeque<Result<String, AssistantError>>>>,
}

impl RecordingChatCompletionService {
    /// Builds a service that answers with `replies` in order.
    pub fn with_replies(replies: impl IntoIterator<Item = Result<String, AssistantError>>) -> Self {
        Self {
            calls: Rc::default(),
            replies: Rc::new(RefCell::new(replies.into_iter().collect())),
        }
    }

    /// Requests received so far.
    pub fn calls(&self) -> Vec<ChatCompletionRequest> {
        self.calls.borrow().clone()
    }
}

impl ChatCompletionService for RecordingChatCompletionService {
    fn complete<'a>(
        &'a self,
        request: ChatCompletionRequest,
    ) -> AssistantFuture<'a, Result<String, AssistantError>> {
        Box::pin(async move {
            self.calls.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(AssistantError::EmptyResponse))
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_key_message_names_provider() {
        assert_eq!(
            AssistantError::missing_key(AssistantProvider::Groq).to_string(),
            "Groq API key not found. Please add it in Settings."
        );
    }

    #[test]
    fn provider_key_prefs_match_catalog() {
        assert_eq!(AssistantProvider::OpenAi.api_key_pref(), "openai_key");
        assert_eq!(AssistantProvider::Gemini.api_key_pref(), "gemini_key");
        assert_eq!(AssistantProvider::Groq.api_key_pref(), "groq_key");
    }

    #[test]
    fn recording_service_replays_in_order() {
        let service = RecordingChatCompletionService::with_replies([
            Ok("first".to_string()),
            Err(AssistantError::Status {
                status: 429,
                body: "slow down".into(),
            }),
        ]);
        let service_obj: &dyn ChatCompletionService = &service;
        let request = ChatCompletionRequest::new(
            AssistantProvider::OpenAi,
            "sk-test",
            vec![ChatMessage::new(ChatRole::User, "hi")],
        );

        assert_eq!(
            block_on(service_obj.complete(request.clone())),
            Ok("first".to_string())
        );
        assert!(matches!(
            block_on(service_obj.complete(request.clone())),
            Err(AssistantError::Status { status: 429, .. })
        ));
        assert_eq!(
            block_on(service_obj.complete(request)),
            Err(AssistantError::EmptyResponse)
        );
        assert_eq!(service.calls().len(), 3);
    }

    #[test]
    fn noop_services_fail_without_panicking() {
        let chat = NoopChatCompletionService;
        let speech = NoopSpeechService;
        let request = ChatCompletionRequest::new(AssistantProvider::Gemini, "k", Vec::new());
        assert!(matches!(
            block_on(chat.complete(request)),
            Err(AssistantError::Transport(_))
        ));
        assert!(matches!(
            block_on(speech.synthesize(SpeechRequest {
                api_key: "k".into(),
                voice_id: "v".into(),
                text: "hello".into(),
            })),
            Err(AssistantError::Transport(_))
        ));
    }
}
