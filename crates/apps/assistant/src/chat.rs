//! Chat profiles, persisted transcripts, and request assembly.

use desktop_app_contract::StateService;
use platform_host::{
    keys, AssistantError, AssistantProvider, ChatCompletionRequest, ChatCompletionService,
    ChatMessage, ChatRole,
};
use serde::{Deserialize, Serialize};

/// Oldest messages are dropped past this many.
pub const MAX_TRANSCRIPT_MESSAGES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A chat window and the backend it talks to.
pub enum ChatProfile {
    /// ChatGPT window (OpenAI).
    ChatGpt,
    /// Gemini window.
    Gemini,
    /// Joi companion (Groq with a persona).
    Joi,
}

impl ChatProfile {
    /// Storage token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::ChatGpt => "chatgpt",
            Self::Gemini => "gemini",
            Self::Joi => "joi",
        }
    }

    /// Window title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::ChatGpt => "ChatGPT",
            Self::Gemini => "Gemini",
            Self::Joi => "Joi",
        }
    }

    /// Backend used by this profile.
    pub const fn provider(self) -> AssistantProvider {
        match self {
            Self::ChatGpt => AssistantProvider::OpenAi,
            Self::Gemini => AssistantProvider::Gemini,
            Self::Joi => AssistantProvider::Groq,
        }
    }

    /// Completion length cap. Joi keeps replies short enough to speak.
    pub const fn max_tokens(self) -> u32 {
        match self {
            Self::Joi => 200,
            Self::ChatGpt | Self::Gemini => 1024,
        }
    }

    /// Storage key of this profile's transcript.
    pub fn transcript_key(self) -> String {
        keys::assistant_transcript_key(self.token())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Persisted conversation for one profile, oldest first.
pub struct Transcript {
    /// User and assistant turns. System prompts are never stored.
    pub messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Appends a turn, trimming the oldest past [`MAX_TRANSCRIPT_MESSAGES`].
    pub fn push(&mut self, role: ChatRole, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(role, content));
        if self.messages.len() > MAX_TRANSCRIPT_MESSAGES {
            let excess = self.messages.len() - MAX_TRANSCRIPT_MESSAGES;
            self.messages.drain(..excess);
        }
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` for a fresh conversation.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Reads the stored key for `provider`. Blank keys count as missing.
pub fn resolve_api_key(
    state: &StateService,
    provider: AssistantProvider,
) -> Result<String, AssistantError> {
    state
        .get(provider.api_key_pref())
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or(AssistantError::missing_key(provider))
}

/// Conversation sent to the model: optional persona, the prior turns, then `input`.
pub fn conversation(persona: Option<&str>, history: &[ChatMessage], input: &str) -> Vec<ChatMessage> {
    persona
        .filter(|persona| !persona.trim().is_empty())
        .map(|persona| ChatMessage::new(ChatRole::System, persona))
        .into_iter()
        .chain(history.iter().cloned())
        .chain(std::iter::once(ChatMessage::new(ChatRole::User, input)))
        .collect()
}

/// Builds the request for `profile`, failing before any I/O when its key is missing.
pub fn prepare_request(
    state: &StateService,
    profile: ChatProfile,
    persona: Option<&str>,
    history: &[ChatMessage],
    input: &str,
) -> Result<ChatCompletionRequest, AssistantError> {
    let provider = profile.provider();
    let api_key = resolve_api_key(state, provider)?;
    Ok(
        ChatCompletionRequest::new(provider, api_key, conversation(persona, history, input))
            .with_max_tokens(profile.max_tokens()),
    )
}

/// Sends one user turn and resolves with the reply text.
pub async fn request_reply(
    state: &StateService,
    chat: &dyn ChatCompletionService,
    profile: ChatProfile,
    persona: Option<&str>,
    history: &[ChatMessage],
    input: &str,
) -> Result<String, AssistantError> {
    let request = prepare_request(state, profile, persona, history, input)?;
    chat.complete(request).await
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use platform_host::{KeyValueStore, MemoryKeyValueStore, RecordingChatCompletionService};
    use pretty_assertions::assert_eq;

    use super::*;

    fn state_with(entries: &[(&str, &str)]) -> StateService {
        let store = MemoryKeyValueStore::default();
        for (key, value) in entries {
            store.set(key, value).expect("seed");
        }
        StateService::new(Rc::new(store))
    }

    #[test]
    fn missing_key_fails_without_calling_the_service() {
        let state = state_with(&[]);
        let service = RecordingChatCompletionService::with_replies([Ok("unused".to_string())]);

        let result = block_on(request_reply(
            &state,
            &service,
            ChatProfile::ChatGpt,
            None,
            &[],
            "hello",
        ));

        assert_eq!(
            result,
            Err(AssistantError::MissingApiKey { provider: "OpenAI" })
        );
        assert!(service.calls().is_empty());
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let state = state_with(&[(keys::GROQ_KEY, "   ")]);
        assert_eq!(
            resolve_api_key(&state, AssistantProvider::Groq),
            Err(AssistantError::missing_key(AssistantProvider::Groq))
        );
    }

    #[test]
    fn joi_request_carries_persona_history_and_short_cap() {
        let state = state_with(&[(keys::GROQ_KEY, "gsk-test")]);
        let service = RecordingChatCompletionService::with_replies([Ok("hi there".to_string())]);
        let history = vec![
            ChatMessage::new(ChatRole::User, "hey"),
            ChatMessage::new(ChatRole::Assistant, "hello"),
        ];

        let reply = block_on(request_reply(
            &state,
            &service,
            ChatProfile::Joi,
            Some("You are Joi."),
            &history,
            "how are you?",
        ));
        assert_eq!(reply, Ok("hi there".to_string()));

        let calls = service.calls();
        assert_eq!(calls.len(), 1);
        let request = &calls[0];
        assert_eq!(request.provider, AssistantProvider::Groq);
        assert_eq!(request.api_key, "gsk-test");
        assert_eq!(request.max_tokens, 200);
        let roles: Vec<ChatRole> = request.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![ChatRole::System, ChatRole::User, ChatRole::Assistant, ChatRole::User]
        );
        assert_eq!(request.messages[3].content, "how are you?");
    }

    #[test]
    fn blank_persona_is_not_sent() {
        let messages = conversation(Some("  "), &[], "ping");
        assert_eq!(messages, vec![ChatMessage::new(ChatRole::User, "ping")]);
    }

    #[test]
    fn transcript_keeps_the_newest_messages() {
        let mut transcript = Transcript::default();
        for n in 0..(MAX_TRANSCRIPT_MESSAGES + 5) {
            transcript.push(ChatRole::User, n.to_string());
        }
        assert_eq!(transcript.len(), MAX_TRANSCRIPT_MESSAGES);
        assert_eq!(transcript.messages[0].content, "5");
    }

    #[test]
    fn transcripts_are_keyed_per_profile() {
        assert_eq!(ChatProfile::ChatGpt.transcript_key(), "assistant_transcript.chatgpt");
        assert_eq!(ChatProfile::Joi.transcript_key(), "assistant_transcript.joi");
        assert_ne!(
            ChatProfile::Gemini.transcript_key(),
            ChatProfile::ChatGpt.transcript_key()
        );
    }
}
