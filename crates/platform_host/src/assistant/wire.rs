use serde_json::{json, Value};

use super::{AssistantError, AssistantProvider, ChatCompletionRequest, ChatRole, SpeechRequest};

const OPENAI_CHAT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const GROQ_CHAT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
const GEMINI_ENDPOINT_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// ElevenLabs text-to-speech endpoint prefix; the voice id is appended as a path segment.
pub const ELEVENLABS_TTS_ENDPOINT: &str = "https://api.elevenlabs.io/v1/text-to-speech";
/// ElevenLabs model used for synthesis.
pub const ELEVENLABS_MODEL_ID: &str = "eleven_monolingual_v1";

/// Where a chat request carries its credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAuth<'a> {
    /// `Authorization: Bearer <key>` header.
    Bearer(&'a str),
    /// `key` query parameter, URL-encoded by the transport.
    QueryKey(&'a str),
}

/// Returns the URL a chat request for `request.provider` is posted to, without credentials.
pub fn chat_endpoint(request: &ChatCompletionRequest) -> String {
    match request.provider {
        AssistantProvider::OpenAi => OPENAI_CHAT_ENDPOINT.to_string(),
        AssistantProvider::Groq => GROQ_CHAT_ENDPOINT.to_string(),
        AssistantProvider::Gemini => {
            format!("{GEMINI_ENDPOINT_BASE}/{}:generateContent", request.model)
        }
    }
}

/// Returns how `request` authenticates. Gemini takes the key in the query string.
pub fn chat_auth(request: &ChatCompletionRequest) -> ChatAuth<'_> {
    match request.provider {
        AssistantProvider::Gemini => ChatAuth::QueryKey(&request.api_key),
        AssistantProvider::OpenAi | AssistantProvider::Groq => ChatAuth::Bearer(&request.api_key),
    }
}

/// Builds the JSON body for a chat request.
pub fn build_chat_request_body(request: &ChatCompletionRequest) -> Value {
    match request.provider {
        AssistantProvider::OpenAi | AssistantProvider::Groq => json!({
            "model": request.model,
            "messages": request
                .messages
                .iter()
                .map(|message| json!({ "role": message.role.token(), "content": message.content }))
                .collect::<Vec<_>>(),
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        }),
        AssistantProvider::Gemini => {
            // gemini-pro has no system role; persona text is prepended to the first user turn.
            let system: Vec<&str> = request
                .messages
                .iter()
                .filter(|message| message.role == ChatRole::System)
                .map(|message| message.content.as_str())
                .collect();
            let mut preamble = (!system.is_empty()).then(|| system.join("\n"));
            let contents: Vec<Value> = request
                .messages
                .iter()
                .filter(|message| message.role != ChatRole::System)
                .map(|message| {
                    let role = if message.role == ChatRole::Assistant {
                        "model"
                    } else {
                        "user"
                    };
                    let text = match (message.role, preamble.take()) {
                        (ChatRole::User, Some(preamble)) => {
                            format!("{preamble}\n\n{}", message.content)
                        }
                        (_, pending) => {
                            preamble = pending;
                            message.content.clone()
                        }
                    };
                    json!({ "role": role, "parts": [{ "text": text }] })
                })
                .collect();
            json!({
                "contents": contents,
                "generationConfig": {
                    "temperature": request.temperature,
                    "maxOutputTokens": request.max_tokens,
                },
            })
        }
    }
}

/// Extracts the reply text from a decoded chat response body.
///
/// # Errors
///
/// Returns [`AssistantError::EmptyResponse`] when the body carries no text.
pub fn parse_chat_response(
    provider: AssistantProvider,
    body: &Value,
) -> Result<String, AssistantError> {
    let text = match provider {
        AssistantProvider::OpenAi | AssistantProvider::Groq => {
            body.pointer("/choices/0/message/content")
        }
        AssistantProvider::Gemini => body.pointer("/candidates/0/content/parts/0/text"),
    }
    .and_then(Value::as_str)
    .map(str::trim)
    .unwrap_or_default();

    if text.is_empty() {
        return Err(AssistantError::EmptyResponse);
    }
    Ok(text.to_string())
}

/// Returns the synthesis URL for `voice_id`.
pub fn speech_endpoint(voice_id: &str) -> String {
    format!("{ELEVENLABS_TTS_ENDPOINT}/{voice_id}")
}

/// Builds the JSON body for an ElevenLabs synthesis request.
pub fn build_speech_body(request: &SpeechRequest) -> Value {
    json!({
        "text": request.text,
        "model_id": ELEVENLABS_MODEL_ID,
        "voice_settings": {
            "stability": 0.5,
            "similarity_boost": 0.75,
        },
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::assistant::ChatMessage;

    fn request(provider: AssistantProvider) -> ChatCompletionRequest {
        ChatCompletionRequest::new(
            provider,
            "secret",
            vec![
                ChatMessage::new(ChatRole::System, "You are Joi."),
                ChatMessage::new(ChatRole::User, "hello"),
                ChatMessage::new(ChatRole::Assistant, "hi there"),
                ChatMessage::new(ChatRole::User, "how are you?"),
            ],
        )
    }

    #[test]
    fn openai_compatible_body_keeps_roles() {
        let body = build_chat_request_body(&request(AssistantProvider::Groq).with_max_tokens(200));
        assert_eq!(body["model"], "mixtral-8x7b-32768");
        assert_eq!(body["max_tokens"], 200);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][2]["role"], "assistant");
        assert_eq!(body["messages"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn gemini_body_folds_system_into_first_user_turn() {
        let body = build_chat_request_body(&request(AssistantProvider::Gemini));
        let contents = body["contents"].as_array().expect("contents");
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[0]["parts"][0]["text"], "You are Joi.\n\nhello");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["parts"][0]["text"], "how are you?");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 1024);
    }

    #[test]
    fn endpoints_follow_provider() {
        assert_eq!(
            chat_endpoint(&request(AssistantProvider::OpenAi)),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            chat_endpoint(&request(AssistantProvider::Gemini)),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
        assert_eq!(
            speech_endpoint("voice-1"),
            "https://api.elevenlabs.io/v1/text-to-speech/voice-1"
        );
    }

    #[test]
    fn gemini_key_stays_out_of_the_url() {
        let mut gemini = request(AssistantProvider::Gemini);
        gemini.api_key = "a&b=c d".to_string();
        assert!(!chat_endpoint(&gemini).contains("a&b"));
        assert_eq!(chat_auth(&gemini), ChatAuth::QueryKey("a&b=c d"));
        assert_eq!(
            chat_auth(&request(AssistantProvider::Groq)),
            ChatAuth::Bearer("secret")
        );
    }

    #[test]
    fn parses_reply_text_per_provider() {
        let openai = json!({ "choices": [{ "message": { "content": " Hello! " } }] });
        assert_eq!(
            parse_chat_response(AssistantProvider::OpenAi, &openai),
            Ok("Hello!".to_string())
        );

        let gemini = json!({ "candidates": [{ "content": { "parts": [{ "text": "Hi" }] } }] });
        assert_eq!(
            parse_chat_response(AssistantProvider::Gemini, &gemini),
            Ok("Hi".to_string())
        );

        assert_eq!(
            parse_chat_response(AssistantProvider::Groq, &json!({ "choices": [] })),
            Err(AssistantError::EmptyResponse)
        );
    }

    #[test]
    fn speech_body_uses_fixed_voice_settings() {
        let body = build_speech_body(&SpeechRequest {
            api_key: "k".into(),
            voice_id: "v".into(),
            text: "hello".into(),
        });
        assert_eq!(body["model_id"], "eleven_monolingual_v1");
        assert_eq!(body["voice_settings"]["stability"], 0.5);
        assert_eq!(body["voice_settings"]["similarity_boost"], 0.75);
    }
}
