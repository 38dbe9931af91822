use platform_host::{
    build_chat_request_body, build_speech_body, chat_auth, chat_endpoint, parse_chat_response,
    speech_endpoint, AssistantError, AssistantFuture, ChatAuth, ChatCompletionRequest,
    ChatCompletionService, SpeechRequest, SpeechService,
};
use serde_json::Value;

const MAX_ERROR_BODY_CHARS: usize = 300;

async fn error_from_response(response: reqwest::Response) -> AssistantError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    AssistantError::Status {
        status,
        body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
    }
}

#[derive(Debug, Clone, Default)]
/// Chat-completion transport over `reqwest` (`fetch` on wasm32).
pub struct HttpChatCompletionService {
    client: reqwest::Client,
}

impl HttpChatCompletionService {
    /// Builds a service with a default client.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChatCompletionService for HttpChatCompletionService {
    fn complete<'a>(
        &'a self,
        request: ChatCompletionRequest,
    ) -> AssistantFuture<'a, Result<String, AssistantError>> {
        Box::pin(async move {
            let builder = self
                .client
                .post(chat_endpoint(&request))
                .json(&build_chat_request_body(&request));
            let builder = match chat_auth(&request) {
                ChatAuth::Bearer(key) => builder.bearer_auth(key),
                ChatAuth::QueryKey(key) => builder.query(&[("key", key)]),
            };

            let response = builder
                .send()
                .await
                .map_err(|e| AssistantError::Transport(e.to_string()))?;
            if !response.status().is_success() {
                return Err(error_from_response(response).await);
            }

            let payload: Value = response
                .json()
                .await
                .map_err(|e| AssistantError::Decode(e.to_string()))?;
            parse_chat_response(request.provider, &payload)
        })
    }
}

#[derive(Debug, Clone, Default)]
/// ElevenLabs text-to-speech transport over `reqwest`.
pub struct HttpSpeechService {
    client: reqwest::Client,
}

impl HttpSpeechService {
    /// Builds a service with a default client.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpeechService for HttpSpeechService {
    fn synthesize<'a>(
        &'a self,
        request: SpeechRequest,
    ) -> AssistantFuture<'a, Result<Vec<u8>, AssistantError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(speech_endpoint(&request.voice_id))
                .header("xi-api-key", &request.api_key)
                .header("Accept", "audio/mpeg")
                .json(&build_speech_body(&request))
                .send()
                .await
                .map_err(|e| AssistantError::Transport(e.to_string()))?;
            if !response.status().is_success() {
                return Err(error_from_response(response).await);
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| AssistantError::Decode(e.to_string()))?;
            if bytes.is_empty() {
                return Err(AssistantError::EmptyResponse);
            }
            Ok(bytes.to_vec())
        })
    }
}
