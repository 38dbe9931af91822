//! Joi persona and voice settings.

use desktop_app_contract::StateService;
use platform_host::{keys, SpeechRequest};
use serde::{Deserialize, Serialize};

/// Persona used until the user writes their own.
pub const DEFAULT_PERSONALITY: &str = "You are Joi, an AI companion who is warm, empathetic, and \
engaging. You have a playful sense of humor and genuine interest in helping and connecting with \
humans. You form deep bonds and remember previous conversations.";

/// Name used until the user picks one.
pub const DEFAULT_NAME: &str = "Joi";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Persisted Joi settings.
pub struct JoiSettings {
    /// Display name in the header and input placeholder.
    pub name: String,
    /// System prompt sent with every request.
    pub personality: String,
    /// ElevenLabs voice id.
    #[serde(alias = "voiceId")]
    pub voice_id: String,
    /// Whether replies are spoken.
    pub voice_enabled: bool,
    /// ElevenLabs key stored inside the blob by older builds. Moved to
    /// [`keys::ELEVENLABS_KEY`] by [`JoiSettings::load`].
    #[serde(rename = "apiKey", skip_serializing_if = "Option::is_none")]
    pub legacy_api_key: Option<String>,
}

impl Default for JoiSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            personality: DEFAULT_PERSONALITY.to_string(),
            voice_id: String::new(),
            voice_enabled: false,
            legacy_api_key: None,
        }
    }
}

impl JoiSettings {
    /// Loads the persisted settings, moving a legacy in-blob ElevenLabs key into the shared key.
    ///
    /// The shared key wins when both are set. A legacy blob that had a key and a voice id spoke
    /// every reply, so voice stays enabled for it.
    pub fn load(state: &StateService) -> Self {
        let mut settings: Self = state.load(keys::JOI_SETTINGS_KEY);
        let Some(legacy) = settings.legacy_api_key.take() else {
            return settings;
        };
        let legacy = legacy.trim();
        if !legacy.is_empty() {
            if stored_key(state).is_none() {
                state.set(keys::ELEVENLABS_KEY, legacy);
            }
            if !settings.voice_id.trim().is_empty() {
                settings.voice_enabled = true;
            }
        }
        state.save(keys::JOI_SETTINGS_KEY, &settings);
        settings
    }

    /// Name to display; blank names fall back to [`DEFAULT_NAME`].
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            DEFAULT_NAME
        } else {
            name
        }
    }

    /// Speech request for `text` when voice is enabled, a voice is chosen, and an ElevenLabs
    /// key is stored.
    pub fn speech_request(&self, state: &StateService, text: &str) -> Option<SpeechRequest> {
        if !self.voice_enabled || self.voice_id.trim().is_empty() || text.trim().is_empty() {
            return None;
        }
        let api_key = stored_key(state).or_else(|| {
            self.legacy_api_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string)
        })?;
        Some(SpeechRequest {
            api_key,
            voice_id: self.voice_id.trim().to_string(),
            text: text.to_string(),
        })
    }
}

fn stored_key(state: &StateService) -> Option<String> {
    state
        .get(keys::ELEVENLABS_KEY)
        .filter(|key| !key.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use platform_host::{KeyValueStore, MemoryKeyValueStore};
    use pretty_assertions::assert_eq;

    use super::*;

    fn voiced() -> JoiSettings {
        JoiSettings {
            voice_id: "voice-1".to_string(),
            voice_enabled: true,
            ..JoiSettings::default()
        }
    }

    #[test]
    fn speech_needs_flag_voice_and_key() {
        let store = MemoryKeyValueStore::default();
        let state = StateService::new(Rc::new(store.clone()));

        assert_eq!(voiced().speech_request(&state, "hi"), None);

        store.set(keys::ELEVENLABS_KEY, "xi-key").expect("seed");
        assert_eq!(
            voiced().speech_request(&state, "hi"),
            Some(SpeechRequest {
                api_key: "xi-key".to_string(),
                voice_id: "voice-1".to_string(),
                text: "hi".to_string(),
            })
        );

        let muted = JoiSettings {
            voice_enabled: false,
            ..voiced()
        };
        assert_eq!(muted.speech_request(&state, "hi"), None);
        assert_eq!(JoiSettings::default().speech_request(&state, "hi"), None);
    }

    #[test]
    fn partial_blob_fills_defaults() {
        let settings: JoiSettings =
            serde_json::from_str(r#"{"name":"Luna"}"#).expect("valid json");
        assert_eq!(settings.display_name(), "Luna");
        assert_eq!(settings.personality, DEFAULT_PERSONALITY);
        assert!(!settings.voice_enabled);
    }

    const LEGACY_BLOB: &str =
        r#"{"personality":"Be kind.","voiceId":"v-old","apiKey":"xi-old","name":"Luna"}"#;

    #[test]
    fn legacy_blob_key_moves_to_the_shared_key() {
        let store = MemoryKeyValueStore::default();
        store.set(keys::JOI_SETTINGS_KEY, LEGACY_BLOB).expect("seed");
        let state = StateService::new(Rc::new(store.clone()));

        let settings = JoiSettings::load(&state);

        assert_eq!(settings.display_name(), "Luna");
        assert_eq!(settings.voice_id, "v-old");
        assert!(settings.voice_enabled);
        assert_eq!(settings.legacy_api_key, None);
        assert_eq!(
            store.get(keys::ELEVENLABS_KEY).expect("get"),
            Some("xi-old".to_string())
        );
        let rewritten = store.get(keys::JOI_SETTINGS_KEY).expect("get").unwrap_or_default();
        assert!(!rewritten.contains("apiKey"));
        assert_eq!(
            settings.speech_request(&state, "hi").map(|request| request.api_key),
            Some("xi-old".to_string())
        );
    }

    #[test]
    fn shared_key_wins_over_legacy_key() {
        let store = MemoryKeyValueStore::default();
        store.set(keys::JOI_SETTINGS_KEY, LEGACY_BLOB).expect("seed");
        store.set(keys::ELEVENLABS_KEY, "xi-new").expect("seed");
        let state = StateService::new(Rc::new(store.clone()));

        JoiSettings::load(&state);

        assert_eq!(
            store.get(keys::ELEVENLABS_KEY).expect("get"),
            Some("xi-new".to_string())
        );
    }

    #[test]
    fn unmigrated_legacy_key_still_speaks() {
        let state = StateService::new(Rc::new(MemoryKeyValueStore::default()));
        let settings: JoiSettings = serde_json::from_str(LEGACY_BLOB).expect("valid json");
        let settings = JoiSettings {
            voice_enabled: true,
            ..settings
        };
        assert_eq!(
            settings.speech_request(&state, "hi").map(|request| request.api_key),
            Some("xi-old".to_string())
        );
    }

    #[test]
    fn blank_name_falls_back() {
        let settings = JoiSettings {
            name: "  ".to_string(),
            ..JoiSettings::default()
        };
        assert_eq!(settings.display_name(), DEFAULT_NAME);
    }
}
