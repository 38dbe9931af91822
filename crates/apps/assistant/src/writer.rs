//! Creative Writer prompt modes and the saved story shelf.

use desktop_app_contract::StateService;
use platform_host::{
    AssistantError, AssistantProvider, ChatCompletionRequest, ChatCompletionService, ChatMessage,
    ChatRole,
};
use serde::{Deserialize, Serialize};

use crate::chat::resolve_api_key;

/// Completion length cap for generated pieces.
pub const WRITER_MAX_TOKENS: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What the writer generates from the user's idea.
pub enum WriterMode {
    /// Short story.
    Story,
    /// Character profile.
    Character,
    /// Five writing prompts.
    Prompts,
}

impl WriterMode {
    /// Every mode in sidebar order.
    pub const ALL: [WriterMode; 3] = [Self::Story, Self::Character, Self::Prompts];

    /// Sidebar label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Story => "Story Generator",
            Self::Character => "Character Creator",
            Self::Prompts => "Writing Prompts",
        }
    }

    /// Prompt sent to the model for `idea`.
    pub fn prompt(self, idea: &str) -> String {
        let idea = idea.trim();
        match self {
            Self::Story => format!(
                "Write a creative story based on this idea: {idea}. Make it engaging and descriptive."
            ),
            Self::Character => format!(
                "Create a detailed character profile based on this concept: {idea}. Include \
                 personality traits, background, motivations, and physical description."
            ),
            Self::Prompts => format!(
                "Generate 5 creative writing prompts related to: {idea}. Make them unique and inspiring."
            ),
        }
    }
}

/// Builds the Groq request for `idea`, failing before any I/O when the key is missing.
pub fn prepare_request(
    state: &StateService,
    mode: WriterMode,
    idea: &str,
) -> Result<ChatCompletionRequest, AssistantError> {
    let api_key = resolve_api_key(state, AssistantProvider::Groq)?;
    Ok(ChatCompletionRequest::new(
        AssistantProvider::Groq,
        api_key,
        vec![ChatMessage::new(ChatRole::User, mode.prompt(idea))],
    )
    .with_max_tokens(WRITER_MAX_TOKENS))
}

/// Generates a piece for `idea`.
pub async fn generate(
    state: &StateService,
    chat: &dyn ChatCompletionService,
    mode: WriterMode,
    idea: &str,
) -> Result<String, AssistantError> {
    let request = prepare_request(state, mode, idea)?;
    chat.complete(request).await
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One saved result.
pub struct SavedStory {
    /// Stable id.
    pub id: String,
    /// The idea the piece was generated from.
    pub title: String,
    /// Generated text.
    pub content: String,
    /// Save time in unix milliseconds.
    pub created_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Saved stories, oldest first.
pub struct StoryShelf {
    /// Saved entries.
    pub stories: Vec<SavedStory>,
}

impl StoryShelf {
    /// Saves a piece. Blank content is ignored. Returns the new id.
    pub fn save(&mut self, title: &str, content: &str, now_ms: u64) -> Option<String> {
        if content.trim().is_empty() {
            return None;
        }
        let id = format!("story-{now_ms}");
        let title = match title.trim() {
            "" => "Untitled".to_string(),
            title => title.to_string(),
        };
        self.stories.push(SavedStory {
            id: id.clone(),
            title,
            content: content.to_string(),
            created_ms: now_ms,
        });
        Some(id)
    }

    /// Deletes `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.stories.len();
        self.stories.retain(|story| story.id != id);
        self.stories.len() != before
    }

    /// Looks up a story.
    pub fn get(&self, id: &str) -> Option<&SavedStory> {
        self.stories.iter().find(|story| story.id == id)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use platform_host::{keys, KeyValueStore, MemoryKeyValueStore, RecordingChatCompletionService};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn modes_build_distinct_prompts() {
        assert_eq!(
            WriterMode::Prompts.prompt(" space pirates "),
            "Generate 5 creative writing prompts related to: space pirates. Make them unique and inspiring."
        );
        assert!(WriterMode::Character
            .prompt("a retired knight")
            .starts_with("Create a detailed character profile based on this concept: a retired knight."));
        assert!(WriterMode::Story.prompt("x").contains("creative story"));
    }

    #[test]
    fn generate_uses_groq_with_long_cap() {
        let store = MemoryKeyValueStore::default();
        store.set(keys::GROQ_KEY, "gsk").expect("seed");
        let state = StateService::new(Rc::new(store));
        let service = RecordingChatCompletionService::with_replies([Ok("Once upon a time".to_string())]);

        let result = block_on(generate(&state, &service, WriterMode::Story, "a lighthouse"));

        assert_eq!(result, Ok("Once upon a time".to_string()));
        let calls = service.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].provider, AssistantProvider::Groq);
        assert_eq!(calls[0].max_tokens, WRITER_MAX_TOKENS);
        assert_eq!(calls[0].messages.len(), 1);
    }

    #[test]
    fn generate_without_key_sends_nothing() {
        let state = StateService::new(Rc::new(MemoryKeyValueStore::default()));
        let service = RecordingChatCompletionService::default();

        let result = block_on(generate(&state, &service, WriterMode::Story, "idea"));

        assert_eq!(result, Err(AssistantError::missing_key(AssistantProvider::Groq)));
        assert!(service.calls().is_empty());
    }

    #[test]
    fn shelf_saves_and_deletes() {
        let mut shelf = StoryShelf::default();
        assert_eq!(shelf.save("idea", "   ", 1), None);

        let id = shelf.save("  ", "text", 2).expect("saved");
        assert_eq!(shelf.get(&id).map(|s| s.title.as_str()), Some("Untitled"));
        shelf.save("second", "more", 3);

        assert!(shelf.delete(&id));
        assert!(!shelf.delete(&id));
        assert_eq!(shelf.stories.len(), 1);
        assert_eq!(shelf.stories[0].title, "second");
    }
}
