//! Persisted key catalog.
//!
//! Each key is independent and owns its own value format. Names match the keys already present
//! in users' browser storage, so they are not namespaced or versioned.

/// Session flag, `"true"` while logged in.
pub const LOGGED_IN_KEY: &str = "isLoggedIn";
/// Overridden password for the built-in `admin` user.
pub const ADMIN_PASSWORD_KEY: &str = "admin_password";
/// Desktop wallpaper URL.
pub const WALLPAPER_KEY: &str = "wallpaper";

/// OpenAI API key.
pub const OPENAI_KEY: &str = "openai_key";
/// Google Gemini API key.
pub const GEMINI_KEY: &str = "gemini_key";
/// Groq API key.
pub const GROQ_KEY: &str = "groq_key";
/// ElevenLabs API key.
pub const ELEVENLABS_KEY: &str = "elevenlabs_key";

/// Joi persona and voice settings.
pub const JOI_SETTINGS_KEY: &str = "joi_settings";
/// Saved Creative Writer results.
pub const CREATIVE_STORIES_KEY: &str = "creative_stories";
/// Word document.
pub const WORD_DOCUMENT_KEY: &str = "word_document";
/// Excel cell map.
pub const EXCEL_CELLS_KEY: &str = "excel_cells";
/// File Explorer tree.
pub const FILE_EXPLORER_TREE_KEY: &str = "file_explorer_tree";
/// AI Employees roster.
pub const AI_EMPLOYEES_KEY: &str = "ai_employees";
/// Kasm Workspaces server list.
pub const KASM_SERVERS_KEY: &str = "kasm_servers";
/// Intranet file list.
pub const INTRANET_FILES_KEY: &str = "intranet_files";

/// Returns the transcript key for a chat profile token.
pub fn assistant_transcript_key(profile: &str) -> String {
    format!("assistant_transcript.{profile}")
}

/// Returns the tab-list key for a browser flavor token.
pub fn browser_tabs_key(flavor: &str) -> String {
    format!("browser_tabs.{flavor}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_keys_embed_token() {
        assert_eq!(assistant_transcript_key("joi"), "assistant_transcript.joi");
        assert_eq!(browser_tabs_key("firefox"), "browser_tabs.firefox");
    }
}
