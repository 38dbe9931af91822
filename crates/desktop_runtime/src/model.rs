//! Desktop runtime data model: window identifiers, the open-window set, and session state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Wallpaper used until the user picks another one.
pub const DEFAULT_WALLPAPER_URL: &str =
    "https://images.unsplash.com/photo-1477346611705-65d1883cee1e?auto=format&fit=crop&w=1920&q=80";

/// Base CSS z-index for managed windows.
pub const WINDOW_BASE_Z_INDEX: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Identifier of a content provider and key of the open-window set.
///
/// At most one window per identifier can be open.
pub enum AppId {
    /// File Explorer.
    FileExplorer,
    /// Chrome-flavored browser.
    Chrome,
    /// Firefox-flavored browser.
    Firefox,
    /// Word processor.
    Word,
    /// Spreadsheet.
    Excel,
    /// Intranet placeholder.
    Intranet,
    /// AI Employees placeholder.
    AiEmployees,
    /// ChatGPT chat client.
    ChatGpt,
    /// Gemini chat client.
    Gemini,
    /// YouTube embed.
    YouTube,
    /// Joi companion chat.
    Joi,
    /// Creative Writer.
    CreativeWriter,
    /// Kasm remote workspace mockup.
    Kasm,
    /// App Store placeholder.
    AppStore,
    /// System settings.
    Settings,
}

impl AppId {
    /// Every identifier, in declaration order.
    pub const ALL: [AppId; 15] = [
        Self::FileExplorer,
        Self::Chrome,
        Self::Firefox,
        Self::Word,
        Self::Excel,
        Self::Intranet,
        Self::AiEmployees,
        Self::ChatGpt,
        Self::Gemini,
        Self::YouTube,
        Self::Joi,
        Self::CreativeWriter,
        Self::Kasm,
        Self::AppStore,
        Self::Settings,
    ];

    /// Stable user-facing label, also used as the window title.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FileExplorer => "File Explorer",
            Self::Chrome => "Chrome",
            Self::Firefox => "Firefox",
            Self::Word => "Word",
            Self::Excel => "Excel",
            Self::Intranet => "Intranet",
            Self::AiEmployees => "AI Employees",
            Self::ChatGpt => "ChatGPT",
            Self::Gemini => "Gemini",
            Self::YouTube => "YouTube",
            Self::Joi => "Joi",
            Self::CreativeWriter => "Creative Writer",
            Self::Kasm => "Kasm",
            Self::AppStore => "App Store",
            Self::Settings => "Settings",
        }
    }

    /// Parses a label produced by [`AppId::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.label() == label)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// One entry of the open-window set with its view flags.
pub struct WindowRecord {
    /// Window identifier.
    pub app_id: AppId,
    /// Hidden from the desktop but still open.
    pub minimized: bool,
    /// Fills the desktop area.
    pub maximized: bool,
}

impl WindowRecord {
    /// Creates a record with both flags cleared.
    pub const fn new(app_id: AppId) -> Self {
        Self {
            app_id,
            minimized: false,
            maximized: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Authoritative desktop shell state owned by the reducer.
pub struct DesktopState {
    /// Whether the session gate has been passed.
    pub logged_in: bool,
    /// Open windows in insertion order. Never contains two records with the same id.
    pub windows: Vec<WindowRecord>,
    /// Focused window, always a member of `windows` when set.
    pub focused: Option<AppId>,
    /// Launcher overlay visibility.
    pub start_menu_open: bool,
    /// Current wallpaper URL.
    pub wallpaper_url: String,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            logged_in: false,
            windows: Vec::new(),
            focused: None,
            start_menu_open: false,
            wallpaper_url: DEFAULT_WALLPAPER_URL.to_string(),
        }
    }
}

impl DesktopState {
    /// Returns the record for `app_id` if it is open.
    pub fn window(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }

    /// Returns whether `app_id` is in the open set.
    pub fn is_open(&self, app_id: AppId) -> bool {
        self.window(app_id).is_some()
    }

    /// Open identifiers in insertion order.
    pub fn open_ids(&self) -> Vec<AppId> {
        self.windows.iter().map(|w| w.app_id).collect()
    }

    /// Windows that are drawn on the desktop: open and not minimized.
    pub fn rendered_windows(&self) -> impl Iterator<Item = &WindowRecord> + '_ {
        self.windows.iter().filter(|w| !w.minimized)
    }

    /// Returns whether `app_id` gets active window chrome.
    pub fn is_active(&self, app_id: AppId) -> bool {
        self.focused == Some(app_id)
    }

    /// Stacking order for an open window.
    ///
    /// The focused window sits above every other window; the rest stack in insertion order.
    pub fn z_index(&self, app_id: AppId) -> Option<u32> {
        let index = self.windows.iter().position(|w| w.app_id == app_id)?;
        if self.is_active(app_id) {
            Some(WINDOW_BASE_Z_INDEX + self.windows.len() as u32)
        } else {
            Some(WINDOW_BASE_Z_INDEX + index as u32)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn labels_round_trip_and_unknown_labels_are_rejected() {
        for id in AppId::ALL {
            assert_eq!(AppId::from_label(id.label()), Some(id));
        }
        assert_eq!(AppId::from_label("Minesweeper"), None);
        assert_eq!(AppId::from_label("word"), None);
    }

    #[test]
    fn focused_window_stacks_above_later_windows() {
        let state = DesktopState {
            windows: vec![
                WindowRecord::new(AppId::Word),
                WindowRecord::new(AppId::Excel),
                WindowRecord::new(AppId::Chrome),
            ],
            focused: Some(AppId::Word),
            ..DesktopState::default()
        };

        let word = state.z_index(AppId::Word).unwrap();
        let excel = state.z_index(AppId::Excel).unwrap();
        let chrome = state.z_index(AppId::Chrome).unwrap();
        assert!(word > chrome);
        assert!(chrome > excel);
        assert_eq!(state.z_index(AppId::Kasm), None);
    }

    #[test]
    fn minimized_windows_are_not_rendered() {
        let mut minimized = WindowRecord::new(AppId::Excel);
        minimized.minimized = true;
        let state = DesktopState {
            windows: vec![WindowRecord::new(AppId::Word), minimized],
            ..DesktopState::default()
        };

        let rendered: Vec<AppId> = state.rendered_windows().map(|w| w.app_id).collect();
        assert_eq!(rendered, vec![AppId::Word]);
        assert_eq!(state.open_ids(), vec![AppId::Word, AppId::Excel]);
    }
}
