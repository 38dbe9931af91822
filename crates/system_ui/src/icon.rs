//! Centralized icon catalog.
//!
//! Shell and app code refer to icons by [`IconName`] only; the SVG markup lives here so no
//! component embeds raw icon strings. Window chrome and document glyphs follow Fluent UI System
//! Icons (regular 24px); the remaining glyphs are drawn on the same 24px grid.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers.
pub enum IconName {
    /// Folder / file explorer.
    Folder,
    /// Globe; also the fallback for unknown windows.
    Globe,
    /// Monitor.
    Monitor,
    /// Remote display.
    Display,
    /// Text document.
    DocumentText,
    /// Spreadsheet table.
    Table,
    /// Network of nodes.
    Network,
    /// Group of people.
    People,
    /// Speech bubble.
    Chat,
    /// Robot head.
    Bot,
    /// Video player.
    Video,
    /// Heart.
    Heart,
    /// Book.
    Book,
    /// Shopping bag.
    Store,
    /// Settings gear.
    Settings,
    /// Start/launcher button glyph.
    Launcher,
    /// Magnifier.
    Search,
    /// Power / log out.
    Power,
    /// Single person.
    Person,
    /// Key.
    Key,
    /// Picture.
    Image,
    /// Plus sign.
    Add,
    /// Trash can.
    Delete,
    /// Floppy disk.
    Save,
    /// Paper plane.
    Send,
    /// Speaker.
    Speaker,
    /// Upward arrow.
    ArrowUp,
    /// Back arrow.
    ArrowLeft,
    /// Forward arrow.
    ArrowRight,
    /// Reload arrow.
    ArrowClockwise,
    /// Download arrow into a tray.
    ArrowDownload,
    /// Upload arrow out of a tray.
    ArrowUpload,
    /// Open in a new tab.
    Open,
    /// Pencil.
    Edit,
    /// Window minimize control.
    WindowMinimize,
    /// Window maximize control.
    WindowMaximize,
    /// Window restore control.
    WindowRestore,
    /// Dismiss/close.
    Dismiss,
}

impl IconName {
    /// Every icon, in declaration order.
    pub const ALL: [IconName; 38] = [
        Self::Folder,
        Self::Globe,
        Self::Monitor,
        Self::Display,
        Self::DocumentText,
        Self::Table,
        Self::Network,
        Self::People,
        Self::Chat,
        Self::Bot,
        Self::Video,
        Self::Heart,
        Self::Book,
        Self::Store,
        Self::Settings,
        Self::Launcher,
        Self::Search,
        Self::Power,
        Self::Person,
        Self::Key,
        Self::Image,
        Self::Add,
        Self::Delete,
        Self::Save,
        Self::Send,
        Self::Speaker,
        Self::ArrowUp,
        Self::ArrowLeft,
        Self::ArrowRight,
        Self::ArrowClockwise,
        Self::ArrowDownload,
        Self::ArrowUpload,
        Self::Open,
        Self::Edit,
        Self::WindowMinimize,
        Self::WindowMaximize,
        Self::WindowRestore,
        Self::Dismiss,
    ];

    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Globe => "globe",
            Self::Monitor => "monitor",
            Self::Display => "display",
            Self::DocumentText => "document-text",
            Self::Table => "table",
            Self::Network => "network",
            Self::People => "people",
            Self::Chat => "chat",
            Self::Bot => "bot",
            Self::Video => "video",
            Self::Heart => "heart",
            Self::Book => "book",
            Self::Store => "store",
            Self::Settings => "settings",
            Self::Launcher => "launcher",
            Self::Search => "search",
            Self::Power => "power",
            Self::Person => "person",
            Self::Key => "key",
            Self::Image => "image",
            Self::Add => "add",
            Self::Delete => "delete",
            Self::Save => "save",
            Self::Send => "send",
            Self::Speaker => "speaker",
            Self::ArrowUp => "arrow-up",
            Self::ArrowLeft => "arrow-left",
            Self::ArrowRight => "arrow-right",
            Self::ArrowClockwise => "arrow-clockwise",
            Self::ArrowDownload => "arrow-download",
            Self::ArrowUpload => "arrow-upload",
            Self::Open => "open",
            Self::Edit => "edit",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Folder => {
                r#"<path d="M3.5 6.25c0-.97.78-1.75 1.75-1.75h2.88c.2 0 .39.08.53.22l2.06 2.06c.14.14.33.22.53.22h5.5c.97 0 1.75.78 1.75 1.75 0 .09.01.17.04.25H8.72c-1.34 0-2.58.71-3.25 1.87L3.5 14.28V6.25ZM2 17.79A3.25 3.25 0 0 0 5.25 21h11.04c1.33 0 2.57-.72 3.24-1.88l3.03-5.25A3.25 3.25 0 0 0 19.96 9a.75.75 0 0 0 .04-.25c0-1.8-1.45-3.25-3.25-3.25h-5.19L9.72 3.66c-.42-.42-1-.66-1.6-.66H5.26A3.25 3.25 0 0 0 2 6.25V17.79Zm6.72-7.3h11.03a1.75 1.75 0 0 1 1.51 2.63l-3.03 5.25c-.4.7-1.14 1.13-1.95 1.13H5.25a1.75 1.75 0 0 1-1.51-2.63l3.03-5.25c.4-.7 1.14-1.12 1.95-1.12Z"/>"#
            }
            Self::Globe => {
                r#"<path fill-rule="evenodd" d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20Zm0 1.5a8.5 8.5 0 1 1 0 17 8.5 8.5 0 0 1 0-17Z"/><path fill-rule="evenodd" d="M12 2c2.2 0 4 4.48 4 10s-1.8 10-4 10-4-4.48-4-10 1.8-10 4-10Zm0 1.5c-1.1 0-2.5 3.5-2.5 8.5s1.4 8.5 2.5 8.5 2.5-3.5 2.5-8.5-1.4-8.5-2.5-8.5Z"/><rect x="2.5" y="11.25" width="19" height="1.5" rx=".75"/>"#
            }
            Self::Monitor => {
                r#"<path fill-rule="evenodd" d="M3 4h18a1 1 0 0 1 1 1v11a1 1 0 0 1-1 1H3a1 1 0 0 1-1-1V5a1 1 0 0 1 1-1Zm.5 1.5v10h17v-10h-17Z"/><rect x="8" y="19" width="8" height="1.5" rx=".75"/>"#
            }
            Self::Display => {
                r#"<path fill-rule="evenodd" d="M3 3h18a1 1 0 0 1 1 1v12a1 1 0 0 1-1 1h-7.25v2.5H17V21H7v-1.5h3.25V17H3a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1Zm.5 1.5v11h17v-11h-17Z"/><rect x="6" y="7" width="12" height="6" rx="1"/>"#
            }
            Self::DocumentText => {
                r#"<path d="M8.75 11.5a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm4.84-14.41L19.4 8.4A2 2 0 0 1 20 9.83V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2h6.17c.52 0 1.05.22 1.42.59ZM18 20.5a.5.5 0 0 0 .5-.5V10H14a2 2 0 0 1-2-2V3.5H6a.5.5 0 0 0-.5.5v16c0 .27.22.5.5.5h12Zm-.62-12L13.5 4.62V8c0 .28.22.5.5.5h3.38Z"/>"#
            }
            Self::Table => {
                r#"<path fill-rule="evenodd" d="M4 3h16a1 1 0 0 1 1 1v16a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1Zm.5 1.5v15h15v-15h-15Z"/><rect x="4" y="8.25" width="16" height="1.5"/><rect x="4" y="13.75" width="16" height="1.5"/><rect x="9.25" y="4" width="1.5" height="16"/>"#
            }
            Self::Network => {
                r#"<rect x="9" y="2" width="6" height="5" rx="1"/><rect x="2" y="16" width="6" height="5" rx="1"/><rect x="16" y="16" width="6" height="5" rx="1"/><rect x="11.25" y="7" width="1.5" height="5"/><rect x="4.25" y="11.25" width="15.5" height="1.5"/><rect x="4.25" y="12" width="1.5" height="4"/><rect x="18.25" y="12" width="1.5" height="4"/>"#
            }
            Self::People => {
                r#"<circle cx="9" cy="8" r="3.5"/><circle cx="17" cy="9" r="2.5"/><path d="M2 19c0-3.3 3.1-5.5 7-5.5s7 2.2 7 5.5v1H2v-1Z"/><path d="M17.5 13.5c2.6.2 4.5 1.8 4.5 4.5v1h-4.5v-1c0-1.7-.6-3.2-1.7-4.3.5-.1 1.1-.2 1.7-.2Z"/>"#
            }
            Self::Chat => {
                r#"<path fill-rule="evenodd" d="M5 3h14a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2h-7l-5 4v-4H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2Zm0 1.5a.5.5 0 0 0-.5.5v10c0 .28.22.5.5.5h3.5v2.9l3.6-2.9H19a.5.5 0 0 0 .5-.5V5a.5.5 0 0 0-.5-.5H5Z"/>"#
            }
            Self::Bot => {
                r#"<path fill-rule="evenodd" d="M6 7h12a3 3 0 0 1 3 3v7a3 3 0 0 1-3 3H6a3 3 0 0 1-3-3v-7a3 3 0 0 1 3-3Zm0 1.5A1.5 1.5 0 0 0 4.5 10v7c0 .83.67 1.5 1.5 1.5h12c.83 0 1.5-.67 1.5-1.5v-7c0-.83-.67-1.5-1.5-1.5H6Z"/><circle cx="9" cy="13" r="1.5"/><circle cx="15" cy="13" r="1.5"/><rect x="11.25" y="3" width="1.5" height="4"/><circle cx="12" cy="3" r="1.25"/>"#
            }
            Self::Video => {
                r#"<path fill-rule="evenodd" d="M5 4h14a3 3 0 0 1 3 3v10a3 3 0 0 1-3 3H5a3 3 0 0 1-3-3V7a3 3 0 0 1 3-3Zm0 1.5A1.5 1.5 0 0 0 3.5 7v10c0 .83.67 1.5 1.5 1.5h14c.83 0 1.5-.67 1.5-1.5V7c0-.83-.67-1.5-1.5-1.5H5Z"/><path d="M10 8.5v7l6-3.5-6-3.5Z"/>"#
            }
            Self::Heart => {
                r#"<path d="M12 20.5 3.8 12.6A5 5 0 0 1 12 6.3a5 5 0 0 1 8.2 6.3L12 20.5Z"/>"#
            }
            Self::Book => {
                r#"<path fill-rule="evenodd" d="M6 2h13a1 1 0 0 1 1 1v18a1 1 0 0 1-1 1H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2Zm0 1.5a.5.5 0 0 0-.5.5v13.55c.16-.03.33-.05.5-.05h12.5v-14H6Zm-.5 16.5c0 .28.22.5.5.5h12.5V19H6a.5.5 0 0 0-.5.5v.5Z"/>"#
            }
            Self::Store => {
                r#"<path fill-rule="evenodd" d="M8 6V5a4 4 0 1 1 8 0v1h3a1 1 0 0 1 1 1v13a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V7a1 1 0 0 1 1-1h3Zm1.5 0h5V5a2.5 2.5 0 0 0-5 0v1Zm-4 1.5V20c0 .28.22.5.5.5h12a.5.5 0 0 0 .5-.5V7.5h-13Z"/>"#
            }
            Self::Settings => {
                r#"<path d="M12 2a1 1 0 0 1 .98.8l.25 1.2a8.1 8.1 0 0 1 1.74.72l1.06-.64a1 1 0 0 1 1.24.15l1.58 1.58a1 1 0 0 1 .15 1.24l-.64 1.06c.3.55.54 1.13.72 1.74l1.2.25a1 1 0 0 1 .8.98v2.24a1 1 0 0 1-.8.98l-1.2.25a8.1 8.1 0 0 1-.72 1.74l.64 1.06a1 1 0 0 1-.15 1.24l-1.58 1.58a1 1 0 0 1-1.24.15l-1.06-.64a8.1 8.1 0 0 1-1.74.72l-.25 1.2a1 1 0 0 1-.98.8H9.76a1 1 0 0 1-.98-.8l-.25-1.2a8.1 8.1 0 0 1-1.74-.72l-1.06.64a1 1 0 0 1-1.24-.15l-1.58-1.58a1 1 0 0 1-.15-1.24l.64-1.06a8.1 8.1 0 0 1-.72-1.74l-1.2-.25a1 1 0 0 1-.8-.98V9.76a1 1 0 0 1 .8-.98l1.2-.25c.18-.61.42-1.19.72-1.74l-.64-1.06a1 1 0 0 1 .15-1.24l1.58-1.58a1 1 0 0 1 1.24-.15l1.06.64c.55-.3 1.13-.54 1.74-.72l.25-1.2A1 1 0 0 1 9.76 2H12Zm-1 6a3 3 0 1 1 0 6 3 3 0 0 1 0-6Zm0 1.5a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3Z"/>"#
            }
            Self::Launcher => {
                r#"<rect x="3" y="3" width="8" height="8" rx="1.5"/><rect x="13" y="3" width="8" height="8" rx="1.5"/><rect x="3" y="13" width="8" height="8" rx="1.5"/><rect x="13" y="13" width="8" height="8" rx="1.5"/>"#
            }
            Self::Search => {
                r#"<path fill-rule="evenodd" d="M10 3a7 7 0 0 1 5.6 11.2l5.1 5.1-1.1 1.1-5.1-5.1A7 7 0 1 1 10 3Zm0 1.5a5.5 5.5 0 1 0 0 11 5.5 5.5 0 0 0 0-11Z"/>"#
            }
            Self::Power => {
                r#"<rect x="11.25" y="2" width="1.5" height="9" rx=".75"/><path d="M7.05 5.2a.75.75 0 0 1 .8 1.27 7 7 0 1 0 8.3 0 .75.75 0 1 1 .8-1.27 8.5 8.5 0 1 1-9.9 0Z"/>"#
            }
            Self::Person => {
                r#"<circle cx="12" cy="8" r="4"/><path d="M4 20c0-3.87 3.58-6 8-6s8 2.13 8 6v1H4v-1Z"/>"#
            }
            Self::Key => {
                r#"<path fill-rule="evenodd" d="M15 2a7 7 0 1 1-2.73 13.45L10.7 17H9v2H7v2H3v-4l6.55-6.55A7 7 0 0 1 15 2Zm0 1.5a5.5 5.5 0 0 0-5.1 7.57l.19.47L4.5 17.13v2.37h1v-2h2v-2h2.58l2.2-2.2.47.2A5.5 5.5 0 1 0 15 3.5Zm1.5 2.5a1.5 1.5 0 1 1 0 3 1.5 1.5 0 0 1 0-3Z"/>"#
            }
            Self::Image => {
                r#"<path fill-rule="evenodd" d="M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2Zm0 1.5a.5.5 0 0 0-.5.5v10.94l4.47-4.47a.75.75 0 0 1 1.06 0L14 15.44l1.97-1.97a.75.75 0 0 1 1.06 0l2.47 2.47V5a.5.5 0 0 0-.5-.5H5Z"/><circle cx="15.5" cy="8.5" r="1.5"/>"#
            }
            Self::Add => {
                r#"<rect x="11.25" y="4" width="1.5" height="16" rx=".75"/><rect x="4" y="11.25" width="16" height="1.5" rx=".75"/>"#
            }
            Self::Delete => {
                r#"<path fill-rule="evenodd" d="M9 3h6a1 1 0 0 1 1 1v1h4v1.5h-1.1l-1 13.6A2 2 0 0 1 15.9 22H8.1a2 2 0 0 1-2-1.9L5.1 6.5H4V5h4V4a1 1 0 0 1 1-1Zm.5 2h5v-.5h-5V5Zm-2.9 1.5.99 13.49c.02.28.25.51.51.51h7.8c.26 0 .49-.23.51-.51l.99-13.49H6.6Z"/>"#
            }
            Self::Save => {
                r#"<path fill-rule="evenodd" d="M5 3h11.6L21 7.4V19a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2Zm0 1.5a.5.5 0 0 0-.5.5v14c0 .28.22.5.5.5h1.5V13h11v6.5H19a.5.5 0 0 0 .5-.5V8.02L15.98 4.5H15.5V9h-8V4.5H5Zm4 0v3h5v-3H9Zm-1 10v5h8v-5H8Z"/>"#
            }
            Self::Send => r#"<path d="M3 20.5 21 12 3 3.5l.01 6.6L15 12 3.01 13.9 3 20.5Z"/>"#,
            Self::Speaker => {
                r#"<path d="M4 9h3.5L12 5v14l-4.5-4H4a1 1 0 0 1-1-1v-4a1 1 0 0 1 1-1Z"/><path d="M15.5 8.5a5 5 0 0 1 0 7l-1.06-1.06a3.5 3.5 0 0 0 0-4.88L15.5 8.5Z"/>"#
            }
            Self::ArrowUp => {
                r#"<path d="M12 4 5 11l1.06 1.06 5.19-5.19V20h1.5V6.87l5.19 5.19L19 11l-7-7Z"/>"#
            }
            Self::ArrowLeft => {
                r#"<path d="m4 12 7-7 1.06 1.06-5.19 5.19H20v1.5H6.87l5.19 5.19L11 19l-7-7Z"/>"#
            }
            Self::ArrowRight => {
                r#"<path d="m20 12-7-7-1.06 1.06 5.19 5.19H4v1.5h13.13l-5.19 5.19L13 19l7-7Z"/>"#
            }
            Self::ArrowClockwise => {
                r#"<path d="M12 4.5a7.5 7.5 0 1 0 7.5 7.5H21a9 9 0 1 1-2.64-6.36V3H20v5h-5V6.5h2.3A7.47 7.47 0 0 0 12 4.5Z"/>"#
            }
            Self::ArrowDownload => {
                r#"<path d="M11.25 3h1.5v10.13l3.72-3.72 1.06 1.06L12 16l-5.53-5.53 1.06-1.06 3.72 3.72V3Z"/><rect x="4" y="19" width="16" height="1.5" rx=".75"/>"#
            }
            Self::ArrowUpload => {
                r#"<path d="M12 3l5.53 5.53-1.06 1.06-3.72-3.72V16h-1.5V5.87L7.53 9.59 6.47 8.53 12 3Z"/><rect x="4" y="19" width="16" height="1.5" rx=".75"/>"#
            }
            Self::Open => {
                r#"<path d="M6 4h5v1.5H6a.5.5 0 0 0-.5.5v12c0 .28.22.5.5.5h12a.5.5 0 0 0 .5-.5v-5H20v5a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6c0-1.1.9-2 2-2Z"/><path d="M14 3h7v7h-1.5V5.56l-7.47 7.47-1.06-1.06 7.47-7.47H14V3Z"/>"#
            }
            Self::Edit => {
                r#"<path fill-rule="evenodd" d="M16.6 3.4a2 2 0 0 1 2.83 0l1.17 1.17a2 2 0 0 1 0 2.83L9 19 3 21l2-6L16.6 3.4Zm1.77 1.06a.5.5 0 0 0-.7 0L16.06 6.06l1.88 1.88 1.6-1.6a.5.5 0 0 0 0-.7l-1.17-1.18ZM16.88 9 15 7.12 6.3 15.82l-.93 2.81 2.81-.93L16.88 9Z"/>"#
            }
            Self::WindowMinimize => {
                r#"<path d="M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#
            }
            Self::WindowMaximize => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM6.25 4.5c-.97 0-1.75.78-1.75 1.75v11.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V6.25c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
            }
            Self::WindowRestore => {
                r#"<path d="M7.52 5H6c.13-1.68 1.53-3 3.24-3h8A4.75 4.75 0 0 1 22 6.75v8a3.25 3.25 0 0 1-3 3.24v-1.5c.85-.13 1.5-.86 1.5-1.74v-8c0-1.8-1.46-3.25-3.25-3.25h-8c-.88 0-1.61.65-1.73 1.5ZM5.25 6A3.25 3.25 0 0 0 2 9.25v9.5C2 20.55 3.46 22 5.25 22h9.5c1.8 0 3.25-1.46 3.25-3.25v-9.5C18 7.45 16.55 6 14.75 6h-9.5ZM3.5 9.25c0-.97.78-1.75 1.75-1.75h9.5c.97 0 1.75.78 1.75 1.75v9.5c0 .97-.78 1.75-1.75 1.75h-9.5c-.97 0-1.75-.78-1.75-1.75v-9.5Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 14px compact icon (window controls).
    Xs,
    /// 16px standard icon (menus, taskbar).
    #[default]
    Sm,
    /// 20px medium icon (titlebars, toolbars).
    Md,
    /// 32px large icon (desktop and launcher tiles).
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 32,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an icon from the catalog as inline SVG.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn tokens_are_unique_and_bodies_present() {
        let tokens: HashSet<_> = IconName::ALL.iter().map(|icon| icon.token()).collect();
        assert_eq!(tokens.len(), IconName::ALL.len());
        assert!(IconName::ALL
            .iter()
            .all(|icon| icon.svg_body().starts_with('<')));
    }
}
