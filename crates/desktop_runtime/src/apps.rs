//! Content registry: the static table binding each [`AppId`] to its icon, launcher placement,
//! and content provider.

mod app_store;

use desktop_app_contract::AppModule;
use system_ui::IconName;

use crate::model::AppId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Static registry row for one window identifier.
pub struct AppDescriptor {
    /// Window identifier.
    pub app_id: AppId,
    /// Icon shown on the taskbar, launcher, desktop, and titlebar.
    pub icon: IconName,
    /// One-line description shown in launcher tooltips.
    pub description: &'static str,
}

const APP_REGISTRY: [AppDescriptor; 15] = [
    AppDescriptor {
        app_id: AppId::FileExplorer,
        icon: IconName::Folder,
        description: "Browse and organize files",
    },
    AppDescriptor {
        app_id: AppId::Chrome,
        icon: IconName::Globe,
        description: "Browse the web archive",
    },
    AppDescriptor {
        app_id: AppId::Firefox,
        icon: IconName::Monitor,
        description: "Browse the web archive",
    },
    AppDescriptor {
        app_id: AppId::Word,
        icon: IconName::DocumentText,
        description: "Write documents",
    },
    AppDescriptor {
        app_id: AppId::Excel,
        icon: IconName::Table,
        description: "Edit spreadsheets",
    },
    AppDescriptor {
        app_id: AppId::Intranet,
        icon: IconName::Network,
        description: "Company portal",
    },
    AppDescriptor {
        app_id: AppId::AiEmployees,
        icon: IconName::People,
        description: "Manage AI agents",
    },
    AppDescriptor {
        app_id: AppId::ChatGpt,
        icon: IconName::Chat,
        description: "Chat with OpenAI",
    },
    AppDescriptor {
        app_id: AppId::Gemini,
        icon: IconName::Bot,
        description: "Chat with Gemini",
    },
    AppDescriptor {
        app_id: AppId::YouTube,
        icon: IconName::Video,
        description: "Watch videos",
    },
    AppDescriptor {
        app_id: AppId::Joi,
        icon: IconName::Heart,
        description: "Your AI companion",
    },
    AppDescriptor {
        app_id: AppId::CreativeWriter,
        icon: IconName::Book,
        description: "Generate stories and characters",
    },
    AppDescriptor {
        app_id: AppId::Kasm,
        icon: IconName::Display,
        description: "Remote workspaces",
    },
    AppDescriptor {
        app_id: AppId::AppStore,
        icon: IconName::Store,
        description: "Discover web apps",
    },
    AppDescriptor {
        app_id: AppId::Settings,
        icon: IconName::Settings,
        description: "Personalize the desktop",
    },
];

const LAUNCHER_APPS: [AppId; 12] = [
    AppId::FileExplorer,
    AppId::Chrome,
    AppId::Firefox,
    AppId::Word,
    AppId::Excel,
    AppId::AiEmployees,
    AppId::ChatGpt,
    AppId::Gemini,
    AppId::YouTube,
    AppId::Joi,
    AppId::CreativeWriter,
    AppId::Kasm,
];

const DESKTOP_ICON_APPS: [AppId; 13] = [
    AppId::FileExplorer,
    AppId::Chrome,
    AppId::Firefox,
    AppId::Word,
    AppId::Excel,
    AppId::Intranet,
    AppId::AiEmployees,
    AppId::ChatGpt,
    AppId::Gemini,
    AppId::YouTube,
    AppId::Joi,
    AppId::CreativeWriter,
    AppId::Kasm,
];

/// Returns the full registry table.
pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

/// Returns the registry row for `app_id`.
pub fn app_descriptor(app_id: AppId) -> &'static AppDescriptor {
    // Rows are declared in `AppId::ALL` order.
    &APP_REGISTRY[app_id as usize]
}

/// Icon for an identifier.
pub fn icon_for(app_id: AppId) -> IconName {
    app_descriptor(app_id).icon
}

/// Icon for a window label; unknown labels get the neutral globe.
pub fn icon_for_label(label: &str) -> IconName {
    AppId::from_label(label).map_or(IconName::Globe, icon_for)
}

/// Pinned launcher entries in display order.
pub fn launcher_apps() -> &'static [AppId] {
    &LAUNCHER_APPS
}

/// Desktop shortcut entries in display order.
pub fn desktop_icon_apps() -> &'static [AppId] {
    &DESKTOP_ICON_APPS
}

/// Launcher entries whose label contains `query`, ignoring case. A blank query keeps all.
pub fn filter_launcher_apps(query: &str) -> Vec<AppId> {
    let needle = query.trim().to_lowercase();
    launcher_apps()
        .iter()
        .copied()
        .filter(|id| needle.is_empty() || id.label().to_lowercase().contains(&needle))
        .collect()
}

/// Binds an identifier to its content provider.
pub fn resolve(app_id: AppId) -> AppModule {
    match app_id {
        AppId::FileExplorer => AppModule::new(desktop_app_explorer::mount_explorer_app),
        AppId::Chrome => AppModule::new(desktop_app_browser::mount_chrome_app),
        AppId::Firefox => AppModule::new(desktop_app_browser::mount_firefox_app),
        AppId::Word => AppModule::new(desktop_app_office::mount_word_app),
        AppId::Excel => AppModule::new(desktop_app_office::mount_excel_app),
        AppId::Intranet => AppModule::new(desktop_app_workspace::mount_intranet_app),
        AppId::AiEmployees => AppModule::new(desktop_app_workspace::mount_ai_employees_app),
        AppId::ChatGpt => AppModule::new(desktop_app_assistant::mount_chatgpt_app),
        AppId::Gemini => AppModule::new(desktop_app_assistant::mount_gemini_app),
        AppId::YouTube => AppModule::new(desktop_app_browser::mount_youtube_app),
        AppId::Joi => AppModule::new(desktop_app_assistant::mount_joi_app),
        AppId::CreativeWriter => AppModule::new(desktop_app_assistant::mount_creative_writer_app),
        AppId::Kasm => AppModule::new(desktop_app_workspace::mount_kasm_app),
        AppId::AppStore => AppModule::new(app_store::mount_app_store_app),
        AppId::Settings => AppModule::new(desktop_app_settings::mount_settings_app),
    }
}

/// Resolves a window label; unknown labels get the empty module.
pub fn resolve_label(label: &str) -> AppModule {
    AppId::from_label(label).map_or(AppModule::empty(), resolve)
}

/// Loads a content provider on first reference.
///
/// Providers are linked into the bundle, so this resolves on the first poll; the window body
/// still goes through `Suspense` so a code-split provider can slot in without changing callers.
pub async fn load_app_module(app_id: AppId) -> AppModule {
    resolve(app_id)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_rows_follow_identifier_order() {
        for id in AppId::ALL {
            assert_eq!(app_descriptor(id).app_id, id);
        }
    }

    #[test]
    fn launcher_and_desktop_orders_match_catalog() {
        let labels: Vec<&str> = launcher_apps().iter().map(|id| id.label()).collect();
        assert_eq!(
            labels,
            vec![
                "File Explorer",
                "Chrome",
                "Firefox",
                "Word",
                "Excel",
                "AI Employees",
                "ChatGPT",
                "Gemini",
                "YouTube",
                "Joi",
                "Creative Writer",
                "Kasm",
            ]
        );
        assert_eq!(desktop_icon_apps()[5], AppId::Intranet);
        assert_eq!(desktop_icon_apps().len(), launcher_apps().len() + 1);
    }

    #[test]
    fn unknown_labels_fall_back() {
        assert_eq!(icon_for_label("Solitaire"), IconName::Globe);
        assert_eq!(icon_for_label("Word"), IconName::DocumentText);
        assert!(resolve_label("Solitaire").is_empty());
        assert!(!resolve_label("Kasm").is_empty());
    }

    #[test]
    fn every_identifier_resolves_to_a_provider() {
        for id in AppId::ALL {
            assert!(!block_on(load_app_module(id)).is_empty(), "{id}");
        }
    }

    #[test]
    fn launcher_filter_is_case_insensitive() {
        assert_eq!(
            filter_launcher_apps("fire"),
            vec![AppId::Firefox]
        );
        assert_eq!(
            filter_launcher_apps("GE"),
            vec![AppId::Gemini]
        );
        assert_eq!(filter_launcher_apps("  ").len(), launcher_apps().len());
        assert!(filter_launcher_apps("zzz").is_empty());
    }
}
