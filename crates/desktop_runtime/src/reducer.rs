//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::AppCommand;
use thiserror::Error;

use crate::{
    model::{AppId, DesktopState},
    window_manager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Restore persisted session state at boot.
    Hydrate {
        /// Persisted session flag.
        logged_in: bool,
        /// Persisted wallpaper, if any.
        wallpaper_url: Option<String>,
    },
    /// Credentials were accepted.
    SessionStarted,
    /// End the session and reset all window state.
    Logout,
    /// Open a window, or bring an open one to the front.
    OpenWindow(AppId),
    /// Focus an open window without restoring it.
    FocusWindow(AppId),
    /// Focus an open window and restore it if minimized.
    ActivateWindow(AppId),
    /// Close a window.
    CloseWindow(AppId),
    /// Flip the maximized flag.
    ToggleMaximize(AppId),
    /// Flip the minimized flag.
    ToggleMinimize(AppId),
    /// Toggle the launcher overlay.
    ToggleStartMenu,
    /// Close the launcher overlay if open.
    CloseStartMenu,
    /// Replace the wallpaper URL.
    SetWallpaper {
        /// New wallpaper URL.
        url: String,
    },
    /// Command sent by a mounted app.
    HandleAppCommand(AppCommand),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host to execute.
pub enum RuntimeEffect {
    /// Persist the logged-in flag.
    PersistSession,
    /// Remove the logged-in flag.
    ClearSession,
    /// Persist the current wallpaper URL.
    PersistWallpaper,
    /// Cancel the lifetime token of a closed window and drop its cached content.
    ReleaseWindow(AppId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions whose preconditions do not hold.
pub enum ReducerError {
    /// A window or launcher action arrived while no session is active.
    #[error("`{action}` requires an active session")]
    SessionRequired {
        /// Name of the rejected action.
        action: &'static str,
    },
    /// A wallpaper change carried an empty URL.
    #[error("wallpaper url must not be empty")]
    EmptyWallpaperUrl,
}

fn require_session(state: &DesktopState, action: &'static str) -> Result<(), ReducerError> {
    if state.logged_in {
        Ok(())
    } else {
        Err(ReducerError::SessionRequired { action })
    }
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::SessionRequired`] for window and launcher actions while logged out
/// and [`ReducerError::EmptyWallpaperUrl`] for a blank wallpaper change. The state is left
/// untouched in both cases.
pub fn reduce_desktop(
    state: &mut DesktopState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::Hydrate {
            logged_in,
            wallpaper_url,
        } => {
            // A session started before hydration finished wins.
            state.logged_in |= logged_in;
            if let Some(url) = wallpaper_url.filter(|url| !url.trim().is_empty()) {
                state.wallpaper_url = url;
            }
        }
        DesktopAction::SessionStarted => {
            state.logged_in = true;
            effects.push(RuntimeEffect::PersistSession);
        }
        DesktopAction::Logout => {
            effects.extend(
                state
                    .windows
                    .iter()
                    .map(|w| RuntimeEffect::ReleaseWindow(w.app_id)),
            );
            window_manager::reset_windows(state);
            state.logged_in = false;
            effects.push(RuntimeEffect::ClearSession);
        }
        DesktopAction::OpenWindow(app_id) => {
            require_session(state, "open window")?;
            window_manager::open_window(state, app_id);
            state.start_menu_open = false;
        }
        DesktopAction::FocusWindow(app_id) => {
            require_session(state, "focus window")?;
            window_manager::focus_window(state, app_id);
        }
        DesktopAction::ActivateWindow(app_id) => {
            require_session(state, "activate window")?;
            window_manager::activate_window(state, app_id);
        }
        DesktopAction::CloseWindow(app_id) => {
            if window_manager::close_window(state, app_id) {
                effects.push(RuntimeEffect::ReleaseWindow(app_id));
            }
        }
        DesktopAction::ToggleMaximize(app_id) => {
            require_session(state, "toggle maximize")?;
            window_manager::toggle_maximize(state, app_id);
        }
        DesktopAction::ToggleMinimize(app_id) => {
            require_session(state, "toggle minimize")?;
            window_manager::toggle_minimize(state, app_id);
        }
        DesktopAction::ToggleStartMenu => {
            require_session(state, "toggle start menu")?;
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::SetWallpaper { url } => {
            let url = url.trim();
            if url.is_empty() {
                return Err(ReducerError::EmptyWallpaperUrl);
            }
            if state.wallpaper_url != url {
                state.wallpaper_url = url.to_string();
            }
            effects.push(RuntimeEffect::PersistWallpaper);
        }
        DesktopAction::HandleAppCommand(command) => {
            let action = match command {
                AppCommand::SetWallpaper { url } => DesktopAction::SetWallpaper { url },
                AppCommand::Logout => DesktopAction::Logout,
                AppCommand::OpenSettings => DesktopAction::OpenWindow(AppId::Settings),
            };
            return reduce_desktop(state, action);
        }
    }
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn logged_in() -> DesktopState {
        let mut state = DesktopState::default();
        reduce_desktop(&mut state, DesktopAction::SessionStarted).expect("login");
        state
    }

    fn dispatch(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(state, action).expect("reduce")
    }

    #[test]
    fn session_start_persists_flag() {
        let mut state = DesktopState::default();
        let effects = dispatch(&mut state, DesktopAction::SessionStarted);
        assert!(state.logged_in);
        assert_eq!(effects, vec![RuntimeEffect::PersistSession]);
    }

    #[test]
    fn window_actions_require_a_session() {
        let mut state = DesktopState::default();
        let err = reduce_desktop(&mut state, DesktopAction::OpenWindow(AppId::Word));
        assert_eq!(
            err,
            Err(ReducerError::SessionRequired {
                action: "open window"
            })
        );
        assert!(state.windows.is_empty());
    }

    #[test]
    fn open_closes_launcher() {
        let mut state = logged_in();
        dispatch(&mut state, DesktopAction::ToggleStartMenu);
        assert!(state.start_menu_open);

        dispatch(&mut state, DesktopAction::OpenWindow(AppId::ChatGpt));
        assert!(!state.start_menu_open);
        assert_eq!(state.focused, Some(AppId::ChatGpt));

        dispatch(&mut state, DesktopAction::ToggleStartMenu);
        dispatch(&mut state, DesktopAction::OpenWindow(AppId::ChatGpt));
        assert!(!state.start_menu_open);
        assert_eq!(state.open_ids(), vec![AppId::ChatGpt]);
    }

    #[test]
    fn word_excel_scenario() {
        let mut state = logged_in();
        dispatch(&mut state, DesktopAction::OpenWindow(AppId::Word));
        dispatch(&mut state, DesktopAction::OpenWindow(AppId::Excel));
        dispatch(&mut state, DesktopAction::FocusWindow(AppId::Word));
        let effects = dispatch(&mut state, DesktopAction::CloseWindow(AppId::Word));

        assert_eq!(state.open_ids(), vec![AppId::Excel]);
        assert_eq!(state.focused, None);
        assert_eq!(effects, vec![RuntimeEffect::ReleaseWindow(AppId::Word)]);
    }

    #[test]
    fn closing_unknown_window_emits_nothing() {
        let mut state = logged_in();
        let effects = dispatch(&mut state, DesktopAction::CloseWindow(AppId::Kasm));
        assert!(effects.is_empty());
    }

    #[test]
    fn taskbar_activation_restores_minimized_window() {
        let mut state = logged_in();
        dispatch(&mut state, DesktopAction::OpenWindow(AppId::Word));
        dispatch(&mut state, DesktopAction::ToggleMinimize(AppId::Word));
        assert_eq!(state.rendered_windows().count(), 0);

        dispatch(&mut state, DesktopAction::ActivateWindow(AppId::Word));
        assert_eq!(state.rendered_windows().count(), 1);
        assert!(state.is_active(AppId::Word));
    }

    #[test]
    fn logout_releases_every_window_and_clears_session() {
        let mut state = logged_in();
        dispatch(&mut state, DesktopAction::OpenWindow(AppId::Word));
        dispatch(&mut state, DesktopAction::OpenWindow(AppId::Joi));
        dispatch(&mut state, DesktopAction::ToggleStartMenu);

        let effects = dispatch(&mut state, DesktopAction::Logout);

        assert!(!state.logged_in);
        assert!(state.windows.is_empty());
        assert_eq!(state.focused, None);
        assert!(!state.start_menu_open);
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::ReleaseWindow(AppId::Word),
                RuntimeEffect::ReleaseWindow(AppId::Joi),
                RuntimeEffect::ClearSession,
            ]
        );
    }

    #[test]
    fn app_commands_route_to_shell_actions() {
        let mut state = logged_in();
        let effects = dispatch(
            &mut state,
            DesktopAction::HandleAppCommand(AppCommand::SetWallpaper {
                url: " https://example.com/sky.jpg ".to_string(),
            }),
        );
        assert_eq!(state.wallpaper_url, "https://example.com/sky.jpg");
        assert_eq!(effects, vec![RuntimeEffect::PersistWallpaper]);

        dispatch(
            &mut state,
            DesktopAction::HandleAppCommand(AppCommand::OpenSettings),
        );
        assert_eq!(state.focused, Some(AppId::Settings));

        dispatch(&mut state, DesktopAction::HandleAppCommand(AppCommand::Logout));
        assert!(!state.logged_in);
    }

    #[test]
    fn blank_wallpaper_is_rejected() {
        let mut state = logged_in();
        let before = state.wallpaper_url.clone();
        assert_eq!(
            reduce_desktop(&mut state, DesktopAction::SetWallpaper { url: "  ".into() }),
            Err(ReducerError::EmptyWallpaperUrl)
        );
        assert_eq!(state.wallpaper_url, before);
    }

    #[test]
    fn hydrate_ignores_blank_wallpaper() {
        let mut state = DesktopState::default();
        let default_url = state.wallpaper_url.clone();
        dispatch(
            &mut state,
            DesktopAction::Hydrate {
                logged_in: true,
                wallpaper_url: Some(String::new()),
            },
        );
        assert!(state.logged_in);
        assert_eq!(state.wallpaper_url, default_url);
    }

    fn any_action() -> impl Strategy<Value = DesktopAction> {
        let id = prop::sample::select(AppId::ALL.to_vec());
        prop_oneof![
            id.clone().prop_map(DesktopAction::OpenWindow),
            id.clone().prop_map(DesktopAction::FocusWindow),
            id.clone().prop_map(DesktopAction::ActivateWindow),
            id.clone().prop_map(DesktopAction::CloseWindow),
            id.clone().prop_map(DesktopAction::ToggleMinimize),
            id.prop_map(DesktopAction::ToggleMaximize),
            Just(DesktopAction::ToggleStartMenu),
            Just(DesktopAction::CloseStartMenu),
        ]
    }

    proptest! {
        #[test]
        fn logout_always_resets_shell(actions in prop::collection::vec(any_action(), 0..48)) {
            let mut state = logged_in();
            for action in actions {
                let _ = reduce_desktop(&mut state, action);
            }

            reduce_desktop(&mut state, DesktopAction::Logout).expect("logout");
            prop_assert!(state.windows.is_empty());
            prop_assert_eq!(state.focused, None);
            prop_assert!(!state.start_menu_open);
            prop_assert!(!state.logged_in);
        }
    }
}
