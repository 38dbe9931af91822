//! Runtime-owned per-window app sessions.
//!
//! A session is created the first time a window body mounts and lives until the window closes,
//! so a minimized window keeps its lifetime token and content.

use std::collections::HashMap;

use desktop_app_contract::WindowLifetime;

use crate::model::AppId;

#[derive(Debug, Default)]
/// Lifetime tokens for every mounted window.
pub struct AppRuntimeState {
    sessions: HashMap<AppId, WindowLifetime>,
}

impl AppRuntimeState {
    /// Returns the live token for `app_id`, creating one on first use.
    pub fn lifetime_for(&mut self, app_id: AppId) -> WindowLifetime {
        self.sessions
            .entry(app_id)
            .or_insert_with(WindowLifetime::new)
            .clone()
    }

    /// Cancels and forgets the token for a closed window.
    ///
    /// Returns `true` when a session existed.
    pub fn release(&mut self, app_id: AppId) -> bool {
        match self.sessions.remove(&app_id) {
            Some(lifetime) => {
                lifetime.cancel();
                true
            }
            None => false,
        }
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns whether no session is live.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lifetime_is_shared_until_release() {
        let mut runtime = AppRuntimeState::default();
        let first = runtime.lifetime_for(AppId::Word);
        let again = runtime.lifetime_for(AppId::Word);
        assert_eq!(runtime.len(), 1);

        assert!(runtime.release(AppId::Word));
        assert!(!first.is_alive());
        assert!(!again.is_alive());
        assert!(runtime.is_empty());
        assert!(!runtime.release(AppId::Word));
    }

    #[test]
    fn reopened_window_gets_a_fresh_token() {
        let mut runtime = AppRuntimeState::default();
        let closed = runtime.lifetime_for(AppId::Joi);
        runtime.release(AppId::Joi);

        let reopened = runtime.lifetime_for(AppId::Joi);
        assert!(!closed.is_alive());
        assert!(reopened.is_alive());
    }
}
