//! Session gate: credential verification against the built-in account.

use platform_host::{keys, KeyValueStore};
use thiserror::Error;

/// The single account name accepted by the gate.
pub const ADMIN_USERNAME: &str = "admin";
/// Built-in password, valid until replaced through Settings.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";
/// How long the login form shows a failed attempt.
pub const LOGIN_ERROR_CLEAR_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Proof of a successful credential check.
pub struct Authenticated;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Session gate failures.
pub enum SessionError {
    /// Username or password did not match.
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Checks `username`/`password` against the built-in pair or the stored override.
///
/// A stored override is read at call time; a failed read counts as no override.
///
/// # Errors
///
/// Returns [`SessionError::InvalidCredentials`] for any other combination.
pub fn verify_credentials(
    store: &dyn KeyValueStore,
    username: &str,
    password: &str,
) -> Result<Authenticated, SessionError> {
    if username != ADMIN_USERNAME {
        return Err(SessionError::InvalidCredentials);
    }
    if password == DEFAULT_ADMIN_PASSWORD {
        return Ok(Authenticated);
    }
    let stored = store.get(keys::ADMIN_PASSWORD_KEY).ok().flatten();
    match stored {
        Some(stored) if !stored.is_empty() && stored == password => Ok(Authenticated),
        _ => Err(SessionError::InvalidCredentials),
    }
}

#[cfg(test)]
mod tests {
    use platform_host::MemoryKeyValueStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_pair_is_accepted_on_first_run() {
        let store = MemoryKeyValueStore::default();
        assert_eq!(verify_credentials(&store, "admin", "admin"), Ok(Authenticated));
    }

    #[test]
    fn stored_override_is_accepted() {
        let store = MemoryKeyValueStore::default();
        store
            .set(keys::ADMIN_PASSWORD_KEY, "hunter2")
            .expect("seed password");

        assert_eq!(verify_credentials(&store, "admin", "hunter2"), Ok(Authenticated));
        assert_eq!(
            verify_credentials(&store, "admin", "hunter3"),
            Err(SessionError::InvalidCredentials)
        );
    }

    #[test]
    fn other_usernames_and_empty_passwords_fail() {
        let store = MemoryKeyValueStore::default();
        store.set(keys::ADMIN_PASSWORD_KEY, "").expect("seed");

        assert_eq!(
            verify_credentials(&store, "root", "admin"),
            Err(SessionError::InvalidCredentials)
        );
        assert_eq!(
            verify_credentials(&store, "admin", ""),
            Err(SessionError::InvalidCredentials)
        );
        assert_eq!(
            SessionError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
    }
}
