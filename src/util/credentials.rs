//! Browser localStorage persistence for the auth token/user pair.
//!
//! SYSTEM CONTEXT
//! ==============
//! Purely mirrors session state under fixed keys — no expiry tracking,
//! no logic. Written exclusively by `state::session`; read once at
//! startup. Read failures (corrupt persisted value) degrade to absence,
//! never panic.

use crate::net::types::User;

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "auth_user";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Last-saved token/user pair, or `None` when absent or unreadable.
pub fn load() -> Option<(String, User)> {
    #[cfg(feature = "hydrate")]
    {
        let storage = storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let raw_user = storage.get_item(USER_KEY).ok().flatten()?;
        let user = serde_json::from_str(&raw_user).ok()?;
        Some((token, user))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist both halves of the session.
pub fn save(token: &str, user: &User) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let Ok(raw_user) = serde_json::to_string(user) else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(USER_KEY, &raw_user);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user);
    }
}

/// Remove both halves of the session.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
