//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once at the app root as `RwSignal<SessionState>` and consumed
//! by route guards, the navbar, and every API caller needing the bearer
//! token. All credential-store writes funnel through this module; nothing
//! else touches persisted auth state.
//!
//! STATE MACHINE
//! =============
//! Anonymous -> Authenticated on successful login/register/refresh.
//! Authenticated -> Anonymous on logout or ANY refresh failure
//! (fail-closed: a refresh error always invalidates the session).
//! In-flight indication is local to the calling page; there is no global
//! pending state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{AuthResponse, LoginRequest, RegisterRequest, User, UserRole};
use crate::util::credentials;

/// The client-held authenticated identity: opaque bearer token plus the
/// user profile it belongs to. Holding both in one value makes
/// set-and-clear atomic by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Current session, `None` while anonymous.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
}

impl SessionState {
    /// Initial state loaded from the credential store. Corrupt or absent
    /// persisted values start anonymous.
    pub fn restore() -> Self {
        let session = credentials::load().map(|(token, user)| Session { token, user });
        Self { session }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.user.role == UserRole::Admin)
    }

    /// Name to show in the navbar; empty while anonymous.
    pub fn display_name(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.user.name.clone())
            .unwrap_or_default()
    }

    /// Bearer token for API calls, cloned for use across awaits.
    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }

    fn establish(&mut self, resp: AuthResponse) {
        self.session = Some(Session { token: resp.access_token, user: resp.user });
    }

    fn clear(&mut self) {
        self.session = None;
    }
}

/// Persist and publish a fresh session in one step.
fn establish(session: RwSignal<SessionState>, resp: AuthResponse) {
    credentials::save(&resp.access_token, &resp.user);
    session.update(|s| s.establish(resp));
}

/// Drop the session everywhere: storage first, then the live signal.
fn clear(session: RwSignal<SessionState>) {
    credentials::clear();
    session.update(SessionState::clear);
}

/// Exchange credentials for a session. On failure the prior session is
/// left untouched and the server's message (or a default) is returned.
pub async fn login(session: RwSignal<SessionState>, req: &LoginRequest) -> Result<(), String> {
    let resp: AuthResponse = api::post_json(
        "/auth/login",
        None,
        req,
        "Login failed. Please check your credentials.",
    )
    .await?;
    establish(session, resp);
    Ok(())
}

/// Create an account and start a session; same contract as [`login`].
pub async fn register(
    session: RwSignal<SessionState>,
    req: &RegisterRequest,
) -> Result<(), String> {
    let resp: AuthResponse =
        api::post_json("/auth/register", None, req, "Registration failed. Please try again.")
            .await?;
    establish(session, resp);
    Ok(())
}

/// Replace the session using the current token. ANY failure — expired
/// token, server error, network down — forces logout before the error is
/// returned; a session that cannot be refreshed is treated as invalid.
pub async fn refresh(session: RwSignal<SessionState>) -> Result<(), String> {
    let Some(token) = session.get_untracked().token() else {
        clear(session);
        return Err("No active session".to_owned());
    };
    match api::post_json::<serde_json::Value, AuthResponse>(
        "/auth/refresh",
        Some(&token),
        &serde_json::json!({}),
        "Session expired",
    )
    .await
    {
        Ok(resp) => {
            establish(session, resp);
            Ok(())
        }
        Err(err) => {
            clear(session);
            Err(err)
        }
    }
}

/// End the session. The server is notified best-effort when a token
/// exists (its outcome is ignored); local state and storage are cleared
/// unconditionally. Never fails from the caller's perspective — the
/// route guards handle the redirect to `/login` once the state clears.
pub async fn logout(session: RwSignal<SessionState>) {
    if let Some(token) = session.get_untracked().token() {
        if let Err(err) = api::post_empty("/auth/logout", Some(&token), "Logout failed").await {
            leptos::logging::warn!("logout notification failed: {err}");
        }
    }
    clear(session);
}
