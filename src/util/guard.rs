//! Route authorization consulted before rendering a page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page installs [`install_guard`] so identical redirect behavior
//! applies across routes. The check is a synchronous read of the current
//! session snapshot — no network call.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Who may enter a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Login/register: only for anonymous visitors; an authenticated
    /// user attempting a guest route is redirected away.
    Guest,
    /// Any signed-in user.
    Authenticated,
    /// Signed-in user with the ADMIN role.
    Admin,
}

/// Whether the current session may enter a route with this requirement.
pub fn can_enter(state: &SessionState, access: RouteAccess) -> bool {
    match access {
        RouteAccess::Guest => !state.is_authenticated(),
        RouteAccess::Authenticated => state.is_authenticated(),
        RouteAccess::Admin => state.is_admin(),
    }
}

/// Where a denied navigation lands.
pub fn redirect_target(state: &SessionState, access: RouteAccess) -> &'static str {
    match access {
        // Already signed in: guest routes bounce to the catalog.
        RouteAccess::Guest => "/books",
        // Admin routes bounce signed-in non-admins to the catalog and
        // anonymous visitors to login.
        RouteAccess::Admin if state.is_authenticated() => "/books",
        RouteAccess::Authenticated | RouteAccess::Admin => "/login",
    }
}

/// Redirect away whenever the session stops satisfying `access`. Reacts
/// to later session changes too, so a logout on any page lands on
/// `/login` without the page doing anything.
pub fn install_guard<F>(session: RwSignal<SessionState>, access: RouteAccess, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if !can_enter(&state, access) {
            navigate(redirect_target(&state, access), NavigateOptions::default());
        }
    });
}
