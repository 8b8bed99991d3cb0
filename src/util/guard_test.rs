use super::*;
use crate::net::types::{User, UserRole};
use crate::state::session::Session;

fn session_with_role(role: UserRole) -> SessionState {
    SessionState {
        session: Some(Session {
            token: "tok1".to_owned(),
            user: User {
                id: 1,
                name: "A".to_owned(),
                email: "a@b.com".to_owned(),
                role,
                enabled: true,
                created_at: None,
                updated_at: None,
            },
        }),
    }
}

// =============================================================
// can_enter matrix
// =============================================================

#[test]
fn anonymous_may_enter_guest_routes_only() {
    let state = SessionState::default();
    assert!(can_enter(&state, RouteAccess::Guest));
    assert!(!can_enter(&state, RouteAccess::Authenticated));
    assert!(!can_enter(&state, RouteAccess::Admin));
}

#[test]
fn authenticated_user_is_denied_guest_and_admin_routes() {
    let state = session_with_role(UserRole::User);
    assert!(!can_enter(&state, RouteAccess::Guest));
    assert!(can_enter(&state, RouteAccess::Authenticated));
    assert!(!can_enter(&state, RouteAccess::Admin));
}

#[test]
fn admin_is_denied_only_guest_routes() {
    let state = session_with_role(UserRole::Admin);
    assert!(!can_enter(&state, RouteAccess::Guest));
    assert!(can_enter(&state, RouteAccess::Authenticated));
    assert!(can_enter(&state, RouteAccess::Admin));
}

// =============================================================
// Denied-navigation targets
// =============================================================

#[test]
fn authenticated_on_guest_route_bounces_to_books() {
    let state = session_with_role(UserRole::User);
    assert_eq!(redirect_target(&state, RouteAccess::Guest), "/books");
}

#[test]
fn anonymous_on_protected_route_bounces_to_login() {
    let state = SessionState::default();
    assert_eq!(redirect_target(&state, RouteAccess::Authenticated), "/login");
    assert_eq!(redirect_target(&state, RouteAccess::Admin), "/login");
}

#[test]
fn non_admin_on_admin_route_bounces_to_books() {
    let state = session_with_role(UserRole::User);
    assert_eq!(redirect_target(&state, RouteAccess::Admin), "/books");
}
