use super::*;

fn user(role: UserRole) -> User {
    User {
        id: 1,
        name: "A".to_owned(),
        email: "a@b.com".to_owned(),
        role,
        enabled: true,
        created_at: None,
        updated_at: None,
    }
}

fn auth_response(role: UserRole) -> AuthResponse {
    AuthResponse {
        access_token: "tok1".to_owned(),
        token_type: "Bearer".to_owned(),
        expires_in: 3600,
        user: user(role),
    }
}

// =============================================================
// Derived reads
// =============================================================

#[test]
fn default_state_is_anonymous() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
    assert_eq!(state.display_name(), "");
    assert!(state.token().is_none());
}

#[test]
fn login_success_is_authenticated_but_not_admin_for_user_role() {
    let mut state = SessionState::default();
    state.establish(auth_response(UserRole::User));
    assert!(state.is_authenticated());
    assert!(!state.is_admin());
    assert_eq!(state.token().as_deref(), Some("tok1"));
}

#[test]
fn admin_role_grants_is_admin() {
    let mut state = SessionState::default();
    state.establish(auth_response(UserRole::Admin));
    assert!(state.is_admin());
}

#[test]
fn display_name_comes_from_the_user_profile() {
    let mut state = SessionState::default();
    state.establish(auth_response(UserRole::User));
    assert_eq!(state.display_name(), "A");
}

// =============================================================
// Token and user are set/cleared atomically
// =============================================================

#[test]
fn establish_sets_token_and_user_together() {
    let mut state = SessionState::default();
    state.establish(auth_response(UserRole::User));
    let session = state.session.as_ref().unwrap();
    assert_eq!(session.token, "tok1");
    assert_eq!(session.user.id, 1);
}

#[test]
fn clear_removes_the_whole_session() {
    let mut state = SessionState::default();
    state.establish(auth_response(UserRole::Admin));
    state.clear();
    assert!(state.session.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn refresh_replaces_the_session_wholesale() {
    let mut state = SessionState::default();
    state.establish(auth_response(UserRole::User));

    let mut renewed = auth_response(UserRole::User);
    renewed.access_token = "tok2".to_owned();
    renewed.user.name = "A2".to_owned();
    state.establish(renewed);

    assert_eq!(state.token().as_deref(), Some("tok2"));
    assert_eq!(state.display_name(), "A2");
}

#[test]
fn restore_without_persisted_pair_is_anonymous() {
    // Native builds have no localStorage; restore degrades to absence.
    let state = SessionState::restore();
    assert!(state.session.is_none());
}

// =============================================================
// Fail-closed drivers
// =============================================================
// The native API stubs error without ever suspending, so a no-op
// waker and a poll loop are enough to run the async drivers to
// completion and observe the failure policy.

fn block_on<T>(fut: impl std::future::Future<Output = T>) -> T {
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn raw_waker() -> RawWaker {
        fn clone(_: *const ()) -> RawWaker {
            raw_waker()
        }
        fn noop(_: *const ()) {}
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
        RawWaker::new(std::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(raw_waker()) };
    let mut cx = Context::from_waker(&waker);
    let mut fut = std::pin::pin!(fut);
    loop {
        if let Poll::Ready(value) = fut.as_mut().poll(&mut cx) {
            return value;
        }
    }
}

fn signal_with_session(role: UserRole) -> RwSignal<SessionState> {
    let mut state = SessionState::default();
    state.establish(auth_response(role));
    RwSignal::new(state)
}

#[test]
fn refresh_failure_forces_logout_regardless_of_cause() {
    let session = signal_with_session(UserRole::Admin);
    assert!(session.get_untracked().is_authenticated());

    let result = block_on(refresh(session));

    assert!(result.is_err());
    assert!(session.get_untracked().session.is_none());
}

#[test]
fn refresh_without_token_clears_and_errors() {
    let session = RwSignal::new(SessionState::default());

    let result = block_on(refresh(session));

    assert_eq!(result.unwrap_err(), "No active session");
    assert!(!session.get_untracked().is_authenticated());
}

#[test]
fn logout_clears_state_even_when_notification_fails() {
    let session = signal_with_session(UserRole::User);

    block_on(logout(session));

    assert!(session.get_untracked().session.is_none());
}
