//! Authentication gate.
//!
//! # Responsibility
//! - Define the seam to the external session provider.
//! - Decide which top-level screen renders for an auth state.
//!
//! # Invariants
//! - The shell is only reachable with a signed-in user.
//! - Session state is owned by the caller, never stored globally.

use crate::model::user::User;
use log::info;

/// Auth state as reported by the session provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// Provider has not resolved the session yet.
    Loading,
    SignedOut,
    SignedIn(User),
}

/// Top-level screen for an auth state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    Loading,
    SignIn,
    Shell(&'a User),
}

/// Loading message shown while the session resolves.
pub const LOADING_MESSAGE: &str = "Loading Crisis Intelligence Platform...";

/// External authentication collaborator.
pub trait SessionProvider {
    fn auth_state(&self) -> AuthState;

    fn sign_out(&mut self);
}

/// Maps auth state to the screen to render.
pub fn gate(state: &AuthState) -> Screen<'_> {
    match state {
        AuthState::Loading => Screen::Loading,
        AuthState::SignedOut => Screen::SignIn,
        AuthState::SignedIn(user) => Screen::Shell(user),
    }
}

/// Fixed session, for the CLI and tests.
#[derive(Debug, Clone)]
pub struct StaticSession {
    state: AuthState,
}

impl StaticSession {
    pub fn signed_in(user: User) -> Self {
        Self {
            state: AuthState::SignedIn(user),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            state: AuthState::SignedOut,
        }
    }
}

impl SessionProvider for StaticSession {
    fn auth_state(&self) -> AuthState {
        self.state.clone()
    }

    fn sign_out(&mut self) {
        if let AuthState::SignedIn(user) = &self.state {
            info!(
                "event=sign_out module=session status=ok role={}",
                user.role.as_str()
            );
        }
        self.state = AuthState::SignedOut;
    }
}

#[cfg(test)]
mod tests {
    use super::{gate, AuthState, Screen, SessionProvider, StaticSession};
    use crate::model::user::{Role, User};
    use chrono::{TimeZone, Utc};

    fn analyst() -> User {
        User {
            id: "u1".to_string(),
            email: "analyst@example.org".to_string(),
            display_name: None,
            role: Role::Analyst,
            permissions: Vec::new(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn gate_maps_each_state_to_one_screen() {
        assert_eq!(gate(&AuthState::Loading), Screen::Loading);
        assert_eq!(gate(&AuthState::SignedOut), Screen::SignIn);

        let user = analyst();
        let state = AuthState::SignedIn(user.clone());
        assert_eq!(gate(&state), Screen::Shell(&user));
    }

    #[test]
    fn sign_out_returns_to_sign_in_screen() {
        let mut session = StaticSession::signed_in(analyst());
        session.sign_out();
        assert_eq!(session.auth_state(), AuthState::SignedOut);
        assert_eq!(gate(&session.auth_state()), Screen::SignIn);
    }
}
