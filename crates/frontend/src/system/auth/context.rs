use contracts::system::auth::{SessionInfo, UserRole};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::config::config;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub session: Option<SessionInfo>,
}

impl AuthState {
    /// Restore from cookies
    pub fn from_cookies() -> Self {
        Self {
            token: storage::get_token(),
            session: storage::get_session(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn role(&self) -> UserRole {
        self.session
            .as_ref()
            .map(|s| s.role)
            .unwrap_or(UserRole::Unknown)
    }
}

/// Auth context: session signal shared by the whole app.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let initial = AuthState::from_cookies();
        log::debug!(
            "Session restored from cookies: authenticated={}",
            initial.is_authenticated()
        );
        Self {
            state: RwSignal::new(initial),
        }
    }

    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Persist a fresh login and publish it.
    pub fn sign_in(&self, token: String, session: SessionInfo) {
        storage::save_session(&token, &session, config().session_max_age_secs);
        log::info!("Signed in as {} ({})", session.email, session.role.as_str());
        self.state.set(AuthState {
            token: Some(token),
            session: Some(session),
        });
    }

    /// Drop the local session without calling the backend.
    pub fn expire(&self) {
        storage::clear_session();
        self.state.set(AuthState::default());
    }

    /// Revoke on the backend (best effort) and drop the local session.
    pub fn sign_out(&self) {
        let this = *self;
        spawn_local(async move {
            if let Err(e) = api::logout().await {
                log::warn!("Logout request failed: {}", e);
            }
            this.expire();
        });
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not provided in context")
}
