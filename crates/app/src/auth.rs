use dioxus::prelude::*;
use shared_types::{Role, SessionUser, UserProfile};

/// Global authentication state.
///
/// Owned and driven by the auth provider; components only read it. Starts
/// in the loading state until the provider reports a session (or its
/// absence).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<SessionUser>>,
    pub user_profile: Signal<Option<UserProfile>>,
    pub loading: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            user_profile: Signal::new(None),
            loading: Signal::new(true),
        }
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    /// True once both the session and its profile are present.
    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some() && self.user_profile.read().is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user_profile.read().as_ref().and_then(|p| p.role())
    }

    pub fn begin_loading(&mut self) {
        self.loading.set(true);
    }

    pub fn sign_in(&mut self, user: SessionUser, profile: UserProfile) {
        self.current_user.set(Some(user));
        self.user_profile.set(Some(profile));
        self.loading.set(false);
    }

    pub fn sign_out(&mut self) {
        self.current_user.set(None);
        self.user_profile.set(None);
        self.loading.set(false);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Role of the signed-in user, if the profile names a known one.
pub fn use_user_role() -> Option<Role> {
    use_auth().role()
}
