use dioxus::prelude::*;
use shared_types::{Role, SessionUser, UserProfile, ROOT_PATH};
use shared_ui::LoadingScreen;

use super::Redirect;
use crate::auth::use_auth;

/// Why the gate turned a visitor away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    Unauthenticated,
    MissingProfile,
    RoleMismatch,
}

/// What the gate renders for a given auth snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Loading,
    Redirect(RedirectReason),
    Render,
}

/// Evaluate the gate. Checks run in priority order and the first match
/// wins: loading, then missing session or profile, then role mismatch.
pub fn decide(
    loading: bool,
    current_user: Option<&SessionUser>,
    user_profile: Option<&UserProfile>,
    required: Option<Role>,
) -> GateDecision {
    if loading {
        return GateDecision::Loading;
    }

    if current_user.is_none() {
        return GateDecision::Redirect(RedirectReason::Unauthenticated);
    }

    let Some(profile) = user_profile else {
        return GateDecision::Redirect(RedirectReason::MissingProfile);
    };

    match required {
        Some(role) if !profile.has_role(role) => {
            GateDecision::Redirect(RedirectReason::RoleMismatch)
        }
        _ => GateDecision::Render,
    }
}

/// Route guard. Shows a spinner while auth resolves, redirects (replacing
/// history) when the visitor is signed out or has the wrong role, and
/// otherwise renders `children` untouched.
#[component]
pub fn AuthGate(
    children: Element,
    required_user_type: Option<Role>,
    #[props(default = ROOT_PATH.to_string(), into)] redirect_to: String,
) -> Element {
    let auth = use_auth();

    let decision = decide(
        *auth.loading.read(),
        auth.current_user.read().as_ref(),
        auth.user_profile.read().as_ref(),
        required_user_type,
    );

    match decision {
        GateDecision::Loading => rsx! { LoadingScreen {} },
        GateDecision::Redirect(reason) => {
            tracing::debug!(
                ?reason,
                required = ?required_user_type,
                redirect_to = %redirect_to,
                "auth gate redirect"
            );
            rsx! { Redirect { to: redirect_to, replace: true } }
        }
        GateDecision::Render => rsx! { {children} },
    }
}
