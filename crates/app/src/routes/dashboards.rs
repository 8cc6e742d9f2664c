use dioxus::prelude::*;
use shared_types::{FeatureFlags, NavigationConfig, Role};

use crate::auth::use_auth;
use crate::components::{AuthGate, DashboardRedirectButton};

#[component]
pub fn CitizenDashboard() -> Element {
    let config = use_context::<NavigationConfig>();

    rsx! {
        AuthGate { required_user_type: Role::Citizen, redirect_to: config.gate_redirect,
            RoleDashboard { role: Role::Citizen }
        }
    }
}

#[component]
pub fn DriverDashboard() -> Element {
    let config = use_context::<NavigationConfig>();

    rsx! {
        AuthGate { required_user_type: Role::Driver, redirect_to: config.gate_redirect,
            RoleDashboard { role: Role::Driver }
        }
    }
}

/// Admin portal. Not gated: the portal handles its own sign-in.
#[component]
pub fn AdminPortal() -> Element {
    rsx! { RoleDashboard { role: Role::Admin } }
}

/// Shared dashboard frame: heading, greeting, and the EcoLearn entry point.
#[component]
fn RoleDashboard(role: Role) -> Element {
    let auth = use_auth();
    let flags = use_context::<FeatureFlags>();

    let display_name = auth
        .user_profile
        .read()
        .as_ref()
        .map(|p| p.display_name.clone());
    let title = format!("{} dashboard", role.label());

    rsx! {
        section { class: "dashboard", "data-role": "{role}",
            header { class: "dashboard-header",
                h1 { class: "dashboard-title", "{title}" }
                {display_name.map(|name| rsx! {
                    p { class: "dashboard-greeting", "Welcome back, {name}" }
                })}
            }
            if flags.ecolearn {
                DashboardRedirectButton { role }
            }
        }
    }
}
