use dioxus::prelude::*;
use shared_types::{NavigationConfig, Role};

use crate::auth::use_user_role;
use crate::components::{AuthGate, DashboardRedirectButton};

/// EcoLearn landing. Signed-in users get a shortcut to their own track.
#[component]
pub fn EcoLearn() -> Element {
    let role = use_user_role();

    rsx! {
        section { class: "ecolearn",
            h1 { class: "ecolearn-title", "EcoLearn" }
            p { class: "ecolearn-subtitle",
                "Short lessons and quizzes on segregation, composting, and safe disposal."
            }
            {role.map(|role| rsx! { DashboardRedirectButton { role } })}
        }
    }
}

#[component]
pub fn EcoLearnCitizen() -> Element {
    rsx! { GatedTrack { role: Role::Citizen } }
}

#[component]
pub fn EcoLearnDriver() -> Element {
    rsx! { GatedTrack { role: Role::Driver } }
}

#[component]
pub fn EcoLearnAdmin() -> Element {
    rsx! { GatedTrack { role: Role::Admin } }
}

#[component]
fn GatedTrack(role: Role) -> Element {
    let config = use_context::<NavigationConfig>();
    let title = format!("EcoLearn for {}s", role.as_str());

    rsx! {
        AuthGate { required_user_type: role, redirect_to: config.gate_redirect,
            section { class: "ecolearn", "data-role": "{role}",
                h1 { class: "ecolearn-title", "{title}" }
            }
        }
    }
}
