use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdArrowRight;
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::{Button, ButtonVariant};

use crate::navigation::{use_navigation, Navigation};

/// Send the user to the EcoLearn dashboard for `role`.
pub fn go_to_ecolearn(role: Role, navigation: &Navigation) {
    let destination = role.ecolearn_path();
    tracing::info!(%role, destination, "navigating to EcoLearn");
    navigation.push(destination);
}

/// Call-to-action that opens the role's EcoLearn dashboard.
#[component]
pub fn DashboardRedirectButton(role: Role, #[props(default, into)] class: String) -> Element {
    let navigation = use_navigation();
    let class = format!("dashboard-redirect-button {class}").trim_end().to_string();

    rsx! {
        Button {
            variant: ButtonVariant::Hero,
            class: "{class}",
            onclick: move |_| go_to_ecolearn(role, &navigation),
            "Go to EcoLearn"
            Icon::<LdArrowRight> { icon: LdArrowRight, width: 16, height: 16 }
        }
    }
}
