use dioxus::prelude::*;
use shared_types::{Role, ALL_ROLES};
use shared_ui::{Button, ButtonVariant};

use crate::auth::use_auth;
use crate::components::Redirect;
use crate::navigation::use_navigation;

/// Public landing page. Signed-in users go straight to their portal.
#[component]
pub fn Landing() -> Element {
    let auth = use_auth();

    if !auth.is_loading() && auth.is_authenticated() {
        if let Some(role) = auth.role() {
            return rsx! { Redirect { to: role.home_path() } };
        }
    }

    rsx! {
        main { class: "landing-page",
            h1 { class: "landing-title", "Clean streets, one report at a time" }
            p { class: "landing-subtitle",
                "Report waste, follow collection routes, and learn how to sort at the source."
            }
            div { class: "landing-portals",
                for role in ALL_ROLES.iter().copied() {
                    PortalEntry { key: "{role}", role }
                }
            }
        }
    }
}

#[component]
fn PortalEntry(role: Role) -> Element {
    let navigation = use_navigation();
    let label = format!("{} portal", role.label());

    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            onclick: move |_| navigation.push(role.home_path()),
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavigationRequest;
    use crate::test_support::{render, AuthFixture};
    use pretty_assertions::assert_eq;

    #[test]
    fn visitors_see_portal_entries() {
        let (html, nav) = render(AuthFixture::signed_out(), || rsx! { Landing {} });
        assert!(html.contains("Citizen portal"));
        assert!(html.contains("Driver portal"));
        assert!(html.contains("Admin portal"));
        assert_eq!(nav.requests(), vec![]);
    }

    #[test]
    fn signed_in_users_are_sent_home() {
        let (_, nav) = render(AuthFixture::signed_in(Role::Driver), || rsx! { Landing {} });
        assert_eq!(nav.requests(), vec![NavigationRequest::Replace("/driver".into())]);
    }

    #[test]
    fn unknown_user_type_stays_on_landing() {
        let (html, nav) = render(AuthFixture::signed_in_as("inspector"), || rsx! { Landing {} });
        assert!(html.contains("landing-page"));
        assert_eq!(nav.requests(), vec![]);
    }

    #[test]
    fn no_redirect_while_loading() {
        let (html, nav) = render(AuthFixture::loading(), || rsx! { Landing {} });
        assert!(html.contains("landing-page"));
        assert_eq!(nav.requests(), vec![]);
    }
}
