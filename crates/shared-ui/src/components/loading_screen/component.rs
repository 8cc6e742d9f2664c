use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLoader;
use dioxus_free_icons::Icon;

/// Full-height centered spinner shown while a page waits on upstream state.
#[component]
pub fn LoadingScreen(#[props(default = "Loading...".to_string(), into)] message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "loading-screen", role: "status",
            div { class: "loading-screen-body",
                span { class: "loading-screen-spinner",
                    Icon::<LdLoader> { icon: LdLoader, width: 32, height: 32 }
                }
                p { class: "loading-screen-message", "{message}" }
            }
        }
    }
}
