use dioxus::prelude::*;

mod auth;
mod components;
mod config;
mod navigation;
mod routes;

use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = config::load_app_config();

    use_context_provider(|| config.features.clone());
    use_context_provider(|| config.navigation.clone());
    // Resolved by the auth provider; gates show a spinner until then.
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
