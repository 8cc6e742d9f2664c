use dioxus::prelude::*;

use crate::navigation::use_navigation;

/// Declarative redirect. Renders nothing and issues one navigation request
/// when mounted.
///
/// With `replace` (the default) the current history entry is swapped, so the
/// back button never returns to the page that redirected.
#[component]
pub fn Redirect(#[props(into)] to: String, #[props(default = true)] replace: bool) -> Element {
    let navigation = use_navigation();

    use_hook(move || {
        if replace {
            navigation.replace(&to);
        } else {
            navigation.push(&to);
        }
    });

    rsx! {}
}
