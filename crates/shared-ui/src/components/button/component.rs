use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    /// Gradient call-to-action used for cross-app navigation.
    Hero,
    Outline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Hero => "hero",
            ButtonVariant::Outline => "outline",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Themed button. Extra global attributes (including `class`) are merged
/// onto the base `button` class.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_variant_and_label() {
        let html = render(|| rsx! { Button { variant: ButtonVariant::Hero, "Go" } });
        assert!(html.contains("<button"));
        assert!(html.contains(r#"data-style="hero""#));
        assert!(html.contains("Go"));
    }

    #[test]
    fn default_variant_is_primary() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        let html = render(|| rsx! { Button { "Save" } });
        assert!(html.contains(r#"data-style="primary""#));
    }

    #[test]
    fn merges_caller_class_with_base() {
        let html = render(|| rsx! { Button { class: "w-full", "Go" } });
        assert!(html.contains("button"));
        assert!(html.contains("w-full"));
    }
}
