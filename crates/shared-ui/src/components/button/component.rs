use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
}

impl ButtonVariant {
    /// Utility classes appended after the base set. `Default` appends nothing.
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "",
            ButtonVariant::Primary => "bg-blue-500 text-white",
        }
    }
}

/// Utility classes every button carries regardless of variant.
pub const BUTTON_BASE_CLASS: &str =
    "px-3 py-1 border border-solid border-gray-200 rounded text-sm active:scale-95";

/// A small clickable element with style variants.
///
/// Click behavior is the caller's responsibility; this layer only renders.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = match props.variant.class() {
        "" => BUTTON_BASE_CLASS.to_string(),
        extra => format!("{BUTTON_BASE_CLASS} {extra}"),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button { class: "{class}", {props.children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn variant_defaults_to_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
    }

    #[test]
    fn default_variant_adds_no_classes() {
        assert_eq!(ButtonVariant::Default.class(), "");
    }

    #[test]
    fn primary_variant_adds_fill_and_text_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "bg-blue-500 text-white");
    }

    #[test]
    fn no_props_renders_base_classes_and_empty_body() {
        let html = render(|| rsx! { Button {} });
        assert!(html.contains(&format!("class=\"{BUTTON_BASE_CLASS}\"")));
        assert!(!html.contains("bg-blue-500"));
        assert!(html.contains("></button>"));
    }

    #[test]
    fn primary_renders_base_plus_variant_classes() {
        let html = render(|| {
            rsx! {
                Button { variant: ButtonVariant::Primary, "Submit" }
            }
        });
        assert!(html.contains(&format!(
            "class=\"{BUTTON_BASE_CLASS} bg-blue-500 text-white\""
        )));
        assert!(html.contains("Submit"));
    }

    #[test]
    fn children_render_unwrapped_inside_the_button() {
        let html = render(|| {
            rsx! {
                Button {
                    span { "inner" }
                }
            }
        });
        let open = html.find("<button").unwrap();
        let close = html.find("</button>").unwrap();
        let body = &html[open..close];
        assert!(body.contains("<span>inner</span>"));
    }
}
