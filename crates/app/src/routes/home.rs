use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant};

/// Landing page.
#[component]
pub fn Home() -> Element {
    rsx! {
        h1 { "Welcome" }
        p { "Notes on things I build and break." }
        Button { variant: ButtonVariant::Primary, "Subscribe" }
    }
}
