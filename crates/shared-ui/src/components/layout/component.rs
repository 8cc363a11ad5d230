use dioxus::prelude::*;

use crate::components::header::Header;

/// Page wrapper: the fixed Header on top, then a centered main content
/// region holding the caller's content. No footer is rendered.
#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Header {}
        main { class: "w-11/12 max-w-960px mx-auto", {children} }
    }
}
