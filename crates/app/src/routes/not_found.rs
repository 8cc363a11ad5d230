use dioxus::prelude::*;

use crate::routes::Route;

/// 404 Not Found page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            h1 { class: "not-found-code", "404" }
            p { class: "not-found-message",
                "The page "
                code { "{path}" }
                " could not be found."
            }
            Link { to: Route::Home {}, class: "not-found-link", "Back home" }
        }
    }
}
