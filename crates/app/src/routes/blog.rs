use dioxus::prelude::*;
use shared_ui::Button;

/// Blog index page.
#[component]
pub fn Blog() -> Element {
    rsx! {
        h1 { "Blog" }
        p { "No posts yet." }
        Button { "Load more" }
    }
}
