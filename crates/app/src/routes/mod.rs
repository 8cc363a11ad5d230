pub mod blog;
pub mod home;
pub mod not_found;

use dioxus::prelude::*;
use shared_ui::Layout;

use blog::Blog;
use home::Home;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/blog")]
    Blog {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Wraps every page in the shared layout: header on top, centered content below.
#[component]
fn AppLayout() -> Element {
    rsx! {
        Layout {
            Outlet::<Route> {}
        }
    }
}
