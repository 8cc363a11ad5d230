use dioxus::prelude::*;

mod routes;

use routes::Route;

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting blog front-end");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
