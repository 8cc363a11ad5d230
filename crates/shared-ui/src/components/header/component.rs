use dioxus::prelude::*;

/// One entry in the site's top-level navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavTab {
    pub label: &'static str,
    pub path: &'static str,
}

/// Top-level navigation tabs in display order.
///
/// Labels double as render keys and must stay unique.
pub const NAV_TABS: &[NavTab] = &[
    NavTab { label: "Home", path: "/" },
    NavTab { label: "Blog", path: "/blog" },
];

/// Fixed top navigation bar: the site logo on the left, the static tab list
/// on the right. Links navigate client-side through the router.
#[component]
pub fn Header() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "h-16 sticky top-0 bg-white border-b border-solid border-gray-200",
            div { class: "w-11/12 max-w-960px h-full flex justify-between items-center mx-auto",
                div {
                    img {
                        src: asset!("./logo.png"),
                        alt: "logo",
                        width: "36",
                        height: "36",
                        loading: "eager",
                    }
                }
                ul { class: "flex space-x-4 text-sm text-gray-600",
                    for tab in NAV_TABS {
                        li { key: "{tab.label}", class: "hover:text-blue-600",
                            Link { to: tab.path, "{tab.label}" }
                        }
                    }
                }
            }
        }
    }
}
