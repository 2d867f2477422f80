use dioxus::prelude::*;

/// Top bar of every dashboard page.
#[component]
pub fn Navbar(title: String, children: Element) -> Element {
    rsx! {
        header {
            class: "navbar",
            span { class: "navbar-title", "{title}" }
            nav {
                class: "navbar-links",
                {children}
            }
        }
    }
}
