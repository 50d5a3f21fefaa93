use dioxus::prelude::*;

/// Bottom navigation bar; the web crate fills it with router links.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            {children}
        }
    }
}
