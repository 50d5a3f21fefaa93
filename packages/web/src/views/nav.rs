//! Bottom navigation shared by the signed-in screens.

use dioxus::prelude::*;
use ui::icons::{IconHome, IconPlusCircle, IconUsers};
use ui::Navbar;

use crate::Route;

#[component]
pub fn BottomNav() -> Element {
    rsx! {
        Navbar {
            Link {
                class: "navbar-item",
                to: Route::Dashboard {},
                IconHome { size: 20 }
                span { "Inicio" }
            }
            Link {
                class: "navbar-item navbar-item--accent",
                to: Route::Visit { client_id: String::new() },
                IconPlusCircle { size: 24 }
                span { "Visita" }
            }
            Link {
                class: "navbar-item",
                to: Route::Clients {},
                IconUsers { size: 20 }
                span { "Clientes" }
            }
        }
    }
}
