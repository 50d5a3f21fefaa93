//! Client list with substring search; tapping a card starts a visit for
//! that client, the pencil goes to the edit form.

use dioxus::prelude::*;
use ui::icons::{IconPlusCircle, IconSearch};
use ui::{use_client_snapshot, use_session, ClientCard};

use crate::views::BottomNav;
use crate::Route;

#[component]
pub fn Clients() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let clients = use_client_snapshot();
    let mut search = use_signal(String::new);

    use_effect(move || {
        let state = session();
        if state.is_resolved() && state.user().is_none() {
            nav.replace(Route::Login {});
        }
    });

    let term = search().trim().to_lowercase();
    let snapshot = clients();
    let filtered: Vec<_> = snapshot
        .items
        .iter()
        .filter(|c| {
            term.is_empty()
                || c.name.to_lowercase().contains(&term)
                || c.address.to_lowercase().contains(&term)
                || c.document_number.to_lowercase().contains(&term)
        })
        .cloned()
        .collect();

    rsx! {
        div {
            class: "page",

            header {
                class: "page-header",
                h1 { "Clientes" }
                button {
                    class: "button button--primary",
                    onclick: move |_| { nav.push(Route::ClientNew {}); },
                    IconPlusCircle { size: 16 }
                    span { "Nuevo" }
                }
            }

            div {
                class: "search-box",
                span { class: "search-icon", IconSearch { size: 18 } }
                input {
                    class: "form-input form-input--search",
                    r#type: "text",
                    placeholder: "Buscar cliente...",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
            }

            if !snapshot.loaded {
                p { class: "muted", "Cargando clientes..." }
            } else if filtered.is_empty() {
                div {
                    class: "empty-state",
                    p { "No se encontraron clientes" }
                    button {
                        class: "button button--primary",
                        onclick: move |_| { nav.push(Route::ClientNew {}); },
                        IconPlusCircle { size: 16 }
                        span { "Agregar cliente" }
                    }
                }
            } else {
                div {
                    class: "client-list",
                    for client in filtered.into_iter() {
                        ClientCard {
                            key: "{client.id}",
                            client: client.clone(),
                            on_select: move |c: api::ClientInfo| {
                                nav.push(Route::Visit { client_id: c.id });
                            },
                            on_edit: move |c: api::ClientInfo| {
                                nav.push(Route::ClientEdit { id: c.id });
                            },
                        }
                    }
                }
            }

            BottomNav {}
        }
    }
}
