//! List card for one client.

use api::ClientInfo;
use dioxus::prelude::*;

/// Compact card used by the client list. Tapping the card hands the record
/// to `on_select` (register a visit); the edit control stops propagation
/// and fires `on_edit` instead.
#[component]
pub fn ClientCard(
    client: ClientInfo,
    on_select: EventHandler<ClientInfo>,
    on_edit: EventHandler<ClientInfo>,
) -> Element {
    let selected = client.clone();
    let edited = client.clone();

    rsx! {
        div {
            class: "client-card",
            onclick: move |_| on_select.call(selected.clone()),
            div {
                class: "client-card-main",
                div { class: "client-card-name", "{client.name}" }
                div {
                    class: "client-card-address",
                    "{client.address} — {client.district}, {client.province}"
                }
                div {
                    class: "client-card-doc",
                    "{client.document_type.as_str()}: {client.document_number}"
                }
            }
            button {
                class: "client-card-edit",
                r#type: "button",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    on_edit.call(edited.clone());
                },
                "Editar"
            }
        }
    }
}
