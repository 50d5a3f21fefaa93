//! Client create/edit form: required-field checks at submit, cascading
//! location selects backed by the catalog, and per-keystroke document
//! normalization (see `domain::document`).

use dioxus::prelude::*;
use domain::{ClientDraft, ClientInfo, DocumentType};
use ui::icons::{IconArrowLeft, IconSave};
use ui::{notify, use_notifier, use_session, NoticeLevel};

use crate::views::BottomNav;
use crate::Route;

#[component]
pub fn ClientForm(id: Option<String>) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut center = use_notifier();

    let editing = id.is_some();
    let mut draft = use_signal(ClientDraft::default);
    let mut saving = use_signal(|| false);

    use_effect(move || {
        let state = session();
        if state.is_resolved() && state.user().is_none() {
            nav.replace(Route::Login {});
        }
    });

    // Load the record when editing.
    let load_id = id.clone();
    let _loader = use_resource(move || {
        let load_id = load_id.clone();
        async move {
            let Some(load_id) = load_id else { return };
            match api::get_client(load_id).await {
                Ok(Some(info)) => draft.set(draft_from(info)),
                Ok(None) => notify(
                    &mut center,
                    NoticeLevel::Error,
                    "Cliente no encontrado",
                    "No se encontró información del cliente",
                ),
                Err(_) => notify(
                    &mut center,
                    NoticeLevel::Error,
                    "Error",
                    "No se pudo obtener la información del cliente",
                ),
            }
        }
    });

    let submit_id = id.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let submit_id = submit_id.clone();
        spawn(async move {
            let d = draft.peek().clone();

            let missing = d.missing_required();
            if !missing.is_empty() {
                notify(
                    &mut center,
                    NoticeLevel::Error,
                    "Campos incompletos",
                    &format!("Completa: {}", missing.join(", ")),
                );
                return;
            }
            if !domain::is_catalog_row(&d.department, &d.province, &d.district) {
                notify(
                    &mut center,
                    NoticeLevel::Error,
                    "Ubicación inválida",
                    "Departamento, provincia y distrito deben ser del catálogo",
                );
                return;
            }

            saving.set(true);
            let result = match submit_id {
                Some(cid) => api::update_client(cid, d).await,
                None => api::save_client(d).await,
            };

            match result {
                Ok(_) => {
                    notify(
                        &mut center,
                        NoticeLevel::Success,
                        if editing { "Cliente actualizado" } else { "Cliente guardado" },
                        "El cliente ha sido registrado correctamente",
                    );
                    nav.push(Route::Clients {});
                }
                Err(e) => {
                    saving.set(false);
                    notify(&mut center, NoticeLevel::Error, "Error", &e.to_string());
                }
            }
        });
    };

    let d = draft();
    let provinces = domain::provinces(&d.department);
    let districts = domain::districts(&d.department, &d.province);
    let document_type_tag = d.document_type.map(|t| t.as_str()).unwrap_or("");

    rsx! {
        div {
            class: "page",

            header {
                class: "page-header",
                button {
                    class: "button button--ghost",
                    onclick: move |_| { nav.push(Route::Clients {}); },
                    IconArrowLeft { size: 20 }
                }
                h1 {
                    if editing { "Editar Cliente" } else { "Nuevo Cliente" }
                }
            }

            form {
                class: "form-card",
                onsubmit: handle_submit,

                label { class: "form-label", "Nombre *" }
                input {
                    class: "form-input",
                    placeholder: "Nombre del cliente",
                    value: "{d.name}",
                    oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                }

                label { class: "form-label", "Dirección *" }
                input {
                    class: "form-input",
                    placeholder: "Dirección completa",
                    value: "{d.address}",
                    oninput: move |evt: FormEvent| draft.write().address = evt.value(),
                }

                div {
                    class: "form-row",
                    div {
                        label { class: "form-label", "Departamento *" }
                        select {
                            class: "form-input",
                            value: "{d.department}",
                            onchange: move |evt: FormEvent| {
                                let mut d = draft.write();
                                d.department = evt.value();
                                d.province.clear();
                                d.district.clear();
                            },
                            option { value: "", "Selecciona" }
                            for dep in domain::departments() {
                                option { value: "{dep}", selected: d.department == dep, "{dep}" }
                            }
                        }
                    }
                    div {
                        label { class: "form-label", "Provincia *" }
                        select {
                            class: "form-input",
                            disabled: d.department.is_empty(),
                            value: "{d.province}",
                            onchange: move |evt: FormEvent| {
                                let mut d = draft.write();
                                d.province = evt.value();
                                d.district.clear();
                            },
                            option { value: "", "Selecciona" }
                            for prov in provinces {
                                option { value: "{prov}", selected: d.province == prov, "{prov}" }
                            }
                        }
                    }
                    div {
                        label { class: "form-label", "Distrito *" }
                        select {
                            class: "form-input",
                            disabled: d.province.is_empty(),
                            value: "{d.district}",
                            onchange: move |evt: FormEvent| draft.write().district = evt.value(),
                            option { value: "", "Selecciona" }
                            for dist in districts {
                                option { value: "{dist}", selected: d.district == dist, "{dist}" }
                            }
                        }
                    }
                }

                div {
                    class: "form-row",
                    div {
                        label { class: "form-label", "Tipo de documento *" }
                        select {
                            class: "form-input",
                            value: "{document_type_tag}",
                            onchange: move |evt: FormEvent| {
                                let mut d = draft.write();
                                let tag = evt.value();
                                if tag.is_empty() {
                                    d.document_type = None;
                                } else {
                                    let doc_type = DocumentType::from_tag(&tag);
                                    d.document_type = Some(doc_type);
                                    // Re-normalize under the new rules.
                                    let current = d.document_number.clone();
                                    d.document_number =
                                        domain::sanitize_document_input(doc_type, &current, "");
                                }
                            },
                            option { value: "", "Selecciona" }
                            for dt in DocumentType::ALL {
                                option {
                                    value: "{dt.as_str()}",
                                    selected: d.document_type == Some(dt),
                                    "{dt.as_str()}"
                                }
                            }
                        }
                    }
                    div {
                        label { class: "form-label", "Número de documento *" }
                        input {
                            class: "form-input",
                            placeholder: "Número",
                            disabled: d.document_type.is_none(),
                            value: "{d.document_number}",
                            oninput: move |evt: FormEvent| {
                                let mut d = draft.write();
                                if let Some(doc_type) = d.document_type {
                                    let previous = d.document_number.clone();
                                    d.document_number = domain::sanitize_document_input(
                                        doc_type,
                                        &evt.value(),
                                        &previous,
                                    );
                                }
                            },
                        }
                    }
                }

                label { class: "form-label", "Persona de contacto" }
                input {
                    class: "form-input",
                    placeholder: "Nombre del contacto",
                    value: "{d.contact_name}",
                    oninput: move |evt: FormEvent| draft.write().contact_name = evt.value(),
                }

                div {
                    class: "form-row",
                    div {
                        label { class: "form-label", "Teléfono" }
                        input {
                            class: "form-input",
                            r#type: "tel",
                            placeholder: "Número de teléfono",
                            value: "{d.phone}",
                            oninput: move |evt: FormEvent| draft.write().phone = evt.value(),
                        }
                    }
                    div {
                        label { class: "form-label", "Correo electrónico" }
                        input {
                            class: "form-input",
                            r#type: "email",
                            placeholder: "correo@ejemplo.com",
                            value: "{d.email}",
                            oninput: move |evt: FormEvent| draft.write().email = evt.value(),
                        }
                    }
                }

                label { class: "form-label", "Notas" }
                textarea {
                    class: "form-input form-input--area",
                    placeholder: "Información adicional del cliente",
                    value: "{d.notes}",
                    oninput: move |evt: FormEvent| draft.write().notes = evt.value(),
                }

                div {
                    class: "form-actions",
                    button {
                        class: "button",
                        r#type: "button",
                        onclick: move |_| { nav.push(Route::Clients {}); },
                        "Cancelar"
                    }
                    button {
                        class: "button button--primary",
                        r#type: "submit",
                        disabled: saving(),
                        IconSave { size: 16 }
                        span {
                            if saving() { "Guardando..." } else { "Guardar" }
                        }
                    }
                }
            }

            BottomNav {}
        }
    }
}

/// Map a stored record back into the editable draft.
fn draft_from(info: ClientInfo) -> ClientDraft {
    ClientDraft {
        name: info.name,
        address: info.address,
        district: info.district,
        province: info.province,
        department: info.department,
        document_type: Some(info.document_type),
        document_number: info.document_number,
        contact_name: info.contact_name.unwrap_or_default(),
        phone: info.phone.unwrap_or_default(),
        email: info.email.unwrap_or_default(),
        notes: info.notes.unwrap_or_default(),
    }
}
