//! Visit registration form: client picker, declared date/time, purpose,
//! notes and the geolocation gate. Submission is blocked until a client is
//! picked and a coordinate fix has been captured; visits are immutable
//! once saved.

use dioxus::prelude::*;
use domain::{VisitDraft, VisitPurpose};
use ui::icons::{IconArrowLeft, IconCalendar, IconClock, IconMapPin, IconSave, IconSearch};
use ui::{
    notify, use_client_snapshot, use_notifier, use_session, GeoFix, GeoLocationButton,
    LocationMap, NoticeLevel,
};

use crate::views::BottomNav;
use crate::Route;

#[component]
pub fn VisitForm(preselected: String) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut center = use_notifier();
    let clients = use_client_snapshot();

    // (id, name) of the chosen client.
    let mut selected = use_signal(|| Option::<(String, String)>::None);
    let mut search = use_signal(String::new);
    let mut purpose = use_signal(|| Option::<VisitPurpose>::None);
    let mut notes = use_signal(String::new);
    let mut date = use_signal(|| chrono::Local::now().format("%Y-%m-%d").to_string());
    let mut time = use_signal(|| chrono::Local::now().format("%H:%M").to_string());
    let mut fix = use_signal(|| Option::<GeoFix>::None);
    let mut saving = use_signal(|| false);

    use_effect(move || {
        let state = session();
        if state.is_resolved() && state.user().is_none() {
            nav.replace(Route::Login {});
        }
    });

    // Resolve the preselected client when arriving from the client list.
    let preselected_id = preselected.clone();
    let _ = use_resource(move || {
        let preselected_id = preselected_id.clone();
        async move {
            if preselected_id.is_empty() {
                return;
            }
            match api::get_client(preselected_id).await {
                Ok(Some(c)) => selected.set(Some((c.id, c.name))),
                Ok(None) => {}
                Err(_) => notify(
                    &mut center,
                    NoticeLevel::Error,
                    "Error",
                    "No se pudo obtener la información del cliente",
                ),
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let Some((client_id, client_name)) = selected.peek().clone() else {
                notify(
                    &mut center,
                    NoticeLevel::Error,
                    "Campos incompletos",
                    "Por favor selecciona un cliente",
                );
                return;
            };
            let Some(purpose) = *purpose.peek() else {
                notify(
                    &mut center,
                    NoticeLevel::Error,
                    "Campos incompletos",
                    "Selecciona el propósito de la visita",
                );
                return;
            };
            if date.peek().is_empty() || time.peek().is_empty() {
                notify(
                    &mut center,
                    NoticeLevel::Error,
                    "Campos incompletos",
                    "Completa la fecha y hora de la visita",
                );
                return;
            }
            let Some(captured) = *fix.peek() else {
                notify(
                    &mut center,
                    NoticeLevel::Error,
                    "Ubicación no capturada",
                    "Por favor captura tu ubicación actual",
                );
                return;
            };

            saving.set(true);
            let draft = VisitDraft {
                client_id,
                client_name,
                purpose,
                notes: notes.peek().clone(),
                latitude: captured.latitude,
                longitude: captured.longitude,
                date: date.peek().clone(),
                time: time.peek().clone(),
            };

            match api::save_visit(draft).await {
                Ok(_) => {
                    notify(
                        &mut center,
                        NoticeLevel::Success,
                        "Visita registrada",
                        "La visita ha sido registrada exitosamente",
                    );
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    saving.set(false);
                    notify(&mut center, NoticeLevel::Error, "Error", &e.to_string());
                }
            }
        });
    };

    let term = search().trim().to_lowercase();
    let snapshot = clients();
    let matches: Vec<_> = snapshot
        .items
        .iter()
        .filter(|c| term.is_empty() || c.name.to_lowercase().contains(&term))
        .cloned()
        .collect();

    rsx! {
        div {
            class: "page",

            header {
                class: "page-header",
                button {
                    class: "button button--ghost",
                    onclick: move |_| { nav.push(Route::Dashboard {}); },
                    IconArrowLeft { size: 20 }
                }
                h1 { "Registrar Visita" }
            }

            div {
                class: "form-card",

                if let Some((_, name)) = selected() {
                    div {
                        class: "selected-client",
                        div {
                            span { class: "form-label", "Cliente" }
                            p { class: "selected-client-name", "{name}" }
                        }
                        button {
                            class: "button button--ghost",
                            r#type: "button",
                            onclick: move |_| selected.set(None),
                            "Cambiar"
                        }
                    }
                } else {
                    div {
                        class: "client-picker",
                        div {
                            class: "client-picker-header",
                            span { class: "form-label", "Seleccionar Cliente *" }
                            button {
                                class: "button button--ghost",
                                r#type: "button",
                                onclick: move |_| { nav.push(Route::ClientNew {}); },
                                "Nuevo cliente"
                            }
                        }
                        div {
                            class: "search-box",
                            span { class: "search-icon", IconSearch { size: 16 } }
                            input {
                                class: "form-input form-input--search",
                                r#type: "text",
                                placeholder: "Buscar cliente...",
                                value: search(),
                                oninput: move |evt: FormEvent| search.set(evt.value()),
                            }
                        }
                        div {
                            class: "client-picker-list",
                            if !snapshot.loaded {
                                p { class: "muted", "Cargando clientes..." }
                            } else if matches.is_empty() {
                                p { class: "muted", "No se encontraron clientes" }
                            } else {
                                for c in matches.into_iter() {
                                    div {
                                        key: "{c.id}",
                                        class: "client-picker-item",
                                        onclick: {
                                            let pick = (c.id.clone(), c.name.clone());
                                            move |_| selected.set(Some(pick.clone()))
                                        },
                                        div { class: "client-card-name", "{c.name}" }
                                        div { class: "client-card-address", "{c.address}" }
                                    }
                                }
                            }
                        }
                    }
                }

                form {
                    onsubmit: handle_submit,

                    div {
                        class: "form-row",
                        div {
                            label { class: "form-label", IconCalendar { size: 14 } " Fecha *" }
                            input {
                                class: "form-input",
                                r#type: "date",
                                value: date(),
                                oninput: move |evt: FormEvent| date.set(evt.value()),
                            }
                        }
                        div {
                            label { class: "form-label", IconClock { size: 14 } " Hora *" }
                            input {
                                class: "form-input",
                                r#type: "time",
                                value: time(),
                                oninput: move |evt: FormEvent| time.set(evt.value()),
                            }
                        }
                    }

                    label { class: "form-label", "Propósito de la visita *" }
                    select {
                        class: "form-input",
                        onchange: move |evt: FormEvent| {
                            purpose.set(VisitPurpose::from_label(&evt.value()));
                        },
                        option { value: "", selected: purpose().is_none(), "Selecciona" }
                        for p in VisitPurpose::ALL {
                            option {
                                value: "{p.label()}",
                                selected: purpose() == Some(p),
                                "{p.label()}"
                            }
                        }
                    }

                    label { class: "form-label", "Notas" }
                    textarea {
                        class: "form-input form-input--area",
                        placeholder: "Información adicional de la visita",
                        value: notes(),
                        oninput: move |evt: FormEvent| notes.set(evt.value()),
                    }

                    label { class: "form-label", IconMapPin { size: 14 } " Ubicación *" }
                    GeoLocationButton {
                        on_captured: move |f: GeoFix| fix.set(Some(f)),
                    }

                    if let Some(f) = fix() {
                        div {
                            class: "captured-fix",
                            p { "Ubicación capturada:" }
                            p {
                                class: "muted",
                                "Lat: {f.latitude:.6}, Lng: {f.longitude:.6}"
                            }
                        }
                        LocationMap {
                            latitude: f.latitude,
                            longitude: f.longitude,
                            label: "Ubicación de la visita".to_string(),
                        }
                    }

                    div {
                        class: "form-actions",
                        button {
                            class: "button",
                            r#type: "button",
                            onclick: move |_| { nav.push(Route::Dashboard {}); },
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
            }

            BottomNav {}
        }
    }
}
