//! Login / registration screen with a mode toggle.

use dioxus::prelude::*;
use ui::{use_session, SessionState};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let mut registering = use_signal(|| false);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in → straight to the dashboard.
    use_effect(move || {
        if session().user().is_some() {
            nav.replace(Route::Dashboard {});
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Correo electrónico inválido".to_string()));
                return;
            }
            if p.len() < api::PASSWORD_MIN_LEN {
                error.set(Some(
                    "La contraseña debe tener al menos 6 caracteres".to_string(),
                ));
                return;
            }
            if registering() && p != confirm_password() {
                error.set(Some("Las contraseñas no coinciden".to_string()));
                return;
            }

            loading.set(true);
            let result = if registering() {
                api::register(e, p).await
            } else {
                api::login_password(e, p).await
            };

            match result {
                Ok(user) => {
                    session.set(SessionState::Authenticated(user));
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-screen",

            div {
                class: "auth-brand",
                h1 { "Visitas" }
                p { "Gestiona tus clientes y visitas de forma eficiente" }
            }

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                h2 {
                    if registering() { "Crear cuenta" } else { "Iniciar sesión" }
                }

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    class: "form-input",
                    r#type: "email",
                    placeholder: "correo@ejemplo.com",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "form-input",
                    r#type: "password",
                    placeholder: "Contraseña (mínimo 6 caracteres)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                if registering() {
                    input {
                        class: "form-input",
                        r#type: "password",
                        placeholder: "Confirmar contraseña",
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }
                }

                button {
                    class: "button button--primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() {
                        "Un momento..."
                    } else if registering() {
                        "Registrarse"
                    } else {
                        "Ingresar"
                    }
                }
            }

            p {
                class: "auth-toggle",
                if registering() {
                    "¿Ya tienes una cuenta? "
                } else {
                    "¿No tienes una cuenta? "
                }
                a {
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        error.set(None);
                        registering.toggle();
                    },
                    if registering() { "Inicia sesión" } else { "Regístrate" }
                }
            }
        }
    }
}
