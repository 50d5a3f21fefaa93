//! Geolocation accessor.
//!
//! Wraps the browser geolocation API into a one-shot request/result
//! pattern. The request asks for a high-accuracy fix, waits at most
//! [`GEO_TIMEOUT_MS`], and never reuses a cached position. Failures come
//! back as the browser's message and are surfaced through the
//! notification center by [`GeoLocationButton`].

use dioxus::prelude::*;
use serde::Deserialize;

use crate::notify::{notify, use_notifier, NoticeLevel};

/// Upper bound on waiting for a coordinate fix, in milliseconds.
const GEO_TIMEOUT_MS: u32 = 15_000;

/// A captured coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFix {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
struct GeoReply {
    ok: bool,
    lat: Option<f64>,
    lng: Option<f64>,
    message: Option<String>,
}

/// Request the device position once. Resolves with a fix or the browser's
/// error message.
pub async fn request_position() -> Result<GeoFix, String> {
    let js = format!(
        r#"
        if (!("geolocation" in navigator)) {{
            dioxus.send({{ ok: false, message: "La geolocalización no está disponible en este dispositivo" }});
        }} else {{
            navigator.geolocation.getCurrentPosition(
                (pos) => dioxus.send({{ ok: true, lat: pos.coords.latitude, lng: pos.coords.longitude }}),
                (err) => dioxus.send({{ ok: false, message: err.message }}),
                {{ enableHighAccuracy: true, timeout: {GEO_TIMEOUT_MS}, maximumAge: 0 }}
            );
        }}
        "#
    );

    let mut eval = document::eval(&js);
    match eval.recv::<GeoReply>().await {
        Ok(reply) if reply.ok => Ok(GeoFix {
            latitude: reply.lat.unwrap_or_default(),
            longitude: reply.lng.unwrap_or_default(),
        }),
        Ok(reply) => Err(reply
            .message
            .unwrap_or_else(|| "No se pudo obtener la ubicación".to_string())),
        Err(e) => Err(format!("No se pudo obtener la ubicación: {e:?}")),
    }
}

/// Button that captures the current position and hands it to the caller.
#[component]
pub fn GeoLocationButton(on_captured: EventHandler<GeoFix>) -> Element {
    let mut center = use_notifier();
    let mut loading = use_signal(|| false);

    let onclick = move |_| {
        spawn(async move {
            loading.set(true);
            match request_position().await {
                Ok(fix) => on_captured.call(fix),
                Err(message) => notify(
                    &mut center,
                    NoticeLevel::Error,
                    "Error de geolocalización",
                    &message,
                ),
            }
            loading.set(false);
        });
    };

    rsx! {
        button {
            r#type: "button",
            class: "geo-button",
            disabled: loading(),
            onclick: onclick,
            crate::icons::IconMapPin { size: 16 }
            if loading() {
                span { "Obteniendo ubicación..." }
            } else {
                span { "Capturar ubicación actual" }
            }
        }
    }
}
