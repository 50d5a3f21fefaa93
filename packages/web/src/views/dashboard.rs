//! Dashboard: monthly stats, daily-series chart, today's visits, the
//! month's visit map and the recent-activity feed. Everything is derived
//! from the latest visit snapshot on every render.

use dioxus::prelude::*;
use ui::icons::{IconClipboardCheck, IconPlusCircle, IconUsers};
use ui::{use_client_snapshot, use_session, use_visit_snapshot, LocationMapMultiple, LogoutButton, MapPoint, VisitsChart};

use crate::views::{current_date, BottomNav};
use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let clients = use_client_snapshot();
    let visits = use_visit_snapshot();

    // Signed-out users land back on the login screen.
    use_effect(move || {
        let state = session();
        if state.is_resolved() && state.user().is_none() {
            nav.replace(Route::Login {});
        }
    });

    let today = current_date();
    let snapshot = visits();
    let series = domain::daily_series(&snapshot.items, today);
    let todays = domain::visits_today(&snapshot.items, today);
    let month = domain::visits_in_month(&snapshot.items, today);
    let recent = domain::recent_activity(&snapshot.items);

    let map_points: Vec<MapPoint> = month
        .iter()
        .map(|v| MapPoint {
            latitude: v.latitude,
            longitude: v.longitude,
            label: v.client_name.clone(),
        })
        .collect();

    let greeting = session()
        .user()
        .map(|u| format!("Bienvenido, {}", u.display_name()))
        .unwrap_or_else(|| "Bienvenido".to_string());

    rsx! {
        div {
            class: "page",

            header {
                class: "page-header",
                div {
                    h1 { "{greeting}" }
                    p { "Gestiona tus clientes y visitas" }
                }
                LogoutButton { class: "button button--ghost" }
            }

            section {
                class: "stat-grid",
                div {
                    class: "stat-card",
                    div {
                        p { "Clientes" }
                        h3 { "{clients().items.len()}" }
                    }
                    span { class: "stat-icon", IconUsers { size: 20 } }
                }
                div {
                    class: "stat-card",
                    div {
                        p { "Visitas este mes" }
                        h3 { "{month.len()}" }
                    }
                    span { class: "stat-icon", IconClipboardCheck { size: 20 } }
                }
            }

            section {
                class: "quick-actions",
                button {
                    class: "button button--primary button--big",
                    onclick: move |_| { nav.push(Route::Visit { client_id: String::new() }); },
                    IconClipboardCheck { size: 24 }
                    span { "Nueva Visita" }
                }
                button {
                    class: "button button--big",
                    onclick: move |_| { nav.push(Route::Clients {}); },
                    IconUsers { size: 24 }
                    span { "Ver Clientes" }
                }
            }

            section {
                class: "chart-section",
                h2 { "Visitas del mes" }
                if snapshot.loaded {
                    VisitsChart { series: series.clone() }
                } else {
                    p { class: "muted", "Cargando..." }
                }
            }

            section {
                class: "today-section",
                h2 { "Visitas de hoy ({todays.len()})" }
                if todays.is_empty() {
                    p { class: "muted", "Aún no registras visitas hoy." }
                } else {
                    for v in todays.iter() {
                        div {
                            key: "{v.id}",
                            class: "visit-row",
                            div {
                                p { class: "visit-row-client", "{v.client_name}" }
                                p { class: "visit-row-detail", "{v.purpose.label()} · {v.time}" }
                            }
                        }
                    }
                }
            }

            if !map_points.is_empty() {
                section {
                    class: "map-section",
                    h2 { "Mapa del mes" }
                    LocationMapMultiple { points: map_points }
                }
            }

            section {
                class: "recent-section",
                h2 { "Actividad reciente" }
                if recent.is_empty() {
                    p { class: "muted", "Sin actividad todavía." }
                } else {
                    for v in recent.iter() {
                        div {
                            key: "{v.id}",
                            class: "visit-row",
                            span { class: "visit-row-icon", IconPlusCircle { size: 16 } }
                            div {
                                p { class: "visit-row-client", "{v.client_name}" }
                                p { class: "visit-row-detail", "{v.purpose.label()} · {v.date} {v.time}" }
                            }
                        }
                    }
                }
            }

            BottomNav {}
        }
    }
}
