//! Leaflet map embedding via JS interop.
//!
//! Dioxus has no native map widget, so the map is mounted with
//! `document::eval`: the script lazily injects Leaflet from its CDN,
//! creates (or replaces) a map on the component's element, adds the
//! OpenStreetMap tile layer with its required attribution, and drops one
//! marker per point. Re-renders with new points rebuild the map.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use serde::Serialize;

/// A marker on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

static NEXT_MAP_ID: AtomicU64 = AtomicU64::new(0);

fn use_map_id() -> String {
    use_hook(|| {
        format!(
            "leaflet-map-{}",
            NEXT_MAP_ID.fetch_add(1, Ordering::Relaxed)
        )
    })
}

/// Map centered on a single captured coordinate.
#[component]
pub fn LocationMap(latitude: f64, longitude: f64, #[props(default = "".to_string())] label: String) -> Element {
    let points = vec![MapPoint {
        latitude,
        longitude,
        label,
    }];
    rsx! {
        LocationMapMultiple { points }
    }
}

/// Map fitted around a set of markers (the month's visits).
#[component]
pub fn LocationMapMultiple(points: Vec<MapPoint>) -> Element {
    let id = use_map_id();

    let element_id = id.clone();
    use_effect(use_reactive!(|(points,)| {
        let js = mount_map_js(&element_id, &points);
        spawn(async move {
            if let Err(e) = document::eval(&js).await {
                tracing::error!("Map mount failed: {:?}", e);
            }
        });
    }));

    rsx! {
        div {
            id: "{id}",
            class: "location-map",
            style: "height: 220px; border-radius: 12px; overflow: hidden;",
        }
    }
}

fn mount_map_js(element_id: &str, points: &[MapPoint]) -> String {
    let payload = serde_json::to_string(points).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"
        (async () => {{
            if (!window.L) {{
                await new Promise((resolve) => {{
                    const css = document.createElement("link");
                    css.rel = "stylesheet";
                    css.href = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
                    document.head.appendChild(css);
                    const js = document.createElement("script");
                    js.src = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
                    js.onload = resolve;
                    document.head.appendChild(js);
                }});
            }}
            const el = document.getElementById("{element_id}");
            if (!el) return;
            if (el._map) el._map.remove();
            const points = {payload};
            if (points.length === 0) return;
            const map = L.map(el);
            el._map = map;
            L.tileLayer("https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png", {{
                maxZoom: 19,
                attribution: "&copy; OpenStreetMap contributors",
            }}).addTo(map);
            for (const p of points) {{
                L.marker([p.latitude, p.longitude]).addTo(map).bindPopup(p.label);
            }}
            if (points.length === 1) {{
                map.setView([points[0].latitude, points[0].longitude], 15);
            }} else {{
                map.fitBounds(points.map((p) => [p.latitude, p.longitude]), {{ padding: [24, 24] }});
            }}
        }})();
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_embeds_points_and_attribution() {
        let js = mount_map_js(
            "leaflet-map-0",
            &[MapPoint {
                latitude: -12.05,
                longitude: -77.04,
                label: "Bodega San Martín".to_string(),
            }],
        );
        assert!(js.contains("leaflet-map-0"));
        assert!(js.contains("Bodega San Martín"));
        assert!(js.contains("OpenStreetMap"));
        // The tile URL template must survive the Rust format braces.
        assert!(js.contains("{z}/{x}/{y}.png"));
    }
}
