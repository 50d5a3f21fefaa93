//! Snapshot polling hooks.
//!
//! The store has no push channel, so "live" collections are modeled as a
//! full-snapshot poll: the hook fetches the whole collection, publishes it
//! into a signal, sleeps, and repeats. The polling task is spawned in the
//! calling component's scope, so navigating away drops it and nothing acts
//! on a stale screen. Consumers re-derive everything from each snapshot.

use api::{ClientInfo, VisitInfo};
use dioxus::prelude::*;

use crate::notify::{notify, use_notifier, NoticeLevel};

/// How often snapshots are refreshed.
const SNAPSHOT_POLL_SECS: u64 = 30;

/// A polled collection plus whether the first load has completed.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<T> {
    pub items: Vec<T>,
    pub loaded: bool,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loaded: false,
        }
    }
}

/// Poll the session user's clients for the life of the calling component.
pub fn use_client_snapshot() -> Signal<Snapshot<ClientInfo>> {
    let mut center = use_notifier();
    let mut snap = use_signal(Snapshot::default);

    use_effect(move || {
        spawn(async move {
            let mut first = true;
            loop {
                match api::list_clients().await {
                    Ok(items) => snap.set(Snapshot {
                        items,
                        loaded: true,
                    }),
                    Err(e) => {
                        tracing::error!("Client snapshot failed: {}", e);
                        if first {
                            notify(
                                &mut center,
                                NoticeLevel::Error,
                                "Error",
                                "No se pudieron cargar los clientes",
                            );
                        }
                    }
                }
                first = false;
                sleep_secs(SNAPSHOT_POLL_SECS).await;
            }
        });
    });

    snap
}

/// Poll the session user's visits for the life of the calling component.
pub fn use_visit_snapshot() -> Signal<Snapshot<VisitInfo>> {
    let mut center = use_notifier();
    let mut snap = use_signal(Snapshot::default);

    use_effect(move || {
        spawn(async move {
            let mut first = true;
            loop {
                match api::list_visits().await {
                    Ok(items) => snap.set(Snapshot {
                        items,
                        loaded: true,
                    }),
                    Err(e) => {
                        tracing::error!("Visit snapshot failed: {}", e);
                        if first {
                            notify(
                                &mut center,
                                NoticeLevel::Error,
                                "Error",
                                "No se pudieron cargar las visitas",
                            );
                        }
                    }
                }
                first = false;
                sleep_secs(SNAPSHOT_POLL_SECS).await;
            }
        });
    });

    snap
}

/// Platform-appropriate async sleep.
pub(crate) async fn sleep_secs(secs: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_secs(secs)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
}
