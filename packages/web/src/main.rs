use dioxus::prelude::*;

use ui::{NotificationProvider, SessionProvider};
use views::{ClientForm, Clients, Dashboard, Login, VisitForm};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/clients")]
    Clients {},
    #[route("/client/new")]
    ClientNew {},
    #[route("/client/:id")]
    ClientEdit { id: String },
    #[route("/visit?:client_id")]
    Visit { client_id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    // Initialize database pool
    let pool = api::db::get_pool()
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    // Create session store
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .expect("Failed to set up session table");

    // Session layer configuration
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        )); // 7 days

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        NotificationProvider {
            SessionProvider {
                Router::<Route> {}
            }
        }
    }
}

#[component]
fn ClientNew() -> Element {
    rsx! {
        ClientForm {}
    }
}

#[component]
fn ClientEdit(id: String) -> Element {
    rsx! {
        ClientForm { id }
    }
}

#[component]
fn Visit(client_id: String) -> Element {
    rsx! {
        VisitForm { preselected: client_id }
    }
}
