//! Lazy process-wide PostgreSQL pool.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Connections held open; every server function shares this pool.
const MAX_CONNECTIONS: u32 = 5;

/// Get or initialize the database connection pool.
/// Uses the DATABASE_URL environment variable for the connection string.
pub async fn get_pool() -> Result<&'static PgPool, sqlx::Error> {
    POOL.get_or_try_init(|| async {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");

        PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(&database_url)
            .await
    })
    .await
}
