//! # API crate — shared fullstack server functions for Visitas
//!
//! Defines every Dioxus server function the web frontend calls, plus the
//! supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Password hashing (Argon2id) and session key constants |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`error`] | `server` | Classified auth failures and repository error taxonomy |
//! | [`models`] | — | Database rows (`User`, `ClientRow`, `VisitRow`) and their client-safe projections |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function,
//! annotated with `#[get(...)]` or `#[post(...)]` and compiled twice: once
//! with full server logic (behind `#[cfg(feature = "server")]`) and once
//! as a thin client stub that forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `register`, `login_password`, `logout`
//! - **Clients**: `save_client`, `update_client`, `get_client`, `list_clients`
//! - **Visits**: `save_visit`, `list_visits`
//!
//! Every client/visit read and write is scoped to the session user: the
//! `user_id` column is assigned from the session on insert and appears in
//! the `WHERE` clause of every query.

use dioxus::prelude::*;

pub mod auth;
pub mod db;
#[cfg(feature = "server")]
pub mod error;
pub mod models;

pub use domain::{ClientDraft, ClientInfo, VisitDraft, VisitInfo};
pub use models::UserInfo;

#[cfg(feature = "server")]
use error::{AuthError, DataError};

/// Initial pipeline stage every new client enters.
#[cfg(feature = "server")]
const NEW_CLIENT_STATUS: &str = "Prospecto";

/// Minimum accepted password length.
pub const PASSWORD_MIN_LEN: usize = 6;

/// Resolve the session to the authenticated user's id.
#[cfg(feature = "server")]
async fn session_user_id(
    session: &tower_sessions::Session,
) -> Result<uuid::Uuid, ServerFnError> {
    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new(DataError::NotAuthenticated.to_string()));
    };

    uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))
}

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Register a new user with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new(AuthError::InvalidEmail.to_string()));
    }
    if password.len() < PASSWORD_MIN_LEN {
        return Err(ServerFnError::new(AuthError::WeakPassword.to_string()));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing: Option<(i32,)> =
        sqlx::query_as("SELECT 1 as n FROM users WHERE email = $1")
            .bind(&email)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(DataError::from(e).to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(AuthError::EmailInUse.to_string()));
    }

    let password_hash =
        auth::hash_password(&password).map_err(|e| ServerFnError::new(e))?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING *",
    )
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(DataError::from(e).to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new(AuthError::InvalidEmail.to_string()));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(DataError::from(e).to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new(AuthError::UserNotFound.to_string()));
    };

    let valid = auth::verify_password(&password, &user.password_hash)
        .map_err(|e| ServerFnError::new(e))?;

    if !valid {
        return Err(ServerFnError::new(AuthError::WrongPassword.to_string()));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Validate the submit-time rules shared by create and update. Returns the
/// declared document type, which is guaranteed present by the check.
#[cfg(feature = "server")]
fn check_client_draft(draft: &ClientDraft) -> Result<domain::DocumentType, ServerFnError> {
    let missing = draft.missing_required();
    if !missing.is_empty() {
        return Err(ServerFnError::new(
            DataError::Invalid(format!("Campos obligatorios: {}", missing.join(", ")))
                .to_string(),
        ));
    }
    if !domain::is_catalog_row(&draft.department, &draft.province, &draft.district) {
        return Err(ServerFnError::new(
            DataError::Invalid("Ubicación inválida".to_string()).to_string(),
        ));
    }
    draft
        .document_type
        .ok_or_else(|| ServerFnError::new(DataError::Invalid("Documento inválido".to_string()).to_string()))
}

/// Create a new client owned by the session user.
#[cfg(feature = "server")]
#[post("/api/clients", session: tower_sessions::Session)]
pub async fn save_client(draft: ClientDraft) -> Result<ClientInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ClientRow;

    let user_id = session_user_id(&session).await?;
    let document_type = check_client_draft(&draft)?.as_str();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: ClientRow = sqlx::query_as(
        "INSERT INTO clients
            (id, name, address, district, province, department,
             document_type, document_number, contact_name, phone, email, notes,
             status, user_id)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
         RETURNING *",
    )
    .bind(uuid::Uuid::new_v4())
    .bind(draft.name.trim())
    .bind(draft.address.trim())
    .bind(&draft.district)
    .bind(&draft.province)
    .bind(&draft.department)
    .bind(document_type)
    .bind(draft.document_number.trim())
    .bind(none_if_empty(&draft.contact_name))
    .bind(none_if_empty(&draft.phone))
    .bind(none_if_empty(&draft.email))
    .bind(none_if_empty(&draft.notes))
    .bind(NEW_CLIENT_STATUS)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(DataError::from(e).to_string()))?;

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/clients")]
pub async fn save_client(draft: ClientDraft) -> Result<ClientInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Full-record update of a client owned by the session user.
#[cfg(feature = "server")]
#[post("/api/clients/update", session: tower_sessions::Session)]
pub async fn update_client(id: String, draft: ClientDraft) -> Result<ClientInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ClientRow;

    let user_id = session_user_id(&session).await?;
    let document_type = check_client_draft(&draft)?.as_str();

    let client_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<ClientRow> = sqlx::query_as(
        "UPDATE clients SET
            name = $3, address = $4, district = $5, province = $6, department = $7,
            document_type = $8, document_number = $9, contact_name = $10,
            phone = $11, email = $12, notes = $13, updated_at = NOW()
         WHERE id = $1 AND user_id = $2
         RETURNING *",
    )
    .bind(client_id)
    .bind(user_id)
    .bind(draft.name.trim())
    .bind(draft.address.trim())
    .bind(&draft.district)
    .bind(&draft.province)
    .bind(&draft.department)
    .bind(document_type)
    .bind(draft.document_number.trim())
    .bind(none_if_empty(&draft.contact_name))
    .bind(none_if_empty(&draft.phone))
    .bind(none_if_empty(&draft.email))
    .bind(none_if_empty(&draft.notes))
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(DataError::from(e).to_string()))?;

    let Some(row) = row else {
        return Err(ServerFnError::new(DataError::NotFound.to_string()));
    };

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/clients/update")]
pub async fn update_client(id: String, draft: ClientDraft) -> Result<ClientInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Point read of one client, owner checked.
#[cfg(feature = "server")]
#[get("/api/clients/:id", session: tower_sessions::Session)]
pub async fn get_client(id: String) -> Result<Option<ClientInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ClientRow;

    let user_id = session_user_id(&session).await?;
    let client_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<ClientRow> =
        sqlx::query_as("SELECT * FROM clients WHERE id = $1 AND user_id = $2")
            .bind(client_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(DataError::from(e).to_string()))?;

    Ok(row.map(|r| r.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/clients/:id")]
pub async fn get_client(id: String) -> Result<Option<ClientInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// All clients of the session user, newest first.
#[cfg(feature = "server")]
#[get("/api/clients", session: tower_sessions::Session)]
pub async fn list_clients() -> Result<Vec<ClientInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ClientRow;

    let user_id = session_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<ClientRow> = sqlx::query_as(
        "SELECT * FROM clients WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(DataError::from(e).to_string()))?;

    Ok(rows.iter().map(|r| r.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/clients")]
pub async fn list_clients() -> Result<Vec<ClientInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Register a visit. Visits are immutable once written.
#[cfg(feature = "server")]
#[post("/api/visits", session: tower_sessions::Session)]
pub async fn save_visit(draft: VisitDraft) -> Result<VisitInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::VisitRow;

    let user_id = session_user_id(&session).await?;

    let client_id = uuid::Uuid::parse_str(&draft.client_id)
        .map_err(|_| ServerFnError::new(DataError::Invalid("Cliente inválido".into()).to_string()))?;
    let visit_date = chrono::NaiveDate::parse_from_str(&draft.date, "%Y-%m-%d")
        .map_err(|_| ServerFnError::new(DataError::Invalid("Fecha inválida".into()).to_string()))?;
    if !draft.latitude.is_finite() || !draft.longitude.is_finite() {
        return Err(ServerFnError::new(
            DataError::Invalid("Ubicación no capturada".into()).to_string(),
        ));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // The denormalized name is re-read so a stale client pick can't store
    // another user's client.
    let owned: Option<(String,)> =
        sqlx::query_as("SELECT name FROM clients WHERE id = $1 AND user_id = $2")
            .bind(client_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(DataError::from(e).to_string()))?;

    let Some((client_name,)) = owned else {
        return Err(ServerFnError::new(DataError::PermissionDenied.to_string()));
    };

    let row: VisitRow = sqlx::query_as(
        "INSERT INTO visits
            (id, client_id, client_name, purpose, notes,
             latitude, longitude, visit_date, visit_time, user_id)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
         RETURNING *",
    )
    .bind(uuid::Uuid::new_v4())
    .bind(client_id)
    .bind(&client_name)
    .bind(draft.purpose.label())
    .bind(none_if_empty(&draft.notes))
    .bind(draft.latitude)
    .bind(draft.longitude)
    .bind(visit_date)
    .bind(&draft.time)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(DataError::from(e).to_string()))?;

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/visits")]
pub async fn save_visit(draft: VisitDraft) -> Result<VisitInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// All visits of the session user, newest first.
#[cfg(feature = "server")]
#[get("/api/visits", session: tower_sessions::Session)]
pub async fn list_visits() -> Result<Vec<VisitInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::VisitRow;

    let user_id = session_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<VisitRow> = sqlx::query_as(
        "SELECT * FROM visits WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(DataError::from(e).to_string()))?;

    Ok(rows.iter().map(|r| r.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/visits")]
pub async fn list_visits() -> Result<Vec<VisitInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Empty optional form fields become SQL NULLs.
#[cfg(feature = "server")]
fn none_if_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
