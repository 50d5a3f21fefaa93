//! Visit row model; same shape as [`crate::models::ClientRow`] but for the
//! immutable `visits` table.

use chrono::{DateTime, NaiveDate, Utc};
use domain::{VisitInfo, VisitPurpose};
use sqlx::FromRow;
use uuid::Uuid;

/// Full visit record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct VisitRow {
    pub id: Uuid,
    pub client_id: Uuid,
    pub client_name: String,
    pub purpose: String,
    pub notes: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub visit_date: NaiveDate,
    pub visit_time: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl VisitRow {
    /// Convert to VisitInfo for client consumption.
    pub fn to_info(&self) -> VisitInfo {
        VisitInfo {
            id: self.id.to_string(),
            client_id: self.client_id.to_string(),
            client_name: self.client_name.clone(),
            purpose: VisitPurpose::from_label(&self.purpose)
                .unwrap_or(VisitPurpose::VisitaComercial),
            notes: self.notes.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            date: self.visit_date.format("%Y-%m-%d").to_string(),
            time: self.visit_time.clone(),
            user_id: self.user_id.to_string(),
            created_at: Some(self.created_at.to_rfc3339()),
        }
    }
}
