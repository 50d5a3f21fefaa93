//! # Client row model
//!
//! [`ClientRow`] is the full `clients` table row ([`sqlx::FromRow`]);
//! [`ClientRow::to_info`] projects it into the boundary-crossing
//! [`domain::ClientInfo`], converting UUIDs to strings and timestamps to
//! ISO 8601. The reverse direction (draft → bound values) happens inline
//! in the server functions, where the server-assigned fields are filled.

use chrono::{DateTime, Utc};
use domain::{ClientInfo, DocumentType};
use sqlx::FromRow;
use uuid::Uuid;

/// Full client record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct ClientRow {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub district: String,
    pub province: String,
    pub department: String,
    pub document_type: String,
    pub document_number: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClientRow {
    /// Convert to ClientInfo for client consumption.
    pub fn to_info(&self) -> ClientInfo {
        ClientInfo {
            id: self.id.to_string(),
            name: self.name.clone(),
            address: self.address.clone(),
            district: self.district.clone(),
            province: self.province.clone(),
            department: self.department.clone(),
            document_type: DocumentType::from_tag(&self.document_type),
            document_number: self.document_number.clone(),
            contact_name: self.contact_name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            notes: self.notes.clone(),
            user_id: self.user_id.to_string(),
            created_at: Some(self.created_at.to_rfc3339()),
            updated_at: Some(self.updated_at.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn row_projects_field_for_field() {
        let row = ClientRow {
            id: Uuid::nil(),
            name: "Bodega San Martín".into(),
            address: "Av. Grau 120".into(),
            district: "Miraflores".into(),
            province: "Lima".into(),
            department: "Lima".into(),
            document_type: "RUC".into(),
            document_number: "20123456789".into(),
            contact_name: Some("Rosa Quispe".into()),
            phone: None,
            email: None,
            notes: None,
            status: "Prospecto".into(),
            user_id: Uuid::nil(),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
        };
        let info = row.to_info();
        assert_eq!(info.name, row.name);
        assert_eq!(info.document_type, DocumentType::Ruc);
        assert_eq!(info.document_number, row.document_number);
        assert_eq!(info.contact_name.as_deref(), Some("Rosa Quispe"));
        assert!(info.created_at.unwrap().starts_with("2024-06-01"));
    }
}
