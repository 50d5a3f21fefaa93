//! # Domain models for clients and visits
//!
//! Defines the data structures exchanged between the web client and the
//! server functions. These types are `Serialize + Deserialize` so they can
//! cross the server/client boundary via Dioxus server functions.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`ClientInfo`] | A client record as read back from the store, including server-assigned id, owner and timestamps. |
//! | [`ClientDraft`] | The user-editable subset submitted by the client form. |
//! | [`VisitInfo`] | An immutable visit record: client reference, purpose, captured coordinates, declared date/time. |
//! | [`VisitDraft`] | The payload submitted by the visit form. |
//! | [`DocumentType`] | Identity/tax document class; constrains the number format (see [`crate::document`]). |
//! | [`VisitPurpose`] | Fixed enumeration of visit reasons. |
//!
//! Timestamps travel as ISO 8601 strings (`2024-06-01T10:30:00Z`); a
//! missing `created_at` on a visit means the record predates the field and
//! sorts as epoch in [`crate::aggregate::recent_activity`].

use serde::{Deserialize, Serialize};

/// Identity/tax document class of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    /// National identity document, 8 digits.
    Dni,
    /// Tax identification number, 11 digits with a fixed prefix set.
    Ruc,
    /// Foreign-resident card, free text.
    Ce,
    /// Any other identifier, free text.
    Otro,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Dni,
        DocumentType::Ruc,
        DocumentType::Ce,
        DocumentType::Otro,
    ];

    /// Stable tag stored in the database and used in form `value`s.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Dni => "DNI",
            DocumentType::Ruc => "RUC",
            DocumentType::Ce => "CE",
            DocumentType::Otro => "Otro",
        }
    }

    /// Parse a stored tag. Unknown tags fall back to `Otro`.
    pub fn from_tag(tag: &str) -> DocumentType {
        match tag {
            "DNI" => DocumentType::Dni,
            "RUC" => DocumentType::Ruc,
            "CE" => DocumentType::Ce,
            _ => DocumentType::Otro,
        }
    }
}

/// Reason for a visit, as shown in the visit form's select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitPurpose {
    ClienteAusente,
    Cobranza,
    Devolucion,
    EstablecimientoCerrado,
    Reclamo,
    Supervision,
    Venta,
    VisitaComercial,
    VisitaTecnica,
}

impl VisitPurpose {
    pub const ALL: [VisitPurpose; 9] = [
        VisitPurpose::ClienteAusente,
        VisitPurpose::Cobranza,
        VisitPurpose::Devolucion,
        VisitPurpose::EstablecimientoCerrado,
        VisitPurpose::Reclamo,
        VisitPurpose::Supervision,
        VisitPurpose::Venta,
        VisitPurpose::VisitaComercial,
        VisitPurpose::VisitaTecnica,
    ];

    /// User-facing label; also the value persisted in the store.
    pub fn label(&self) -> &'static str {
        match self {
            VisitPurpose::ClienteAusente => "Cliente Ausente",
            VisitPurpose::Cobranza => "Cobranza",
            VisitPurpose::Devolucion => "Devolución",
            VisitPurpose::EstablecimientoCerrado => "Establecimiento Cerrado",
            VisitPurpose::Reclamo => "Reclamo",
            VisitPurpose::Supervision => "Supervisión",
            VisitPurpose::Venta => "Venta",
            VisitPurpose::VisitaComercial => "Visita Comercial",
            VisitPurpose::VisitaTecnica => "Visita Técnica",
        }
    }

    /// Parse a persisted label back into the enum.
    pub fn from_label(label: &str) -> Option<VisitPurpose> {
        Self::ALL.iter().copied().find(|p| p.label() == label)
    }
}

/// A client record as stored, safe to send to the client side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Server-generated UUID.
    pub id: String,
    pub name: String,
    pub address: String,
    /// Catalog triple; always a row of [`crate::locations`].
    pub district: String,
    pub province: String,
    pub department: String,
    pub document_type: DocumentType,
    pub document_number: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    /// Owning user; every read is scoped by this.
    pub user_id: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// The user-editable fields of a client, as submitted by the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientDraft {
    pub name: String,
    pub address: String,
    pub district: String,
    pub province: String,
    pub department: String,
    pub document_type: Option<DocumentType>,
    pub document_number: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
}

impl ClientDraft {
    /// Submit-time required-field check. Field formats are enforced while
    /// editing (see [`crate::document`]); here only presence matters.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("nombre");
        }
        if self.address.trim().is_empty() {
            missing.push("dirección");
        }
        if self.department.is_empty() || self.province.is_empty() || self.district.is_empty() {
            missing.push("ubicación");
        }
        if self.document_type.is_none() {
            missing.push("tipo de documento");
        }
        if self.document_number.trim().is_empty() {
            missing.push("número de documento");
        }
        missing
    }
}

/// An immutable visit record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitInfo {
    pub id: String,
    pub client_id: String,
    /// Denormalized so listings don't need a join.
    pub client_name: String,
    pub purpose: VisitPurpose,
    pub notes: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Declared calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Declared time of day, `HH:MM`.
    pub time: String,
    pub user_id: String,
    /// Server-assigned creation timestamp, ISO 8601.
    pub created_at: Option<String>,
}

/// The payload submitted by the visit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitDraft {
    pub client_id: String,
    pub client_name: String,
    pub purpose: VisitPurpose,
    pub notes: String,
    pub latitude: f64,
    pub longitude: f64,
    pub date: String,
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_type_tag_roundtrip() {
        for dt in DocumentType::ALL {
            assert_eq!(DocumentType::from_tag(dt.as_str()), dt);
        }
        assert_eq!(DocumentType::from_tag("???"), DocumentType::Otro);
    }

    #[test]
    fn purpose_label_roundtrip() {
        for p in VisitPurpose::ALL {
            assert_eq!(VisitPurpose::from_label(p.label()), Some(p));
        }
        assert_eq!(VisitPurpose::from_label("Almuerzo"), None);
    }

    #[test]
    fn draft_required_fields() {
        let mut draft = ClientDraft {
            name: "Bodega San Martín".into(),
            address: "Av. Grau 120".into(),
            district: "Miraflores".into(),
            province: "Lima".into(),
            department: "Lima".into(),
            document_type: Some(DocumentType::Dni),
            document_number: "45678901".into(),
            ..Default::default()
        };
        assert!(draft.missing_required().is_empty());

        draft.document_number.clear();
        assert_eq!(draft.missing_required(), vec!["número de documento"]);
    }
}
