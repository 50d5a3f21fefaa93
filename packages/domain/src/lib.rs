//! # Domain core for Visitas
//!
//! Pure, WASM-safe building blocks shared by the server functions and the
//! web client: the data types that cross the server/client boundary, the
//! per-keystroke document-number validator, the administrative-division
//! catalog, and the visit aggregation used by the dashboard.
//!
//! Nothing in this crate performs I/O; everything here is deterministic
//! and unit-tested.

pub mod aggregate;
pub mod document;
pub mod locations;
pub mod models;

pub use aggregate::{daily_series, recent_activity, visits_in_month, visits_today, DailyCount};
pub use document::sanitize_document_input;
pub use locations::{departments, districts, is_catalog_row, provinces};
pub use models::{
    ClientDraft, ClientInfo, DocumentType, VisitDraft, VisitInfo, VisitPurpose,
};
