//! # Document-number input normalization
//!
//! [`sanitize_document_input`] is applied on every keystroke of the client
//! form's document field. It either returns the normalized text to keep in
//! form state, or the previously accepted value when the edit must be
//! rejected outright. Submit-time validation only re-checks that the field
//! is non-empty ([`crate::models::ClientDraft::missing_required`]).

use crate::models::DocumentType;

/// Valid leading digit pairs for a tax-ID number.
const RUC_PREFIXES: [&str; 4] = ["10", "15", "17", "20"];

/// Maximum length of a free-text document number.
const FREE_TEXT_MAX: usize = 20;

/// Normalize a document-number edit for the given document type.
///
/// - `Dni`: non-digits are stripped, length capped at 8.
/// - `Ruc`: non-digits are stripped, length capped at 11; once two or more
///   digits are present the leading pair must be one of
///   `10`, `15`, `17`, `20` — otherwise the edit is rejected and
///   `previous` is returned unchanged.
/// - `Ce` / `Otro`: kept as typed, capped at 20 characters.
pub fn sanitize_document_input(
    document_type: DocumentType,
    raw: &str,
    previous: &str,
) -> String {
    match document_type {
        DocumentType::Dni => digits_capped(raw, 8),
        DocumentType::Ruc => {
            let digits = digits_capped(raw, 11);
            if digits.len() >= 2 && !RUC_PREFIXES.contains(&&digits[..2]) {
                return previous.to_string();
            }
            digits
        }
        DocumentType::Ce | DocumentType::Otro => raw.chars().take(FREE_TEXT_MAX).collect(),
    }
}

fn digits_capped(raw: &str, cap: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(cap).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dni_strips_and_caps_at_eight() {
        let out = sanitize_document_input(DocumentType::Dni, "45-678.901234", "");
        assert_eq!(out, "45678901");
        assert!(out.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn dni_partial_input_passes_through() {
        assert_eq!(sanitize_document_input(DocumentType::Dni, "456", ""), "456");
    }

    #[test]
    fn ruc_accepts_allowed_prefixes() {
        for prefix in ["10", "15", "17", "20"] {
            let raw = format!("{prefix}123456789");
            let out = sanitize_document_input(DocumentType::Ruc, &raw, "");
            assert_eq!(out, raw);
            assert_eq!(out.len(), 11);
        }
    }

    #[test]
    fn ruc_rejects_bad_prefix_keeping_previous() {
        // Typing "99" into an empty field leaves the field empty.
        assert_eq!(sanitize_document_input(DocumentType::Ruc, "99", ""), "");
        // A bad edit over an accepted value keeps the accepted value.
        assert_eq!(
            sanitize_document_input(DocumentType::Ruc, "90123456789", "20123456789"),
            "20123456789"
        );
    }

    #[test]
    fn ruc_single_digit_not_yet_checked() {
        assert_eq!(sanitize_document_input(DocumentType::Ruc, "9", ""), "9");
    }

    #[test]
    fn ruc_caps_at_eleven() {
        let out = sanitize_document_input(DocumentType::Ruc, "201234567890123", "");
        assert_eq!(out, "20123456789");
    }

    #[test]
    fn ruc_full_number_accepted() {
        assert_eq!(
            sanitize_document_input(DocumentType::Ruc, "20123456789", ""),
            "20123456789"
        );
    }

    #[test]
    fn free_text_caps_at_twenty() {
        let raw = "CE-0012345678901234567890";
        let out = sanitize_document_input(DocumentType::Ce, raw, "");
        assert_eq!(out.chars().count(), 20);
        let out = sanitize_document_input(DocumentType::Otro, "PAS-778899", "");
        assert_eq!(out, "PAS-778899");
    }
}
