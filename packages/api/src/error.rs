//! # Server-side error taxonomy
//!
//! Two families, mirroring how failures surface in the UI:
//!
//! - [`AuthError`] — login/registration failures, classified into the
//!   fixed set of user-facing messages the login screen shows. Everything
//!   unexpected collapses into [`AuthError::Unknown`].
//! - [`DataError`] — client/visit repository failures. These reach the
//!   user as a dismissable notification; there is no retry policy.
//!
//! Both convert to `ServerFnError` at the server-function boundary so the
//! message string is what crosses to the client.

use thiserror::Error;

/// Classified authentication failure. The `Display` strings are the exact
/// messages the login screen renders.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Correo electrónico inválido")]
    InvalidEmail,
    #[error("No existe una cuenta con este correo")]
    UserNotFound,
    #[error("Contraseña incorrecta")]
    WrongPassword,
    #[error("Este correo ya está registrado")]
    EmailInUse,
    #[error("La contraseña debe tener al menos 6 caracteres")]
    WeakPassword,
    #[error("No se pudo completar la operación")]
    Unknown,
}

/// Repository failure surfaced as a notification.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Debes iniciar sesión")]
    NotAuthenticated,
    #[error("No tienes acceso a este registro")]
    PermissionDenied,
    #[error("Registro no encontrado")]
    NotFound,
    #[error("{0}")]
    Invalid(String),
    #[error("Error de conexión con el servidor")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for DataError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => DataError::NotFound,
            other => DataError::Database(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_messages_are_the_fixed_set() {
        let all = [
            AuthError::InvalidEmail,
            AuthError::UserNotFound,
            AuthError::WrongPassword,
            AuthError::EmailInUse,
            AuthError::WeakPassword,
            AuthError::Unknown,
        ];
        let messages: Vec<String> = all.iter().map(|e| e.to_string()).collect();
        assert_eq!(messages.len(), 6);
        // Every variant maps to a distinct user-facing message.
        for (i, m) in messages.iter().enumerate() {
            assert!(!messages[i + 1..].contains(m));
        }
    }

    #[test]
    fn row_not_found_classifies_as_not_found() {
        assert!(matches!(
            DataError::from(sqlx::Error::RowNotFound),
            DataError::NotFound
        ));
    }
}
