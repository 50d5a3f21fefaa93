//! Session constants.

/// Key under which the authenticated user's id is stored in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";
