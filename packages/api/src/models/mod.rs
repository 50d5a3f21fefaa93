//! Data models for the application.

#[cfg(feature = "server")]
mod client;
mod user;
#[cfg(feature = "server")]
mod visit;

#[cfg(feature = "server")]
pub use client::ClientRow;
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
#[cfg(feature = "server")]
pub use visit::VisitRow;
