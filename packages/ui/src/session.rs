//! Session store for the page layer.
//!
//! Replaces a global auth context with an explicitly constructed store:
//! [`SessionProvider`] owns the state and passes it down through Dioxus
//! context; pages read it with [`use_session`]. The provider resolves the
//! initial auth status once on mount and then re-checks periodically; the
//! polling task is scoped to the provider, so tearing the provider down
//! releases the subscription.

use api::UserInfo;
use dioxus::prelude::*;

use crate::live::sleep_secs;

/// How often the provider re-checks the session.
const SESSION_POLL_SECS: u64 = 30;

/// Authentication status as seen by the pages.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Initial state, auth status not yet resolved.
    Unknown,
    /// No user signed in.
    Anonymous,
    Authenticated(UserInfo),
}

impl SessionState {
    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Whether the initial auth check has completed.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, SessionState::Unknown)
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that manages the session state.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session = use_signal(|| SessionState::Unknown);

    // Resolve the initial auth status on mount.
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(Some(user)) => session.set(SessionState::Authenticated(user)),
            Ok(None) => session.set(SessionState::Anonymous),
            Err(e) => {
                tracing::error!("Initial session check failed: {}", e);
                session.set(SessionState::Anonymous);
            }
        }
    });

    // Periodic re-check; a provider-side sign-out lands here.
    use_effect(move || {
        spawn(async move {
            loop {
                sleep_secs(SESSION_POLL_SECS).await;

                // Don't race the initial resolution.
                if !session.peek().is_resolved() {
                    continue;
                }
                match api::get_current_user().await {
                    Ok(Some(user)) => {
                        if session.peek().user() != Some(&user) {
                            session.set(SessionState::Authenticated(user));
                        }
                    }
                    Ok(None) => {
                        if session.peek().user().is_some() {
                            session.set(SessionState::Anonymous);
                        }
                    }
                    // Connectivity hiccups keep the last known state.
                    Err(e) => tracing::debug!("Session re-check failed: {}", e),
                }
            }
        });
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Cerrar sesión".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| async move {
        if let Ok(()) = api::logout().await {
            session.set(SessionState::Anonymous);
            // Back to the login screen.
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_is_not_resolved() {
        assert!(!SessionState::Unknown.is_resolved());
        assert!(SessionState::Anonymous.is_resolved());
    }

    #[test]
    fn user_only_when_authenticated() {
        let user = UserInfo {
            id: "u1".into(),
            email: "v@example.com".into(),
        };
        assert_eq!(
            SessionState::Authenticated(user.clone()).user(),
            Some(&user)
        );
        assert_eq!(SessionState::Anonymous.user(), None);
        assert_eq!(SessionState::Unknown.user(), None);
    }
}
