//! Notification center: the app-wide surface for non-fatal failures and
//! confirmations. A context signal holds the stack of notices; any
//! component can push one via [`notify`], and [`NotificationArea`] renders
//! them with a dismiss control. Nothing here retries anything.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, Default)]
pub struct Notifications {
    entries: Vec<Notice>,
    next_id: u64,
}

impl Notifications {
    pub fn push(&mut self, level: NoticeLevel, title: &str, body: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notice {
            id,
            level,
            title: title.to_string(),
            body: body.to_string(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }

    pub fn entries(&self) -> &[Notice] {
        &self.entries
    }
}

pub fn use_notifier() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

/// Push a notice onto the shared stack.
pub fn notify(center: &mut Signal<Notifications>, level: NoticeLevel, title: &str, body: &str) {
    center.write().push(level, title, body);
}

/// Provides the notification signal to the subtree.
#[component]
pub fn NotificationProvider(children: Element) -> Element {
    let center = use_signal(Notifications::default);
    use_context_provider(|| center);

    rsx! {
        {children}
        NotificationArea {}
    }
}

/// Fixed stack of dismissable notices, newest on top.
#[component]
pub fn NotificationArea() -> Element {
    let mut center = use_notifier();
    let entries = center().entries().to_vec();

    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "notices",
            style: "position: fixed; top: 1rem; right: 1rem; z-index: 1000; display: flex; flex-direction: column; gap: 0.5rem; max-width: 320px;",
            for notice in entries.into_iter().rev() {
                div {
                    key: "{notice.id}",
                    class: match notice.level {
                        NoticeLevel::Error => "notice notice--error",
                        NoticeLevel::Success => "notice notice--success",
                        NoticeLevel::Info => "notice notice--info",
                    },
                    style: "background: white; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.15); padding: 0.75rem 1rem; border-left: 4px solid;",
                    div {
                        style: "display: flex; justify-content: space-between; align-items: baseline; gap: 0.5rem;",
                        strong { "{notice.title}" }
                        button {
                            style: "border: none; background: none; cursor: pointer; color: #787774;",
                            onclick: move |_| center.write().dismiss(notice.id),
                            "×"
                        }
                    }
                    p {
                        style: "margin: 0.25rem 0 0; font-size: 0.8125rem; color: #57534e;",
                        "{notice.body}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss() {
        let mut n = Notifications::default();
        let a = n.push(NoticeLevel::Error, "Error", "No se pudo guardar");
        let b = n.push(NoticeLevel::Success, "Listo", "Guardado");
        assert_eq!(n.entries().len(), 2);

        n.dismiss(a);
        assert_eq!(n.entries().len(), 1);
        assert_eq!(n.entries()[0].id, b);

        // Dismissing an unknown id is a no-op.
        n.dismiss(999);
        assert_eq!(n.entries().len(), 1);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut n = Notifications::default();
        let a = n.push(NoticeLevel::Info, "a", "");
        n.dismiss(a);
        let b = n.push(NoticeLevel::Info, "b", "");
        assert_ne!(a, b);
    }
}
