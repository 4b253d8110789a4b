//! Non-blocking toast notifications.
//!
//! [`NotificationService`] is provided through context by `App`. Code that
//! may run outside the app tree uses [`Notifier`], which falls back to a
//! blocking `window.alert` when no service is mounted.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            ToastLevel::Success => "success",
            ToastLevel::Warning => "warning",
            ToastLevel::Error => "error",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ToastLevel::Success => "Listo",
            ToastLevel::Warning => "Advertencia",
            ToastLevel::Error => "Error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Visible toasts, newest last
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Returns the id of the new toast, or `None` when the same message is
    /// already on screen.
    pub fn push(&mut self, level: ToastLevel, message: String) -> Option<u64> {
        if self
            .items
            .iter()
            .any(|t| t.level == level && t.message == message)
        {
            return None;
        }
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, level, message });
        Some(id)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<ToastQueue>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn notify(&self, level: ToastLevel, message: impl Into<String>) {
        let Some(Some(id)) = self.queue.try_update(|q| q.push(level, message.into())) else {
            return;
        };
        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastLevel::Error, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notify(ToastLevel::Warning, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastLevel::Success, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Toast surface if one is mounted, blocking alert otherwise
#[derive(Clone, Copy)]
pub struct Notifier(Option<NotificationService>);

impl Notifier {
    pub fn from_context() -> Self {
        Self(use_context::<NotificationService>())
    }

    pub fn error(&self, message: impl Into<String>) {
        match self.0 {
            Some(service) => service.error(message),
            None => blocking_alert(&message.into()),
        }
    }

    pub fn warning(&self, message: impl Into<String>) {
        match self.0 {
            Some(service) => service.warning(message),
            None => blocking_alert(&message.into()),
        }
    }
}

pub fn blocking_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Blocking yes/no question
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn Toaster() -> impl IntoView {
    let service =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    view! {
        <div class="toast-container" aria-live="polite">
            <For
                each=move || service.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast toast--{}", toast.level.css_modifier())
                            role="alert"
                        >
                            <strong>{toast.level.title()}":"</strong>
                            " "
                            <span>{toast.message.clone()}</span>
                            <button
                                class="toast__close"
                                title="Cerrar"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_visible_message_is_not_repeated() {
        let mut q = ToastQueue::default();
        assert_eq!(q.push(ToastLevel::Error, "x".into()), Some(1));
        assert_eq!(q.push(ToastLevel::Error, "x".into()), None);
        assert_eq!(q.push(ToastLevel::Warning, "x".into()), Some(2));
        assert_eq!(q.items().len(), 2);
    }

    #[test]
    fn dismissed_message_can_be_shown_again() {
        let mut q = ToastQueue::default();
        let id = q.push(ToastLevel::Error, "x".into()).unwrap();
        q.dismiss(id);
        assert!(q.items().is_empty());
        assert_eq!(q.push(ToastLevel::Error, "x".into()), Some(2));
    }
}
