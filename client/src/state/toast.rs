//! Transient notification queue rendered by the toaster.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session operations report outcomes through [`Notifier`]; the signal-backed
//! implementation pushes a toast and, in the browser, schedules its removal.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// How long a toast stays on screen.
pub const TOAST_LIFETIME_MS: u32 = 4_000;

/// Oldest toasts are dropped beyond this many.
pub const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, kind, message: message.to_owned() });
        if self.items.len() > MAX_TOASTS {
            let excess = self.items.len() - MAX_TOASTS;
            self.items.drain(..excess);
        }
        id
    }

    /// Remove the toast with `id`. Returns whether it was present.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }
}

/// Sink for user-visible operation outcomes.
pub trait Notifier {
    fn notify(&self, kind: ToastKind, message: &str);

    fn success(&self, message: &str) {
        self.notify(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(ToastKind::Error, message);
    }
}

impl Notifier for RwSignal<ToastState> {
    fn notify(&self, kind: ToastKind, message: &str) {
        let Some(id) = self.try_update(|t| t.push(kind, message)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let toasts = *self;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
                toasts.update(|t| {
                    t.dismiss(id);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}
