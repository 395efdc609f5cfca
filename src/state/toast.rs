//! Transient notification queue.
//!
//! Pages push a toast when an operation resolves; the `Toaster` component
//! renders the queue and dismisses each entry after the configured lifetime.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    /// Failure styling.
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id. Ids increase monotonically.
    pub fn push(&mut self, title: &str, description: Option<String>, variant: ToastVariant) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, title: title.to_owned(), description, variant });
        id
    }

    pub fn success(&mut self, title: &str) -> u64 {
        self.push(title, None, ToastVariant::Default)
    }

    pub fn failure(&mut self, title: &str, description: String) -> u64 {
        self.push(title, Some(description), ToastVariant::Destructive)
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Context handle pages use to raise toasts that expire on their own.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: RwSignal<ToastState>,
    lifetime: Duration,
}

impl Notifier {
    pub fn new(lifetime: Duration) -> Self {
        Self { toasts: RwSignal::new(ToastState::default()), lifetime }
    }

    pub fn toasts(&self) -> ReadSignal<ToastState> {
        self.toasts.read_only()
    }

    pub fn success(&self, title: &str) {
        let id = self.toasts.try_update(|t| t.success(title));
        self.expire(id);
    }

    pub fn failure(&self, title: &str, description: String) {
        let id = self.toasts.try_update(|t| t.failure(title, description));
        self.expire(id);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.dismiss(id));
    }

    fn expire(&self, id: Option<u64>) {
        #[cfg(feature = "csr")]
        {
            let (toasts, lifetime) = (self.toasts, self.lifetime);
            if let Some(id) = id {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(lifetime).await;
                    toasts.try_update(|t| t.dismiss(id));
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, self.lifetime);
        }
    }
}
