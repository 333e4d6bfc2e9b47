//! Transient toast notifications.
//!
//! Request outcomes surface here: a short message with a level, stacked in a
//! corner, auto-dismissed after a few seconds. Never modal, never blocking: a
//! failed request toasts and the page stays interactive.

use std::time::Duration;

use dioxus::prelude::*;

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast--info",
            ToastLevel::Success => "toast--success",
            ToastLevel::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// The live toast stack.
#[derive(Clone, Debug, Default)]
pub struct Toasts {
    entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn push(&mut self, level: ToastLevel, message: &str) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Toast {
            id,
            level,
            message: message.to_string(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}

/// Get the shared toast stack.
pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Show a toast.
pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: &str) {
    toasts.write().push(level, message);
}

/// Provider component that owns the toast stack and renders it.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}
        ToastHost {}
    }
}

/// Fixed-position stack of the currently visible toasts.
#[component]
fn ToastHost() -> Element {
    let toasts = use_toasts();
    let entries = toasts().entries().to_vec();

    rsx! {
        div {
            class: "toast-stack",
            for toast in entries {
                ToastView { key: "{toast.id}", toast }
            }
        }
    }
}

/// One toast; schedules its own dismissal on mount and dismisses early on
/// click.
#[component]
fn ToastView(toast: Toast) -> Element {
    let mut toasts = use_toasts();
    let id = toast.id;
    let class = format!("toast {}", toast.level.class());

    use_hook(move || {
        spawn(async move {
            crate::sleep(TOAST_LIFETIME).await;
            toasts.write().dismiss(id);
        });
    });

    rsx! {
        div {
            class: "{class}",
            onclick: move |_| toasts.write().dismiss(id),
            "{toast.message}"
        }
    }
}
