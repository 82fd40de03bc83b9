//! Transient notifications shown after external calls succeed or fail.

use leptos::*;

#[cfg(target_arch = "wasm32")]
const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u32,
    pub items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|toast| toast.id != id);
    }
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    pub queue: RwSignal<ToastQueue>,
}

impl ToastContext {
    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.update(|queue| queue.dismiss(id));
    }

    fn show(&self, kind: ToastKind, message: String) {
        let mut id = 0;
        self.queue.update(|queue| id = queue.push(kind, message));
        self.schedule_dismiss(id);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u32) {
        let queue = self.queue;
        gloo_timers::callback::Timeout::new(TOAST_TIMEOUT_MS, move || {
            queue.update(|queue| queue.dismiss(id));
        })
        .forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u32) {}
}

#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    provide_context(ToastContext {
        queue: create_rw_signal(ToastQueue::default()),
    });
    view! { <>{children()}</> }
}

pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(|| ToastContext {
        queue: create_rw_signal(ToastQueue::default()),
    })
}
