//! Transient toast notifications.
//!
//! Provided once at the app root; pages capture the service at creation and
//! call it from async handlers.

use crate::shared::api_client::ApiError;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::system::auth::context::AuthContext;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
    auth: AuthContext,
}

impl NotificationService {
    pub fn new(auth: AuthContext) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
            auth,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    /// Report a failed call: logs it, drops the session on 401 and toasts.
    pub fn api_error(&self, context: &str, err: &ApiError) {
        log::warn!("{}: {}", context, err);
        if err.is_unauthorized() {
            self.auth.expire();
        }
        self.error(err.to_string());
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|t| t.push(Toast { id, kind, message }));

        let this = *self;
        let timeout = config().toast_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            this.dismiss(id);
        });
    }
}

/// Hook to access the notification service
pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the toast stack. Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_notifications();

    view! {
        <div class="toast-container">
            <For
                each=move || svc.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| svc.dismiss(id)
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
