use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// Centralized toast notifications.
///
/// Mutation failures and batch summaries surface here; list-fetch errors
/// stay inline on their page. Toasts auto-dismiss after a few seconds.
#[derive(Clone, Copy)]
pub struct ToastService {
    messages: RwSignal<Vec<ToastMessage>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastKind::Error, text.into());
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(ToastKind::Info, text.into());
    }

    fn push(&self, kind: ToastKind, text: String) {
        match kind {
            ToastKind::Error => log::error!("{text}"),
            _ => log::debug!("{text}"),
        }
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.messages.update(|m| m.push(ToastMessage { id, kind, text }));

        let messages = self.messages;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(4000).await;
            messages.update(|m| m.retain(|toast| toast.id != id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.messages.update(|m| m.retain(|toast| toast.id != id));
    }

    pub fn messages(&self) -> RwSignal<Vec<ToastMessage>> {
        self.messages
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.messages().get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                        ToastKind::Info => "toast toast--info",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id)>
                            {toast.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
