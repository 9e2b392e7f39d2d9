use leptos::*;

pub const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn classes(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-green-100 border-green-500 text-green-800",
            ToastKind::Error => "bg-red-100 border-red-500 text-red-800",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Fire-and-forget notification sink shared through context.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self
            .toasts
            .try_update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    fn push(&self, kind: ToastKind, message: String) {
        let Some(id) = self.next_id.try_update_value(|next| {
            *next = next.wrapping_add(1);
            *next
        }) else {
            return;
        };
        let toast = Toast { id, kind, message };
        if self.toasts.try_update(|toasts| toasts.push(toast)).is_some() {
            self.schedule_dismiss(id);
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let toaster = *self;
        gloo_timers::callback::Timeout::new(TOAST_TIMEOUT_MS, move || toaster.dismiss(id)).forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(provide_toaster)
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let toasts = toaster.toasts();
    view! {
        <div class="toast-host fixed top-4 right-4 z-50 space-y-2" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast border-l-4 px-4 py-3 rounded shadow {}", toast.kind.classes())
                            role="status"
                        >
                            <div class="flex items-start justify-between gap-4">
                                <p class="text-sm">{toast.message}</p>
                                <button
                                    type="button"
                                    class="text-sm opacity-75 hover:opacity-100"
                                    aria-label="Dismiss"
                                    on:click=move |_| toaster.dismiss(id)
                                >
                                    "×"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{render_to_string, with_runtime};

    #[test]
    fn toaster_keeps_toasts_in_push_order_with_unique_ids() {
        with_runtime(|| {
            let toaster = Toaster::new();
            toaster.success("Teacher approved successfully");
            toaster.error("Failed to delete teacher");

            let toasts = toaster.toasts().get();
            assert_eq!(toasts.len(), 2);
            assert_eq!(toasts[0].kind, ToastKind::Success);
            assert_eq!(toasts[1].kind, ToastKind::Error);
            assert_ne!(toasts[0].id, toasts[1].id);
        });
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        with_runtime(|| {
            let toaster = Toaster::new();
            toaster.success("first");
            toaster.success("second");
            let first = toaster.toasts().get()[0].id;

            toaster.dismiss(first);

            let remaining = toaster.toasts().get();
            assert_eq!(remaining.len(), 1);
            assert_eq!(remaining[0].message, "second");
        });
    }

    #[test]
    fn use_toaster_reuses_provided_context() {
        with_runtime(|| {
            let provided = provide_toaster();
            provided.error("shared");
            assert_eq!(use_toaster().toasts().get().len(), 1);
        });
    }

    #[test]
    fn toast_host_renders_messages() {
        let html = render_to_string(|| {
            let toaster = provide_toaster();
            toaster.success("Teacher deleted successfully");
            view! { <ToastHost /> }
        });
        assert!(html.contains("Teacher deleted successfully"));
        assert!(html.contains("bg-green-100"));
    }
}
