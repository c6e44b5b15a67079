//! Top-right toast stack.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For each=move || toasts.get().items key=|toast| toast.id let:toast>
                <div
                    class="toast"
                    class:toast--success={toast.kind == ToastKind::Success}
                    class:toast--error={toast.kind == ToastKind::Error}
                    on:click=move |_| {
                        toasts.update(|t| {
                            t.dismiss(toast.id);
                        });
                    }
                >
                    {toast.message.clone()}
                </div>
            </For>
        </div>
    }
}
