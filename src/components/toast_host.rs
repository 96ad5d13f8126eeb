//! Toast Notifications
//!
//! Shows the due-date toast the engine emits; the controller clears it
//! after a few seconds.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();
    let toast = ctx.todos.toast;

    view! {
        <div class="toast-container">
            {move || {
                toast.get().map(|payload| {
                    view! {
                        <div class=format!("toast toast--{}", payload.severity.as_str())>
                            {payload.copy}
                        </div>
                    }
                })
            }}
        </div>
    }
}
