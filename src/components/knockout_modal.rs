//! Knockout Modal
//!
//! Celebration shown when a task gets knocked out. The controller opens
//! it with a random gallery image and closes it after three seconds.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn KnockoutModal() -> impl IntoView {
    let ctx = use_app_context();
    let celebration = ctx.todos.celebration;

    view! {
        <div
            id="modal-one"
            class=move || {
                if celebration.get().is_some() {
                    "modal open"
                } else {
                    "modal"
                }
            }
        >
            <div id="knockouts" class="modal__content">
                {move || {
                    celebration.get().map(|src| {
                        view! {
                            <p>
                                <img src=src width="500" height="500" />
                            </p>
                        }
                    })
                }}
            </div>
        </div>
    }
}
