//! Todo List Component
//!
//! Full-replace projection of the engine's items: every structural
//! change rebuilds all rows from a fresh snapshot, which keeps the DOM
//! isomorphic to the list without any diffing. Lists are small, so
//! correctness wins over patching.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_app_context;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();
    let items = ctx.todos.items;

    view! {
        <ul class="todo-list">
            {move || {
                items
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| view! { <TodoRow index=index item=item /> })
                    .collect_view()
            }}
        </ul>
    }
}
