//! Todo Row Component
//!
//! One list row: drag handle, completion checkbox, description input,
//! due-date control with status pill, collapsible details, remove
//! button. Text edits mutate the engine without a structural re-render
//! (the focused input already shows the new value); structural changes
//! rebuild the whole list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DragEvent;

use crate::context::use_app_context;
use todo_engine::{DropHalf, DueStatus, TodoItem};

/// Which half of the row's bounding box the pointer is over decides
/// insert-before vs insert-after.
fn pointer_half(ev: &DragEvent) -> DropHalf {
    let element = ev
        .current_target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok());
    let Some(element) = element else {
        return DropHalf::Before;
    };
    let rect = element.get_bounding_client_rect();
    let offset = ev.client_y() as f64 - rect.top();
    if offset > rect.height() / 2.0 {
        DropHalf::After
    } else {
        DropHalf::Before
    }
}

#[component]
pub fn TodoRow(index: usize, item: TodoItem) -> impl IntoView {
    let ctx = use_app_context();
    let todos = ctx.todos;

    let completed = item.completed;
    let (status, set_status) = signal(todos.status_of(index));
    let (details_text, set_details_text) = signal(item.details.clone());
    let (details_open, set_details_open) = signal(!item.details.is_empty());
    let (dragging, set_dragging) = signal(false);
    let (drag_over, set_drag_over) = signal(None::<DropHalf>);

    let details_ref: NodeRef<leptos::html::Textarea> = NodeRef::new();

    let row_class = move || {
        let mut class = String::from("todo-item");
        if completed {
            class.push_str(" completed");
        }
        match status.get() {
            DueStatus::DueSoon | DueStatus::DueToday => class.push_str(" due-soon"),
            DueStatus::Overdue { .. } => class.push_str(" overdue"),
            _ => {}
        }
        if dragging.get() {
            class.push_str(" dragging");
        }
        match drag_over.get() {
            Some(DropHalf::Before) => class.push_str(" dragover-before"),
            Some(DropHalf::After) => class.push_str(" dragover-after"),
            None => {}
        }
        class
    };

    let pill_class = move || match status.get().pill_variant() {
        Some(variant) => format!("due-pill due-pill--{}", variant),
        None => "due-pill".to_string(),
    };

    let details_label = move || {
        if details_open.get() {
            "Hide details"
        } else if details_text.get().trim().is_empty() {
            "Add details"
        } else {
            "Show details"
        }
    };

    let on_drag_start = {
        let todos = todos.clone();
        move |ev: DragEvent| {
            todos.begin_drag(index);
            set_dragging.set(true);
            if let Some(transfer) = ev.data_transfer() {
                transfer.set_effect_allowed("move");
                let _ = transfer.set_data("text/plain", &index.to_string());
            }
        }
    };

    let on_drag_end = {
        let todos = todos.clone();
        move |_ev: DragEvent| {
            set_dragging.set(false);
            set_drag_over.set(None);
            todos.cancel_drag();
        }
    };

    let on_drag_over = {
        let todos = todos.clone();
        move |ev: DragEvent| {
            if !todos.is_dragging() {
                return;
            }
            ev.prevent_default();
            if let Some(transfer) = ev.data_transfer() {
                transfer.set_drop_effect("move");
            }
            if todos.drag_source() == Some(index) {
                set_drag_over.set(None);
                return;
            }
            set_drag_over.set(Some(pointer_half(&ev)));
        }
    };

    let on_drag_leave = move |_ev: DragEvent| set_drag_over.set(None);

    let on_drop = {
        let todos = todos.clone();
        move |ev: DragEvent| {
            if !todos.is_dragging() {
                return;
            }
            ev.prevent_default();
            let half = pointer_half(&ev);
            set_drag_over.set(None);
            todos.drop_on(index, half);
        }
    };

    let on_toggle = {
        let todos = todos.clone();
        move |ev: web_sys::Event| {
            todos.toggle_item_completion(index, event_target_checked(&ev));
        }
    };

    let on_description_input = {
        let todos = todos.clone();
        move |ev: web_sys::Event| {
            todos.update_item_description(index, &event_target_value(&ev));
        }
    };

    let on_due_date_input = {
        let todos = todos.clone();
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            set_status.set(todos.update_item_due_date(index, &value));
        }
    };

    let on_details_input = {
        let todos = todos.clone();
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            set_details_text.set(value.clone());
            todos.update_item_details(index, &value);
        }
    };

    let on_details_toggle = move |_| {
        let opening = !details_open.get_untracked();
        set_details_open.set(opening);
        if opening {
            if let Some(textarea) = details_ref.get_untracked() {
                let _ = textarea.focus();
            }
        }
    };

    let on_remove = {
        let todos = todos.clone();
        move |_| todos.remove_todo_item(index)
    };

    view! {
        <li
            class=row_class
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <button
                type="button"
                class="button button--drag drag-handle"
                draggable="true"
                title="Reorder task"
                aria-label="Reorder task"
                on:dragstart=on_drag_start
                on:dragend=on_drag_end
            >
                "::"
            </button>

            <input
                class="task-checkbox larger"
                type="checkbox"
                title="Mark task completed"
                prop:checked=completed
                on:change=on_toggle
            />

            <input
                class=if completed { "task-text completed-task" } else { "task-text" }
                placeholder="Enter a new task"
                prop:value=item.description.clone()
                on:input=on_description_input
            />

            <span class="due-date-wrapper">
                <input
                    class="task-date"
                    type="date"
                    title="Due date"
                    prop:value=item.due_date.clone()
                    on:input=on_due_date_input
                />
                <span class=pill_class>
                    {move || status.get().label().unwrap_or_default()}
                </span>
            </span>

            <button
                type="button"
                class="button button--details-toggle"
                aria-expanded=move || details_open.get().to_string()
                on:click=on_details_toggle
            >
                {details_label}
            </button>

            <div class=move || {
                if details_open.get() {
                    "task-details is-open"
                } else {
                    "task-details"
                }
            }>
                <textarea
                    class="task-details__input"
                    placeholder="Add more detail..."
                    prop:value=move || details_text.get()
                    node_ref=details_ref
                    on:input=on_details_input
                ></textarea>
            </div>

            <button
                type="button"
                class="button button--remove"
                title="Remove Item"
                on:click=on_remove
            >
                "x"
            </button>
        </li>
    }
}
