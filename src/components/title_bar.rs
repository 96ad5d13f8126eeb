//! Title Bar Component
//!
//! App heading, signed-in identity, add/save controls, sign-in/out, and
//! the theme toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth;
use crate::context::use_app_context;
use crate::theme::ThemeToggle;

#[component]
pub fn TitleBar() -> impl IntoView {
    let ctx = use_app_context();
    let user = ctx.user;

    let on_add = {
        let todos = ctx.todos.clone();
        move |_| todos.add_todo_item()
    };

    let on_save = {
        let todos = ctx.todos.clone();
        move |_| todos.save_todo_items()
    };

    // Auth outcomes surface through the auth-state subscription; the
    // handlers only kick the flows off.
    let on_sign_in = move |_| {
        spawn_local(async {
            let _ = auth::sign_in().await;
        });
    };

    let on_sign_out = move |_| {
        spawn_local(async {
            let _ = auth::sign_out().await;
        });
    };

    view! {
        <header class="title-bar">
            <h1 class="title-bar__heading">"Knock It Out"</h1>

            <span class="user-name">
                {move || user.get().map(|u| u.label()).unwrap_or_default()}
            </span>

            <div class="title-bar__actions">
                <button class="button button--add" on:click=on_add>
                    "+ Add task"
                </button>
                <button class="button save-button" on:click=on_save>
                    "Save now"
                </button>

                <Show when=move || user.get().is_none()>
                    <button class="button login-button" on:click=on_sign_in>
                        "Sign in"
                    </button>
                </Show>
                <Show when=move || user.get().is_some()>
                    <button class="button logout-button" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </Show>

                <ThemeToggle />
            </div>
        </header>
    }
}
