//! Application Shell
//!
//! Wires auth state into the engine, seeds the signed-out onboarding
//! tasks, and lays out the page.

use chrono::Datelike;
use leptos::prelude::*;

use crate::auth::{self, UserInfo};
use crate::components::{KnockoutModal, SummaryBar, TitleBar, ToastHost, TodoList};
use crate::context::AppContext;
use crate::controller::TodoController;
use crate::firestore::{FirestoreConfig, FirestoreStore};
use todo_engine::TodoItem;

/// Tasks shown to signed-out visitors.
fn default_items() -> Vec<TodoItem> {
    [
        "sign in with your Gmail account",
        "create some tasks",
        "knock them out!",
    ]
    .into_iter()
    .map(TodoItem::with_description)
    .collect()
}

#[component]
pub fn App() -> impl IntoView {
    let todos = TodoController::new(FirestoreStore::new(FirestoreConfig::default()));
    let user = RwSignal::new(None::<UserInfo>);

    crate::context::provide_app_context(AppContext {
        todos: todos.clone(),
        user,
    });

    // Show the onboarding tasks until auth state resolves.
    todos.set_uid(None);
    todos.set_items(default_items(), false);

    {
        let todos = todos.clone();
        auth::subscribe_auth_changes(move |maybe_user| match maybe_user {
            Some(signed_in) => {
                todos.set_auth_token(Some(signed_in.id_token.clone()));
                todos.set_uid(Some(&signed_in.uid));
                todos.set_items(Vec::new(), false);
                todos.load_todo_items();
                user.set(Some(signed_in));
            }
            None => {
                todos.set_auth_token(None);
                todos.set_uid(None);
                todos.set_items(default_items(), false);
                user.set(None);
            }
        });
    }

    let year = chrono::Local::now().year();

    view! {
        <div class="page">
            <TitleBar />

            <main class="main-content">
                <SummaryBar />
                <TodoList />
            </main>

            <footer class="footer">
                <span class="footer__year">{format!("© {} Knock It Out", year)}</span>
            </footer>

            <KnockoutModal />
            <ToastHost />
        </div>
    }
}
