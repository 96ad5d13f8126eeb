//! Application Context
//!
//! Shared handles provided via the Leptos Context API.

use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::auth::UserInfo;
use crate::controller::TodoController;

/// App-wide state reachable from any component.
#[derive(Clone)]
pub struct AppContext {
    /// The todo-list controller hosting the engine.
    pub todos: TodoController,
    /// Signed-in user, `None` for anonymous visitors.
    pub user: RwSignal<Option<UserInfo>>,
}

pub fn provide_app_context(ctx: AppContext) {
    provide_context(SendWrapper::new(ctx));
}

pub fn use_app_context() -> AppContext {
    expect_context::<SendWrapper<AppContext>>().take()
}
