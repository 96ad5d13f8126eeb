//! Engine Host
//!
//! Owns the shared [`TodoEngine`] instance, the live debounce timer,
//! and the signal surface the components render from. Every engine call
//! goes through here so its effects (re-render, timer restart,
//! celebration, toast) are applied in one place and the view layer
//! stays a plain projection of state.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_engine::{
    persist, DropHalf, DueStatus, DueSummary, Effects, SharedEngine, TimerCmd, ToastPayload,
    TodoEngine, TodoItem, AUTOSAVE_DELAY_MS,
};

use crate::firestore::FirestoreStore;
use crate::knockout;

/// How long the knockout modal stays open.
pub const CELEBRATION_MS: u32 = 3_000;
/// How long a toast stays visible.
pub const TOAST_MS: u32 = 4_000;

#[derive(Clone)]
pub struct TodoController {
    engine: SharedEngine,
    store: Rc<FirestoreStore>,
    /// Live debounce handle; dropping it cancels the pending timeout.
    debounce: Rc<RefCell<Option<Timeout>>>,
    celebration_close: Rc<RefCell<Option<Timeout>>>,
    toast_close: Rc<RefCell<Option<Timeout>>>,
    /// Snapshot the list renders from.
    pub items: RwSignal<Vec<TodoItem>>,
    pub summary: RwSignal<DueSummary>,
    pub toast: RwSignal<Option<ToastPayload>>,
    /// Image currently celebrated, `None` when the modal is closed.
    pub celebration: RwSignal<Option<&'static str>>,
}

impl TodoController {
    pub fn new(store: FirestoreStore) -> Self {
        TodoController {
            engine: Rc::new(RefCell::new(TodoEngine::new())),
            store: Rc::new(store),
            debounce: Rc::new(RefCell::new(None)),
            celebration_close: Rc::new(RefCell::new(None)),
            toast_close: Rc::new(RefCell::new(None)),
            items: RwSignal::new(Vec::new()),
            summary: RwSignal::new(DueSummary::default()),
            toast: RwSignal::new(None),
            celebration: RwSignal::new(None),
        }
    }

    // --- engine API -------------------------------------------------------

    pub fn set_uid(&self, uid: Option<&str>) {
        let fx = self.engine.borrow_mut().set_uid(uid);
        self.apply(fx);
    }

    pub fn set_auth_token(&self, token: Option<String>) {
        self.store.set_id_token(token);
    }

    pub fn set_items(&self, items: Vec<TodoItem>, trigger_save: bool) {
        let fx = self.engine.borrow_mut().set_items(items, trigger_save);
        self.apply(fx);
    }

    pub fn add_todo_item(&self) {
        let fx = self.engine.borrow_mut().add_todo_item();
        self.apply(fx);
    }

    pub fn remove_todo_item(&self, index: usize) {
        let fx = self.engine.borrow_mut().remove_todo_item(index);
        self.apply(fx);
    }

    pub fn update_item_description(&self, index: usize, text: &str) {
        let fx = self.engine.borrow_mut().update_item_description(index, text);
        self.apply(fx);
    }

    pub fn update_item_details(&self, index: usize, text: &str) {
        let fx = self.engine.borrow_mut().update_item_details(index, text);
        self.apply(fx);
    }

    /// Returns the item's new due status so the row can restyle itself
    /// without a structural re-render.
    pub fn update_item_due_date(&self, index: usize, due_date: &str) -> DueStatus {
        let (fx, status) = {
            let mut engine = self.engine.borrow_mut();
            let fx = engine.update_item_due_date(index, due_date);
            (fx, engine.status_of(index))
        };
        self.apply(fx);
        status
    }

    pub fn toggle_item_completion(&self, index: usize, completed: bool) {
        let fx = self
            .engine
            .borrow_mut()
            .toggle_item_completion(index, completed);
        self.apply(fx);
    }

    pub fn status_of(&self, index: usize) -> DueStatus {
        self.engine.borrow().status_of(index)
    }

    /// Load the shared list from the remote store; failures fall back
    /// to an empty list inside the engine.
    pub fn load_todo_items(&self) {
        let this = self.clone();
        spawn_local(async move {
            let fx = persist::load_todo_items(&this.engine, &*this.store).await;
            this.apply(fx);
        });
    }

    /// Explicit "save now": cancels the debounce and writes immediately,
    /// queuing onto an in-flight write if there is one.
    pub fn save_todo_items(&self) {
        self.debounce.borrow_mut().take();
        let engine = self.engine.clone();
        let store = self.store.clone();
        spawn_local(async move {
            persist::save_todo_items(&engine, &*store).await;
        });
    }

    // --- drag reorder -----------------------------------------------------

    pub fn begin_drag(&self, index: usize) {
        self.engine.borrow_mut().begin_drag(index);
    }

    pub fn cancel_drag(&self) {
        self.engine.borrow_mut().cancel_drag();
    }

    pub fn drag_source(&self) -> Option<usize> {
        self.engine.borrow().drag_source()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_source().is_some()
    }

    pub fn drop_on(&self, candidate: usize, half: DropHalf) {
        let fx = self.engine.borrow_mut().complete_drop(candidate, half);
        self.apply(fx);
    }

    // --- effect interpretation --------------------------------------------

    fn apply(&self, fx: Effects) {
        if fx.render {
            self.items.set(self.engine.borrow().get_todo_items());
        }
        self.summary.set(self.engine.borrow().due_summary());
        match fx.timer {
            TimerCmd::Keep => {}
            TimerCmd::Restart => self.arm_debounce(),
            TimerCmd::Cancel => {
                self.debounce.borrow_mut().take();
            }
        }
        if fx.celebrate {
            self.celebrate();
        }
        if let Some(toast) = fx.toast {
            self.show_toast(toast);
        }
    }

    fn arm_debounce(&self) {
        let engine = self.engine.clone();
        let store = self.store.clone();
        let debounce = self.debounce.clone();
        let timeout = Timeout::new(AUTOSAVE_DELAY_MS, move || {
            debounce.borrow_mut().take();
            spawn_local(async move {
                persist::save_todo_items(&engine, &*store).await;
            });
        });
        // Replacing the handle drops (and thereby cancels) the old
        // timer, so the delay measures quiet time since the last edit.
        *self.debounce.borrow_mut() = Some(timeout);
    }

    fn celebrate(&self) {
        let image = knockout::pick_image(js_sys::Math::random());
        self.celebration.set(Some(image));
        let signal = self.celebration;
        let close = Timeout::new(CELEBRATION_MS, move || signal.set(None));
        *self.celebration_close.borrow_mut() = Some(close);
    }

    fn show_toast(&self, toast: ToastPayload) {
        self.toast.set(Some(toast));
        let signal = self.toast;
        let close = Timeout::new(TOAST_MS, move || signal.set(None));
        *self.toast_close.borrow_mut() = Some(close);
    }
}
