//! Engine State & Mutation API
//!
//! `TodoEngine` is the single source of truth for the list, its
//! association with the signed-in user, and the autosave scheduler
//! flags. It never touches the DOM or the network: mutations return an
//! [`Effects`] value for the UI shell to apply, and the save protocol
//! is expressed through [`SaveAction`] transitions driven by
//! [`crate::persist`].

use crate::due::{self, DueStatus, DueSummary, LocalToday, ToastPayload, Today};
use crate::item::TodoItem;
use crate::reorder::{self, DropHalf};

/// Quiet time after the last mutation before an autosave fires.
pub const AUTOSAVE_DELAY_MS: u32 = 800;

/// What the UI shell should do with its debounce timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimerCmd {
    /// Leave any running timer alone.
    #[default]
    Keep,
    /// (Re)start the autosave timer, replacing a running one so bursts
    /// of mutations coalesce into one save.
    Restart,
    /// Drop any pending timer without flushing it.
    Cancel,
}

/// Side effects of one mutation, applied by the UI shell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effects {
    /// Re-render the list from a fresh snapshot.
    pub render: bool,
    pub timer: TimerCmd,
    /// A task just transitioned to completed.
    pub celebrate: bool,
    pub toast: Option<ToastPayload>,
}

impl Effects {
    fn render_and(timer: TimerCmd) -> Self {
        Effects {
            render: true,
            timer,
            ..Effects::default()
        }
    }
}

/// Save-loop transition result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveAction {
    /// Start exactly one write with this snapshot, then report back via
    /// [`TodoEngine::save_finished`].
    Start(Vec<TodoItem>),
    /// A write is already in flight; it has been marked to run again
    /// with the latest state once it completes.
    Queued,
    /// Nothing to do (anonymous session, or nothing queued).
    Skip,
}

/// The todo-list view-model: authoritative items plus scheduling state.
pub struct TodoEngine {
    uid: String,
    items: Vec<TodoItem>,
    timer_pending: bool,
    save_in_flight: bool,
    save_queued: bool,
    dragged: Option<usize>,
    today: Box<dyn Today>,
}

impl Default for TodoEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoEngine {
    pub fn new() -> Self {
        Self::with_today(Box::new(LocalToday))
    }

    /// Build an engine with an injected clock so tests can pin "today".
    pub fn with_today(today: Box<dyn Today>) -> Self {
        TodoEngine {
            uid: String::new(),
            items: Vec::new(),
            timer_pending: false,
            save_in_flight: false,
            save_queued: false,
            dragged: None,
            today,
        }
    }

    // --- user association -------------------------------------------------

    /// Associate the list with a signed-in user. Clearing the uid
    /// abandons any pending debounce without flushing it; an anonymous
    /// session never writes.
    pub fn set_uid(&mut self, uid: Option<&str>) -> Effects {
        self.uid = uid.unwrap_or_default().to_string();
        if self.uid.is_empty() {
            self.timer_pending = false;
            self.save_queued = false;
            Effects {
                timer: TimerCmd::Cancel,
                ..Effects::default()
            }
        } else {
            Effects::default()
        }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    // --- mutations --------------------------------------------------------

    /// Replace the whole list. Loads from the remote store must pass
    /// `trigger_save = false` to avoid echoing the read back as a write.
    pub fn set_items(&mut self, items: Vec<TodoItem>, trigger_save: bool) -> Effects {
        self.items = items;
        let timer = if trigger_save {
            self.schedule_autosave()
        } else {
            TimerCmd::Keep
        };
        Effects::render_and(timer)
    }

    /// Append a blank item.
    pub fn add_todo_item(&mut self) -> Effects {
        self.items.push(TodoItem::blank());
        Effects::render_and(self.schedule_autosave())
    }

    /// Remove the item at `index`; out of bounds is a silent no-op.
    pub fn remove_todo_item(&mut self, index: usize) -> Effects {
        if index >= self.items.len() {
            return Effects::default();
        }
        self.items.remove(index);
        Effects::render_and(self.schedule_autosave())
    }

    /// Edit one description. Text edits do not re-render (the input
    /// being typed into already shows the new value).
    pub fn update_item_description(&mut self, index: usize, text: &str) -> Effects {
        let Some(item) = self.items.get_mut(index) else {
            return Effects::default();
        };
        item.description = text.to_string();
        Effects {
            timer: self.schedule_autosave(),
            ..Effects::default()
        }
    }

    pub fn update_item_details(&mut self, index: usize, text: &str) -> Effects {
        let Some(item) = self.items.get_mut(index) else {
            return Effects::default();
        };
        item.details = text.to_string();
        Effects {
            timer: self.schedule_autosave(),
            ..Effects::default()
        }
    }

    /// Edit one due date, recomputing the status derivation. A toast is
    /// emitted only when the edit moves an incomplete item into an
    /// urgent status it was not already in.
    pub fn update_item_due_date(&mut self, index: usize, due_date: &str) -> Effects {
        let today = self.today.today();
        let Some(item) = self.items.get_mut(index) else {
            return Effects::default();
        };
        let before = due::classify(item, today);
        item.due_date = due_date.to_string();
        let after = due::classify(item, today);
        let toast = if after.kind() != before.kind() {
            due::due_date_toast(item, after)
        } else {
            None
        };
        Effects {
            timer: self.schedule_autosave(),
            toast,
            ..Effects::default()
        }
    }

    /// Set the completion flag. The celebration fires only on the
    /// not-completed -> completed edge.
    pub fn toggle_item_completion(&mut self, index: usize, completed: bool) -> Effects {
        let Some(item) = self.items.get_mut(index) else {
            return Effects::default();
        };
        let was_completed = item.completed;
        item.completed = completed;
        Effects {
            celebrate: completed && !was_completed,
            ..Effects::render_and(self.schedule_autosave())
        }
    }

    /// Plain snapshot of the list.
    pub fn get_todo_items(&self) -> Vec<TodoItem> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // --- due-date derivations ---------------------------------------------

    pub fn due_summary(&self) -> DueSummary {
        due::summarize(&self.items, self.today.today())
    }

    pub fn status_of(&self, index: usize) -> DueStatus {
        match self.items.get(index) {
            Some(item) => due::classify(item, self.today.today()),
            None => DueStatus::None,
        }
    }

    // --- drag reorder -----------------------------------------------------

    pub fn begin_drag(&mut self, index: usize) {
        self.dragged = Some(index);
    }

    /// Drag end always clears the source marker, drop or no drop.
    pub fn cancel_drag(&mut self) {
        self.dragged = None;
    }

    pub fn drag_source(&self) -> Option<usize> {
        self.dragged
    }

    /// Drop onto `candidate` in the given half. A self-drop or stale
    /// source index leaves the list untouched and schedules nothing.
    pub fn complete_drop(&mut self, candidate: usize, half: DropHalf) -> Effects {
        let Some(source) = self.dragged.take() else {
            return Effects::default();
        };
        let target = reorder::resolve_target_index(source, candidate, half);
        if reorder::move_item(&mut self.items, source, target) {
            Effects::render_and(self.schedule_autosave())
        } else {
            Effects::default()
        }
    }

    // --- autosave scheduling ----------------------------------------------

    fn schedule_autosave(&mut self) -> TimerCmd {
        if self.uid.is_empty() {
            return TimerCmd::Keep;
        }
        self.timer_pending = true;
        TimerCmd::Restart
    }

    /// Clear the debounce flag (timer fired, or an explicit flush is
    /// taking over). The caller owns the real timer handle.
    pub fn clear_debounce(&mut self) {
        self.timer_pending = false;
    }

    /// Ask to start a write. At most one write is in flight: a request
    /// made mid-flight marks the save to run again instead of starting
    /// a second one.
    pub fn request_save(&mut self) -> SaveAction {
        if self.uid.is_empty() {
            return SaveAction::Skip;
        }
        if self.save_in_flight {
            self.save_queued = true;
            return SaveAction::Queued;
        }
        self.save_in_flight = true;
        SaveAction::Start(self.items.clone())
    }

    /// A write completed (success or failure). Returns the follow-up
    /// write when one was queued mid-flight, so the final state is
    /// eventually persisted.
    pub fn save_finished(&mut self) -> SaveAction {
        self.save_in_flight = false;
        if self.save_queued {
            self.save_queued = false;
            self.request_save()
        } else {
            SaveAction::Skip
        }
    }

    pub fn timer_pending(&self) -> bool {
        self.timer_pending
    }

    pub fn save_in_flight(&self) -> bool {
        self.save_in_flight
    }
}
