//! Todo List Engine
//!
//! The stateful core behind the Knock It Out frontend: owns the
//! authoritative task list, the debounced autosave scheduler, the
//! drag-reorder bookkeeping, and the due-date status derivation.
//!
//! The engine is deliberately DOM-free. Every mutation returns an
//! [`engine::Effects`] value describing what the UI shell should do
//! (re-render, restart or cancel the autosave timer, celebrate, toast),
//! and the save loop in [`persist`] talks to the remote store through
//! the [`persist::TodoStore`] trait. This keeps the whole state machine
//! testable on the host without a browser.

pub mod due;
pub mod engine;
pub mod item;
pub mod persist;
pub mod reorder;

pub use due::{DueStatus, DueSummary, LocalToday, SummaryChip, ToastPayload, ToastSeverity, Today};
pub use engine::{Effects, SaveAction, TimerCmd, TodoEngine, AUTOSAVE_DELAY_MS};
pub use item::TodoItem;
pub use persist::{SharedEngine, StoreError, StoreResult, TodoStore};
pub use reorder::DropHalf;
