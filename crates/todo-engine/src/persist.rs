//! Remote Store Boundary
//!
//! The [`TodoStore`] trait the engine persists through, plus the async
//! drivers that run the save loop against a shared engine handle. The
//! engine is only ever borrowed between awaits, so timer callbacks and
//! promise continuations interleaving with an in-flight write cannot
//! observe a half-applied transition.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use crate::engine::{Effects, SaveAction, TodoEngine};
use crate::item::TodoItem;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures at the remote-document boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Network(String),
    Decode(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Network(msg) => write!(f, "network error: {}", msg),
            StoreError::Decode(msg) => write!(f, "decode error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Read/write access to the one shared todo document.
///
/// `?Send` because the production implementation lives on the WASM
/// single thread.
#[async_trait(?Send)]
pub trait TodoStore {
    /// Read the shared list. `Ok(None)` means the document (or its list
    /// field) does not exist yet; callers treat that as an empty list.
    async fn read(&self) -> StoreResult<Option<Vec<TodoItem>>>;

    /// Merge-write the list field, leaving other document fields alone.
    async fn write(&self, items: &[TodoItem]) -> StoreResult<()>;
}

/// Engine handle shared between the UI shell, timer callbacks, and the
/// save loop.
pub type SharedEngine = Rc<RefCell<TodoEngine>>;

/// Run the save loop for one trigger.
///
/// If no save is in flight this issues exactly one write, then keeps
/// writing while follow-ups were queued mid-flight; each iteration
/// snapshots the latest items, so the last write always reflects the
/// most recent state. If a save is already in flight the request is
/// queued onto it and this returns immediately. Write failures are
/// logged, never retried on their own; the next mutation or flush tries
/// again with fresh state.
pub async fn drive_save<S: TodoStore>(engine: &SharedEngine, store: &S) {
    let mut action = engine.borrow_mut().request_save();
    while let SaveAction::Start(snapshot) = action {
        if let Err(err) = store.write(&snapshot).await {
            log::warn!("saving todo items failed: {}", err);
        }
        action = engine.borrow_mut().save_finished();
    }
}

/// Explicit flush: drop the pending debounce and save immediately,
/// following the same one-in-flight rule. The caller is responsible for
/// cancelling its real timer handle.
pub async fn save_todo_items<S: TodoStore>(engine: &SharedEngine, store: &S) {
    engine.borrow_mut().clear_debounce();
    drive_save(engine, store).await;
}

/// Load the shared list into the engine without echoing a write back.
/// Read failures and missing documents both fall back to an empty list.
pub async fn load_todo_items<S: TodoStore>(engine: &SharedEngine, store: &S) -> Effects {
    let items = match store.read().await {
        Ok(Some(items)) => items,
        Ok(None) => Vec::new(),
        Err(err) => {
            log::warn!("loading todo items failed: {}", err);
            Vec::new()
        }
    };
    engine.borrow_mut().set_items(items, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tokio::sync::oneshot;
    use tokio::task::LocalSet;

    struct CapturingLogger {
        lines: Mutex<Vec<String>>,
    }

    impl log::Log for CapturingLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            self.lines
                .lock()
                .unwrap()
                .push(format!("{}", record.args()));
        }

        fn flush(&self) {}
    }

    static CAPTURED_LOGS: CapturingLogger = CapturingLogger {
        lines: Mutex::new(Vec::new()),
    };

    #[derive(Default)]
    struct FakeStore {
        seed: RefCell<Option<Vec<TodoItem>>>,
        read_error: Cell<bool>,
        writes: RefCell<Vec<Vec<TodoItem>>>,
        writes_started: Cell<usize>,
        fail_next_write: Cell<bool>,
        gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
    }

    impl FakeStore {
        fn gate_next_write(&self) -> oneshot::Sender<()> {
            let (tx, rx) = oneshot::channel();
            self.gates.borrow_mut().push_back(rx);
            tx
        }
    }

    #[async_trait(?Send)]
    impl TodoStore for FakeStore {
        async fn read(&self) -> StoreResult<Option<Vec<TodoItem>>> {
            if self.read_error.get() {
                return Err(StoreError::Network("offline".into()));
            }
            Ok(self.seed.borrow().clone())
        }

        async fn write(&self, items: &[TodoItem]) -> StoreResult<()> {
            self.writes_started.set(self.writes_started.get() + 1);
            let gate = self.gates.borrow_mut().pop_front();
            if let Some(rx) = gate {
                let _ = rx.await;
            }
            if self.fail_next_write.replace(false) {
                return Err(StoreError::Network("write failed".into()));
            }
            self.writes.borrow_mut().push(items.to_vec());
            Ok(())
        }
    }

    fn shared_engine(uid: &str) -> SharedEngine {
        let engine = Rc::new(RefCell::new(TodoEngine::new()));
        engine.borrow_mut().set_uid(Some(uid));
        engine
    }

    #[tokio::test]
    async fn flush_writes_the_current_snapshot_once() {
        let engine = shared_engine("user-1");
        engine
            .borrow_mut()
            .set_items(vec![TodoItem::with_description("abc")], false);
        let store = FakeStore::default();

        save_todo_items(&engine, &store).await;

        let writes = store.writes.borrow();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0][0].description, "abc");
        assert!(!engine.borrow().save_in_flight());
    }

    #[tokio::test]
    async fn anonymous_sessions_never_write() {
        let engine = Rc::new(RefCell::new(TodoEngine::new()));
        engine.borrow_mut().add_todo_item();
        let store = FakeStore::default();

        save_todo_items(&engine, &store).await;

        assert_eq!(store.writes_started.get(), 0);
    }

    #[tokio::test]
    async fn flush_while_in_flight_queues_a_second_write() {
        let local = LocalSet::new();
        local
            .run_until(async {
                let engine = shared_engine("user-1");
                engine
                    .borrow_mut()
                    .set_items(vec![TodoItem::with_description("a")], false);

                let store = Rc::new(FakeStore::default());
                let release_first = store.gate_next_write();

                let first = {
                    let engine = engine.clone();
                    let store = store.clone();
                    tokio::task::spawn_local(async move {
                        save_todo_items(&engine, &*store).await;
                    })
                };
                tokio::task::yield_now().await;
                assert_eq!(store.writes_started.get(), 1);
                assert!(engine.borrow().save_in_flight());

                // A mutation and a second flush arrive mid-flight.
                engine.borrow_mut().update_item_description(0, "ab");
                save_todo_items(&engine, &*store).await;
                assert_eq!(store.writes_started.get(), 1, "no second write in flight");

                release_first.send(()).unwrap();
                first.await.unwrap();

                let writes = store.writes.borrow();
                assert_eq!(writes.len(), 2);
                assert_eq!(writes[0][0].description, "a");
                assert_eq!(writes[1][0].description, "ab");
                assert!(!engine.borrow().save_in_flight());
            })
            .await;
    }

    #[tokio::test]
    async fn failed_write_clears_the_flag_and_the_next_flush_retries() {
        let engine = shared_engine("user-1");
        engine
            .borrow_mut()
            .set_items(vec![TodoItem::with_description("keep me")], false);
        let store = FakeStore::default();
        store.fail_next_write.set(true);

        save_todo_items(&engine, &store).await;
        assert_eq!(store.writes_started.get(), 1);
        assert!(store.writes.borrow().is_empty());
        assert!(!engine.borrow().save_in_flight());

        save_todo_items(&engine, &store).await;
        let writes = store.writes.borrow();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0][0].description, "keep me");
    }

    #[tokio::test]
    async fn failed_write_is_reported_through_the_log_facade() {
        let _ = log::set_logger(&CAPTURED_LOGS);
        log::set_max_level(log::LevelFilter::Warn);

        let engine = shared_engine("user-1");
        engine
            .borrow_mut()
            .set_items(vec![TodoItem::with_description("lost?")], false);
        let store = FakeStore::default();
        store.fail_next_write.set(true);

        save_todo_items(&engine, &store).await;

        let lines = CAPTURED_LOGS.lines.lock().unwrap();
        assert!(
            lines
                .iter()
                .any(|line| line.contains("saving todo items failed")),
            "expected a warning about the failed write, got {:?}",
            *lines
        );
    }

    #[tokio::test]
    async fn load_replaces_items_without_scheduling_a_save() {
        let engine = shared_engine("user-1");
        let store = FakeStore::default();
        *store.seed.borrow_mut() = Some(vec![TodoItem::with_description("from remote")]);

        let fx = load_todo_items(&engine, &store).await;
        assert!(fx.render);
        assert!(!engine.borrow().timer_pending());
        assert_eq!(engine.borrow().get_todo_items()[0].description, "from remote");
    }

    #[tokio::test]
    async fn missing_document_loads_as_an_empty_list() {
        let engine = shared_engine("user-1");
        engine
            .borrow_mut()
            .set_items(vec![TodoItem::with_description("stale")], false);
        let store = FakeStore::default();

        load_todo_items(&engine, &store).await;
        assert!(engine.borrow().is_empty());
    }

    #[tokio::test]
    async fn read_failure_falls_back_to_an_empty_list() {
        let engine = shared_engine("user-1");
        let store = FakeStore::default();
        store.read_error.set(true);

        load_todo_items(&engine, &store).await;
        assert!(engine.borrow().is_empty());
        assert_eq!(store.writes_started.get(), 0);
    }
}
