//! Keyed deferred tasks that report back with an action
//!
//! One pending task per key: scheduling under a key that is still pending
//! aborts the old task first. Everything still pending is aborted when the
//! manager is dropped.
//!
//! ```ignore
//! let (action_tx, mut action_rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut tasks = TaskManager::new(action_tx);
//! let key = TaskKey::new("reveal-1");
//!
//! tasks.debounce(&key, Duration::from_millis(50), async move {
//!     CardAction::RevealStep(token)
//! });
//! tasks.cancel(&key);
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use crate::Action;

/// Names a task slot
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TaskKey(String);

impl TaskKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Owns the abort handles of pending tasks, one per [`TaskKey`].
///
/// Must be used from within a Tokio runtime.
pub struct TaskManager<A> {
    pending: HashMap<TaskKey, AbortHandle>,
    action_tx: mpsc::UnboundedSender<A>,
}

impl<A: Action> TaskManager<A> {
    /// Finished tasks send their action on `action_tx`.
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            pending: HashMap::new(),
            action_tx,
        }
    }

    /// Run `future` after `delay` and send its action.
    ///
    /// Replaces whatever was pending under `key`, restarting the delay. An
    /// aborted task sends nothing.
    pub fn debounce<F>(&mut self, key: &TaskKey, delay: Duration, future: F) -> &mut Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        self.cancel(key);

        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(future.await);
        });

        self.pending.insert(key.clone(), handle.abort_handle());
        self
    }

    /// Abort the task under `key`; no-op when there is none.
    pub fn cancel(&mut self, key: &TaskKey) {
        if let Some(handle) = self.pending.remove(key) {
            handle.abort();
        }
    }

    /// Abort every task and return how many had not finished yet.
    pub fn cancel_all(&mut self) -> usize {
        abort_all(&mut self.pending)
    }

    /// Whether a task under `key` has yet to finish.
    pub fn is_running(&self, key: &TaskKey) -> bool {
        self.pending
            .get(key)
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<A> Drop for TaskManager<A> {
    fn drop(&mut self) {
        abort_all(&mut self.pending);
    }
}

fn abort_all(pending: &mut HashMap<TaskKey, AbortHandle>) -> usize {
    pending
        .drain()
        .filter(|(_, handle)| !handle.is_finished())
        .inspect(|(_, handle)| handle.abort())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum StepAction {
        Step(usize),
    }

    impl Action for StepAction {
        fn name(&self) -> &'static str {
            "Step"
        }
    }

    fn manager() -> (TaskManager<StepAction>, mpsc::UnboundedReceiver<StepAction>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (TaskManager::new(tx), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_waits_for_delay() {
        let (mut tasks, mut rx) = manager();
        let key = TaskKey::new("step");

        tasks.debounce(&key, Duration::from_millis(50), async { StepAction::Step(1) });

        let early = tokio::time::timeout(Duration::from_millis(30), rx.recv()).await;
        assert!(early.is_err());

        let action = tokio::time::timeout(Duration::from_millis(100), rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed");
        assert_eq!(action, StepAction::Step(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_replaces_pending() {
        let (mut tasks, mut rx) = manager();
        let key = TaskKey::new("step");

        tasks.debounce(&key, Duration::from_millis(50), async { StepAction::Step(1) });
        tokio::time::sleep(Duration::from_millis(30)).await;
        tasks.debounce(&key, Duration::from_millis(50), async { StepAction::Step(2) });

        let action = tokio::time::timeout(Duration::from_millis(100), rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed");
        assert_eq!(action, StepAction::Step(2));

        let extra = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await;
        assert!(extra.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let (mut tasks, mut rx) = manager();
        let key = TaskKey::new("step");

        tasks.debounce(&key, Duration::from_millis(100), async { StepAction::Step(1) });
        assert!(tasks.is_running(&key));

        tasks.cancel(&key);
        assert!(!tasks.is_running(&key));

        let result = tokio::time::timeout(Duration::from_millis(150), rx.recv()).await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fired_task_not_running() {
        let (mut tasks, mut rx) = manager();
        let key = TaskKey::new("step");

        tasks.debounce(&key, Duration::from_millis(10), async { StepAction::Step(7) });
        assert_eq!(rx.recv().await, Some(StepAction::Step(7)));

        // The task sends before it returns, so give it a moment to finish.
        for _ in 0..10 {
            if !tasks.is_running(&key) {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(!tasks.is_running(&key));
        assert_eq!(tasks.cancel_all(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_counts_pending() {
        let (mut tasks, mut rx) = manager();
        let (a, b) = (TaskKey::new("a"), TaskKey::new("b"));

        tasks.debounce(&a, Duration::from_secs(10), async { StepAction::Step(1) });
        tasks.debounce(&b, Duration::from_secs(10), async { StepAction::Step(2) });

        assert_eq!(tasks.cancel_all(), 2);
        assert!(!tasks.is_running(&a));
        assert!(!tasks.is_running(&b));
        assert_eq!(tasks.cancel_all(), 0);

        let result = tokio::time::timeout(Duration::from_secs(20), rx.recv()).await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending() {
        let (mut tasks, mut rx) = manager();

        tasks.debounce(&TaskKey::new("step"), Duration::from_millis(50), async {
            StepAction::Step(1)
        });
        drop(tasks);

        // Every sender is gone once the aborted task is torn down.
        let result = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await;
        assert_eq!(result, Ok(None));
    }
}
