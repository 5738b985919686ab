//! Polling of spawned fetch tasks from the egui frame loop.
//!
//! Network calls run as tokio tasks; each frame the owning state polls its
//! handle and applies the result once finished. Results are stamped with the
//! epoch the fetch was started under so a response that arrives after the
//! view moved on (tab switch, newer keystroke) is discarded instead of
//! clobbering fresher state.

use futures::FutureExt;
use tokio::task::JoinHandle;

/// Result of polling a task
pub enum PollResult<T> {
    /// No task to poll (task was None)
    NoTask,
    /// Task is still running
    Pending,
    /// Task completed with result (may be Ok or join error)
    Complete(Result<T, tokio::task::JoinError>),
}

/// A task result tagged with the fetch epoch it belongs to.
#[derive(Debug)]
pub struct Stamped<T> {
    pub epoch: u64,
    pub value: T,
}

impl<T> Stamped<T> {
    pub fn new(epoch: u64, value: T) -> Self {
        Self { epoch, value }
    }

    /// Whether this result still belongs to the current fetch epoch.
    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }
}

/// Poll an optional task handle and return its result if finished.
///
/// Encapsulates the per-frame pattern of checking whether a fetch exists,
/// whether it finished, and extracting its result with `now_or_never()`.
pub fn poll_task<T>(task: &mut Option<JoinHandle<T>>) -> PollResult<T> {
    let Some(handle) = task else {
        return PollResult::NoTask;
    };

    if !handle.is_finished() {
        return PollResult::Pending;
    }

    let handle = task.take().unwrap();
    match handle.now_or_never() {
        Some(result) => PollResult::Complete(result),
        None => {
            // Shouldn't happen since we checked is_finished()
            tracing::warn!("Task not ready despite is_finished()");
            PollResult::Pending
        }
    }
}
