//! Task identity and cooperative cancellation.
//!
//! A [`TaskHandle`] pairs a [`TaskId`] with the `CancellationToken` that the
//! task's [`Updater`](crate::Updater) observes. Cancelling the handle stops the
//! task from publishing anything further; the task itself may also select on
//! the token to stop early.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio_util::sync::CancellationToken;

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier for a spawned task.
///
/// Generations increase monotonically, so a higher value means a more
/// recently spawned task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId {
    generation: u64,
}

impl TaskId {
    /// Allocates the next identifier.
    pub fn next() -> Self {
        Self {
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to a spawned async task with cooperative cancellation support.
///
/// Clones share the same token: cancelling one cancels all of them.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    /// Creates a handle with a fresh id and token.
    pub fn new() -> Self {
        Self {
            id: TaskId::next(),
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Returns a clone of the cancellation token for the task to observe.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Requests cancellation. The task stops at its next check point.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

impl Default for TaskHandle {
    fn default() -> Self {
        Self::new()
    }
}
