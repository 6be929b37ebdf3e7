use flume::{Receiver, Sender};
use log::debug;
use tokio_util::sync::CancellationToken;

use crate::StateSyncStatus;

/// Sending half handed to async work so it can publish a new value.
///
/// Publishing is fire-and-forget. If the owning [`StateCell`] was dropped, or
/// the task was cancelled, the value is discarded.
#[derive(Debug)]
pub struct Updater<T> {
    send: Sender<T>,
    cancel: CancellationToken,
}

impl<T> Clone for Updater<T> {
    fn clone(&self) -> Self {
        Self {
            send: self.send.clone(),
            cancel: self.cancel.clone(),
        }
    }
}

impl<T> Updater<T> {
    pub fn set(&self, value: T) {
        if self.cancel.is_cancelled() {
            debug!("Updater: task cancelled, discarding {}", std::any::type_name::<T>());
            return;
        }

        if self.send.send(value).is_err() {
            debug!("Updater: owner gone, discarding {}", std::any::type_name::<T>());
        }
    }

    /// Token observed by [`Updater::set`]; async work can also select on it.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

/// A value owned by the render thread and updated by async work.
///
/// Only the newest value published since the last [`StateCell::sync`] is kept.
#[derive(Debug)]
pub struct StateCell<T> {
    value: T,
    status: StateSyncStatus,
    send: Sender<T>,
    recv: Receiver<T>,
}

impl<T: Default> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> StateCell<T> {
    pub fn new(value: T) -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            value,
            status: StateSyncStatus::Init,
            send,
            recv,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn status(&self) -> StateSyncStatus {
        self.status
    }

    /// Hands out an updater bound to `cancel` and marks the cell pending.
    pub fn updater(&mut self, cancel: CancellationToken) -> Updater<T> {
        self.status = StateSyncStatus::Pending;
        Updater {
            send: self.send.clone(),
            cancel,
        }
    }

    /// Applies the newest published value, if any.
    ///
    /// Returns `true` when the value changed and the owner should re-render.
    pub fn sync(&mut self) -> bool {
        let Some(latest) = self.recv.try_iter().last() else {
            return false;
        };

        self.value = latest;
        self.status = StateSyncStatus::Clean;
        true
    }
}
