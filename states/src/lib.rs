//! Small state runtime shared by the OctoFit views.
//!
//! Async work never touches view state directly. A task receives an
//! [`Updater`] and publishes its result through it; the owning [`StateCell`]
//! applies the newest value when the render loop calls [`StateCell::sync`].

mod cell;
mod runtime;
mod state_sync_status;
mod task;

pub use cell::{StateCell, Updater};
pub use runtime::spawn;
pub use state_sync_status::StateSyncStatus;
pub use task::{TaskHandle, TaskId};
