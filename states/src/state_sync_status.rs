/// Where a [`StateCell`](crate::StateCell) is in its update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSyncStatus {
    /// Holds its initial value, nobody is producing an update.
    #[default]
    Init,
    /// An updater was handed out and its value has not been applied yet.
    Pending,
    /// The latest published value has been applied.
    Clean,
}
