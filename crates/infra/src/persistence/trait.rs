use stockroom_core::RecordResult;

use crate::snapshot::Snapshot;

/// Storage backend for the snapshot document.
pub trait SnapshotStore: Send + Sync {
    /// Load the current snapshot.
    ///
    /// An absent or unreadable document yields an empty snapshot rather than
    /// an error, so a fresh deployment starts from nothing. Only genuine I/O
    /// failures (permissions, hardware) surface as `Persistence` errors.
    fn load(&self) -> RecordResult<Snapshot>;

    /// Replace the persisted snapshot with `snapshot`.
    ///
    /// The write is all-or-nothing: a reader never observes a half-written
    /// document, and on failure the previous snapshot remains intact.
    fn save(&self, snapshot: &Snapshot) -> RecordResult<()>;
}

impl<S> SnapshotStore for std::sync::Arc<S>
where
    S: SnapshotStore + ?Sized,
{
    fn load(&self) -> RecordResult<Snapshot> {
        (**self).load()
    }

    fn save(&self, snapshot: &Snapshot) -> RecordResult<()> {
        (**self).save(snapshot)
    }
}
