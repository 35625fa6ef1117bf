use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use stockroom_core::{RecordError, RecordResult};

use crate::persistence::r#trait::SnapshotStore;
use crate::snapshot::Snapshot;

/// In-memory snapshot store for tests and benchmarks.
///
/// `fail_saves` turns every subsequent `save` into a `Persistence` error so
/// callers can exercise their failure paths.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    inner: RwLock<Snapshot>,
    fail_saves: AtomicBool,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            inner: RwLock::new(snapshot),
            fail_saves: AtomicBool::new(false),
        }
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> RecordResult<Snapshot> {
        let guard = self
            .inner
            .read()
            .map_err(|_| RecordError::persistence("snapshot lock poisoned"))?;
        Ok(guard.clone())
    }

    fn save(&self, snapshot: &Snapshot) -> RecordResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(RecordError::persistence("save failure injected"));
        }
        let mut guard = self
            .inner
            .write()
            .map_err(|_| RecordError::persistence("snapshot lock poisoned"))?;
        *guard = snapshot.clone();
        Ok(())
    }
}
