use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use stockroom_core::{RecordError, RecordResult};
use tempfile::NamedTempFile;

use crate::persistence::r#trait::SnapshotStore;
use crate::snapshot::Snapshot;

/// Snapshot store backed by a single pretty-printed JSON file.
///
/// Saves go through a temporary file in the same directory followed by an
/// atomic rename, so the document on disk is always either the old snapshot
/// or the new one.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> RecordResult<Snapshot> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "snapshot file missing, starting empty");
                return Ok(Snapshot::default());
            }
            Err(err) => {
                return Err(RecordError::persistence(format!(
                    "failed to read {}: {err}",
                    self.path.display()
                )));
            }
        };

        match serde_json::from_str(&raw) {
            Ok(snapshot) => Ok(snapshot),
            Err(err) => {
                tracing::error!(
                    path = %self.path.display(),
                    %err,
                    "snapshot file is malformed, starting empty"
                );
                Ok(Snapshot::default())
            }
        }
    }

    fn save(&self, snapshot: &Snapshot) -> RecordResult<()> {
        let body = serde_json::to_string_pretty(snapshot)
            .map_err(|err| RecordError::persistence(format!("failed to encode snapshot: {err}")))?;

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir).map_err(|err| {
            RecordError::persistence(format!(
                "failed to create temp file in {}: {err}",
                dir.display()
            ))
        })?;
        tmp.write_all(body.as_bytes())
            .map_err(|err| RecordError::persistence(format!("failed to write snapshot: {err}")))?;
        tmp.as_file()
            .sync_all()
            .map_err(|err| RecordError::persistence(format!("failed to sync snapshot: {err}")))?;
        tmp.persist(&self.path).map_err(|err| {
            RecordError::persistence(format!(
                "failed to replace {}: {err}",
                self.path.display()
            ))
        })?;
        Ok(())
    }
}
