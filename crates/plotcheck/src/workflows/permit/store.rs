use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use super::repository::{RecorderError, SubmissionRecord, SubmissionRecorder};

/// Keeps the whole history as one pretty-printed JSON array on disk.
///
/// Each append reads the array, pushes the record and rewrites the file. A
/// missing or unparsable file counts as an empty history.
#[derive(Debug)]
pub struct JsonFileRecorder {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current contents of the history file, as the next append would see them.
    pub fn load(&self) -> Vec<SubmissionRecord> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "submission history unreadable; starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "submission history corrupt; starting empty");
                Vec::new()
            }
        }
    }
}

impl SubmissionRecorder for JsonFileRecorder {
    fn append(&self, record: SubmissionRecord) -> Result<(), RecorderError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| RecorderError::Unavailable("history lock poisoned".to_string()))?;

        let mut records = self.load();
        records.push(record);

        let encoded = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, encoded)?;
        Ok(())
    }
}
