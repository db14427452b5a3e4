use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::SubmissionPayload;
use crate::zoning::ComplianceView;

/// One evaluated submission as written to the history store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub timestamp: DateTime<Utc>,
    pub input: SubmissionPayload,
    pub output: ComplianceView,
}

impl SubmissionRecord {
    pub fn new(input: SubmissionPayload, output: ComplianceView) -> Self {
        Self {
            timestamp: Utc::now(),
            input,
            output,
        }
    }
}

/// Append-only sink for submission history. Implementations never expose
/// earlier records to the evaluation path.
pub trait SubmissionRecorder: Send + Sync {
    fn append(&self, record: SubmissionRecord) -> Result<(), RecorderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecorderError {
    #[error("failed to write submission history: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode submission history: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("submission history unavailable: {0}")]
    Unavailable(String),
}
