//! Audit log source service
//!
//! The activity log viewer only triggers refreshes and reads the current
//! snapshot; the source decides how entries are obtained. The file-backed
//! source reads on a background thread and hands results back through a
//! channel that is drained on each tick.

use crate::model::AuditLogEntry;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

/// Collaborator providing audit log entries
pub trait AuditLogSource {
    /// Request a refresh. Fire-and-forget; results show up in `entries`
    /// once `poll` has picked them up.
    fn fetch(&mut self);

    /// Apply any completed fetches, returning true if entries changed
    fn poll(&mut self) -> bool {
        false
    }

    /// Current snapshot, in the order delivered by the backing store
    fn entries(&self) -> &[AuditLogEntry];
}

/// Messages sent from a fetch thread
enum FetchMessage {
    Loaded(Vec<AuditLogEntry>),
    Failed(String),
}

/// Audit log source backed by a JSON file containing an array of entries
pub struct FileAuditLogSource {
    path: PathBuf,
    entries: Vec<AuditLogEntry>,
    /// Receiver of the most recent fetch; older in-flight fetches are dropped
    receiver: Option<Receiver<FetchMessage>>,
}

impl FileAuditLogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
            receiver: None,
        }
    }

    fn run_fetch(path: PathBuf, tx: Sender<FetchMessage>) {
        let message = match load_audit_logs(&path) {
            Ok(entries) => FetchMessage::Loaded(entries),
            Err(e) => FetchMessage::Failed(format!("{:#}", e)),
        };
        let _ = tx.send(message);
    }
}

impl AuditLogSource for FileAuditLogSource {
    fn fetch(&mut self) {
        let (tx, rx) = mpsc::channel();
        let path = self.path.clone();

        tracing::debug!(path = %path.display(), "Fetching audit logs");
        thread::spawn(move || {
            Self::run_fetch(path, tx);
        });

        self.receiver = Some(rx);
    }

    fn poll(&mut self) -> bool {
        let Some(ref receiver) = self.receiver else {
            return false;
        };

        match receiver.try_recv() {
            Ok(FetchMessage::Loaded(entries)) => {
                tracing::info!(count = entries.len(), "Audit logs loaded");
                self.entries = entries;
                self.receiver = None;
                true
            }
            Ok(FetchMessage::Failed(err)) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Audit log fetch failed");
                self.receiver = None;
                false
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.receiver = None;
                false
            }
        }
    }

    fn entries(&self) -> &[AuditLogEntry] {
        &self.entries
    }
}

/// Read and parse an audit log file
pub fn load_audit_logs(path: &Path) -> Result<Vec<AuditLogEntry>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let entries = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    const SAMPLE_LOGS: &str = r#"[
        {
            "id": "2",
            "performedAt": "2024-01-02T09:00:00Z",
            "action": "restored",
            "scenarioName": "Refinance A",
            "userName": "Jordan",
            "additionalData": {
                "deletedAt": "2024-01-01T00:00:00Z",
                "restoredAt": "2024-01-02T09:00:00Z"
            }
        },
        {
            "id": "1",
            "performedAt": "2024-01-01T00:00:00Z",
            "action": "deleted",
            "scenarioName": "Refinance A",
            "userName": "Jordan"
        }
    ]"#;

    fn write_temp_logs(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    /// Poll until the background fetch has been consumed
    fn poll_until_settled(source: &mut FileAuditLogSource) -> bool {
        for _ in 0..500 {
            if source.poll() {
                return true;
            }
            if source.receiver.is_none() {
                return false;
            }
            thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    fn test_load_audit_logs_keeps_file_order() {
        let file = write_temp_logs(SAMPLE_LOGS);
        let entries = load_audit_logs(file.path()).unwrap();
        let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_demo_audit_logs_parse() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/audit_logs.json");
        let entries = load_audit_logs(&path).unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].action, "restored");
    }

    #[test]
    fn test_load_audit_logs_reports_parse_error() {
        let file = write_temp_logs("{ not json");
        let err = load_audit_logs(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse"));
    }

    #[test]
    fn test_file_source_fetch_then_poll() {
        let file = write_temp_logs(SAMPLE_LOGS);
        let mut source = FileAuditLogSource::new(file.path());
        assert!(source.entries().is_empty());

        source.fetch();
        assert!(poll_until_settled(&mut source));
        assert_eq!(source.entries().len(), 2);
    }

    #[test]
    fn test_file_source_failure_keeps_previous_entries() {
        let file = write_temp_logs(SAMPLE_LOGS);
        let mut source = FileAuditLogSource::new(file.path());
        source.fetch();
        assert!(poll_until_settled(&mut source));

        source.path = file.path().with_extension("missing");
        source.fetch();
        assert!(!poll_until_settled(&mut source));
        assert_eq!(source.entries().len(), 2);
    }
}
