use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Duration;
use serde::Serialize;

use crate::config::SimulationConfig;
use crate::runtime::{Clock, TaskShape, TaskSimulator, TaskState};

/// Extensions accepted by the file picker. Mirrors the browser-side filter;
/// nothing is parsed beyond the name.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["pdf", "doc", "docx", "txt"];

/// Upload intake errors.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("file name has no extension: {0}")]
    MissingExtension(String),
    #[error("unsupported file type: .{0}")]
    UnsupportedType(String),
    #[error("upload not found: {0}")]
    NotFound(String),
}

/// Accept or reject a file name against the extension allow-list.
pub fn validate_file_name(name: &str) -> Result<(), UploadError> {
    let extension = name
        .rsplit_once('.')
        .map(|(stem, extension)| (stem, extension.trim()))
        .filter(|(stem, extension)| !stem.is_empty() && !extension.is_empty())
        .map(|(_, extension)| extension.to_ascii_lowercase())
        .ok_or_else(|| UploadError::MissingExtension(name.to_string()))?;

    if ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(UploadError::UnsupportedType(extension))
    }
}

/// Poll view of one simulated upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadStatusView {
    pub upload_id: String,
    pub file_name: String,
    pub state: TaskState,
    pub percent: u8,
}

struct UploadEntry {
    file_name: String,
    task: TaskSimulator,
}

static UPLOAD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_upload_id() -> String {
    let id = UPLOAD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("upl-{id:06}")
}

/// Tracks in-flight simulated uploads keyed by id. Progress only moves when
/// somebody polls, so an abandoned upload never fires anything.
pub struct UploadTracker<C> {
    clock: Arc<C>,
    shape: TaskShape,
    uploads: Mutex<HashMap<String, UploadEntry>>,
}

impl<C> UploadTracker<C>
where
    C: Clock,
{
    pub fn new(clock: Arc<C>, config: &SimulationConfig) -> Self {
        Self {
            clock,
            shape: TaskShape::Progress {
                step: config.upload_step_percent,
                interval: Duration::milliseconds(config.upload_interval_ms as i64),
            },
            uploads: Mutex::new(HashMap::new()),
        }
    }

    /// Validate the file name and start a fresh progress task for it.
    pub fn begin(&self, file_name: &str) -> Result<UploadStatusView, UploadError> {
        validate_file_name(file_name)?;

        let mut task = TaskSimulator::new(self.shape.clone());
        task.start(self.clock.now());

        let upload_id = next_upload_id();
        let view = UploadStatusView {
            upload_id: upload_id.clone(),
            file_name: file_name.to_string(),
            state: task.state(),
            percent: task.percent(),
        };

        let mut guard = self.uploads.lock().expect("upload mutex poisoned");
        guard.insert(
            upload_id,
            UploadEntry {
                file_name: file_name.to_string(),
                task,
            },
        );

        Ok(view)
    }

    /// Poll an upload forward to the current time.
    pub fn status(&self, upload_id: &str) -> Result<UploadStatusView, UploadError> {
        let mut guard = self.uploads.lock().expect("upload mutex poisoned");
        let entry = guard
            .get_mut(upload_id)
            .ok_or_else(|| UploadError::NotFound(upload_id.to_string()))?;

        entry.task.poll(self.clock.now());

        Ok(UploadStatusView {
            upload_id: upload_id.to_string(),
            file_name: entry.file_name.clone(),
            state: entry.task.state(),
            percent: entry.task.percent(),
        })
    }

    /// Drop an upload and its pending timers (navigation away mid-upload).
    pub fn cancel(&self, upload_id: &str) -> Result<(), UploadError> {
        let mut guard = self.uploads.lock().expect("upload mutex poisoned");
        let mut entry = guard
            .remove(upload_id)
            .ok_or_else(|| UploadError::NotFound(upload_id.to_string()))?;
        entry.task.cancel();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::ManualClock;
    use chrono::{TimeZone, Utc};

    fn tracker() -> (UploadTracker<ManualClock>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::starting_at(
            Utc.with_ymd_and_hms(2026, 4, 10, 9, 0, 0).unwrap(),
        ));
        let config = SimulationConfig {
            upload_step_percent: 25,
            upload_interval_ms: 100,
            ..SimulationConfig::default()
        };
        (UploadTracker::new(clock.clone(), &config), clock)
    }

    #[test]
    fn extension_allow_list_matches_the_picker() {
        assert!(validate_file_name("resume.pdf").is_ok());
        assert!(validate_file_name("resume.DOCX").is_ok());
        assert!(validate_file_name("notes.txt").is_ok());
        assert!(matches!(
            validate_file_name("headshot.png"),
            Err(UploadError::UnsupportedType(ext)) if ext == "png"
        ));
        assert!(matches!(
            validate_file_name("resume"),
            Err(UploadError::MissingExtension(_))
        ));
        assert!(matches!(
            validate_file_name(".pdf"),
            Err(UploadError::MissingExtension(_))
        ));
    }

    #[test]
    fn upload_progress_tracks_the_clock() {
        let (tracker, clock) = tracker();
        let started = tracker.begin("resume.pdf").expect("pdf accepted");
        assert_eq!(started.state, TaskState::Running);
        assert_eq!(started.percent, 0);

        clock.advance(Duration::milliseconds(250));
        let status = tracker.status(&started.upload_id).expect("upload exists");
        assert_eq!(status.state, TaskState::Running);
        assert_eq!(status.percent, 50);

        clock.advance(Duration::milliseconds(200));
        let status = tracker.status(&started.upload_id).expect("upload exists");
        assert_eq!(status.state, TaskState::Complete);
        assert_eq!(status.percent, 100);
    }

    #[test]
    fn rejected_files_never_enter_the_tracker() {
        let (tracker, _clock) = tracker();
        let error = tracker.begin("malware.exe").expect_err("exe rejected");
        assert!(matches!(error, UploadError::UnsupportedType(_)));
    }

    #[test]
    fn cancelled_uploads_disappear() {
        let (tracker, clock) = tracker();
        let started = tracker.begin("resume.doc").expect("doc accepted");
        tracker.cancel(&started.upload_id).expect("cancel succeeds");

        clock.advance(Duration::milliseconds(1000));
        assert!(matches!(
            tracker.status(&started.upload_id),
            Err(UploadError::NotFound(_))
        ));
    }
}
