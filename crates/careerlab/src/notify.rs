use serde::{Deserialize, Serialize};

/// Fire-and-forget toast payload consumed by the notification shell. The
/// domain only publishes; queueing and display belong to the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub detail: String,
    pub duration_ms: u64,
}

impl Notice {
    const DEFAULT_DURATION_MS: u64 = 4000;

    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            duration_ms: Self::DEFAULT_DURATION_MS,
        }
    }
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NoticeError {
    #[error("notification channel unavailable: {0}")]
    Channel(String),
}

/// Outbound notification hook (toast shell, e-mail adapter, test spy).
pub trait Notifier: Send + Sync {
    fn publish(&self, notice: Notice) -> Result<(), NoticeError>;
}
