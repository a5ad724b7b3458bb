use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use careerlab::notify::{Notice, NoticeError, Notifier};
use careerlab::workflows::registration::{
    AccountId, AccountRecord, RegistrationRepository, RepositoryError,
};
use careerlab::workflows::resume::{ResumeDocument, ResumeRepository, ResumeStoreError};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryRegistrationRepository {
    records: Arc<Mutex<HashMap<AccountId, AccountRecord>>>,
}

impl RegistrationRepository for InMemoryRegistrationRepository {
    fn insert(&self, record: AccountRecord) -> Result<AccountRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.account_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.account_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AccountId) -> Result<Option<AccountRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.len())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryResumeRepository {
    documents: Arc<Mutex<HashMap<String, ResumeDocument>>>,
}

impl ResumeRepository for InMemoryResumeRepository {
    fn upsert(&self, owner: &str, document: ResumeDocument) -> Result<(), ResumeStoreError> {
        let mut guard = self.documents.lock().expect("resume mutex poisoned");
        guard.insert(owner.to_string(), document);
        Ok(())
    }

    fn fetch(&self, owner: &str) -> Result<Option<ResumeDocument>, ResumeStoreError> {
        let guard = self.documents.lock().expect("resume mutex poisoned");
        Ok(guard.get(owner).cloned())
    }
}

/// Toast shell stand-in: records every notice and logs it.
#[derive(Default, Clone)]
pub(crate) struct InMemoryNoticeBoard {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl InMemoryNoticeBoard {
    pub(crate) fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("notice mutex poisoned").clone()
    }
}

impl Notifier for InMemoryNoticeBoard {
    fn publish(&self, notice: Notice) -> Result<(), NoticeError> {
        info!(title = %notice.title, detail = %notice.detail, "notice published");
        let mut guard = self.notices.lock().expect("notice mutex poisoned");
        guard.push(notice);
        Ok(())
    }
}
