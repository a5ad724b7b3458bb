use std::sync::{Arc, Mutex};

use super::analysis::{AtsAnalyzer, AtsReport};
use super::domain::ResumeDocument;
use super::editor::{EditError, EditOperation};
use super::upload::{UploadError, UploadStatusView, UploadTracker};
use crate::config::SimulationConfig;
use crate::runtime::{Clock, RandomSource};

/// Storage seam for resume documents, keyed by owner.
pub trait ResumeRepository: Send + Sync {
    fn upsert(&self, owner: &str, document: ResumeDocument) -> Result<(), ResumeStoreError>;
    fn fetch(&self, owner: &str) -> Result<Option<ResumeDocument>, ResumeStoreError>;
}

/// Error enumeration for resume storage failures.
#[derive(Debug, thiserror::Error)]
pub enum ResumeStoreError {
    #[error("resume store unavailable: {0}")]
    Unavailable(String),
}

/// Service composing the document store, the editor operations, the upload
/// tracker, and the simulated analyzer.
pub struct ResumeService<R, C, S> {
    repository: Arc<R>,
    analyzer: AtsAnalyzer,
    uploads: UploadTracker<C>,
    clock: Arc<C>,
    random: Mutex<S>,
}

impl<R, C, S> ResumeService<R, C, S>
where
    R: ResumeRepository + 'static,
    C: Clock + 'static,
    S: RandomSource + 'static,
{
    pub fn new(repository: Arc<R>, clock: Arc<C>, config: &SimulationConfig, random: S) -> Self {
        Self {
            repository,
            analyzer: AtsAnalyzer::new(config),
            uploads: UploadTracker::new(clock.clone(), config),
            clock,
            random: Mutex::new(random),
        }
    }

    /// Stored document, or the builder's prefilled template for first-time
    /// owners. Never fails with "not found": the builder always opens.
    pub fn document(&self, owner: &str) -> Result<ResumeDocument, ResumeError> {
        let document = self
            .repository
            .fetch(owner)?
            .unwrap_or_else(ResumeDocument::sample);
        Ok(document)
    }

    pub fn replace(&self, owner: &str, document: ResumeDocument) -> Result<(), ResumeError> {
        self.repository.upsert(owner, document)?;
        Ok(())
    }

    /// Apply one editor gesture to the stored document and persist it.
    pub fn edit(
        &self,
        owner: &str,
        operation: EditOperation,
    ) -> Result<ResumeDocument, ResumeError> {
        let mut document = self.document(owner)?;
        operation.apply(&mut document)?;
        self.repository.upsert(owner, document.clone())?;
        Ok(document)
    }

    pub fn analyze(&self, owner: &str) -> Result<AtsReport, ResumeError> {
        let document = self.document(owner)?;
        let mut random = self.random.lock().expect("random mutex poisoned");
        Ok(self
            .analyzer
            .analyze(&document, &mut *random, self.clock.now()))
    }

    pub fn begin_upload(&self, file_name: &str) -> Result<UploadStatusView, ResumeError> {
        Ok(self.uploads.begin(file_name)?)
    }

    pub fn upload_status(&self, upload_id: &str) -> Result<UploadStatusView, ResumeError> {
        Ok(self.uploads.status(upload_id)?)
    }

    pub fn cancel_upload(&self, upload_id: &str) -> Result<(), ResumeError> {
        Ok(self.uploads.cancel(upload_id)?)
    }
}

/// Error raised by the resume service.
#[derive(Debug, thiserror::Error)]
pub enum ResumeError {
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Store(#[from] ResumeStoreError),
}
