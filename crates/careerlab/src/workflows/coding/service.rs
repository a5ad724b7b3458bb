use std::sync::{Arc, Mutex};

use super::catalog::{CatalogFilter, ChallengeCatalog};
use super::domain::{
    ChallengeDetail, ChallengeId, ChallengeSummary, RunOutcome, SubmissionResult,
};
use super::evaluation::SubmissionEvaluator;
use crate::runtime::RandomSource;

/// Service composing the catalog and the simulated evaluator. The random
/// source sits behind a mutex so concurrent handlers share one stream.
pub struct CodingLabService<S> {
    catalog: Arc<ChallengeCatalog>,
    evaluator: SubmissionEvaluator,
    random: Mutex<S>,
}

impl<S> CodingLabService<S>
where
    S: RandomSource + 'static,
{
    pub fn new(catalog: Arc<ChallengeCatalog>, evaluator: SubmissionEvaluator, random: S) -> Self {
        Self {
            catalog,
            evaluator,
            random: Mutex::new(random),
        }
    }

    pub fn catalog(&self) -> &ChallengeCatalog {
        &self.catalog
    }

    pub fn challenges(&self, filter: &CatalogFilter) -> Vec<ChallengeSummary> {
        self.catalog
            .filtered(filter)
            .into_iter()
            .map(ChallengeSummary::from)
            .collect()
    }

    pub fn challenge(&self, id: &ChallengeId) -> Result<ChallengeDetail, CodingError> {
        self.catalog
            .get(id)
            .map(ChallengeDetail::from)
            .ok_or_else(|| CodingError::UnknownChallenge(id.0.clone()))
    }

    pub fn run(&self, id: &ChallengeId) -> Result<RunOutcome, CodingError> {
        let challenge = self
            .catalog
            .get(id)
            .ok_or_else(|| CodingError::UnknownChallenge(id.0.clone()))?;
        let mut random = self.random.lock().expect("random mutex poisoned");
        Ok(self.evaluator.run(challenge, &mut *random))
    }

    pub fn submit(&self, id: &ChallengeId) -> Result<SubmissionResult, CodingError> {
        let challenge = self
            .catalog
            .get(id)
            .ok_or_else(|| CodingError::UnknownChallenge(id.0.clone()))?;
        let mut random = self.random.lock().expect("random mutex poisoned");
        Ok(self.evaluator.submit(challenge, &mut *random))
    }
}

/// Error raised by the coding lab service.
#[derive(Debug, thiserror::Error)]
pub enum CodingError {
    #[error("unknown challenge: {0}")]
    UnknownChallenge(String),
}
