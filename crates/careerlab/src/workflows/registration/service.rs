use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::domain::{AccountId, AccountRecord, FormRecord};
use super::repository::{RegistrationRepository, RepositoryError};
use super::validation::ValidationReport;
use super::wizard::{rules_for, RegistrationWizard, WizardError, WizardStep};
use crate::notify::{Notice, NoticeError, Notifier};
use crate::runtime::Clock;
use crate::session::Role;

static ACCOUNT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_account_id() -> AccountId {
    let id = ACCOUNT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AccountId(format!("acct-{id:06}"))
}

/// Service composing the wizard, the account repository, and the
/// notification channel.
pub struct RegistrationService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
    clock: Arc<dyn Clock>,
}

impl<R, N> RegistrationService<R, N>
where
    R: RegistrationRepository + 'static,
    N: Notifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            notifier,
            clock,
        }
    }

    /// Validate one step's field set without touching any stored state.
    /// Backs the live feedback endpoint; the same rules gate `register`.
    pub fn validate_step(&self, role: Role, step: WizardStep, values: &FormRecord) -> ValidationReport {
        super::validation::validate(values, &rules_for(step, role))
    }

    /// Run a full submission through the wizard and persist the result.
    pub fn register(
        &self,
        role: Role,
        values: FormRecord,
    ) -> Result<AccountRecord, RegistrationError> {
        let mut wizard = RegistrationWizard::new(role);
        wizard.advance(&values).map_err(RegistrationError::Invalid)?;
        let completed = wizard.complete(&values).map_err(|error| match error {
            WizardError::Rejected(report) => RegistrationError::Invalid(report),
            WizardError::NotAtFinalStep => RegistrationError::Incomplete,
        })?;

        let record = AccountRecord {
            account_id: next_account_id(),
            full_name: completed.full_name.clone(),
            email: completed.email.clone(),
            role: completed.role,
            registered_at: self.clock.now(),
            details: completed.details,
        };

        let stored = self.repository.insert(record)?;

        self.notifier.publish(Notice::new(
            "Registration complete",
            format!("Welcome aboard, {}!", stored.full_name),
        ))?;

        Ok(stored)
    }

    pub fn lookup(&self, id: &AccountId) -> Result<AccountRecord, RegistrationError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the registration service.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("registration form rejected")]
    Invalid(ValidationReport),
    #[error("registration submitted before the account step passed")]
    Incomplete,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notice(#[from] NoticeError),
}
