use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::TimeZone;
use chrono::Utc;

use crate::notify::{Notice, NoticeError, Notifier};
use crate::runtime::ManualClock;
use crate::session::Role;
use crate::workflows::registration::domain::{
    fields, AccountId, AccountRecord, FieldValue, FormRecord,
};
use crate::workflows::registration::repository::{RegistrationRepository, RepositoryError};
use crate::workflows::registration::service::RegistrationService;

pub(super) fn record_with(entries: &[(&str, FieldValue)]) -> FormRecord {
    entries
        .iter()
        .map(|(field, value)| (field.to_string(), value.clone()))
        .collect()
}

pub(super) fn valid_account_step() -> FormRecord {
    record_with(&[
        (fields::FULL_NAME, FieldValue::text("Asha Nair")),
        (fields::EMAIL, FieldValue::text("asha@example.com")),
        (fields::PASSWORD, FieldValue::text("Abcdefgh1")),
        (fields::CONFIRM_PASSWORD, FieldValue::text("Abcdefgh1")),
        (fields::AGREE_TERMS, FieldValue::Flag(true)),
    ])
}

pub(super) fn valid_student_step() -> FormRecord {
    record_with(&[
        (fields::COLLEGE_NAME, FieldValue::text("Meridian Institute")),
        (fields::GRADUATION_YEAR, FieldValue::text("2027")),
        (fields::DEGREE_BRANCH, FieldValue::text("Computer Science")),
    ])
}

pub(super) fn valid_employer_step() -> FormRecord {
    record_with(&[
        (fields::COMPANY_NAME, FieldValue::text("Northwind Labs")),
        (fields::DESIGNATION, FieldValue::text("Hiring Lead")),
        (fields::INDUSTRY, FieldValue::text("Software")),
    ])
}

pub(super) fn full_student_submission() -> FormRecord {
    let mut values = valid_account_step();
    values.extend(valid_student_step());
    values
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<HashMap<AccountId, AccountRecord>>,
}

impl RegistrationRepository for MemoryRepository {
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

pub(super) struct UnavailableRepository;

impl RegistrationRepository for UnavailableRepository {
    fn insert(&self, _record: AccountRecord) -> Result<AccountRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance window".to_string()))
    }

    fn fetch(&self, _id: &AccountId) -> Result<Option<AccountRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance window".to_string()))
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance window".to_string()))
    }
}

#[derive(Default)]
pub(super) struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNotifier {
    pub(super) fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("notifier mutex poisoned").clone()
    }
}

impl Notifier for MemoryNotifier {
    fn publish(&self, notice: Notice) -> Result<(), NoticeError> {
        let mut guard = self.notices.lock().expect("notifier mutex poisoned");
        guard.push(notice);
        Ok(())
    }
}

pub(super) fn build_service() -> (
    RegistrationService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let clock = Arc::new(ManualClock::starting_at(
        Utc.with_ymd_and_hms(2026, 2, 14, 10, 30, 0).unwrap(),
    ));
    let service = RegistrationService::new(repository.clone(), notifier.clone(), clock);
    (service, repository, notifier)
}

pub(super) fn student_role() -> Role {
    Role::Student
}
