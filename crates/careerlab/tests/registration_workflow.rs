use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use careerlab::navigation::AppRoute;
use careerlab::notify::{Notice, NoticeError, Notifier};
use careerlab::runtime::ManualClock;
use careerlab::session::Role;
use careerlab::workflows::registration::{
    fields, AccountId, AccountRecord, FieldValue, FormRecord, RegistrationRepository,
    RegistrationService, RegistrationWizard, RepositoryError, WizardStep,
};
use chrono::{TimeZone, Utc};

#[derive(Default)]
struct MemoryRepository {
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

#[derive(Default)]
struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl Notifier for MemoryNotifier {
    fn publish(&self, notice: Notice) -> Result<(), NoticeError> {
        self.notices
            .lock()
            .expect("notifier mutex poisoned")
            .push(notice);
        Ok(())
    }
}

fn text(value: &str) -> FieldValue {
    FieldValue::Text(value.to_string())
}

fn account_step() -> FormRecord {
    [
        (fields::FULL_NAME, text("Ravi Kulkarni")),
        (fields::EMAIL, text("ravi@example.com")),
        (fields::PASSWORD, text("Sunrise42x")),
        (fields::CONFIRM_PASSWORD, text("Sunrise42x")),
        (fields::AGREE_TERMS, FieldValue::Flag(true)),
    ]
    .into_iter()
    .map(|(field, value)| (field.to_string(), value))
    .collect()
}

fn employer_step() -> FormRecord {
    [
        (fields::COMPANY_NAME, text("Skyline Robotics")),
        (fields::DESIGNATION, text("Engineering Manager")),
        (fields::INDUSTRY, text("Robotics")),
    ]
    .into_iter()
    .map(|(field, value)| (field.to_string(), value))
    .collect()
}

#[test]
fn wizard_walks_both_steps_and_redirects_by_role() {
    let mut wizard = RegistrationWizard::new(Role::Employer);

    let step = wizard.advance(&account_step()).expect("account step passes");
    assert_eq!(step, WizardStep::RoleDetails);

    let completed = wizard
        .complete(&employer_step())
        .expect("employer step completes");
    assert_eq!(completed.redirect(), AppRoute::EmployerDashboard);
    assert_eq!(completed.redirect().path(), "/employer-dashboard");
}

#[test]
fn back_navigation_keeps_every_entered_value() {
    let mut wizard = RegistrationWizard::new(Role::Student);
    wizard.advance(&account_step()).expect("account step passes");

    wizard.back();
    assert_eq!(wizard.step(), WizardStep::AccountDetails);
    assert_eq!(
        wizard.values().get(fields::EMAIL),
        Some(&text("ravi@example.com"))
    );

    // Re-advancing after back requires no re-entry of data.
    let step = wizard
        .advance(&FormRecord::new())
        .expect("stored values still satisfy the step");
    assert_eq!(step, WizardStep::RoleDetails);
}

#[test]
fn full_registration_persists_and_notifies_through_the_service() {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let clock = Arc::new(ManualClock::starting_at(
        Utc.with_ymd_and_hms(2026, 7, 1, 9, 0, 0).unwrap(),
    ));
    let service = RegistrationService::new(repository.clone(), notifier.clone(), clock);

    let mut values = account_step();
    values.extend(employer_step());

    let record = service
        .register(Role::Employer, values)
        .expect("submission registers");

    assert_eq!(record.role, Role::Employer);
    assert_eq!(record.status_view().redirect, "/employer-dashboard");
    assert_eq!(repository.count().expect("count available"), 1);
    assert_eq!(
        notifier
            .notices
            .lock()
            .expect("notifier mutex poisoned")
            .len(),
        1
    );
}

#[test]
fn account_ids_are_sequential_per_process() {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let clock = Arc::new(ManualClock::starting_at(
        Utc.with_ymd_and_hms(2026, 7, 1, 9, 0, 0).unwrap(),
    ));
    let service = RegistrationService::new(repository, notifier, clock);

    let mut values = account_step();
    values.extend(employer_step());
    let first = service
        .register(Role::Employer, values.clone())
        .expect("first registers");
    let second = service
        .register(Role::Employer, values)
        .expect("second registers");

    assert_ne!(first.account_id, second.account_id);
    assert!(first.account_id.0.starts_with("acct-"));
    assert!(second.account_id.0.starts_with("acct-"));
}
