use std::sync::Arc;

use super::common::*;
use crate::runtime::ManualClock;
use crate::session::Role;
use crate::workflows::registration::domain::fields;
use crate::workflows::registration::repository::RegistrationRepository;
use crate::workflows::registration::service::RegistrationService;
use crate::workflows::registration::{RegistrationError, RepositoryError, WizardStep};
use chrono::{TimeZone, Utc};

#[test]
fn register_persists_the_account_and_notifies() {
    let (service, repository, notifier) = build_service();

    let record = service
        .register(student_role(), full_student_submission())
        .expect("full submission registers");

    assert_eq!(record.role, Role::Student);
    assert!(record.account_id.0.starts_with("acct-"));
    assert_eq!(repository.count().expect("count available"), 1);

    let stored = service
        .lookup(&record.account_id)
        .expect("stored record fetches");
    assert_eq!(stored.email, "asha@example.com");

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Registration complete");
    assert!(notices[0].detail.contains("Asha"));
}

#[test]
fn register_rejects_an_invalid_account_step() {
    let (service, repository, notifier) = build_service();

    let mut values = full_student_submission();
    values.remove(fields::PASSWORD);

    let error = service
        .register(student_role(), values)
        .expect_err("missing password rejected");

    match error {
        RegistrationError::Invalid(report) => {
            assert!(report.message(fields::PASSWORD).is_some());
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
    assert_eq!(repository.count().expect("count available"), 0);
    assert!(notifier.notices().is_empty(), "no notice for a rejection");
}

#[test]
fn register_surfaces_repository_outages() {
    let repository = Arc::new(UnavailableRepository);
    let notifier = Arc::new(MemoryNotifier::default());
    let clock = Arc::new(ManualClock::starting_at(
        Utc.with_ymd_and_hms(2026, 2, 14, 10, 30, 0).unwrap(),
    ));
    let service = RegistrationService::new(repository, notifier.clone(), clock);

    let error = service
        .register(student_role(), full_student_submission())
        .expect_err("outage propagates");

    assert!(matches!(
        error,
        RegistrationError::Repository(RepositoryError::Unavailable(_))
    ));
    assert!(notifier.notices().is_empty());
}

#[test]
fn registered_at_comes_from_the_injected_clock() {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let start = Utc.with_ymd_and_hms(2026, 5, 2, 8, 0, 0).unwrap();
    let clock = Arc::new(ManualClock::starting_at(start));
    let service = RegistrationService::new(repository, notifier, clock);

    let record = service
        .register(student_role(), full_student_submission())
        .expect("submission registers");

    assert_eq!(record.registered_at, start);
}

#[test]
fn validate_step_checks_only_the_requested_step() {
    let (service, _, _) = build_service();

    // Account values against the role step: every role field is missing.
    let report = service.validate_step(
        Role::Student,
        WizardStep::RoleDetails,
        &valid_account_step(),
    );
    assert!(report.message(fields::COLLEGE_NAME).is_some());
    assert!(report.message(fields::PASSWORD).is_none());

    // Role values against the account step: account fields are missing.
    let report = service.validate_step(
        Role::Student,
        WizardStep::AccountDetails,
        &valid_student_step(),
    );
    assert!(report.message(fields::EMAIL).is_some());
    assert!(report.message(fields::COLLEGE_NAME).is_none());
}
