use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use careerlab::config::SimulationConfig;
use careerlab::runtime::{Clock, ManualClock, SeededRandom, TaskState};
use careerlab::workflows::resume::{
    EditOperation, ExperienceEntry, ResumeDocument, ResumeRepository, ResumeService,
    ResumeStoreError,
};
use chrono::{Duration, TimeZone, Utc};

#[derive(Default)]
struct MemoryResumes {
    documents: Mutex<HashMap<String, ResumeDocument>>,
}

impl ResumeRepository for MemoryResumes {
    fn upsert(&self, owner: &str, document: ResumeDocument) -> Result<(), ResumeStoreError> {
        self.documents
            .lock()
            .expect("resume mutex poisoned")
            .insert(owner.to_string(), document);
        Ok(())
    }

    fn fetch(&self, owner: &str) -> Result<Option<ResumeDocument>, ResumeStoreError> {
        Ok(self
            .documents
            .lock()
            .expect("resume mutex poisoned")
            .get(owner)
            .cloned())
    }
}

fn service() -> (
    ResumeService<MemoryResumes, ManualClock, SeededRandom>,
    Arc<ManualClock>,
) {
    let clock = Arc::new(ManualClock::starting_at(
        Utc.with_ymd_and_hms(2026, 5, 5, 11, 0, 0).unwrap(),
    ));
    let service = ResumeService::new(
        Arc::new(MemoryResumes::default()),
        clock.clone(),
        &SimulationConfig::default(),
        SeededRandom::from_seed(29),
    );
    (service, clock)
}

#[test]
fn editor_operations_accumulate_on_the_stored_document() {
    let (service, _clock) = service();

    service
        .edit(
            "acct-000010",
            EditOperation::AddExperience {
                entry: ExperienceEntry {
                    role: "Research Assistant".to_string(),
                    company: "Meridian Institute".to_string(),
                    period: "2025".to_string(),
                    accomplishments: Vec::new(),
                },
            },
        )
        .expect("experience added");

    // The sample template ships one experience entry, so ours is second.
    let document = service
        .edit(
            "acct-000010",
            EditOperation::AddAccomplishment {
                entry: 1,
                text: "Published a reproducibility study".to_string(),
            },
        )
        .expect("accomplishment added");

    assert_eq!(document.experience.len(), 2);
    assert_eq!(
        document.experience[1].accomplishments,
        vec!["Published a reproducibility study"]
    );

    let document = service
        .edit(
            "acct-000010",
            EditOperation::AddSkill {
                name: "Rust".to_string(),
            },
        )
        .expect("skill added");
    assert!(document.skills.contains("Rust"));
}

#[test]
fn analysis_reports_are_simulated_but_document_aware() {
    let (service, clock) = service();

    let report = service.analyze("acct-000011").expect("analysis runs");

    assert!((60..=100).contains(&report.score));
    assert_eq!(report.generated_at, clock.now());
    // The sample document is complete, so only the generic tip remains.
    assert!(!report.suggestions.is_empty());
    for keyword in &report.matched_keywords {
        assert!(ResumeDocument::sample().skills.contains(keyword));
    }
}

#[test]
fn upload_lifecycle_progresses_only_with_the_clock() {
    let (service, clock) = service();
    let config = SimulationConfig::default();

    let started = service.begin_upload("resume.docx").expect("docx accepted");
    assert_eq!(started.state, TaskState::Running);
    assert_eq!(started.percent, 0);

    // Nothing moves while the clock stands still.
    let status = service
        .upload_status(&started.upload_id)
        .expect("upload exists");
    assert_eq!(status.percent, 0);

    // Enough intervals for half the steps.
    clock.advance(Duration::milliseconds(config.upload_interval_ms as i64 * 5));
    let status = service
        .upload_status(&started.upload_id)
        .expect("upload exists");
    assert_eq!(status.percent, 50);
    assert_eq!(status.state, TaskState::Running);

    clock.advance(Duration::milliseconds(config.upload_interval_ms as i64 * 5));
    let status = service
        .upload_status(&started.upload_id)
        .expect("upload exists");
    assert_eq!(status.percent, 100);
    assert_eq!(status.state, TaskState::Complete);
}

#[test]
fn rejected_uploads_and_cancelled_uploads_leave_no_state() {
    let (service, clock) = service();

    assert!(service.begin_upload("resume.svg").is_err());

    let started = service.begin_upload("resume.txt").expect("txt accepted");
    service
        .cancel_upload(&started.upload_id)
        .expect("cancel succeeds");
    clock.advance(Duration::seconds(10));
    assert!(service.upload_status(&started.upload_id).is_err());
}
