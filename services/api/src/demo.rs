use std::sync::Arc;

use careerlab::config::SimulationConfig;
use careerlab::directory::{
    DashboardService, DashboardView, SeededCandidateStore, SeededCourseStore,
    SeededInterviewStore,
};
use careerlab::error::AppError;
use careerlab::runtime::{Clock, ManualClock, SeededRandom, TaskState};
use careerlab::session::{Role, Session};
use careerlab::workflows::coding::{
    CatalogFilter, ChallengeCatalog, CodingLabService, CodingWorkspace, DifficultyFilter,
    Language, SubmissionEvaluator, TagFilter,
};
use careerlab::workflows::registration::{fields, FieldValue, FormRecord, RegistrationService};
use careerlab::workflows::resume::{EditOperation, ResumeService};
use chrono::{Duration, TimeZone, Utc};
use clap::Args;

use crate::infra::{
    InMemoryNoticeBoard, InMemoryRegistrationRepository, InMemoryResumeRepository,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed for the simulated outcomes; the same seed replays the same demo.
    #[arg(long, default_value_t = 7)]
    pub(crate) seed: u64,
    /// Skip the resume upload/analysis portion of the demo.
    #[arg(long)]
    pub(crate) skip_resume: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// Difficulty filter (easy, medium, hard, or all)
    #[arg(long, default_value = "all")]
    pub(crate) difficulty: String,
    /// Tag filter (e.g. arrays; "all" disables it)
    #[arg(long, default_value = "all")]
    pub(crate) tag: String,
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let Some(difficulty) = DifficultyFilter::parse(Some(&args.difficulty)) else {
        println!("Unknown difficulty '{}'", args.difficulty);
        return Ok(());
    };
    let filter = CatalogFilter {
        difficulty,
        tag: TagFilter::parse(Some(&args.tag)),
    };

    let catalog = ChallengeCatalog::standard();
    let matches = catalog.filtered(&filter);

    println!(
        "Available tags: {}",
        catalog.tags().into_iter().collect::<Vec<_>>().join(", ")
    );
    println!("Challenge catalog ({} match(es))", matches.len());
    for challenge in matches {
        println!(
            "  [{}] {} - {} pts, {:.0}% success over {} submissions, tags: {}",
            challenge.difficulty.label(),
            challenge.title,
            challenge.points,
            challenge.success_rate * 100.0,
            challenge.submissions,
            challenge
                .tags
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", "),
        );
    }

    Ok(())
}

fn text(value: &str) -> FieldValue {
    FieldValue::Text(value.to_string())
}

fn student_submission() -> FormRecord {
    [
        (fields::FULL_NAME, text("Asha Nair")),
        (fields::EMAIL, text("asha@example.com")),
        (fields::PASSWORD, text("Harbor2026x")),
        (fields::CONFIRM_PASSWORD, text("Harbor2026x")),
        (fields::AGREE_TERMS, FieldValue::Flag(true)),
        (fields::COLLEGE_NAME, text("Meridian Institute")),
        (fields::GRADUATION_YEAR, text("2027")),
        (fields::DEGREE_BRANCH, text("Computer Science")),
    ]
    .into_iter()
    .map(|(field, value)| (field.to_string(), value))
    .collect()
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let clock = Arc::new(ManualClock::starting_at(
        Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0)
            .single()
            .expect("valid demo anchor"),
    ));
    let config = SimulationConfig::default();

    println!("CareerLab demo (seed {})", args.seed);

    // Registration wizard
    println!("\nRegistration");
    let notices = Arc::new(InMemoryNoticeBoard::default());
    let registration = RegistrationService::new(
        Arc::new(InMemoryRegistrationRepository::default()),
        notices.clone(),
        clock.clone() as Arc<dyn Clock>,
    );
    let account = registration.register(Role::Student, student_submission())?;
    println!(
        "  Registered {} as {} -> redirect {}",
        account.full_name,
        account.role.label(),
        account.status_view().redirect,
    );
    for notice in notices.notices() {
        println!("  Toast: {} - {}", notice.title, notice.detail);
    }

    // Coding lab
    println!("\nCoding lab");
    let catalog = Arc::new(ChallengeCatalog::standard());
    let coding = CodingLabService::new(
        catalog.clone(),
        SubmissionEvaluator::new(&config),
        SeededRandom::from_seed(args.seed),
    );

    let challenge = catalog
        .filtered(&CatalogFilter {
            difficulty: DifficultyFilter::Only(careerlab::workflows::coding::Difficulty::Hard),
            tag: TagFilter::All,
        })
        .into_iter()
        .next()
        .cloned()
        .ok_or_else(|| {
            AppError::Coding(careerlab::workflows::coding::CodingError::UnknownChallenge(
                "hard".to_string(),
            ))
        })?;

    let mut workspace = CodingWorkspace::new(Language::Python);
    workspace.select(&challenge);
    println!(
        "  Selected '{}' ({} buffer, {} chars)",
        challenge.title,
        workspace.language().label(),
        workspace.buffer().len(),
    );
    workspace.change_language(Language::Javascript);
    println!(
        "  Switched to {} - buffer reset to the starter ({} chars)",
        workspace.language().label(),
        workspace.buffer().len(),
    );

    let outcome = coding.run(&challenge.id)?;
    println!(
        "  Run: {}/{} visible cases passed",
        outcome.passed_count(),
        outcome.verdicts.len(),
    );

    let result = coding.submit(&challenge.id)?;
    println!(
        "  Submit: {}/{} cases passed, score {} -> {}",
        result.verdicts.iter().filter(|passed| **passed).count(),
        result.verdicts.len(),
        result.score,
        result.status.label(),
    );

    // Resume pipelines
    if !args.skip_resume {
        println!("\nResume builder");
        let resume = ResumeService::new(
            Arc::new(InMemoryResumeRepository::default()),
            clock.clone(),
            &config,
            SeededRandom::from_seed(args.seed.wrapping_add(1)),
        );
        let owner = account.account_id.0.as_str();

        resume.edit(
            owner,
            EditOperation::AddSkill {
                name: "Rust".to_string(),
            },
        )?;

        let upload = resume.begin_upload("asha-resume.pdf")?;
        println!("  Upload {} started ({})", upload.upload_id, upload.file_name);
        loop {
            clock.advance(Duration::milliseconds(config.upload_interval_ms as i64));
            let status = resume.upload_status(&upload.upload_id)?;
            println!("    progress {:>3}% [{}]", status.percent, status.state.label());
            if status.state == TaskState::Complete {
                break;
            }
        }

        let report = resume.analyze(owner)?;
        println!(
            "  ATS analysis: score {} - keywords: {}",
            report.score,
            report.matched_keywords.join(", "),
        );
        for tip in &report.suggestions {
            println!("    tip: {tip}");
        }
    }

    // Student dashboard
    println!("\nStudent dashboard");
    let dashboards = DashboardService::new(
        Arc::new(SeededCourseStore::standard()),
        Arc::new(SeededInterviewStore::standard(clock.now())),
        Arc::new(SeededCandidateStore::standard()),
        catalog,
    );
    // A fresh process hands the first registration acct-000001, which the
    // seeded enrollments reference.
    let session = Session::authenticated(account.account());
    match dashboards.view(&session, Role::Student, clock.now(), None) {
        Ok(DashboardView::Student(dashboard)) => {
            for entry in &dashboard.enrolled {
                println!(
                    "  {} - {}% complete",
                    entry.course.title, entry.percent_complete
                );
            }
            for slot in &dashboard.upcoming_interviews {
                println!(
                    "  Interview: {} with {} ({})",
                    slot.topic,
                    slot.interviewer,
                    slot.mode.label(),
                );
            }
            for challenge in &dashboard.recommended_challenges {
                println!(
                    "  Practice next: {} ({})",
                    challenge.title,
                    challenge.difficulty.label(),
                );
            }
        }
        Ok(_) => println!("  Unexpected dashboard shape"),
        Err(error) => println!("  Dashboard unavailable: {error}"),
    }

    Ok(())
}
