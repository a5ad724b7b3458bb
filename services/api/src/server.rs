use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryNoticeBoard, InMemoryRegistrationRepository, InMemoryResumeRepository,
};
use crate::routes::api_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use careerlab::config::AppConfig;
use careerlab::directory::{
    DashboardService, SeededCandidateStore, SeededCourseStore, SeededInterviewStore,
};
use careerlab::error::AppError;
use careerlab::runtime::{Clock, SeededRandom, SystemClock};
use careerlab::telemetry;
use careerlab::workflows::coding::{ChallengeCatalog, CodingLabService, SubmissionEvaluator};
use careerlab::workflows::registration::RegistrationService;
use careerlab::workflows::resume::ResumeService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let clock = Arc::new(SystemClock);
    let catalog = Arc::new(ChallengeCatalog::standard());

    let registration_service = Arc::new(RegistrationService::new(
        Arc::new(InMemoryRegistrationRepository::default()),
        Arc::new(InMemoryNoticeBoard::default()),
        clock.clone() as Arc<dyn Clock>,
    ));

    let coding_service = Arc::new(CodingLabService::new(
        catalog.clone(),
        SubmissionEvaluator::new(&config.simulation),
        SeededRandom::from_entropy(),
    ));

    let resume_service = Arc::new(ResumeService::new(
        Arc::new(InMemoryResumeRepository::default()),
        clock.clone(),
        &config.simulation,
        SeededRandom::from_entropy(),
    ));

    let dashboard_service = Arc::new(DashboardService::new(
        Arc::new(SeededCourseStore::standard()),
        Arc::new(SeededInterviewStore::standard(clock.now())),
        Arc::new(SeededCandidateStore::standard()),
        catalog,
    ));

    let app = api_router(
        registration_service,
        coding_service,
        resume_service,
        dashboard_service,
    )
    .layer(Extension(app_state))
    .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "careerlab platform ready");

    axum::serve(listener, app).await?;
    Ok(())
}
