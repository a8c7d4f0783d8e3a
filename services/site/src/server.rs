use crate::cli::ServeArgs;
use crate::infra::{load_redirects, AppState};
use crate::routes::build_router;
use axum_prometheus::PrometheusMetricLayer;
use lead_intake::config::AppConfig;
use lead_intake::error::AppError;
use lead_intake::intake::SchedulerLink;
use lead_intake::telemetry;
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

    telemetry::init(&config.telemetry, config.environment)?;

    let redirects = Arc::new(load_redirects(&config.redirects)?);
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        redirects: Arc::clone(&redirects),
        scheduler: SchedulerLink::new(config.intake.scheduler_url.clone()),
    };

    let app = build_router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        redirects = redirects.len(),
        intake = %config.intake.endpoint,
        "site back end ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
