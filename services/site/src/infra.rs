use lead_intake::config::RedirectConfig;
use lead_intake::error::AppError;
use lead_intake::intake::SchedulerLink;
use lead_intake::redirects::RedirectTable;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub readiness: Arc<AtomicBool>,
    pub metrics: Arc<PrometheusHandle>,
    pub redirects: Arc<RedirectTable>,
    pub scheduler: SchedulerLink,
}

/// Built-in legacy table plus any rows from `REDIRECTS_CSV`.
pub(crate) fn load_redirects(config: &RedirectConfig) -> Result<RedirectTable, AppError> {
    let table = RedirectTable::standard();
    let table = match &config.csv_path {
        Some(path) => {
            let table = table.with_csv_path(path)?;
            info!(path = %path.display(), entries = table.len(), "loaded redirect csv");
            table
        }
        None => table,
    };
    Ok(table)
}
