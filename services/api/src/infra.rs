use metrics_exporter_prometheus::PrometheusHandle;
use plotcheck::config::AppConfig;
use plotcheck::error::AppError;
use plotcheck::workflows::accounts::InMemoryCredentialStore;
use plotcheck::workflows::permit::{JsonFileRecorder, PermitService};
use plotcheck::zoning::ComplianceEngine;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Collaborators the HTTP routes are built from.
pub(crate) struct Services {
    pub(crate) permits: Arc<PermitService<JsonFileRecorder>>,
    pub(crate) accounts: Arc<InMemoryCredentialStore>,
}

pub(crate) fn build_services(config: &AppConfig) -> Result<Services, AppError> {
    let code = config.zoning.load_code()?;
    let source = config
        .zoning
        .code_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "standard".to_string());
    info!(
        bands = code.bands().len(),
        coverage_ratio = code.coverage_ratio(),
        %source,
        "zoning code loaded"
    );

    let recorder = Arc::new(JsonFileRecorder::new(
        config.storage.submissions_path.clone(),
    ));
    let permits = Arc::new(PermitService::new(ComplianceEngine::new(code), recorder));
    let accounts = Arc::new(InMemoryCredentialStore::new());

    Ok(Services { permits, accounts })
}
