use chrono::NaiveDate;
use estate_scope::workflows::assessment::router::SharedController;
use estate_scope::workflows::assessment::{AssessmentController, AssessmentEngine, FileSlot};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Controller restored from the slot file at `path`.
pub(crate) fn open_file_controller(path: impl Into<PathBuf>) -> SharedController<FileSlot> {
    let slot = Arc::new(FileSlot::new(path));
    Arc::new(Mutex::new(AssessmentController::open(
        slot,
        AssessmentEngine::default(),
    )))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
