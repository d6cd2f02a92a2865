use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::controller::{AssessmentController, MutationOutcome};
use super::envelope::{AssessmentEnvelope, FieldChange};
use super::persistence::PersistenceSlot;
use super::AssessmentOutcome;

/// Controller shared between request handlers.
pub type SharedController<S> = Arc<Mutex<AssessmentController<S>>>;

/// Router builder exposing the assessment controller over HTTP.
pub fn assessment_router<S>(controller: SharedController<S>) -> Router
where
    S: PersistenceSlot + 'static,
{
    Router::new()
        .route(
            "/api/v1/scope/assessment",
            get(snapshot_handler::<S>).patch(update_handler::<S>),
        )
        .route("/api/v1/scope/assessment/lock", post(lock_handler::<S>))
        .route("/api/v1/scope/assessment/unlock", post(unlock_handler::<S>))
        .route("/api/v1/scope/assessment/save", post(save_handler::<S>))
        .route("/api/v1/scope/assessment/reset", post(reset_handler::<S>))
        .route("/api/v1/scope/evaluate", post(evaluate_handler::<S>))
        .with_state(controller)
}

/// Envelope plus everything derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSnapshot {
    pub envelope: AssessmentEnvelope,
    pub outcome: AssessmentOutcome,
    pub unsaved_changes: bool,
}

impl AssessmentSnapshot {
    fn capture<S>(controller: &AssessmentController<S>) -> Self
    where
        S: PersistenceSlot + 'static,
    {
        Self {
            envelope: controller.envelope().clone(),
            outcome: controller.evaluate(),
            unsaved_changes: controller.has_unsaved_changes(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequest {
    pub changes: Vec<FieldChange>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateResponse {
    pub results: Vec<MutationOutcome>,
    #[serde(flatten)]
    pub snapshot: AssessmentSnapshot,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetResponse {
    pub reset: bool,
    #[serde(flatten)]
    pub snapshot: AssessmentSnapshot,
}

fn with_controller<S, T>(
    controller: &SharedController<S>,
    action: impl FnOnce(&mut AssessmentController<S>) -> T,
) -> Result<T, Response>
where
    S: PersistenceSlot + 'static,
{
    match controller.lock() {
        Ok(mut guard) => Ok(action(&mut guard)),
        Err(_) => {
            let payload = json!({ "error": "assessment controller unavailable" });
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response())
        }
    }
}

fn respond<T: Serialize>(result: Result<T, Response>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(response) => response,
    }
}

pub(crate) async fn snapshot_handler<S>(State(controller): State<SharedController<S>>) -> Response
where
    S: PersistenceSlot + 'static,
{
    respond(with_controller(&controller, |controller| {
        AssessmentSnapshot::capture(controller)
    }))
}

pub(crate) async fn update_handler<S>(
    State(controller): State<SharedController<S>>,
    Json(request): Json<UpdateRequest>,
) -> Response
where
    S: PersistenceSlot + 'static,
{
    respond(with_controller(&controller, |controller| {
        let results = controller.apply_all(request.changes);
        UpdateResponse {
            results,
            snapshot: AssessmentSnapshot::capture(controller),
        }
    }))
}

pub(crate) async fn lock_handler<S>(State(controller): State<SharedController<S>>) -> Response
where
    S: PersistenceSlot + 'static,
{
    respond(with_controller(&controller, |controller| {
        controller.lock();
        AssessmentSnapshot::capture(controller)
    }))
}

pub(crate) async fn unlock_handler<S>(State(controller): State<SharedController<S>>) -> Response
where
    S: PersistenceSlot + 'static,
{
    respond(with_controller(&controller, |controller| {
        controller.unlock();
        AssessmentSnapshot::capture(controller)
    }))
}

pub(crate) async fn save_handler<S>(State(controller): State<SharedController<S>>) -> Response
where
    S: PersistenceSlot + 'static,
{
    respond(with_controller(&controller, |controller| {
        controller.save();
        AssessmentSnapshot::capture(controller)
    }))
}

pub(crate) async fn reset_handler<S>(
    State(controller): State<SharedController<S>>,
    Json(request): Json<ResetRequest>,
) -> Response
where
    S: PersistenceSlot + 'static,
{
    respond(with_controller(&controller, |controller| {
        let reset = controller.reset(request.confirm);
        ResetResponse {
            reset,
            snapshot: AssessmentSnapshot::capture(controller),
        }
    }))
}

/// Evaluate a posted envelope without touching the session state.
pub(crate) async fn evaluate_handler<S>(
    State(controller): State<SharedController<S>>,
    Json(envelope): Json<AssessmentEnvelope>,
) -> Response
where
    S: PersistenceSlot + 'static,
{
    respond(with_controller(&controller, |controller| {
        controller.engine().evaluate(&envelope)
    }))
}
