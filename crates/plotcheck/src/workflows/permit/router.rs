use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::{AreaRequest, LegalityRequest, SubmissionPayload, SubmissionReceipt};
use super::repository::SubmissionRecorder;
use super::service::{PermitService, PermitServiceError};

/// Router builder exposing the compliance and geometry endpoints.
///
/// `/submit` is the path the map client posts to; the versioned route is an
/// alias for the same handler.
pub fn permit_router<R>(service: Arc<PermitService<R>>) -> Router
where
    R: SubmissionRecorder + 'static,
{
    Router::new()
        .route("/submit", post(submit_handler::<R>))
        .route("/api/v1/compliance/evaluate", post(submit_handler::<R>))
        .route("/api/v1/compliance/legality", post(legality_handler::<R>))
        .route("/api/v1/geometry/area", post(area_handler::<R>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<PermitService<R>>>,
    axum::Json(payload): axum::Json<SubmissionPayload>,
) -> Response
where
    R: SubmissionRecorder + 'static,
{
    match service.submit(payload) {
        Ok(result) => {
            let receipt = SubmissionReceipt {
                message: "Data processed and saved!".to_string(),
                result,
            };
            (StatusCode::OK, axum::Json(receipt)).into_response()
        }
        Err(PermitServiceError::Recorder(_)) => {
            let payload = json!({
                "message": "Error saving data.",
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn legality_handler<R>(
    State(service): State<Arc<PermitService<R>>>,
    axum::Json(request): axum::Json<LegalityRequest>,
) -> Response
where
    R: SubmissionRecorder + 'static,
{
    match service.check_legality(&request.parcel, request.current_floors) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn area_handler<R>(
    State(service): State<Arc<PermitService<R>>>,
    axum::Json(request): axum::Json<AreaRequest>,
) -> Response
where
    R: SubmissionRecorder + 'static,
{
    match service.measure(&request.vertices) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: PermitServiceError) -> Response {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    let payload = json!({
        "error": err.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
