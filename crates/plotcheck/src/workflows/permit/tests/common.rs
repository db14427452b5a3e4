use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::geometry::Vertex;
use crate::workflows::permit::repository::{RecorderError, SubmissionRecord, SubmissionRecorder};
use crate::workflows::permit::{permit_router, PermitService, SubmissionPayload};
use crate::zoning::ComplianceEngine;

#[derive(Default, Clone)]
pub(super) struct MemoryRecorder {
    records: Arc<Mutex<Vec<SubmissionRecord>>>,
}

impl SubmissionRecorder for MemoryRecorder {
    fn append(&self, record: SubmissionRecord) -> Result<(), RecorderError> {
        self.records
            .lock()
            .expect("recorder mutex poisoned")
            .push(record);
        Ok(())
    }
}

impl MemoryRecorder {
    pub(super) fn records(&self) -> Vec<SubmissionRecord> {
        self.records
            .lock()
            .expect("recorder mutex poisoned")
            .clone()
    }
}

pub(super) struct UnavailableRecorder;

impl SubmissionRecorder for UnavailableRecorder {
    fn append(&self, _record: SubmissionRecord) -> Result<(), RecorderError> {
        Err(RecorderError::Unavailable("disk full".to_string()))
    }
}

pub(super) fn build_service() -> (PermitService<MemoryRecorder>, Arc<MemoryRecorder>) {
    let recorder = Arc::new(MemoryRecorder::default());
    let service = PermitService::new(ComplianceEngine::default(), recorder.clone());
    (service, recorder)
}

pub(super) fn unavailable_service() -> PermitService<UnavailableRecorder> {
    PermitService::new(ComplianceEngine::default(), Arc::new(UnavailableRecorder))
}

pub(super) fn router_with_service(service: PermitService<MemoryRecorder>) -> axum::Router {
    permit_router(Arc::new(service))
}

/// Roughly 30 m x 30 m block near Pune, drawn clockwise as a map user would.
pub(super) fn drawn_parcel() -> Vec<Vertex> {
    vec![
        Vertex::new(18.5204, 73.8567),
        Vertex::new(18.5204, 73.857_03),
        Vertex::new(18.520_13, 73.857_03),
        Vertex::new(18.520_13, 73.8567),
    ]
}

pub(super) fn mid_width_payload() -> SubmissionPayload {
    SubmissionPayload::with_area(874.72, 9.0)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn json_request(uri: &str, body: Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&body).expect("encode body"),
        ))
        .expect("request builds")
}
