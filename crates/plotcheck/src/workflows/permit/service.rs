use std::sync::Arc;

use tracing::{error, info};

use super::domain::{AreaReport, LegalityReport, SubmissionPayload};
use super::repository::{RecorderError, SubmissionRecord, SubmissionRecorder};
use crate::geometry::{self, InvalidPolygon, Vertex};
use crate::zoning::{
    self, ComplianceEngine, ComplianceInput, ComplianceResult, ComplianceView, InvalidInput,
};

/// Service composing the compliance engine with the submission history.
pub struct PermitService<R> {
    engine: Arc<ComplianceEngine>,
    recorder: Arc<R>,
}

impl<R> PermitService<R>
where
    R: SubmissionRecorder + 'static,
{
    pub fn new(engine: ComplianceEngine, recorder: Arc<R>) -> Self {
        Self {
            engine: Arc::new(engine),
            recorder,
        }
    }

    pub fn engine(&self) -> &ComplianceEngine {
        &self.engine
    }

    /// Resolve the parcel area and evaluate the envelope without recording.
    pub fn assess(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<ComplianceResult, PermitServiceError> {
        let plot_area_sqm = resolve_plot_area(payload)?;
        let input = ComplianceInput::new(plot_area_sqm, payload.road.width);
        Ok(self.engine.evaluate(&input)?)
    }

    /// Evaluate a submission and append it to the history.
    pub fn submit(
        &self,
        payload: SubmissionPayload,
    ) -> Result<ComplianceView, PermitServiceError> {
        let result = self.assess(&payload)?;
        let view = ComplianceView::from(&result);

        info!(
            plot_area_sqm = result.plot_area_sqm,
            road_width_m = payload.road.width,
            permissible_fsi = result.permissible_fsi,
            max_floors = result.max_floors,
            "permissions calculated"
        );

        self.recorder
            .append(SubmissionRecord::new(payload, view.clone()))
            .map_err(|err| {
                error!(error = %err, "failed to record submission");
                PermitServiceError::Recorder(err)
            })?;

        Ok(view)
    }

    /// Evaluate the parcel and compare the envelope with an observed floor count.
    pub fn check_legality(
        &self,
        payload: &SubmissionPayload,
        current_floors: f64,
    ) -> Result<LegalityReport, PermitServiceError> {
        let current_floors = zoning::floor_count_from_f64(current_floors)?;
        let result = self.assess(payload)?;
        let verdict = zoning::check(&result, current_floors)?;

        Ok(LegalityReport {
            verdict,
            current_floors,
            max_floors: result.max_floors,
        })
    }

    pub fn measure(&self, vertices: &[Vertex]) -> Result<AreaReport, PermitServiceError> {
        let area_sqm = geometry::area(vertices)?;
        Ok(AreaReport {
            area_sqm,
            vertex_count: vertices.len(),
        })
    }
}

/// Area given by the client wins; otherwise the drawn boundary is measured.
pub fn resolve_plot_area(payload: &SubmissionPayload) -> Result<f64, PermitServiceError> {
    match (&payload.plot.area, &payload.plot.vertices) {
        (Some(area), _) => Ok(*area),
        (None, Some(vertices)) => Ok(geometry::area(vertices)?),
        (None, None) => Err(InvalidInput::Missing { field: "plot.area" }.into()),
    }
}

/// Error raised by the permit service.
#[derive(Debug, thiserror::Error)]
pub enum PermitServiceError {
    #[error(transparent)]
    Polygon(#[from] InvalidPolygon),
    #[error(transparent)]
    Input(#[from] InvalidInput),
    #[error(transparent)]
    Recorder(#[from] RecorderError),
}

impl PermitServiceError {
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PermitServiceError::Polygon(_) | PermitServiceError::Input(_)
        )
    }
}
