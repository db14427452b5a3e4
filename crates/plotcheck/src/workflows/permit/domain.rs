use serde::{Deserialize, Serialize};

use crate::geometry::Vertex;
use crate::zoning::{ComplianceView, LegalityVerdict};

/// Request body accepted by the submit endpoint, stored verbatim in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub plot: PlotDescriptor,
    pub road: RoadDescriptor,
}

/// Parcel as captured by the map client: a measured area, the drawn
/// boundary, or both. A supplied area takes precedence over the boundary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertices: Option<Vec<Vertex>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadDescriptor {
    pub width: f64,
}

impl SubmissionPayload {
    pub fn with_area(area: f64, road_width: f64) -> Self {
        Self {
            plot: PlotDescriptor {
                area: Some(area),
                vertices: None,
            },
            road: RoadDescriptor { width: road_width },
        }
    }

    pub fn with_vertices(vertices: Vec<Vertex>, road_width: f64) -> Self {
        Self {
            plot: PlotDescriptor {
                area: None,
                vertices: Some(vertices),
            },
            road: RoadDescriptor { width: road_width },
        }
    }
}

/// Body returned by the submit endpoint once the result is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub message: String,
    pub result: ComplianceView,
}

/// Envelope check plus the observed floor count of an existing structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalityRequest {
    #[serde(flatten)]
    pub parcel: SubmissionPayload,
    pub current_floors: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalityReport {
    pub verdict: LegalityVerdict,
    pub current_floors: i64,
    pub max_floors: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaRequest {
    pub vertices: Vec<Vertex>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaReport {
    pub area_sqm: f64,
    pub vertex_count: usize,
}
