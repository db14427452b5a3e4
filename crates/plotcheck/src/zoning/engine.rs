use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::code::ZoningCode;

/// Parcel facts the envelope is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplianceInput {
    pub plot_area_sqm: f64,
    pub road_width_m: f64,
}

impl ComplianceInput {
    pub fn new(plot_area_sqm: f64, road_width_m: f64) -> Self {
        Self {
            plot_area_sqm,
            road_width_m,
        }
    }

    fn validate(&self) -> Result<(), InvalidInput> {
        require_positive("plot_area_sqm", self.plot_area_sqm)?;
        require_positive("road_width_m", self.road_width_m)
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), InvalidInput> {
    if !value.is_finite() {
        return Err(InvalidInput::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(InvalidInput::NonPositive { field, value });
    }
    Ok(())
}

/// Permissible building envelope at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub permissible_fsi: f64,
    pub plot_area_sqm: f64,
    pub max_builtup_area_sqm: f64,
    pub max_building_height_m: f64,
    pub max_floors: u64,
    pub permissible_footprint_sqm: f64,
}

/// Input rejected before any envelope could be derived.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} is too large to derive a floor count (got {value})")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("current_floors must not be negative (got {0})")]
    NegativeFloorCount(i64),
    #[error("current_floors must be a whole number (got {0})")]
    FractionalFloorCount(f64),
}

/// Floor counts must stay comparable with signed observed counts.
const MAX_FLOORS: f64 = i64::MAX as f64;

/// Stateless evaluator applying one zoning code to parcel inputs.
#[derive(Debug, Clone)]
pub struct ComplianceEngine {
    code: Arc<ZoningCode>,
}

impl ComplianceEngine {
    pub fn new(code: impl Into<Arc<ZoningCode>>) -> Self {
        Self { code: code.into() }
    }

    pub fn code(&self) -> &ZoningCode {
        &self.code
    }

    pub fn evaluate(&self, input: &ComplianceInput) -> Result<ComplianceResult, InvalidInput> {
        input.validate()?;

        let ComplianceInput {
            plot_area_sqm,
            road_width_m,
        } = *input;
        let fsi = self.code.band_for(road_width_m).fsi;
        let max_building_height_m = road_width_m * self.code.height_factor();
        let floors = (max_building_height_m / self.code.floor_height_m()).floor();
        if floors >= MAX_FLOORS {
            return Err(InvalidInput::OutOfRange {
                field: "road_width_m",
                value: road_width_m,
            });
        }
        let max_floors = floors as u64;

        Ok(ComplianceResult {
            permissible_fsi: fsi,
            plot_area_sqm,
            max_builtup_area_sqm: plot_area_sqm * fsi,
            max_building_height_m,
            max_floors,
            permissible_footprint_sqm: plot_area_sqm * self.code.coverage_ratio(),
        })
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new(ZoningCode::standard())
    }
}
