use crate::zoning::{
    ComplianceEngine, ComplianceInput, ComplianceResult, ZoningCode, ZoningRuleBand,
};

pub(super) const TOLERANCE: f64 = 1e-9;

pub(super) fn standard_engine() -> ComplianceEngine {
    ComplianceEngine::new(ZoningCode::standard())
}

/// A narrower-road edition used to prove the engine reads whatever code it is given.
pub(super) fn strict_code() -> ZoningCode {
    ZoningCode::new(
        vec![
            ZoningRuleBand::bounded(6.0, 0.8),
            ZoningRuleBand::bounded(15.0, 1.0),
            ZoningRuleBand::unbounded(1.25),
        ],
        0.5,
        3.5,
        1.0,
    )
    .expect("strict code is valid")
}

pub(super) fn evaluate(plot_area_sqm: f64, road_width_m: f64) -> ComplianceResult {
    standard_engine()
        .evaluate(&ComplianceInput::new(plot_area_sqm, road_width_m))
        .expect("input is valid")
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}
