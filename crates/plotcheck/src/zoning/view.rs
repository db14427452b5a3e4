use serde::{Deserialize, Serialize};

use super::engine::ComplianceResult;

/// Presentation form of a [`ComplianceResult`]: areas and height as strings
/// with two decimals, FSI at native precision, floors as an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceView {
    pub permissible_fsi: f64,
    pub plot_area_sqm: String,
    pub max_builtup_area_sqm: String,
    pub max_building_height_m: String,
    pub max_floors: u64,
    pub permissible_footprint_sqm: String,
}

impl From<&ComplianceResult> for ComplianceView {
    fn from(result: &ComplianceResult) -> Self {
        Self {
            permissible_fsi: result.permissible_fsi,
            plot_area_sqm: two_decimals(result.plot_area_sqm),
            max_builtup_area_sqm: two_decimals(result.max_builtup_area_sqm),
            max_building_height_m: two_decimals(result.max_building_height_m),
            max_floors: result.max_floors,
            permissible_footprint_sqm: two_decimals(result.permissible_footprint_sqm),
        }
    }
}

impl From<ComplianceResult> for ComplianceView {
    fn from(result: ComplianceResult) -> Self {
        Self::from(&result)
    }
}

/// Fractions whose exact binary value sits halfway between two cents, with
/// the cent digits they round up to.
const HALF_CENT_TIES: [(f64, &str); 4] = [
    (0.125, "13"),
    (0.375, "38"),
    (0.625, "63"),
    (0.875, "88"),
];

/// Fixed two-decimal rendering. Exact half-cent ties round away from zero,
/// matching what browser clients print with `toFixed(2)`; `{:.2}` alone
/// would round them to even.
fn two_decimals(value: f64) -> String {
    let magnitude = value.abs();
    let fraction = magnitude.fract();
    match HALF_CENT_TIES.iter().find(|(tie, _)| *tie == fraction) {
        Some((_, cents)) => {
            let sign = if value.is_sign_negative() { "-" } else { "" };
            format!("{sign}{:.0}.{cents}", magnitude.trunc())
        }
        None => format!("{value:.2}"),
    }
}
