use serde::{Deserialize, Serialize};

use super::engine::{ComplianceResult, InvalidInput};

/// Whether an existing structure fits inside the permitted envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalityVerdict {
    Legal,
    Illegal,
}

impl LegalityVerdict {
    pub fn label(&self) -> &'static str {
        match self {
            LegalityVerdict::Legal => "Legal building",
            LegalityVerdict::Illegal => "Illegal building",
        }
    }
}

/// Compare an observed floor count with the envelope. Reaching `max_floors`
/// exactly is still legal.
pub fn check(
    result: &ComplianceResult,
    current_floors: i64,
) -> Result<LegalityVerdict, InvalidInput> {
    if current_floors < 0 {
        return Err(InvalidInput::NegativeFloorCount(current_floors));
    }

    match i64::try_from(result.max_floors) {
        Ok(max_floors) if current_floors > max_floors => Ok(LegalityVerdict::Illegal),
        _ => Ok(LegalityVerdict::Legal),
    }
}

/// Accept a floor count from a JSON number, rejecting fractions and NaN.
pub fn floor_count_from_f64(raw: f64) -> Result<i64, InvalidInput> {
    if !raw.is_finite() || raw.fract() != 0.0 || raw.abs() > i64::MAX as f64 {
        return Err(InvalidInput::FractionalFloorCount(raw));
    }
    Ok(raw as i64)
}
