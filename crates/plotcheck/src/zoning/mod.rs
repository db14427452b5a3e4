//! Building-envelope rules: the zoning code, the compliance engine that
//! applies it, and the floor-count legality check.

pub mod code;
pub mod engine;
pub mod legality;
pub mod view;

#[cfg(test)]
mod tests;

pub use code::{ZoningCode, ZoningCodeError, ZoningRuleBand};
pub use engine::{ComplianceEngine, ComplianceInput, ComplianceResult, InvalidInput};
pub use legality::{check, floor_count_from_f64, LegalityVerdict};
pub use view::ComplianceView;
