//! Building-permit checks for urban parcels.
//!
//! [`geometry`] turns a drawn latitude/longitude boundary into a ground area,
//! [`zoning`] derives the permissible envelope from plot area and road width,
//! and [`workflows`] wires both into recorded submissions and HTTP routes.

pub mod config;
pub mod error;
pub mod geometry;
pub mod telemetry;
pub mod workflows;
pub mod zoning;
