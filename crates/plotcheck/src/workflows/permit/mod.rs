//! Parcel submission flow: resolve the plot area, evaluate the envelope,
//! record the outcome, and expose it over HTTP.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    AreaReport, AreaRequest, LegalityReport, LegalityRequest, PlotDescriptor, RoadDescriptor,
    SubmissionPayload, SubmissionReceipt,
};
pub use repository::{RecorderError, SubmissionRecord, SubmissionRecorder};
pub use router::permit_router;
pub use service::{resolve_plot_area, PermitService, PermitServiceError};
pub use store::JsonFileRecorder;
