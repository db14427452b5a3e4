use crate::config::ConfigError;
use crate::geometry::InvalidPolygon;
use crate::telemetry::TelemetryError;
use crate::workflows::permit::PermitServiceError;
use crate::zoning::{InvalidInput, ZoningCodeError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    ZoningCode(ZoningCodeError),
    Polygon(InvalidPolygon),
    Input(InvalidInput),
    Permit(PermitServiceError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Polygon(_) | AppError::Input(_) => StatusCode::BAD_REQUEST,
            AppError::Permit(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::ZoningCode(_)
            | AppError::Permit(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::ZoningCode(err) => write!(f, "zoning code error: {}", err),
            AppError::Polygon(err) => write!(f, "{}", err),
            AppError::Input(err) => write!(f, "invalid input: {}", err),
            AppError::Permit(err) => write!(f, "permit check failed: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::ZoningCode(err) => Some(err),
            AppError::Polygon(err) => Some(err),
            AppError::Input(err) => Some(err),
            AppError::Permit(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<ZoningCodeError> for AppError {
    fn from(value: ZoningCodeError) -> Self {
        Self::ZoningCode(value)
    }
}

impl From<InvalidPolygon> for AppError {
    fn from(value: InvalidPolygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<InvalidInput> for AppError {
    fn from(value: InvalidInput) -> Self {
        Self::Input(value)
    }
}

impl From<PermitServiceError> for AppError {
    fn from(value: PermitServiceError) -> Self {
        Self::Permit(value)
    }
}
