use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use super::store::{AccountError, CredentialStore, NewAccount, UserAccount};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Response body shared by the auth endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserAccount>,
}

impl AuthResponse {
    fn ok(message: &str, user: UserAccount) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            user: Some(user),
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            user: None,
        }
    }
}

/// Router builder exposing registration and login.
pub fn account_router<S>(store: Arc<S>) -> Router
where
    S: CredentialStore + 'static,
{
    Router::new()
        .route("/auth/register", post(register_handler::<S>))
        .route("/auth/login", post(login_handler::<S>))
        .with_state(store)
}

pub(crate) async fn register_handler<S>(
    State(store): State<Arc<S>>,
    axum::Json(request): axum::Json<RegisterRequest>,
) -> Response
where
    S: CredentialStore + 'static,
{
    if [&request.full_name, &request.email, &request.password]
        .iter()
        .any(|value| value.trim().is_empty())
    {
        let body = AuthResponse::failed("All fields are required");
        return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
    }

    let account = NewAccount {
        full_name: request.full_name,
        email: request.email,
        password: request.password,
    };

    match store.register(account) {
        Ok(user) => {
            let body = AuthResponse::ok("User registered successfully", user);
            (StatusCode::CREATED, axum::Json(body)).into_response()
        }
        Err(AccountError::Unavailable) => unavailable(),
        Err(err) => {
            let body = AuthResponse::failed(err.to_string());
            (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
        }
    }
}

pub(crate) async fn login_handler<S>(
    State(store): State<Arc<S>>,
    axum::Json(request): axum::Json<LoginRequest>,
) -> Response
where
    S: CredentialStore + 'static,
{
    if request.email.trim().is_empty() || request.password.is_empty() {
        let body = AuthResponse::failed("Email and password are required");
        return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
    }

    match store.authenticate(&request.email, &request.password) {
        Ok(user) => {
            let body = AuthResponse::ok("Login successful", user);
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(AccountError::Unavailable) => unavailable(),
        Err(err) => {
            let body = AuthResponse::failed(err.to_string());
            (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
        }
    }
}

fn unavailable() -> Response {
    let body = AuthResponse::failed(AccountError::Unavailable.to_string());
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
}
