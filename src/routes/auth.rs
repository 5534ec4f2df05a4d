use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::constants::{MSG_LOGGED_IN, MSG_LOGGED_OUT, MSG_REGISTERED};
use crate::error::Result;
use crate::routes::MessageResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub img_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body returned by both register and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub username: String,
    pub user_id: String,
}

/// Register a new user
///
/// Returns 201 with the generated user id. Missing fields, a malformed email
/// and short passwords are rejected with 400, as is an email already on file.
pub async fn register(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let Json(payload) = payload?;
    let accounts = state.accounts.clone();

    let registered = tokio::task::spawn_blocking(move || {
        accounts.register(
            payload.email.as_deref(),
            payload.username.as_deref(),
            payload.password.as_deref(),
            payload.img_url.as_deref(),
        )
    })
    .await??;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: MSG_REGISTERED.to_string(),
            username: registered.username,
            user_id: registered.user_id,
        }),
    ))
}

/// Check email and password
///
/// No session or token is issued; the client keeps the returned user id and
/// sends it with later requests.
pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>> {
    let Json(payload) = payload?;
    tracing::debug!("Login attempt for email: {:?}", payload.email);
    let accounts = state.accounts.clone();

    let account = tokio::task::spawn_blocking(move || {
        accounts.login(payload.email.as_deref(), payload.password.as_deref())
    })
    .await??;

    Ok(Json(AuthResponse {
        message: MSG_LOGGED_IN.to_string(),
        username: account.username,
        user_id: account.user_id,
    }))
}

pub async fn logout(State(state): State<AppState>) -> Json<MessageResponse> {
    state.accounts.logout();
    Json(MessageResponse::new(MSG_LOGGED_OUT))
}
