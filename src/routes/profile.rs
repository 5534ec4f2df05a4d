use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::constants::MSG_PROFILE_UPDATED;
use crate::error::Result;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub user_id: Option<String>,
    pub img_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    pub message: String,
    pub img_url: String,
}

/// Replace the user's profile image reference
pub async fn update_profile(
    State(state): State<AppState>,
    payload: std::result::Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Result<Json<UpdateProfileResponse>> {
    let Json(payload) = payload?;
    let accounts = state.accounts.clone();

    let img_url = tokio::task::spawn_blocking(move || {
        accounts.update_profile(payload.user_id.as_deref(), payload.img_url.as_deref())
    })
    .await??;

    Ok(Json(UpdateProfileResponse {
        message: MSG_PROFILE_UPDATED.to_string(),
        img_url,
    }))
}
