use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::constants::MSG_PURCHASED;
use crate::error::Result;
use crate::models::MovieId;
use crate::routes::MessageResponse;
use crate::services::MovieList;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct MovieRequest {
    pub movie_id: Option<MovieId>,
    pub user_id: Option<String>,
}

async fn toggle_list(
    state: AppState,
    list: MovieList,
    payload: MovieRequest,
) -> Result<Json<MessageResponse>> {
    let accounts = state.accounts.clone();

    let action = tokio::task::spawn_blocking(move || {
        accounts.toggle(
            list,
            payload.user_id.as_deref(),
            payload.movie_id.as_ref(),
        )
    })
    .await??;

    Ok(Json(MessageResponse::new(action.message(list.name()))))
}

/// POST /favorites
pub async fn toggle_favorite(
    State(state): State<AppState>,
    payload: std::result::Result<Json<MovieRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(payload) = payload?;
    toggle_list(state, MovieList::Favorites, payload).await
}

/// POST /watchlist
pub async fn toggle_watchlist(
    State(state): State<AppState>,
    payload: std::result::Result<Json<MovieRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(payload) = payload?;
    toggle_list(state, MovieList::Watchlist, payload).await
}

/// Record a purchase
///
/// POST /purchases. Buying a movie twice is rejected with 400.
pub async fn add_purchase(
    State(state): State<AppState>,
    payload: std::result::Result<Json<MovieRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(payload) = payload?;
    let accounts = state.accounts.clone();

    tokio::task::spawn_blocking(move || {
        accounts.add_purchase(payload.user_id.as_deref(), payload.movie_id.as_ref())
    })
    .await??;

    Ok(Json(MessageResponse::new(MSG_PURCHASED)))
}
