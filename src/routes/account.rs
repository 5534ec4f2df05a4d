use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::Result;
use crate::models::{AccountView, UserLists};
use crate::AppState;

/// `?user_id=` query, optional on both read endpoints
#[derive(Debug, Default, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Option<String>,
}

/// Account data for the given user, or the Guest view
///
/// GET /account?user_id=<id>
pub async fn account(
    State(state): State<AppState>,
    query: std::result::Result<Query<UserIdQuery>, QueryRejection>,
) -> Result<Json<AccountView>> {
    let Query(query) = query?;
    let accounts = state.accounts.clone();
    let view =
        tokio::task::spawn_blocking(move || accounts.get_account(query.user_id.as_deref())).await?;

    Ok(Json(view))
}

/// Favorites, watchlist and purchases, empty for unknown users
///
/// GET /my_userwatchlist?user_id=<id>
pub async fn user_lists(
    State(state): State<AppState>,
    query: std::result::Result<Query<UserIdQuery>, QueryRejection>,
) -> Result<Json<UserLists>> {
    let Query(query) = query?;
    let accounts = state.accounts.clone();
    let lists =
        tokio::task::spawn_blocking(move || accounts.get_user_lists(query.user_id.as_deref()))
            .await?;

    Ok(Json(lists))
}
