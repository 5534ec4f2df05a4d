pub mod account;
pub mod auth;
pub mod health;
pub mod lists;
pub mod profile;

use axum::{
    routing::{get, post},
    Router,
};
use serde::Serialize;

use crate::AppState;

pub use account::{account, user_lists};
pub use auth::{login, logout, register};
pub use health::health_check;
pub use lists::{add_purchase, toggle_favorite, toggle_watchlist};
pub use profile::update_profile;

/// `{"message": ...}` body shared by several endpoints
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// All endpoints, without middleware layers
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/account", get(account))
        .route("/favorites", post(toggle_favorite))
        .route("/watchlist", post(toggle_watchlist))
        .route("/purchases", post(add_purchase))
        .route("/my_userwatchlist", get(user_lists))
        .route("/update_profile", post(update_profile))
        .with_state(state)
}
