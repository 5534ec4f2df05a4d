use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Health check endpoint
///
/// Reports whether the record store can be read and how many users it holds.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let store = state.accounts.store().clone();
    let users = match tokio::task::spawn_blocking(move || store.probe()).await {
        Ok(Ok(users)) => Some(users),
        Ok(Err(e)) => {
            tracing::error!("Record store health check failed: {}", e);
            None
        }
        Err(e) => {
            tracing::error!("Record store health check task failed: {:?}", e);
            None
        }
    };

    Json(json!({
        "status": if users.is_some() { "healthy" } else { "unhealthy" },
        "store": if users.is_some() { "readable" } else { "unreadable" },
        "users": users.unwrap_or(0),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
