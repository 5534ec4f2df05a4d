//! Movie Accounts Server Library
//!
//! User accounts for a movie catalog: registration, login, profile image and
//! the favorites/watchlist/purchases lists, persisted in one JSON document.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod security;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};
pub use services::AccountService;
pub use store::{JsonFileStore, MemoryStore, RecordStore};

use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState over the given record store and configuration
    pub fn new(store: Arc<dyn RecordStore>, config: Config) -> Self {
        Self {
            accounts: AccountService::new(store),
            config,
        }
    }
}
