use std::sync::Arc;

use crate::constants::*;
use crate::error::{AppError, Result};
use crate::models::{toggle_membership, AccountView, MovieId, ToggleAction, UserLists, UserRecord};
use crate::security::{generate_user_id, hash_password, verify_password};
use crate::store::RecordStore;

/// Identifier and display name handed back after register/login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRef {
    pub user_id: String,
    pub username: String,
}

/// The two toggle-able movie lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieList {
    Favorites,
    Watchlist,
}

impl MovieList {
    pub fn name(&self) -> &'static str {
        match self {
            MovieList::Favorites => "favorites",
            MovieList::Watchlist => "watchlist",
        }
    }

    fn of(self, user: &mut UserRecord) -> &mut Vec<MovieId> {
        match self {
            MovieList::Favorites => &mut user.favorites,
            MovieList::Watchlist => &mut user.watchlist,
        }
    }
}

/// Treat empty strings the same as absent fields
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Account operations over a record store
///
/// Each call is one load → mutate → save cycle on the whole document.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn RecordStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    /// Register a new user
    ///
    /// Checks run in this order: missing fields, duplicate email, email
    /// shape, password length. A taken email therefore always reports a
    /// conflict whatever the password looks like.
    pub fn register(
        &self,
        email: Option<&str>,
        username: Option<&str>,
        password: Option<&str>,
        img_url: Option<&str>,
    ) -> Result<AccountRef> {
        let (email, username, password) =
            match (present(email), present(username), present(password)) {
                (Some(e), Some(u), Some(p)) => (e, u, p),
                _ => {
                    tracing::warn!("Registration rejected: missing required fields");
                    return Err(AppError::Validation(ERR_MISSING_FIELDS.to_string()));
                }
            };

        let mut document = self.store.load();

        if document.find_by_email(email).is_some() {
            tracing::info!("Registration rejected: email '{}' already registered", email);
            return Err(AppError::Conflict(ERR_EMAIL_TAKEN.to_string()));
        }

        if !UserRecord::validate_email(email) {
            return Err(AppError::Validation(ERR_INVALID_EMAIL.to_string()));
        }

        if !UserRecord::validate_password(password) {
            return Err(AppError::Validation(ERR_PASSWORD_TOO_SHORT.to_string()));
        }

        let user_id = generate_user_id();
        let record = UserRecord::new(
            user_id.clone(),
            email.to_string(),
            username.to_string(),
            img_url.unwrap_or_default().to_string(),
            hash_password(password)?,
        );
        document.users.insert(user_id.clone(), record);
        self.store.save(&document);

        tracing::info!(
            "User '{}' with email '{}' registered successfully (ID: {})",
            username,
            email,
            user_id
        );

        Ok(AccountRef {
            user_id,
            username: username.to_string(),
        })
    }

    /// Check credentials; unknown email and wrong password fail identically
    pub fn login(&self, email: Option<&str>, password: Option<&str>) -> Result<AccountRef> {
        let (email, password) = match (present(email), present(password)) {
            (Some(e), Some(p)) => (e, p),
            _ => return Err(AppError::Validation(ERR_MISSING_FIELDS.to_string())),
        };

        let document = self.store.load();
        let user = document
            .find_by_email(email)
            .filter(|user| verify_password(password, &user.password))
            .ok_or_else(|| {
                tracing::warn!("Login failed for email '{}': invalid email or password", email);
                AppError::Auth
            })?;

        tracing::info!("User '{}' (ID: {}) logged in successfully", user.username, user.id);

        Ok(AccountRef {
            user_id: user.id.clone(),
            username: user.username.clone(),
        })
    }

    /// Nothing to clear: the backend keeps no sessions
    pub fn logout(&self) {
        tracing::info!("Logout requested. No session to clear in stateless backend.");
    }

    /// Account view, or the guest view for a missing or unknown id
    pub fn get_account(&self, user_id: Option<&str>) -> AccountView {
        let Some(user_id) = present(user_id) else {
            tracing::info!("Account data requested without user_id. Returning Guest data.");
            return AccountView::guest();
        };

        let document = self.store.load();
        match document.users.get(user_id) {
            Some(user) => {
                tracing::info!("Account data requested for user '{}' (ID: {})", user.username, user_id);
                AccountView::from(user)
            }
            None => {
                tracing::warn!("Account request for user ID {} not found", user_id);
                AccountView::guest()
            }
        }
    }

    /// The three lists, or empty lists for a missing or unknown id
    pub fn get_user_lists(&self, user_id: Option<&str>) -> UserLists {
        let Some(user_id) = present(user_id) else {
            tracing::info!("User lists requested without user_id. Returning empty lists.");
            return UserLists::default();
        };

        let document = self.store.load();
        match document.users.get(user_id) {
            Some(user) => {
                tracing::info!("User lists requested for user '{}' (ID: {})", user.username, user_id);
                user.lists()
            }
            None => {
                tracing::warn!("User lists request for user ID {} not found", user_id);
                UserLists::default()
            }
        }
    }

    pub fn toggle_favorite(
        &self,
        user_id: Option<&str>,
        movie_id: Option<&MovieId>,
    ) -> Result<ToggleAction> {
        self.toggle(MovieList::Favorites, user_id, movie_id)
    }

    pub fn toggle_watchlist(
        &self,
        user_id: Option<&str>,
        movie_id: Option<&MovieId>,
    ) -> Result<ToggleAction> {
        self.toggle(MovieList::Watchlist, user_id, movie_id)
    }

    /// Flip membership of `movie_id` in one of the toggle-able lists
    pub fn toggle(
        &self,
        list: MovieList,
        user_id: Option<&str>,
        movie_id: Option<&MovieId>,
    ) -> Result<ToggleAction> {
        let (user_id, movie_id) = require_ids(list.name(), user_id, movie_id)?;

        let mut document = self.store.load();
        let user = document.users.get_mut(user_id).ok_or_else(|| {
            tracing::error!("User ID {} not found during {} toggle", user_id, list.name());
            AppError::NotFound
        })?;

        let action = toggle_membership(list.of(user), movie_id);
        let username = user.username.clone();
        self.store.save(&document);

        tracing::info!(
            "Movie {} {} in {} for user '{}' (ID: {})",
            movie_id,
            action.as_str(),
            list.name(),
            username,
            user_id
        );

        Ok(action)
    }

    /// Append a purchase; buying the same movie twice is a conflict
    pub fn add_purchase(&self, user_id: Option<&str>, movie_id: Option<&MovieId>) -> Result<()> {
        let (user_id, movie_id) = require_ids("purchases", user_id, movie_id)?;

        let mut document = self.store.load();
        let user = document.users.get_mut(user_id).ok_or_else(|| {
            tracing::error!("User ID {} not found during purchase add", user_id);
            AppError::NotFound
        })?;

        if user.purchases.iter().any(|m| m == movie_id) {
            tracing::info!(
                "User '{}' (ID: {}) attempted to repurchase movie {}",
                user.username,
                user_id,
                movie_id
            );
            return Err(AppError::Conflict(ERR_ALREADY_PURCHASED.to_string()));
        }

        user.purchases.push(movie_id.clone());
        let username = user.username.clone();
        self.store.save(&document);

        tracing::info!(
            "Movie {} purchased successfully by user '{}' (ID: {})",
            movie_id,
            username,
            user_id
        );

        Ok(())
    }

    /// Overwrite the profile image, returning the stored value
    pub fn update_profile(&self, user_id: Option<&str>, img_url: Option<&str>) -> Result<String> {
        let Some(user_id) = present(user_id) else {
            tracing::warn!("Missing user_id in update profile request");
            return Err(AppError::Validation(ERR_MISSING_USER_ID.to_string()));
        };
        let Some(img_url) = present(img_url) else {
            tracing::warn!("Missing img_url in update profile request");
            return Err(AppError::Validation(ERR_MISSING_IMG_URL.to_string()));
        };

        let mut document = self.store.load();
        let user = document.users.get_mut(user_id).ok_or_else(|| {
            tracing::error!("User ID {} not found during profile update", user_id);
            AppError::NotFound
        })?;

        user.img_url = img_url.to_string();
        let username = user.username.clone();
        self.store.save(&document);

        tracing::info!("Profile image updated for user '{}' (ID: {})", username, user_id);

        Ok(img_url.to_string())
    }
}

/// Both ids must be present; movie_id is checked first
fn require_ids<'a>(
    target: &str,
    user_id: Option<&'a str>,
    movie_id: Option<&'a MovieId>,
) -> Result<(&'a str, &'a MovieId)> {
    let Some(movie_id) = movie_id.filter(|m| m.is_present()) else {
        tracing::warn!("Missing movie_id in {} request", target);
        return Err(AppError::Validation(ERR_MISSING_MOVIE_ID.to_string()));
    };
    let Some(user_id) = present(user_id) else {
        tracing::warn!("Missing user_id in {} request", target);
        return Err(AppError::Validation(ERR_MISSING_USER_ID.to_string()));
    };
    Ok((user_id, movie_id))
}
