use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{GUEST_USERNAME, MIN_PASSWORD_LEN};

use super::movie::{null_as_default, MovieId};

/// User record as persisted in the JSON document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Random identifier, also the key of the record in the document
    pub id: String,
    /// Login key, unique across the document
    pub email: String,
    /// Display name
    pub username: String,
    /// Profile image reference; `null` in older files reads as empty
    #[serde(default, deserialize_with = "null_as_default")]
    pub img_url: String,
    /// Argon2 PHC string, never returned to clients
    pub password: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub favorites: Vec<MovieId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub watchlist: Vec<MovieId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub purchases: Vec<MovieId>,
}

impl UserRecord {
    pub fn new(id: String, email: String, username: String, img_url: String, password: String) -> Self {
        Self {
            id,
            email,
            username,
            img_url,
            password,
            favorites: Vec::new(),
            watchlist: Vec::new(),
            purchases: Vec::new(),
        }
    }

    /// Check the superficial email shape accepted at registration
    pub fn validate_email(email: &str) -> bool {
        email.contains('@') && email.contains('.')
    }

    /// Check the minimum password length
    pub fn validate_password(password: &str) -> bool {
        password.chars().count() >= MIN_PASSWORD_LEN
    }

    pub fn lists(&self) -> UserLists {
        UserLists {
            favorites: self.favorites.clone(),
            watchlist: self.watchlist.clone(),
            purchases: self.purchases.clone(),
        }
    }
}

/// The whole persisted document: `{ "users": { "<id>": {...} } }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub users: BTreeMap<String, UserRecord>,
}

impl Document {
    /// Linear scan for a record by email
    pub fn find_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.users.values().find(|user| user.email == email)
    }
}

/// Which way a toggle went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Added,
    Removed,
}

impl ToggleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleAction::Added => "added",
            ToggleAction::Removed => "removed",
        }
    }

    /// Response message for a toggle on the named list, e.g. `Movie removed to favorites`
    pub fn message(&self, list: &str) -> String {
        format!("Movie {} to {}", self.as_str(), list)
    }
}

/// Remove `movie_id` if present, otherwise append it
pub fn toggle_membership(list: &mut Vec<MovieId>, movie_id: &MovieId) -> ToggleAction {
    match list.iter().position(|m| m == movie_id) {
        Some(index) => {
            list.remove(index);
            ToggleAction::Removed
        }
        None => {
            list.push(movie_id.clone());
            ToggleAction::Added
        }
    }
}

/// The three list collections of a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLists {
    pub favorites: Vec<MovieId>,
    pub watchlist: Vec<MovieId>,
    pub purchases: Vec<MovieId>,
}

/// Account view returned by `GET /account`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountView {
    pub username: String,
    pub img_url: String,
    #[serde(rename = "isLoggedIn")]
    pub is_logged_in: bool,
    #[serde(flatten)]
    pub lists: UserLists,
}

impl AccountView {
    /// Anonymous view for missing or unknown user ids
    pub fn guest() -> Self {
        Self {
            username: GUEST_USERNAME.to_string(),
            img_url: String::new(),
            is_logged_in: false,
            lists: UserLists::default(),
        }
    }
}

impl From<&UserRecord> for AccountView {
    fn from(user: &UserRecord) -> Self {
        Self {
            username: user.username.clone(),
            img_url: user.img_url.clone(),
            is_logged_in: true,
            lists: user.lists(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> UserRecord {
        UserRecord::new(
            "id-1".to_string(),
            "a@b.com".to_string(),
            "al".to_string(),
            String::new(),
            "$argon2id$placeholder".to_string(),
        )
    }

    #[test]
    fn test_validate_email() {
        assert!(UserRecord::validate_email("a@b.com"));
        assert!(!UserRecord::validate_email("ab.com"));
        assert!(!UserRecord::validate_email("a@bcom"));
        assert!(!UserRecord::validate_email(""));
    }

    #[test]
    fn test_validate_password() {
        assert!(UserRecord::validate_password("secret"));
        assert!(UserRecord::validate_password("secret1"));
        assert!(!UserRecord::validate_password("short"));
    }

    #[test]
    fn test_toggle_membership_pair_restores_list() {
        let mut list = vec![MovieId::from("m0")];
        let m1 = MovieId::from("m1");

        assert_eq!(toggle_membership(&mut list, &m1), ToggleAction::Added);
        assert_eq!(list, vec!["m0", "m1"]);

        assert_eq!(toggle_membership(&mut list, &m1), ToggleAction::Removed);
        assert_eq!(list, vec!["m0"]);
    }

    #[test]
    fn test_toggle_numeric_id_is_distinct_from_string() {
        let mut list = vec![MovieId::from(550_i64)];

        assert_eq!(
            toggle_membership(&mut list, &MovieId::from("550")),
            ToggleAction::Added
        );
        assert_eq!(
            toggle_membership(&mut list, &MovieId::from(550_i64)),
            ToggleAction::Removed
        );
        assert_eq!(list, vec!["550"]);
    }

    #[test]
    fn test_toggle_removes_from_middle_keeping_order() {
        let mut list: Vec<MovieId> = ["a", "b", "c"].into_iter().map(MovieId::from).collect();
        toggle_membership(&mut list, &MovieId::from("b"));
        assert_eq!(list, vec!["a", "c"]);
    }

    #[test]
    fn test_toggle_messages() {
        assert_eq!(ToggleAction::Added.message("favorites"), "Movie added to favorites");
        assert_eq!(
            ToggleAction::Removed.message("watchlist"),
            "Movie removed to watchlist"
        );
    }

    #[test]
    fn test_document_deserializes_original_layout() {
        let raw = r#"{
            "users": {
                "id-1": {
                    "id": "id-1",
                    "email": "a@b.com",
                    "username": "al",
                    "img_url": "",
                    "password": "hash",
                    "favorites": ["m1"],
                    "watchlist": [],
                    "purchases": ["m2"]
                }
            }
        }"#;

        let doc: Document = serde_json::from_str(raw).unwrap();
        let user = &doc.users["id-1"];
        assert_eq!(user.favorites, vec!["m1"]);
        assert_eq!(user.purchases, vec!["m2"]);
        assert_eq!(doc.find_by_email("a@b.com").unwrap().id, "id-1");
        assert!(doc.find_by_email("x@y.com").is_none());
    }

    #[test]
    fn test_document_accepts_numeric_ids_and_nulls() {
        let raw = r#"{
            "users": {
                "u1": {
                    "id": "u1",
                    "email": "old@b.com",
                    "username": "old",
                    "img_url": null,
                    "password": "hash",
                    "favorites": [550, "m1"],
                    "watchlist": null,
                    "purchases": [27205]
                }
            }
        }"#;

        let doc: Document = serde_json::from_str(raw).unwrap();
        let user = &doc.users["u1"];
        assert_eq!(user.img_url, "");
        assert_eq!(user.favorites, vec![MovieId::from(550_i64), MovieId::from("m1")]);
        assert!(user.watchlist.is_empty());
        assert_eq!(user.purchases, vec![MovieId::from(27205_i64)]);

        let saved = serde_json::to_value(&doc).unwrap();
        assert_eq!(saved["users"]["u1"]["favorites"], serde_json::json!([550, "m1"]));
    }

    #[test]
    fn test_document_missing_users_key_is_empty() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert!(doc.users.is_empty());
    }

    #[test]
    fn test_record_missing_lists_default_to_empty() {
        let raw = r#"{"id":"x","email":"a@b.com","username":"al","password":"h"}"#;
        let user: UserRecord = serde_json::from_str(raw).unwrap();
        assert!(user.favorites.is_empty());
        assert!(user.img_url.is_empty());
    }

    #[test]
    fn test_account_view_shape() {
        let mut user = sample_user();
        user.favorites.push(MovieId::from("m1"));

        let value = serde_json::to_value(AccountView::from(&user)).unwrap();
        assert_eq!(value["username"], "al");
        assert_eq!(value["isLoggedIn"], true);
        assert_eq!(value["favorites"][0], "m1");
        assert!(value.get("password").is_none());

        let guest = serde_json::to_value(AccountView::guest()).unwrap();
        assert_eq!(guest["username"], "Guest");
        assert_eq!(guest["isLoggedIn"], false);
        assert_eq!(guest["purchases"].as_array().unwrap().len(), 0);
    }
}
