pub mod movie;
pub mod user;

pub use movie::MovieId;
pub use user::{toggle_membership, AccountView, Document, ToggleAction, UserLists, UserRecord};
