pub mod account;

pub use account::{AccountRef, AccountService, MovieList};
