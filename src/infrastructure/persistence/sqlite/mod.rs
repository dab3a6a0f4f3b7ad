//! SQLite Persistence

mod beer_repo;
mod database;

pub use beer_repo::*;
pub use database::*;
