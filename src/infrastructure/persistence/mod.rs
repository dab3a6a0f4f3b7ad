//! Persistence Layer - SQLite storage implementation

pub mod sqlite;
