//! Memory Layer - in-memory repository implementation
//!
//! The swappable fixture variant of the repository port, used by tests and
//! useful for running the service without a database file.

mod beer_repo;

pub use beer_repo::InMemoryBeerRepository;
