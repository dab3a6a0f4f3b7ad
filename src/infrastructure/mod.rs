//! Infrastructure Layer
//!
//! Concrete implementations of the application ports plus the HTTP surface.

pub mod http;
pub mod memory;
pub mod persistence;

pub use memory::InMemoryBeerRepository;
pub use persistence::sqlite::SqliteBeerRepository;
