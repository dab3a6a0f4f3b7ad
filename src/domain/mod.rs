//! Domain Layer
//!
//! The single managed entity: Beer.

pub mod beer;

pub use beer::Beer;
