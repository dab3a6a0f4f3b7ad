//! HTTP Handlers

mod beers;
mod ping;

pub use beers::*;
pub use ping::*;
