//! Domain models for the Weather Outfit Recommender

mod recommendation;
mod weather;

pub use recommendation::*;
pub use weather::*;
