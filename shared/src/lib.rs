//! Shared types and models for the Weather Outfit Recommender
//!
//! This crate contains the weather vocabulary, recommendation types, and
//! pure classification/validation logic shared between the backend server
//! and its tests.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
