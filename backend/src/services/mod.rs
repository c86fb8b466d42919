//! Business logic services for the Weather Outfit Recommender

pub mod recommendation;
pub mod rules;
pub mod weather;

pub use recommendation::RecommendationService;
pub use weather::WeatherService;
