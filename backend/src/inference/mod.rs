//! Model inference: feature encoding, linear math, and the artifact registry

pub mod linear;
pub mod registry;
pub mod schema;

pub use linear::{InferenceError, LogisticModel, StandardScaler};
pub use registry::{ModelAsset, ModelRegistry};
pub use schema::FeatureSchema;
