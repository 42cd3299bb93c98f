//! Model registry integration

pub mod client;
pub mod model;

pub use client::{ModelVersion, RegistryClient, RegistryConfig, RegistryError};
pub use model::ModelHandle;
