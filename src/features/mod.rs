//! Features Module - deterministic profile-to-vector pipeline
//!
//! `layout` is the single source of truth for column names and order;
//! `pipeline` computes the derived ratios and one-hot indicators.

pub mod layout;
pub mod pipeline;
pub mod vector;

pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT};
pub use vector::FeatureVector;
