//! Feature Vector - the single-row model input
//!
//! Values live in the natural construction order defined by `layout.rs`.
//! A vector is built fresh for every prediction request and is never
//! mutated after it has been handed to the serving client.

use super::layout::{self, FEATURE_COUNT, FEATURE_LAYOUT};

/// Error when the model expects a column the pipeline does not produce.
#[derive(Debug, Clone)]
pub struct UnknownColumn {
    pub column: String,
}

impl std::fmt::Display for UnknownColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown feature column: {}", self.column)
    }
}

impl std::error::Error for UnknownColumn {}

/// Flat numeric feature vector addressed by column name.
#[derive(Debug, Clone)]
pub struct FeatureVector {
    /// Values in the order defined by FEATURE_LAYOUT
    pub values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create a new zeroed feature vector
    pub fn new() -> Self {
        Self {
            values: [0.0; FEATURE_COUNT],
        }
    }

    /// Get value by index
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Get value by column name
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        layout::feature_index(name).and_then(|i| self.get(i))
    }

    /// Set value by index
    pub fn set(&mut self, index: usize, value: f64) {
        if index < FEATURE_COUNT {
            self.values[index] = value;
        }
    }

    /// Set value by column name; returns false if the name is not in the layout
    pub fn set_by_name(&mut self, name: &str, value: f64) -> bool {
        if let Some(index) = layout::feature_index(name) {
            self.set(index, value);
            true
        } else {
            false
        }
    }

    /// Values as a slice, in natural construction order
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Reorder (and filter) values to match the model's expected column list.
    ///
    /// A layout column missing from `columns` is dropped; an entry in
    /// `columns` with no counterpart in the layout is an error.
    pub fn aligned(&self, columns: &[String]) -> Result<Vec<f64>, UnknownColumn> {
        columns
            .iter()
            .map(|name| {
                layout::feature_index(name)
                    .map(|i| self.values[i])
                    .ok_or_else(|| UnknownColumn {
                        column: name.clone(),
                    })
            })
            .collect()
    }

    /// Named values for debug logging
    pub fn named_values(&self) -> Vec<(&'static str, f64)> {
        FEATURE_LAYOUT
            .iter()
            .zip(self.values.iter())
            .map(|(name, value)| (*name, *value))
            .collect()
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::new()
    }
}
