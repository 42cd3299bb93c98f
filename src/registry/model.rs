//! Model Handle - the session-scoped serving collaborator
//!
//! Resolved once at startup and reused for every prediction. Holds the
//! registry client, the resolved version, and the best-effort expected
//! column list used to align outgoing feature vectors.

use chrono::{DateTime, Utc};

use crate::features::{layout, FeatureVector};
use super::client::{ModelVersion, RegistryClient, RegistryError};

pub struct ModelHandle {
    client: RegistryClient,
    alias: String,
    version: ModelVersion,
    expected_columns: Option<Vec<String>>,
    loaded_at: DateTime<Utc>,
}

impl ModelHandle {
    /// Resolve the model and its input schema from the registry.
    ///
    /// A failed resolution is fatal for the session; a failed schema fetch
    /// only downgrades to the natural-order fallback.
    pub async fn load(
        client: RegistryClient,
        name: &str,
        alias: &str,
    ) -> Result<Self, RegistryError> {
        let version = client.resolve_alias(name, alias).await?;
        tracing::info!(
            "Resolved model {}@{} to version {} (run {})",
            version.name,
            alias,
            version.version,
            version.run_id
        );

        let expected_columns = match client.input_columns(&version).await {
            Ok(columns) => {
                tracing::info!("Model schema fetched: {} input columns", columns.len());
                Some(columns)
            }
            Err(e) => {
                tracing::warn!(
                    "Could not fetch model schema ({}); sending columns in natural order",
                    e
                );
                None
            }
        };

        Ok(Self {
            client,
            alias: alias.to_string(),
            version,
            expected_columns,
            loaded_at: Utc::now(),
        })
    }

    pub fn name(&self) -> &str {
        &self.version.name
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn version(&self) -> &str {
        &self.version.version
    }

    pub fn has_schema(&self) -> bool {
        self.expected_columns.is_some()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Columns and row to send: aligned to the trained schema when known,
    /// natural construction order otherwise.
    fn invocation_frame(
        &self,
        features: &FeatureVector,
    ) -> Result<(Vec<String>, Vec<f64>), RegistryError> {
        match &self.expected_columns {
            Some(expected) => {
                let row = features
                    .aligned(expected)
                    .map_err(|e| RegistryError::SchemaMismatch(e.column))?;
                Ok((expected.clone(), row))
            }
            None => Ok((
                layout::FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
                features.as_slice().to_vec(),
            )),
        }
    }

    /// Score one feature vector. Failures are per-request; the handle stays
    /// usable for subsequent attempts.
    pub async fn predict(&self, features: &FeatureVector) -> Result<f64, RegistryError> {
        let (columns, row) = self.invocation_frame(features)?;
        self.client.predict(&columns, row).await
    }
}
