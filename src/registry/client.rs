//! Model Registry Client
//!
//! HTTP client for the MLflow-style registry/serving endpoint: resolves a
//! registered model by production alias, fetches the trained input schema
//! (best-effort, from the MLmodel artifact), and scores single rows.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Registry endpoint configuration
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub tracking_uri: String,
    pub timeout_seconds: u64,
}

/// Registry client errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("registry unreachable: {0}")]
    Network(String),
    #[error("registry returned status {status}: {body}")]
    Server { status: u16, body: String },
    #[error("model {name}@{alias} not found in registry")]
    ModelNotFound { name: String, alias: String },
    #[error("failed to parse registry response: {0}")]
    Parse(String),
    #[error("model signature unavailable: {0}")]
    SignatureUnavailable(String),
    #[error("model expects column '{0}' which the pipeline does not produce")]
    SchemaMismatch(String),
    #[error("serving response contained no predictions")]
    EmptyPrediction,
}

/// Resolved model version metadata
#[derive(Debug, Clone, Deserialize)]
pub struct ModelVersion {
    pub name: String,
    pub version: String,
    pub run_id: String,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AliasResponse {
    model_version: ModelVersion,
}

#[derive(Serialize)]
struct InvocationsRequest<'a> {
    dataframe_split: DataframeSplit<'a>,
}

#[derive(Serialize)]
struct DataframeSplit<'a> {
    columns: &'a [String],
    data: Vec<Vec<f64>>,
}

#[derive(Deserialize)]
struct InvocationsResponse {
    predictions: Vec<f64>,
}

#[derive(Deserialize)]
struct SignatureColumn {
    name: String,
}

/// Registry API client
#[derive(Debug, Clone)]
pub struct RegistryClient {
    config: RegistryConfig,
    http_client: reqwest::Client,
}

impl RegistryClient {
    pub fn new(config: RegistryConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    /// Resolve a registered model through its alias (e.g. `production`)
    pub async fn resolve_alias(&self, name: &str, alias: &str) -> Result<ModelVersion, RegistryError> {
        let url = format!(
            "{}/api/2.0/mlflow/registered-models/alias",
            self.config.tracking_uri
        );

        let response = self
            .http_client
            .get(&url)
            .query(&[("name", name), ("alias", alias)])
            .send()
            .await
            .map_err(|e| RegistryError::Network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::ModelNotFound {
                name: name.to_string(),
                alias: alias.to_string(),
            });
        }

        if response.status().is_success() {
            let resolved: AliasResponse = response
                .json()
                .await
                .map_err(|e| RegistryError::Parse(e.to_string()))?;
            Ok(resolved.model_version)
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(RegistryError::Server { status, body })
        }
    }

    /// Fetch the trained input column list from the model's MLmodel artifact.
    ///
    /// Best-effort: callers downgrade any error here to a warning and fall
    /// back to the natural construction order.
    pub async fn input_columns(&self, version: &ModelVersion) -> Result<Vec<String>, RegistryError> {
        let url = format!("{}/get-artifact", self.config.tracking_uri);

        let response = self
            .http_client
            .get(&url)
            .query(&[("path", "MLmodel"), ("run_uuid", version.run_id.as_str())])
            .send()
            .await
            .map_err(|e| RegistryError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            return Err(RegistryError::SignatureUnavailable(format!(
                "artifact request returned status {}",
                status
            )));
        }

        let mlmodel = response
            .text()
            .await
            .map_err(|e| RegistryError::SignatureUnavailable(e.to_string()))?;

        parse_signature_columns(&mlmodel)
    }

    /// Score a single row against the serving endpoint
    pub async fn predict(&self, columns: &[String], row: Vec<f64>) -> Result<f64, RegistryError> {
        let url = format!("{}/invocations", self.config.tracking_uri);

        let request = InvocationsRequest {
            dataframe_split: DataframeSplit {
                columns,
                data: vec![row],
            },
        };

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RegistryError::Network(e.to_string()))?;

        if response.status().is_success() {
            let scored: InvocationsResponse = response
                .json()
                .await
                .map_err(|e| RegistryError::Parse(e.to_string()))?;
            scored
                .predictions
                .first()
                .copied()
                .ok_or(RegistryError::EmptyPrediction)
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(RegistryError::Server { status, body })
        }
    }
}

/// Extract the input column names from an MLmodel artifact.
///
/// The signature block stores its input schema as a JSON-encoded string
/// inside the YAML document.
fn parse_signature_columns(mlmodel: &str) -> Result<Vec<String>, RegistryError> {
    let doc: serde_yaml::Value = serde_yaml::from_str(mlmodel)
        .map_err(|e| RegistryError::SignatureUnavailable(format!("invalid MLmodel: {}", e)))?;

    let inputs = doc
        .get("signature")
        .and_then(|s| s.get("inputs"))
        .and_then(|i| i.as_str())
        .ok_or_else(|| {
            RegistryError::SignatureUnavailable("MLmodel carries no input signature".to_string())
        })?;

    let columns: Vec<SignatureColumn> = serde_json::from_str(inputs)
        .map_err(|e| RegistryError::SignatureUnavailable(format!("invalid signature inputs: {}", e)))?;

    if columns.is_empty() {
        return Err(RegistryError::SignatureUnavailable(
            "signature lists no input columns".to_string(),
        ));
    }

    Ok(columns.into_iter().map(|c| c.name).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MLMODEL_WITH_SIGNATURE: &str = r#"
artifact_path: model
flavors:
  python_function:
    loader_module: mlflow.sklearn
signature:
  inputs: '[{"name": "monthly_salary", "type": "double"}, {"name": "debt_to_income",
    "type": "double"}, {"name": "employment_type_Private", "type": "long"}]'
  outputs: '[{"type": "tensor", "tensor-spec": {"dtype": "float64", "shape": [-1]}}]'
run_id: abc123
"#;

    #[test]
    fn test_parse_signature_columns() {
        let columns = parse_signature_columns(MLMODEL_WITH_SIGNATURE).unwrap();
        assert_eq!(
            columns,
            vec![
                "monthly_salary".to_string(),
                "debt_to_income".to_string(),
                "employment_type_Private".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_signature_missing() {
        let err = parse_signature_columns("artifact_path: model\nrun_id: abc123\n").unwrap_err();
        assert!(matches!(err, RegistryError::SignatureUnavailable(_)));
    }

    #[test]
    fn test_parse_signature_bad_inputs_json() {
        let mlmodel = "signature:\n  inputs: 'not json'\n";
        let err = parse_signature_columns(mlmodel).unwrap_err();
        assert!(matches!(err, RegistryError::SignatureUnavailable(_)));
    }

    #[test]
    fn test_parse_signature_empty_inputs() {
        let mlmodel = "signature:\n  inputs: '[]'\n";
        let err = parse_signature_columns(mlmodel).unwrap_err();
        assert!(matches!(err, RegistryError::SignatureUnavailable(_)));
    }
}
