// SPDX-License-Identifier: MPL-2.0

//! Classification query client
//!
//! One query, issued lazily: the captured still's data URI goes up as the
//! sole variable, a [`Cluster`] comes back. The HTTP transport is reqwest;
//! the seam is the [`ClusterResolver`] trait so tests and embedders can
//! substitute their own resolver.

use super::types::Cluster;
use crate::errors::ClassifyError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// The classification query document
pub const GET_CLUSTER: &str = "\
query Cluster($imageData: String!) {
  getCluster(imageData: $imageData) {
    message
    cluster_name
    cluster
    materials {
      material_id
      description
      long_description
      bin_trash
      bin_recycle
      bin_compost
      dropoff
      pickup
      notes
      image_url
    }
  }
}";

/// Resolver for the classification query
#[async_trait]
pub trait ClusterResolver: Send + Sync {
    /// Classify one still image, passed as its data-URI encoding
    async fn get_cluster(&self, image_data: String) -> Result<Cluster, ClassifyError>;
}

/// GraphQL-over-HTTP resolver
pub struct GraphqlClusterClient {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<EnvelopeData>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeData {
    #[serde(rename = "getCluster")]
    get_cluster: Cluster,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

impl GraphqlClusterClient {
    /// Create a client for the given endpoint
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }

    /// Build the request body for one query
    pub fn request_body(image_data: &str) -> serde_json::Value {
        json!({
            "query": GET_CLUSTER,
            "variables": {
                "imageData": image_data,
            }
        })
    }

    fn unwrap_envelope(envelope: Envelope) -> Result<Cluster, ClassifyError> {
        if let Some(errors) = envelope.errors {
            let joined = errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ClassifyError::Server(joined));
        }
        match envelope.data {
            Some(data) => Ok(data.get_cluster),
            None => Err(ClassifyError::MissingData),
        }
    }
}

#[async_trait]
impl ClusterResolver for GraphqlClusterClient {
    async fn get_cluster(&self, image_data: String) -> Result<Cluster, ClassifyError> {
        debug!(endpoint = %self.endpoint, payload_bytes = image_data.len(), "Submitting classification query");

        let body = Self::request_body(&image_data);
        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::Status(status.as_u16()));
        }

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|err| ClassifyError::Envelope(err.to_string()))?;
        Self::unwrap_envelope(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_query_and_image_variable() {
        let body = GraphqlClusterClient::request_body("data:image/png;base64,AAA");
        assert_eq!(body["query"], GET_CLUSTER);
        assert_eq!(body["variables"]["imageData"], "data:image/png;base64,AAA");
    }

    #[test]
    fn envelope_with_data_unwraps_to_cluster() {
        let envelope: Envelope = serde_json::from_value(serde_json::json!({
            "data": {
                "getCluster": {
                    "message": "Looks like glass",
                    "cluster_name": "Glass",
                    "cluster": 3,
                    "materials": []
                }
            }
        }))
        .unwrap();

        let cluster = GraphqlClusterClient::unwrap_envelope(envelope).unwrap();
        assert_eq!(cluster.cluster_name, "Glass");
        assert_eq!(cluster.cluster, 3);
    }

    #[test]
    fn envelope_with_errors_becomes_server_error() {
        let envelope: Envelope = serde_json::from_value(serde_json::json!({
            "data": null,
            "errors": [{ "message": "image too small" }, { "message": "try again" }]
        }))
        .unwrap();

        match GraphqlClusterClient::unwrap_envelope(envelope) {
            Err(ClassifyError::Server(msg)) => {
                assert!(msg.contains("image too small"));
                assert!(msg.contains("try again"));
            }
            other => panic!("Expected server error, got {:?}", other),
        }
    }

    #[test]
    fn empty_envelope_is_missing_data() {
        let envelope: Envelope = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(matches!(
            GraphqlClusterClient::unwrap_envelope(envelope),
            Err(ClassifyError::MissingData)
        ));
    }
}
