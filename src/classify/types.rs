// SPDX-License-Identifier: MPL-2.0

//! Classification wire types
//!
//! Field names follow the service schema exactly; these structs deserialize
//! straight out of the GraphQL response envelope.

use serde::{Deserialize, Serialize};

/// A single recyclable/compostable/trash item with disposal-routing metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub material_id: i64,
    pub description: String,
    pub long_description: String,
    /// Disposal routing flags
    pub bin_trash: bool,
    pub bin_recycle: bool,
    pub bin_compost: bool,
    /// Drop-off / pickup availability
    pub dropoff: bool,
    pub pickup: bool,
    #[serde(default)]
    pub notes: Option<String>,
    pub image_url: String,
}

/// The service's classification result: one or more materials grouped under
/// a shared cluster label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub message: String,
    pub cluster_name: String,
    /// Cluster identifier
    pub cluster: i64,
    /// Ordered collection of matched material records
    pub materials: Vec<Material>,
}

/// Lifecycle of the lazily issued classification query.
///
/// This is the raw query-state object the result renderer receives; it owns
/// all presentation of loading, error and success.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryState {
    /// No request issued yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Request resolved successfully
    Ready(Cluster),
    /// Request failed
    Failed(String),
}

impl QueryState {
    /// Check if a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    /// Get the resolved cluster, if any
    pub fn cluster(&self) -> Option<&Cluster> {
        match self {
            QueryState::Ready(cluster) => Some(cluster),
            _ => None,
        }
    }

    /// Get the failure message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            QueryState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_deserializes_with_null_notes() {
        let json = serde_json::json!({
            "material_id": 12,
            "description": "Glass bottle",
            "long_description": "Clear or colored glass bottles",
            "bin_trash": false,
            "bin_recycle": true,
            "bin_compost": false,
            "dropoff": false,
            "pickup": true,
            "notes": null,
            "image_url": "https://example.org/glass.png"
        });

        let material: Material = serde_json::from_value(json).unwrap();
        assert_eq!(material.material_id, 12);
        assert!(material.bin_recycle);
        assert_eq!(material.notes, None);
    }

    #[test]
    fn query_state_accessors() {
        assert!(QueryState::Loading.is_loading());
        assert_eq!(QueryState::Idle.cluster(), None);
        assert_eq!(
            QueryState::Failed("boom".to_string()).error(),
            Some("boom")
        );
    }
}
