// SPDX-License-Identifier: MPL-2.0

//! Remote material classification
//!
//! A captured still is submitted to the classification service as a single
//! GraphQL query; the answer is a cluster of matched materials. The page
//! never inspects failures itself — the raw [`QueryState`] is handed to the
//! result-rendering collaborator.

pub mod client;
pub mod types;

pub use client::{ClusterResolver, GET_CLUSTER, GraphqlClusterClient};
pub use types::{Cluster, Material, QueryState};
