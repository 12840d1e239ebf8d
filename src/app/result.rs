// SPDX-License-Identifier: GPL-3.0-only

//! Result renderer seam
//!
//! The real presentation of the classification result is an external
//! collaborator; this minimal view formats a [`QueryState`] into display
//! lines and forwards the search-focus callback, which is opaque to the
//! capture page.

use crate::classify::types::{Material, QueryState};

/// Callback shifting UI focus to the search field, semantics owned upstream
pub type FocusCallback = Box<dyn Fn() + Send + Sync>;

/// Minimal cluster result view
pub struct ClusterResultView {
    focus: Option<FocusCallback>,
}

impl ClusterResultView {
    pub fn new() -> Self {
        Self { focus: None }
    }

    /// Attach the forwarded focus-toggle callback
    pub fn with_focus(mut self, callback: FocusCallback) -> Self {
        self.focus = Some(callback);
        self
    }

    /// Invoke the forwarded focus-toggle callback, if any
    pub fn toggle_search_focus(&self) {
        if let Some(callback) = &self.focus {
            callback();
        }
    }

    /// Format the raw query state into display lines
    pub fn lines(&self, query: &QueryState) -> Vec<String> {
        match query {
            QueryState::Idle => Vec::new(),
            QueryState::Loading => vec!["Classifying...".to_string()],
            QueryState::Failed(msg) => vec![format!("Classification failed: {}", msg)],
            QueryState::Ready(cluster) => {
                let mut lines = vec![cluster.message.clone(), cluster.cluster_name.clone()];
                for material in &cluster.materials {
                    lines.push(format!(
                        "{} [{}]",
                        material.description,
                        routing_label(material)
                    ));
                }
                lines
            }
        }
    }
}

impl Default for ClusterResultView {
    fn default() -> Self {
        Self::new()
    }
}

fn routing_label(material: &Material) -> &'static str {
    if material.bin_recycle {
        "recycle"
    } else if material.bin_compost {
        "compost"
    } else if material.bin_trash {
        "trash"
    } else if material.dropoff {
        "drop-off"
    } else {
        "special"
    }
}
