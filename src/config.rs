// SPDX-License-Identifier: GPL-3.0-only

use crate::backends::camera::types::{FacingMode, Viewport};
use crate::constants::{
    DEFAULT_ENDPOINT, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SIZE_FACTOR, DEFAULT_VIEWPORT_HEIGHT,
    DEFAULT_VIEWPORT_WIDTH,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Capture configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Requested camera facing direction (rear-facing preferred)
    pub facing_mode: FacingMode,
    /// Scale factor applied when extracting a still
    pub size_factor: f32,
    /// Logical viewport, feeds the ideal-resolution heuristic
    pub viewport: Viewport,
    /// Classification service endpoint
    pub endpoint: String,
    /// Classification request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            facing_mode: FacingMode::Environment,
            size_factor: DEFAULT_SIZE_FACTOR,
            viewport: Viewport {
                width: DEFAULT_VIEWPORT_WIDTH,
                height: DEFAULT_VIEWPORT_HEIGHT,
            },
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl CaptureConfig {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("recycle-camera").join("config.json"))
    }

    /// Load the configuration from disk, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            warn!("No config directory available, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
                warn!(path = %path.display(), %err, "Invalid config file, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Persist the configuration to disk
    pub fn save(&self) -> AppResult<()> {
        let path = Self::config_path()
            .ok_or_else(|| AppError::Config("no config directory available".to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)
            .map_err(|err| AppError::Config(err.to_string()))?;
        std::fs::write(&path, contents)?;
        Ok(())
    }
}
