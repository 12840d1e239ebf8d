// SPDX-License-Identifier: GPL-3.0-only
// Shared types for camera backend abstraction

//! Shared types for camera backends

use crate::constants::MAX_PREVIEW_WIDTH;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested camera facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FacingMode {
    /// Front-facing (selfie) camera
    User,
    /// Rear-facing camera, preferred for scanning objects
    #[default]
    Environment,
}

impl fmt::Display for FacingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacingMode::User => write!(f, "user"),
            FacingMode::Environment => write!(f, "environment"),
        }
    }
}

/// A capture resolution in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Logical viewport dimensions of the hosting display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Compute the ideal capture resolution for a viewport.
///
/// The requested height is the viewport width capped at
/// [`MAX_PREVIEW_WIDTH`], and the requested width is the viewport height.
/// Width and height are deliberately swapped so that narrow (mobile)
/// viewports still get a sensibly oriented camera stream.
pub fn ideal_resolution(viewport: Viewport) -> Resolution {
    Resolution {
        width: viewport.height,
        height: viewport.width.min(MAX_PREVIEW_WIDTH),
    }
}

/// Opaque handle to the rendering surface the live video attaches to.
///
/// The capture page only compares surfaces for identity; what the handle
/// points at is the embedder's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplaySurface(pub u64);

/// A single still frame captured from a live session, as a data URI
#[derive(Clone, PartialEq, Eq)]
pub struct StillImage {
    data_uri: String,
}

impl StillImage {
    pub fn new(data_uri: String) -> Self {
        Self { data_uri }
    }

    /// The full encoding, e.g. `data:image/png;base64,...`
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }
}

impl fmt::Debug for StillImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Payloads run to megabytes; keep logs readable
        write!(f, "StillImage({} bytes)", self.data_uri.len())
    }
}

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Camera backend errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// No camera device available
    DeviceNotFound(String),
    /// Hardware stream negotiation failed
    StartFailed(String),
    /// Still extraction failed
    CaptureFailed(String),
    /// Operation requires a started stream
    NotStarted,
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::DeviceNotFound(msg) => write!(f, "Device not found: {}", msg),
            BackendError::StartFailed(msg) => write!(f, "Failed to start camera: {}", msg),
            BackendError::CaptureFailed(msg) => write!(f, "Failed to capture still: {}", msg),
            BackendError::NotStarted => write!(f, "Camera stream not started"),
        }
    }
}

impl std::error::Error for BackendError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ideal_resolution_swaps_axes_for_narrow_viewport() {
        let viewport = Viewport {
            width: 390,
            height: 844,
        };
        let resolution = ideal_resolution(viewport);
        assert_eq!(resolution.height, 390, "Height should be viewport width");
        assert_eq!(resolution.width, 844, "Width should be viewport height");
    }

    #[test]
    fn ideal_resolution_caps_height_on_wide_viewport() {
        let viewport = Viewport {
            width: 1920,
            height: 1080,
        };
        let resolution = ideal_resolution(viewport);
        assert_eq!(
            resolution.height, MAX_PREVIEW_WIDTH,
            "Height should be capped at the maximum preview width"
        );
        assert_eq!(resolution.width, 1080);
    }

    #[test]
    fn still_image_debug_elides_payload() {
        let still = StillImage::new("data:image/png;base64,AAA".to_string());
        let printed = format!("{:?}", still);
        assert!(!printed.contains("AAA"), "Debug output should not embed the payload");
    }
}
