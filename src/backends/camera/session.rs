// SPDX-License-Identifier: GPL-3.0-only

//! Scoped camera session
//!
//! A [`CameraSession`] is the exclusive owner of the hardware stream for as
//! long as it lives. Dropping it stops the stream, so replacing the session
//! or tearing down the page can never leak a running camera.

use super::CameraBackend;
use super::types::{BackendResult, DisplaySurface, FacingMode, Resolution, StillImage};
use std::sync::Arc;
use tracing::debug;

/// An open handle to the device camera, bound to one display surface
pub struct CameraSession {
    backend: Arc<dyn CameraBackend>,
    surface: DisplaySurface,
    facing: FacingMode,
    requested: Resolution,
}

impl CameraSession {
    /// Wrap a backend around the display surface the live video renders to
    pub fn new(
        surface: DisplaySurface,
        backend: Arc<dyn CameraBackend>,
        facing: FacingMode,
        requested: Resolution,
    ) -> Self {
        debug!(surface = ?surface, facing = %facing, resolution = %requested, "Camera session created");
        Self {
            backend,
            surface,
            facing,
            requested,
        }
    }

    /// Start the underlying hardware stream
    pub async fn start(&self) -> BackendResult<()> {
        self.backend.start(self.facing, self.requested).await
    }

    /// Extract a still encoding from the live stream
    pub fn capture_still(&self, size_factor: f32) -> BackendResult<StillImage> {
        self.backend.capture_still(size_factor)
    }

    /// Stop the hardware stream. Safe to call repeatedly.
    pub fn stop(&self) {
        self.backend.stop();
    }

    /// Whether the hardware stream is live
    pub fn is_started(&self) -> bool {
        self.backend.is_started()
    }

    /// The surface this session is bound to
    pub fn surface(&self) -> DisplaySurface {
        self.surface
    }

    /// The facing mode requested for this session
    pub fn facing(&self) -> FacingMode {
        self.facing
    }

    /// The resolution requested for this session
    pub fn requested_resolution(&self) -> Resolution {
        self.requested
    }

    /// Backend handle, shared with the async start task
    pub(crate) fn backend(&self) -> Arc<dyn CameraBackend> {
        Arc::clone(&self.backend)
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        // Backend stop is idempotent, so an explicit stop followed by the
        // drop still releases the hardware exactly once.
        self.backend.stop();
        debug!(surface = ?self.surface, "Camera session released");
    }
}

impl std::fmt::Debug for CameraSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraSession")
            .field("surface", &self.surface)
            .field("facing", &self.facing)
            .field("requested", &self.requested)
            .field("started", &self.backend.is_started())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::virtual_device::VirtualCamera;
    use super::*;

    #[tokio::test]
    async fn drop_stops_a_live_stream() {
        let backend = Arc::new(VirtualCamera::new());
        let session = CameraSession::new(
            DisplaySurface(1),
            backend.clone(),
            FacingMode::Environment,
            Resolution {
                width: 16,
                height: 16,
            },
        );
        session.start().await.unwrap();
        assert!(backend.is_started());

        drop(session);
        assert!(!backend.is_started(), "Drop must stop the stream");
        assert_eq!(backend.stop_count(), 1);
    }

    #[tokio::test]
    async fn explicit_stop_then_drop_releases_once() {
        let backend = Arc::new(VirtualCamera::new());
        let session = CameraSession::new(
            DisplaySurface(2),
            backend.clone(),
            FacingMode::Environment,
            Resolution {
                width: 16,
                height: 16,
            },
        );
        session.start().await.unwrap();

        session.stop();
        drop(session);
        assert_eq!(
            backend.stop_count(),
            1,
            "Stop followed by drop must release the hardware exactly once"
        );
    }
}
