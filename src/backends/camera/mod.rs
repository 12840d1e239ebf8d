// SPDX-License-Identifier: MPL-2.0

//! Camera backend abstraction
//!
//! The capture page never talks to hardware directly; it goes through the
//! [`CameraBackend`] trait so the same lifecycle logic drives a real device,
//! the bundled virtual backend, or a test double.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │  CapturePage        │
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │  CameraSession      │  ← Scoped ownership, guaranteed release
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │  CameraBackend Trait│  ← Common interface
//! └──────────┬──────────┘
//!            │
//!            ▼
//!       ┌─────────┐
//!       │ Virtual │  ← Concrete implementation
//!       └─────────┘
//! ```

pub mod session;
pub mod types;
pub mod virtual_device;

pub use session::CameraSession;
pub use types::*;

use async_trait::async_trait;
use std::sync::Arc;

/// Camera backend trait
///
/// All camera backends must implement this trait to provide:
/// - Asynchronous hardware stream negotiation
/// - Idempotent stream shutdown
/// - Synchronous still extraction from the live stream
#[async_trait]
pub trait CameraBackend: Send + Sync {
    /// Start the hardware stream.
    ///
    /// Negotiates the stream with the requested facing mode and ideal
    /// resolution. The negotiation is asynchronous; the stream is live only
    /// once this resolves with `Ok`.
    async fn start(&self, facing: FacingMode, ideal: Resolution) -> BackendResult<()>;

    /// Stop the hardware stream.
    ///
    /// Must be safe to call at any time, any number of times. A stream is
    /// only ever physically stopped once per start.
    fn stop(&self);

    /// Extract a single still frame from the live stream.
    ///
    /// `size_factor` scales the captured dimensions relative to the stream
    /// resolution. Fails with [`BackendError::NotStarted`] when no stream is
    /// live.
    fn capture_still(&self, size_factor: f32) -> BackendResult<StillImage>;

    /// Check if the hardware stream is currently live
    fn is_started(&self) -> bool;
}

/// Get a concrete backend instance (virtual only)
pub fn get_backend() -> Arc<dyn CameraBackend> {
    Arc::new(virtual_device::VirtualCamera::new())
}
