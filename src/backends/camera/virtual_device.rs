// SPDX-License-Identifier: GPL-3.0-only

//! Virtual camera backend
//!
//! Synthesizes still frames in memory instead of talking to real hardware.
//! Used by the CLI demo flow and by the lifecycle tests, which also rely on
//! the start/stop/capture counters to assert exactly-once behavior.

use super::CameraBackend;
use super::types::{BackendError, BackendResult, FacingMode, Resolution, StillImage};
use crate::constants::{DATA_URI_PNG_PREFIX, VIRTUAL_FRAME_HEIGHT, VIRTUAL_FRAME_WIDTH};
use async_trait::async_trait;
use base64::{Engine, prelude::BASE64_STANDARD};
use std::io::Cursor;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

struct VirtualState {
    started: bool,
    facing: FacingMode,
    resolution: Resolution,
    /// Fixed data URI returned instead of a synthesized frame (tests)
    canned_still: Option<String>,
    /// Make the next start attempt fail (tests)
    fail_start: bool,
}

/// In-memory camera backend
pub struct VirtualCamera {
    state: Mutex<VirtualState>,
    starts: AtomicUsize,
    stops: AtomicUsize,
    captures: AtomicUsize,
}

impl VirtualCamera {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(VirtualState {
                started: false,
                facing: FacingMode::default(),
                resolution: Resolution {
                    width: VIRTUAL_FRAME_WIDTH,
                    height: VIRTUAL_FRAME_HEIGHT,
                },
                canned_still: None,
                fail_start: false,
            }),
            starts: AtomicUsize::new(0),
            stops: AtomicUsize::new(0),
            captures: AtomicUsize::new(0),
        }
    }

    /// A backend whose start negotiation always fails
    pub fn failing() -> Self {
        let camera = Self::new();
        camera.state.lock().unwrap().fail_start = true;
        camera
    }

    /// Return a fixed encoding from `capture_still` instead of synthesizing
    pub fn with_canned_still(self, data_uri: &str) -> Self {
        self.state.lock().unwrap().canned_still = Some(data_uri.to_string());
        self
    }

    /// Number of successful stream starts
    pub fn start_count(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    /// Number of times a live stream was physically stopped
    pub fn stop_count(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }

    /// Number of stills extracted
    pub fn capture_count(&self) -> usize {
        self.captures.load(Ordering::SeqCst)
    }

    fn synthesize_frame(width: u32, height: u32) -> BackendResult<String> {
        // Simple gradient so captures are visually distinguishable
        let frame = image::RgbaImage::from_fn(width, height, |x, y| {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            image::Rgba([r, g, 128, 255])
        });

        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(frame)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .map_err(|err| BackendError::CaptureFailed(err.to_string()))?;

        Ok(format!("{}{}", DATA_URI_PNG_PREFIX, BASE64_STANDARD.encode(bytes)))
    }
}

impl Default for VirtualCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CameraBackend for VirtualCamera {
    async fn start(&self, facing: FacingMode, ideal: Resolution) -> BackendResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_start {
            return Err(BackendError::StartFailed(
                "virtual device configured to fail".to_string(),
            ));
        }

        state.started = true;
        state.facing = facing;
        state.resolution = ideal;
        self.starts.fetch_add(1, Ordering::SeqCst);
        info!(facing = %facing, resolution = %ideal, "Virtual camera started");
        Ok(())
    }

    fn stop(&self) {
        let mut state = self.state.lock().unwrap();
        if state.started {
            state.started = false;
            self.stops.fetch_add(1, Ordering::SeqCst);
            info!("Virtual camera stopped");
        } else {
            debug!("Stop requested with no live stream");
        }
    }

    fn capture_still(&self, size_factor: f32) -> BackendResult<StillImage> {
        let state = self.state.lock().unwrap();
        if !state.started {
            return Err(BackendError::NotStarted);
        }

        self.captures.fetch_add(1, Ordering::SeqCst);
        if let Some(canned) = &state.canned_still {
            return Ok(StillImage::new(canned.clone()));
        }

        let width = ((state.resolution.width as f32 * size_factor) as u32).max(1);
        let height = ((state.resolution.height as f32 * size_factor) as u32).max(1);
        let data_uri = Self::synthesize_frame(width, height)?;
        Ok(StillImage::new(data_uri))
    }

    fn is_started(&self) -> bool {
        self.state.lock().unwrap().started
    }
}
