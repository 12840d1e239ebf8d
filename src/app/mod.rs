// SPDX-License-Identifier: MPL-2.0

//! Capture page
//!
//! The one component with real behavior: it owns the camera session, reacts
//! to the external shutter signal, submits captured stills for
//! classification, and derives what to render from its state.
//!
//! All transitions are message-driven and processed to completion. Async
//! work (hardware negotiation, the classification request) completes by
//! sending a message back through the page's channel, tagged with the
//! session epoch or request id that was current when it was spawned; a
//! message with a stale tag is discarded before it can touch state.
//!
//! # Main Types
//!
//! - `CapturePage`: capture lifecycle owner
//! - `Message`: external signals and async completions
//! - `CaptureState`: explicit lifecycle state machine

pub mod result;
pub mod state;
pub mod view;

use crate::backends::camera::types::{
    BackendResult, DisplaySurface, StillImage, ideal_resolution,
};
use crate::backends::camera::{CameraBackend, CameraSession};
use crate::classify::types::{Cluster, QueryState};
use crate::classify::client::ClusterResolver;
use crate::config::CaptureConfig;
use crate::errors::ClassifyError;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

pub use state::CaptureState;
pub use view::{RenderPlan, ResultProps, VideoElement};

/// External signals and async completions driving the capture page
#[derive(Debug)]
pub enum Message {
    /// A rendering surface for the live video became available (or changed)
    DisplayTargetReady(DisplaySurface),
    /// Hardware stream negotiation finished for the session with this epoch
    SessionStarted {
        epoch: u64,
        result: BackendResult<()>,
    },
    /// The external shutter signal toggled
    ShutterChanged(bool),
    /// The classification request with this id resolved
    ClusterResolved {
        request_id: u64,
        result: Result<Cluster, ClassifyError>,
    },
    /// The page is being unmounted
    Teardown,
}

/// Callback invoked with the full classification result on success
pub type ClusterCallback = Box<dyn Fn(Cluster) + Send + Sync>;

/// Camera capture page
pub struct CapturePage {
    config: CaptureConfig,
    state: CaptureState,
    still: Option<StillImage>,
    session: Option<CameraSession>,
    surface: Option<DisplaySurface>,
    query: QueryState,
    backend: Arc<dyn CameraBackend>,
    resolver: Arc<dyn ClusterResolver>,
    /// Bumped every time a session is (re)created; start results carrying an
    /// older epoch belong to a replaced session and are dropped
    session_epoch: u64,
    next_request_id: u64,
    messages: mpsc::UnboundedSender<Message>,
    on_cluster: Option<ClusterCallback>,
}

impl CapturePage {
    /// Create a page together with the receiver for its async completions.
    ///
    /// The embedder forwards received messages back into [`Self::handle`].
    pub fn new(
        config: CaptureConfig,
        backend: Arc<dyn CameraBackend>,
        resolver: Arc<dyn ClusterResolver>,
    ) -> (Self, mpsc::UnboundedReceiver<Message>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let page = Self {
            config,
            state: CaptureState::default(),
            still: None,
            session: None,
            surface: None,
            query: QueryState::Idle,
            backend,
            resolver,
            session_epoch: 0,
            next_request_id: 0,
            messages: tx,
            on_cluster: None,
        };
        (page, rx)
    }

    /// Register the parent's cluster callback (`setAppCluster`)
    pub fn set_cluster_callback(&mut self, callback: ClusterCallback) {
        self.on_cluster = Some(callback);
    }

    /// Process one message to completion
    pub fn handle(&mut self, message: Message) {
        match message {
            Message::DisplayTargetReady(surface) => self.handle_display_target(surface),
            Message::SessionStarted { epoch, result } => self.handle_session_started(epoch, result),
            Message::ShutterChanged(true) => self.handle_shutter_pressed(),
            Message::ShutterChanged(false) => self.handle_shutter_released(),
            Message::ClusterResolved { request_id, result } => {
                self.handle_cluster_resolved(request_id, result)
            }
            Message::Teardown => self.handle_teardown(),
        }
    }

    /// Derive the current render plan
    pub fn render(&self) -> RenderPlan {
        view::render_plan(self)
    }

    /// Current lifecycle state
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Raw query state, passed through to the result renderer
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// The captured still, if any
    pub fn still(&self) -> Option<&StillImage> {
        self.still.as_ref()
    }

    /// Whether a camera session currently exists
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    fn handle_display_target(&mut self, surface: DisplaySurface) {
        if self.surface == Some(surface) && self.session.is_some() {
            debug!(surface = ?surface, "Display target unchanged");
            return;
        }
        self.surface = Some(surface);
        self.acquire_session(surface);
    }

    /// Create a session bound to the surface and kick off the hardware start.
    /// Replacing an existing session drops it, which stops its stream.
    fn acquire_session(&mut self, surface: DisplaySurface) {
        self.session_epoch += 1;
        let epoch = self.session_epoch;
        let requested = ideal_resolution(self.config.viewport);

        let session = CameraSession::new(
            surface,
            Arc::clone(&self.backend),
            self.config.facing_mode,
            requested,
        );
        let backend = session.backend();
        self.session = Some(session);
        self.state = CaptureState::AcquiringSession;

        let facing = self.config.facing_mode;
        let tx = self.messages.clone();
        tokio::spawn(async move {
            let result = backend.start(facing, requested).await;
            let _ = tx.send(Message::SessionStarted { epoch, result });
        });
    }

    fn handle_session_started(&mut self, epoch: u64, result: BackendResult<()>) {
        if epoch != self.session_epoch {
            debug!(epoch, current = self.session_epoch, "Stale session start result ignored");
            return;
        }

        match result {
            Ok(()) => {
                info!("Camera started");
                if self.state == CaptureState::AcquiringSession {
                    self.state = CaptureState::Live;
                }
            }
            Err(err) => {
                // Terminal for this session: no retry, spinner stays
                error!(%err, "Camera not started");
                self.state = CaptureState::Error;
            }
        }
    }

    fn handle_shutter_pressed(&mut self) {
        let Some(session) = self.session.as_ref() else {
            warn!("Shutter pressed with no camera session");
            return;
        };
        if !self.state.begin_capture() {
            debug!(state = ?self.state, "Shutter pressed outside live state");
            return;
        }

        // Capture, stop, submit — in that order, within this one step
        match session.capture_still(self.config.size_factor) {
            Ok(still) => {
                let image_data = still.data_uri().to_string();
                self.still = Some(still);
                session.stop();

                let request_id = self.next_request_id;
                self.next_request_id += 1;
                self.state.submit(request_id);
                self.query = QueryState::Loading;

                let resolver = Arc::clone(&self.resolver);
                let tx = self.messages.clone();
                info!(request_id, "Still captured, submitting classification");
                tokio::spawn(async move {
                    let result = resolver.get_cluster(image_data).await;
                    let _ = tx.send(Message::ClusterResolved { request_id, result });
                });
            }
            Err(err) => {
                error!(%err, "Still capture failed");
                self.state = CaptureState::Error;
            }
        }
    }

    fn handle_shutter_released(&mut self) {
        let previous = self.state.release();
        if let Some(request_id) = previous.request_id() {
            debug!(request_id, "Pending classification invalidated by shutter release");
        }
        self.still = None;
        self.query = QueryState::Idle;

        // Automatic re-acquisition: rebuild the session on the known surface
        // and restart the hardware, re-entering the loading state.
        if let Some(surface) = self.surface {
            self.acquire_session(surface);
        }
    }

    fn handle_cluster_resolved(
        &mut self,
        request_id: u64,
        result: Result<Cluster, ClassifyError>,
    ) {
        if self.state.request_id() != Some(request_id) {
            debug!(request_id, "Stale classification response discarded");
            return;
        }

        match result {
            Ok(cluster) => {
                info!(cluster = cluster.cluster, name = %cluster.cluster_name, "Classification resolved");
                if let Some(callback) = &self.on_cluster {
                    callback(cluster.clone());
                }
                // Retained only as the query state handed to the result renderer
                self.query = QueryState::Ready(cluster);
            }
            Err(err) => {
                // Presentation of the failure belongs to the result renderer;
                // the live/still state is left untouched.
                self.query = QueryState::Failed(err.to_string());
            }
        }
    }

    fn handle_teardown(&mut self) {
        // Dropping the session stops the stream; repeated teardown is a no-op
        if self.session.take().is_some() {
            info!("Capture page torn down, camera released");
        }
    }
}
