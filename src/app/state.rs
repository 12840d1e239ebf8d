// SPDX-License-Identifier: GPL-3.0-only

//! Capture lifecycle state machine
//!
//! One tagged enum replaces the independent still/loading/session flags the
//! original flow juggled, so impossible flag combinations cannot be
//! represented.

/// Capture lifecycle state
///
/// ```text
/// AcquiringSession ──start ok──▶ Live ──shutter──▶ Capturing ──▶ Submitting
///        ▲  │                                                        │
///        │  └──start err──▶ Error                                    │
///        └────────────────── shutter released ───────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    /// Waiting for the hardware stream to come up; spinner shown
    #[default]
    AcquiringSession,
    /// Stream live, showing the preview
    Live,
    /// Shutter handled, still being extracted (transient within one step)
    Capturing,
    /// Still captured and classification request in flight or resolved
    Submitting {
        /// Cancellation token: a response tagged with a different id is stale
        request_id: u64,
    },
    /// Hardware start failed; terminal for this session, spinner stays
    Error,
}

impl CaptureState {
    /// Whether the page is in a loading (spinner) state.
    ///
    /// A failed hardware start keeps loading set: the indefinite spinner is
    /// the accepted degradation for that session.
    pub fn is_loading(&self) -> bool {
        matches!(self, CaptureState::AcquiringSession | CaptureState::Error)
    }

    /// Whether the live stream is up and a shutter press can be honored
    pub fn is_live(&self) -> bool {
        matches!(self, CaptureState::Live)
    }

    /// The in-flight request id, if a classification was submitted
    pub fn request_id(&self) -> Option<u64> {
        match self {
            CaptureState::Submitting { request_id } => Some(*request_id),
            _ => None,
        }
    }

    /// Live → Capturing. Returns false from any other state.
    pub fn begin_capture(&mut self) -> bool {
        if self.is_live() {
            *self = CaptureState::Capturing;
            true
        } else {
            false
        }
    }

    /// Capturing → Submitting with the allocated request id
    pub fn submit(&mut self, request_id: u64) {
        debug_assert!(matches!(self, CaptureState::Capturing));
        *self = CaptureState::Submitting { request_id };
    }

    /// Any state → AcquiringSession (shutter released), returning the old state
    pub fn release(&mut self) -> CaptureState {
        std::mem::replace(self, CaptureState::AcquiringSession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_loading() {
        let state = CaptureState::default();
        assert_eq!(state, CaptureState::AcquiringSession);
        assert!(state.is_loading());
    }

    #[test]
    fn error_state_keeps_loading_set() {
        assert!(CaptureState::Error.is_loading());
        assert!(!CaptureState::Live.is_loading());
        assert!(!CaptureState::Submitting { request_id: 1 }.is_loading());
    }

    #[test]
    fn begin_capture_only_from_live() {
        let mut state = CaptureState::Live;
        assert!(state.begin_capture());
        assert_eq!(state, CaptureState::Capturing);

        let mut state = CaptureState::AcquiringSession;
        assert!(!state.begin_capture(), "Capture must not start while loading");
        assert_eq!(state, CaptureState::AcquiringSession);

        let mut state = CaptureState::Submitting { request_id: 7 };
        assert!(!state.begin_capture(), "Capture must not start twice per activation");
    }

    #[test]
    fn submit_tags_the_request() {
        let mut state = CaptureState::Capturing;
        state.submit(42);
        assert_eq!(state.request_id(), Some(42));
    }

    #[test]
    fn release_invalidates_pending_request() {
        let mut state = CaptureState::Submitting { request_id: 9 };
        let previous = state.release();
        assert_eq!(previous.request_id(), Some(9));
        assert_eq!(state, CaptureState::AcquiringSession);
        assert_eq!(state.request_id(), None, "No id survives a release");
    }
}
