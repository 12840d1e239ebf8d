// SPDX-License-Identifier: GPL-3.0-only

//! Render plan derivation
//!
//! What to show is derived from page state on every render, never stored.

use super::CapturePage;
use crate::classify::types::QueryState;

/// The live video element. Always present; when a still is shown it is
/// hidden via the flag rather than removed, so the hardware attachment to
/// the display target survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoElement {
    pub hidden: bool,
}

/// Props handed to the external result-rendering collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct ResultProps {
    /// Raw query state; the collaborator owns loading/error/success display
    pub query: QueryState,
}

/// Everything the embedder needs to draw one frame of the capture page
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    /// Spinner while a session is being (re)acquired or start failed
    pub show_spinner: bool,
    pub video: VideoElement,
    /// Data URI of the captured still, when one is displayed
    pub still: Option<String>,
    /// Result child, mounted unconditionally
    pub result: ResultProps,
}

pub fn render_plan(page: &CapturePage) -> RenderPlan {
    let still = page.still().map(|s| s.data_uri().to_string());
    RenderPlan {
        show_spinner: page.state().is_loading(),
        video: VideoElement {
            hidden: still.is_some(),
        },
        still,
        result: ResultProps {
            query: page.query().clone(),
        },
    }
}
