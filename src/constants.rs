// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants for the capture flow

/// Maximum preview width in logical pixels.
///
/// Viewports wider than this are treated as desktop-sized; narrower
/// viewports are assumed to be mobile and trigger the width/height swap in
/// the ideal-resolution heuristic.
pub const MAX_PREVIEW_WIDTH: u32 = 575;

/// Default scale factor applied when extracting a still from the live stream
pub const DEFAULT_SIZE_FACTOR: f32 = 1.0;

/// Prefix of the data-URI encoding produced for captured stills
pub const DATA_URI_PNG_PREFIX: &str = "data:image/png;base64,";

/// Default classification service endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/graphql";

/// Default timeout for the classification request, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 45;

/// Default viewport dimensions used when none are configured
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 575;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 1024;

/// Frame dimensions synthesized by the virtual camera backend
pub const VIRTUAL_FRAME_WIDTH: u32 = 64;
pub const VIRTUAL_FRAME_HEIGHT: u32 = 48;
