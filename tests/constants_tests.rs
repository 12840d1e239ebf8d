// SPDX-License-Identifier: MPL-2.0

//! Integration tests for constants module

use recycle_camera::backends::camera::types::{Viewport, ideal_resolution};
use recycle_camera::constants::{DATA_URI_PNG_PREFIX, MAX_PREVIEW_WIDTH};

#[test]
fn test_preview_width_bounds_requested_height() {
    // Any viewport, however wide, is capped at the preview maximum
    for width in [320, 575, 576, 1920, 3840] {
        let resolution = ideal_resolution(Viewport {
            width,
            height: 1000,
        });
        assert!(
            resolution.height <= MAX_PREVIEW_WIDTH,
            "Requested height must never exceed the preview maximum"
        );
    }
}

#[test]
fn test_narrow_viewport_passes_through() {
    // At exactly the cap the viewport width is used unchanged
    let resolution = ideal_resolution(Viewport {
        width: MAX_PREVIEW_WIDTH,
        height: 800,
    });
    assert_eq!(resolution.height, MAX_PREVIEW_WIDTH);
    assert_eq!(resolution.width, 800);
}

#[test]
fn test_data_uri_prefix_shape() {
    assert!(DATA_URI_PNG_PREFIX.starts_with("data:image/"));
    assert!(DATA_URI_PNG_PREFIX.ends_with("base64,"));
}
