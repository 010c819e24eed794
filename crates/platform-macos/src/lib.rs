//! macOS platform scaffolding.
//!
//! This crate provides compile-safe placeholders for the CoreGraphics
//! display services integration planned for later milestones. The original
//! metadata surface (color spaces, window depths, sleep state, hardware
//! mirroring) is native to this platform, so the contracts in
//! `displaykit-platform-core` are modeled after what CoreGraphics reports.

use displaykit_common::error::{DisplaykitError, DisplaykitResult};
use displaykit_platform_core::{Display, DisplayId, ImageFormat, Rect};

/// Detect displays on macOS.
///
/// TODO(platform/macos): replace with CGGetActiveDisplayList enumeration.
pub fn detect_displays() -> DisplaykitResult<Vec<Display>> {
    Err(DisplaykitError::unavailable(
        "macOS display detection is not implemented yet",
    ))
}

/// Get the primary display on macOS.
///
/// TODO(platform/macos): CGMainDisplayID.
pub fn primary_display() -> DisplaykitResult<Display> {
    Err(DisplaykitError::unavailable(
        "macOS display detection is not implemented yet",
    ))
}

/// Look up a display by id on macOS.
pub fn display_from_id(_id: DisplayId) -> DisplaykitResult<Option<Display>> {
    Err(DisplaykitError::unavailable(
        "macOS display detection is not implemented yet",
    ))
}

/// Configure or stop display mirroring.
///
/// TODO(platform/macos): CGConfigureDisplayMirrorOfDisplay.
pub fn set_mirror(
    _first: DisplayId,
    _second: Option<DisplayId>,
    _enable: bool,
) -> DisplaykitResult<()> {
    Err(DisplaykitError::unavailable(
        "macOS display mirroring is not implemented yet",
    ))
}

/// Capture a display region.
///
/// TODO(platform/macos): CGDisplayCreateImage + ImageIO encoding.
pub fn capture_display(
    _id: DisplayId,
    _bounds: Option<Rect>,
    _format: ImageFormat,
) -> DisplaykitResult<Vec<u8>> {
    Err(DisplaykitError::unavailable(
        "macOS screen capture is not implemented yet",
    ))
}

/// Placeholder for future ScreenCaptureKit support details.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenCaptureKitSupport {
    pub available: bool,
}

/// Probe whether ScreenCaptureKit is available.
///
/// TODO(platform/macos): implement runtime capability detection.
pub fn probe_screencapturekit_support() -> ScreenCaptureKitSupport {
    ScreenCaptureKitSupport { available: false }
}
