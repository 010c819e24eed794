//! Windows platform scaffolding.
//!
//! This crate intentionally ships compile-safe placeholders so the engine
//! backend can depend on stable interfaces before full implementation.

use displaykit_common::error::{DisplaykitError, DisplaykitResult};
use displaykit_platform_core::{Display, DisplayId, ImageFormat, Rect};

/// Detect displays on Windows.
///
/// TODO(platform/windows): replace with EnumDisplayMonitors enumeration.
pub fn detect_displays() -> DisplaykitResult<Vec<Display>> {
    Err(DisplaykitError::unavailable(
        "Windows display detection is not implemented yet",
    ))
}

/// Get the primary display on Windows.
pub fn primary_display() -> DisplaykitResult<Display> {
    Err(DisplaykitError::unavailable(
        "Windows display detection is not implemented yet",
    ))
}

/// Look up a display by id on Windows.
pub fn display_from_id(_id: DisplayId) -> DisplaykitResult<Option<Display>> {
    Err(DisplaykitError::unavailable(
        "Windows display detection is not implemented yet",
    ))
}

/// Configure or stop display mirroring.
///
/// TODO(platform/windows): ChangeDisplaySettingsEx clone topology.
pub fn set_mirror(
    _first: DisplayId,
    _second: Option<DisplayId>,
    _enable: bool,
) -> DisplaykitResult<()> {
    Err(DisplaykitError::unavailable(
        "Windows display mirroring is not implemented yet",
    ))
}

/// Capture a display region.
///
/// TODO(platform/windows): DXGI Desktop Duplication + WIC encoding.
pub fn capture_display(
    _id: DisplayId,
    _bounds: Option<Rect>,
    _format: ImageFormat,
) -> DisplaykitResult<Vec<u8>> {
    Err(DisplaykitError::unavailable(
        "Windows screen capture is not implemented yet",
    ))
}

/// Placeholder for future Windows Graphics Capture capabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphicsCaptureSupport {
    pub available: bool,
}

/// Probe whether Windows Graphics Capture is available.
///
/// TODO(platform/windows): implement capability probing.
pub fn probe_graphics_capture_support() -> GraphicsCaptureSupport {
    GraphicsCaptureSupport { available: false }
}
