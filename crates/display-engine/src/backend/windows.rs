use displaykit_common::error::DisplaykitResult;
use displaykit_platform_core::{Display, DisplayId, ImageFormat, Rect};
use displaykit_platform_windows as platform_windows;

use crate::backend::DisplayBackend;

/// Compile-safe Windows backend skeleton.
///
/// TODO(platform/windows): implement Win32 display enumeration and DXGI
/// capture.
pub struct WindowsBackend;

impl WindowsBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBackend for WindowsBackend {
    fn enumerate(&self) -> DisplaykitResult<Vec<Display>> {
        platform_windows::detect_displays()
    }

    fn primary(&self) -> DisplaykitResult<Display> {
        platform_windows::primary_display()
    }

    fn by_id(&self, id: DisplayId) -> DisplaykitResult<Option<Display>> {
        platform_windows::display_from_id(id)
    }

    fn set_mirror(
        &self,
        first: DisplayId,
        second: Option<DisplayId>,
        enable: bool,
    ) -> DisplaykitResult<()> {
        platform_windows::set_mirror(first, second, enable)
    }

    fn capture(
        &self,
        id: DisplayId,
        bounds: Option<Rect>,
        format: ImageFormat,
    ) -> DisplaykitResult<Vec<u8>> {
        platform_windows::capture_display(id, bounds, format)
    }
}
