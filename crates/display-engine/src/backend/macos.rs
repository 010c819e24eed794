use displaykit_common::error::DisplaykitResult;
use displaykit_platform_core::{Display, DisplayId, ImageFormat, Rect};
use displaykit_platform_macos as platform_macos;

use crate::backend::DisplayBackend;

/// Compile-safe macOS backend skeleton.
///
/// TODO(platform/macos): implement CoreGraphics display services
/// integration.
pub struct MacOSBackend;

impl MacOSBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MacOSBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBackend for MacOSBackend {
    fn enumerate(&self) -> DisplaykitResult<Vec<Display>> {
        platform_macos::detect_displays()
    }

    fn primary(&self) -> DisplaykitResult<Display> {
        platform_macos::primary_display()
    }

    fn by_id(&self, id: DisplayId) -> DisplaykitResult<Option<Display>> {
        platform_macos::display_from_id(id)
    }

    fn set_mirror(
        &self,
        first: DisplayId,
        second: Option<DisplayId>,
        enable: bool,
    ) -> DisplaykitResult<()> {
        platform_macos::set_mirror(first, second, enable)
    }

    fn capture(
        &self,
        id: DisplayId,
        bounds: Option<Rect>,
        format: ImageFormat,
    ) -> DisplaykitResult<Vec<u8>> {
        platform_macos::capture_display(id, bounds, format)
    }
}
