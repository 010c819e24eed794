use displaykit_common::error::DisplaykitResult;
use displaykit_platform_core::{Display, DisplayId, ImageFormat, Rect};
use displaykit_platform_linux as platform_linux;

use crate::backend::DisplayBackend;

/// Linux backend: X11/Wayland enumeration and frame readback.
pub struct LinuxBackend;

impl LinuxBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LinuxBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBackend for LinuxBackend {
    fn enumerate(&self) -> DisplaykitResult<Vec<Display>> {
        platform_linux::detect_displays()
    }

    fn primary(&self) -> DisplaykitResult<Display> {
        platform_linux::primary_display()
    }

    fn by_id(&self, id: DisplayId) -> DisplaykitResult<Option<Display>> {
        platform_linux::display_from_id(id)
    }

    fn set_mirror(
        &self,
        first: DisplayId,
        second: Option<DisplayId>,
        enable: bool,
    ) -> DisplaykitResult<()> {
        platform_linux::set_mirror(first, second, enable)
    }

    fn capture(
        &self,
        id: DisplayId,
        bounds: Option<Rect>,
        format: ImageFormat,
    ) -> DisplaykitResult<Vec<u8>> {
        platform_linux::capture::capture_display(id, bounds, format)
    }
}
