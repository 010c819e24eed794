//! In-memory backend for tests.
//!
//! Deterministic by construction: fixture displays never change between
//! calls, and captured frames are synthesized from pixel coordinates, so
//! two captures of the same region produce identical bytes.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Mutex;

use displaykit_common::error::{DisplaykitError, DisplaykitResult};
use displaykit_platform_core::{
    ColorSpaceInfo, Display, DisplayId, ImageFormat, Rect,
};
use image::{DynamicImage, Rgba, RgbaImage};

use crate::backend::DisplayBackend;

/// Fake [`DisplayBackend`] with fixture displays and a recorded mirror
/// table. The first fixture display is the primary.
pub struct FakeBackend {
    displays: Vec<Display>,
    mirrors: Mutex<HashMap<DisplayId, Option<DisplayId>>>,
    available: bool,
    capture_denied: bool,
}

impl FakeBackend {
    /// Two-display fixture: an internal 1920x1080 primary at the origin and
    /// an external 1280x1024 display to its right.
    pub fn new() -> Self {
        Self::with_displays(vec![
            fixture_display(1, "eDP-1", Rect::new(0, 0, 1920, 1080)),
            fixture_display(2, "HDMI-A-1", Rect::new(1920, 0, 1280, 1024)),
        ])
    }

    pub fn with_displays(displays: Vec<Display>) -> Self {
        Self {
            displays,
            mirrors: Mutex::new(HashMap::new()),
            available: true,
            capture_denied: false,
        }
    }

    /// Backend whose every call fails, as when no window system is
    /// reachable.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::with_displays(Vec::new())
        }
    }

    /// Make captures fail with a permission error while queries keep
    /// working.
    pub fn with_capture_denied(mut self) -> Self {
        self.capture_denied = true;
        self
    }

    /// Current mirror target recorded for `id`: `None` when not mirroring,
    /// `Some(target)` when enabled (`target` is `None` for the backend
    /// default).
    pub fn mirror_target(&self, id: DisplayId) -> Option<Option<DisplayId>> {
        self.mirrors.lock().unwrap().get(&id).copied()
    }

    fn ensure_available(&self) -> DisplaykitResult<()> {
        if self.available {
            Ok(())
        } else {
            Err(DisplaykitError::unavailable(
                "fake backend is configured as unavailable",
            ))
        }
    }
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBackend for FakeBackend {
    fn enumerate(&self) -> DisplaykitResult<Vec<Display>> {
        self.ensure_available()?;
        Ok(self.displays.clone())
    }

    fn primary(&self) -> DisplaykitResult<Display> {
        self.ensure_available()?;
        self.displays
            .first()
            .cloned()
            .ok_or_else(|| DisplaykitError::unavailable("fixture has no displays"))
    }

    fn by_id(&self, id: DisplayId) -> DisplaykitResult<Option<Display>> {
        self.ensure_available()?;
        Ok(self.displays.iter().find(|d| d.id == id).cloned())
    }

    fn set_mirror(
        &self,
        first: DisplayId,
        second: Option<DisplayId>,
        enable: bool,
    ) -> DisplaykitResult<()> {
        self.ensure_available()?;
        let mut mirrors = self.mirrors.lock().unwrap();
        if enable {
            mirrors.insert(first, second);
        } else {
            mirrors.remove(&first);
        }
        Ok(())
    }

    fn capture(
        &self,
        id: DisplayId,
        bounds: Option<Rect>,
        format: ImageFormat,
    ) -> DisplaykitResult<Vec<u8>> {
        self.ensure_available()?;
        if self.capture_denied {
            return Err(DisplaykitError::unavailable(
                "screen capture permission denied",
            ));
        }

        let display = self
            .by_id(id)?
            .ok_or_else(|| DisplaykitError::not_found(id))?;
        let region = bounds.unwrap_or(display.bounds);

        // Pixel values derive from virtual-screen coordinates, so a crop of
        // a larger capture equals a direct capture of the cropped region.
        let frame = RgbaImage::from_fn(region.width, region.height, |x, y| {
            let vx = region.x + x as i32;
            let vy = region.y + y as i32;
            Rgba([
                (vx.rem_euclid(256)) as u8,
                (vy.rem_euclid(256)) as u8,
                ((vx + vy).rem_euclid(256)) as u8,
                255,
            ])
        });

        encode(DynamicImage::ImageRgba8(frame), format)
    }
}

fn encode(frame: DynamicImage, format: ImageFormat) -> DisplaykitResult<Vec<u8>> {
    // The JPEG encoder rejects alpha channels.
    let frame = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(frame.to_rgb8()),
        _ => frame,
    };

    let image_format = match format {
        ImageFormat::Png => image::ImageFormat::Png,
        ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        ImageFormat::Tiff => image::ImageFormat::Tiff,
    };

    let mut bytes = Vec::new();
    frame
        .write_to(&mut Cursor::new(&mut bytes), image_format)
        .map_err(|e| DisplaykitError::unavailable(format!("failed to encode fixture frame: {e}")))?;

    Ok(bytes)
}

/// Build a display snapshot for fixtures.
pub fn fixture_display(id: DisplayId, name: &str, bounds: Rect) -> Display {
    Display {
        id,
        name: name.to_string(),
        bounds,
        work_area: Rect::new(
            bounds.x,
            bounds.y + 25,
            bounds.width,
            bounds.height.saturating_sub(25),
        ),
        scale_factor: 1.0,
        rotation: 0,
        depth: 24,
        is_monochrome: false,
        internal: name.starts_with("eDP"),
        is_asleep: false,
        refresh_rate_hz: 60,
        supported_window_depths: vec![24, 32],
        color_space: ColorSpaceInfo {
            name: "sRGB".to_string(),
            component_count: 3,
        },
    }
}
