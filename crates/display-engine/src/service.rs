//! Typed display operations over the platform backend.

use displaykit_common::error::{DisplaykitError, DisplaykitResult};
use displaykit_platform_core::{Display, DisplayId, Rect, ScreenshotOptions};

use crate::backend::{self, DisplayBackend};

/// Stateless facade over one [`DisplayBackend`].
///
/// Holds no display state of its own: every operation asks the backend
/// afresh, so snapshots never go stale inside this layer. Display ids are
/// not stable across hot-plug, which makes [`DisplaykitError::NotFound`] a
/// normal outcome for a previously valid id.
pub struct DisplayService {
    backend: Box<dyn DisplayBackend>,
}

impl DisplayService {
    /// Service over the compiled-in OS backend.
    pub fn new() -> Self {
        Self::with_backend(backend::get_backend())
    }

    /// Service over an explicit backend (tests inject a fake here).
    pub fn with_backend(backend: Box<dyn DisplayBackend>) -> Self {
        Self { backend }
    }

    /// All connected displays, in backend enumeration order.
    pub fn all_displays(&self) -> DisplaykitResult<Vec<Display>> {
        self.backend.enumerate()
    }

    /// The OS-designated primary display. Its id always matches an entry
    /// of [`Self::all_displays`] taken in the same session.
    pub fn primary_display(&self) -> DisplaykitResult<Display> {
        self.backend.primary()
    }

    /// The display with the given id, or `NotFound`.
    pub fn display_from_id(&self, id: DisplayId) -> DisplaykitResult<Display> {
        match self.backend.by_id(id)? {
            Some(display) => Ok(display),
            None => Err(DisplaykitError::not_found(id)),
        }
    }

    /// Configure or stop mirroring for `first_id`.
    ///
    /// With `enable`, `first_id` mirrors `second_id` (or a backend-chosen
    /// target when `None`); without it, mirroring for `first_id` stops.
    /// Both ids must reference live displays. Idempotent: reapplying a
    /// configuration that already holds succeeds.
    pub fn mirror(
        &self,
        enable: bool,
        first_id: DisplayId,
        second_id: Option<DisplayId>,
    ) -> DisplaykitResult<()> {
        self.display_from_id(first_id)?;
        if let Some(second) = second_id {
            self.display_from_id(second)?;
        }

        tracing::debug!(enable, first_id, second_id, "Setting mirror state");
        self.backend.set_mirror(first_id, second_id, enable)
    }

    /// Capture a display into encoded image bytes.
    ///
    /// Bounds policy: a region partially overlapping the display is clipped
    /// to the intersection; a region entirely outside the display is an
    /// invalid argument. `None` captures the full display. The format
    /// defaults to png.
    pub fn screenshot(
        &self,
        id: DisplayId,
        options: &ScreenshotOptions,
    ) -> DisplaykitResult<Vec<u8>> {
        let display = self.display_from_id(id)?;
        let format = options.format.unwrap_or_default();

        let bounds = options
            .bounds
            .map(|region| clip_to_display(&region, &display))
            .transpose()?;

        tracing::debug!(id, %format, ?bounds, "Capturing screenshot");
        self.backend.capture(id, bounds, format)
    }
}

impl Default for DisplayService {
    fn default() -> Self {
        Self::new()
    }
}

fn clip_to_display(region: &Rect, display: &Display) -> DisplaykitResult<Rect> {
    region.intersect(&display.bounds).ok_or_else(|| {
        DisplaykitError::invalid_argument(format!(
            "'bounds' does not intersect display {} bounds",
            display.id
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;
    use displaykit_common::error::DisplaykitError;
    use displaykit_platform_core::ImageFormat;
    use image::GenericImageView;

    fn service() -> DisplayService {
        DisplayService::with_backend(Box::new(FakeBackend::new()))
    }

    #[test]
    fn display_from_id_resolves_live_displays() {
        let service = service();
        let primary = service.primary_display().unwrap();
        assert_eq!(service.display_from_id(primary.id).unwrap().id, primary.id);
    }

    #[test]
    fn display_from_id_reports_not_found() {
        let err = service().display_from_id(9999).unwrap_err();
        assert!(matches!(err, DisplaykitError::NotFound { id: 9999 }));
    }

    #[test]
    fn mirror_rejects_dead_second_id_before_backend_call() {
        let service = service();
        let primary = service.primary_display().unwrap();
        let err = service.mirror(true, primary.id, Some(9999)).unwrap_err();
        assert!(matches!(err, DisplaykitError::NotFound { id: 9999 }));
    }

    #[test]
    fn screenshot_clips_partial_overlap_to_intersection() {
        let service = service();
        // Fixture primary is 1920x1080 at the origin.
        let options = ScreenshotOptions {
            format: Some(ImageFormat::Png),
            bounds: Some(Rect::new(1900, -30, 100, 80)),
        };

        let bytes = service.screenshot(1, &options).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 20);
        assert_eq!(decoded.height(), 50);
    }

    #[test]
    fn screenshot_rejects_disjoint_bounds() {
        let service = service();
        let options = ScreenshotOptions {
            format: None,
            bounds: Some(Rect::new(50_000, 50_000, 10, 10)),
        };

        let err = service.screenshot(1, &options).unwrap_err();
        assert!(matches!(err, DisplaykitError::InvalidArgument { .. }));
        assert!(err.to_string().contains("does not intersect"));
    }

    #[test]
    fn screenshot_surfaces_backend_capture_failure() {
        let service =
            DisplayService::with_backend(Box::new(FakeBackend::new().with_capture_denied()));
        let err = service
            .screenshot(1, &ScreenshotOptions::default())
            .unwrap_err();
        assert!(matches!(err, DisplaykitError::Unavailable { .. }));
    }

    #[test]
    fn unavailable_backend_fails_primary_lookup() {
        let service = DisplayService::with_backend(Box::new(FakeBackend::unavailable()));
        let err = service.primary_display().unwrap_err();
        assert!(matches!(err, DisplaykitError::Unavailable { .. }));
    }
}
