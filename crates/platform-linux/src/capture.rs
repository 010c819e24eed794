//! Screen frame readback and image encoding.

use std::io::Cursor;

use displaykit_common::error::{DisplaykitError, DisplaykitResult};
use displaykit_platform_core::{DisplayId, ImageFormat, Rect};
use image::{DynamicImage, GenericImageView};
use xcap::Monitor;

/// Capture a display and encode it in the requested format.
///
/// `bounds`, when given, is a region in virtual-screen coordinates that the
/// caller has already clipped to the display rectangle; it is translated to
/// display-local pixels before cropping the grabbed frame.
pub fn capture_display(
    id: DisplayId,
    bounds: Option<Rect>,
    format: ImageFormat,
) -> DisplaykitResult<Vec<u8>> {
    let monitor = find_monitor(id)?;

    let frame = monitor
        .capture_image()
        .map_err(|e| DisplaykitError::unavailable(format!("screen capture failed: {e}")))?;

    tracing::debug!(
        display = id,
        width = frame.width(),
        height = frame.height(),
        "Captured frame"
    );

    let mut dynamic = DynamicImage::ImageRgba8(frame);

    if let Some(region) = bounds {
        let query = |e: xcap::XCapError| {
            DisplaykitError::unavailable(format!("failed to query display: {e}"))
        };
        let local_x = (region.x - monitor.x().map_err(query)?).max(0) as u32;
        let local_y = (region.y - monitor.y().map_err(query)?).max(0) as u32;

        // The grabbed frame can disagree with the advertised bounds on
        // fractional-scale setups; clamp the crop to what was actually read.
        let width = region.width.min(dynamic.width().saturating_sub(local_x));
        let height = region.height.min(dynamic.height().saturating_sub(local_y));
        if width == 0 || height == 0 {
            return Err(DisplaykitError::unavailable(
                "capture region lies outside the grabbed frame",
            ));
        }

        dynamic = dynamic.crop_imm(local_x, local_y, width, height);
    }

    encode_frame(dynamic, format)
}

/// Encode a frame into the requested format.
pub fn encode_frame(frame: DynamicImage, format: ImageFormat) -> DisplaykitResult<Vec<u8>> {
    // The JPEG encoder rejects alpha channels.
    let frame = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(frame.to_rgb8()),
        _ => frame,
    };

    let mut bytes = Vec::new();
    frame
        .write_to(&mut Cursor::new(&mut bytes), to_image_format(format))
        .map_err(|e| DisplaykitError::unavailable(format!("failed to encode screenshot: {e}")))?;

    Ok(bytes)
}

fn to_image_format(format: ImageFormat) -> image::ImageFormat {
    match format {
        ImageFormat::Png => image::ImageFormat::Png,
        ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        ImageFormat::Tiff => image::ImageFormat::Tiff,
    }
}

fn find_monitor(id: DisplayId) -> DisplaykitResult<Monitor> {
    let monitors = Monitor::all()
        .map_err(|e| DisplaykitError::unavailable(format!("failed to enumerate displays: {e}")))?;

    for monitor in monitors {
        let monitor_id = monitor
            .id()
            .map_err(|e| DisplaykitError::unavailable(format!("failed to query display: {e}")))?;
        if monitor_id == id {
            return Ok(monitor);
        }
    }

    Err(DisplaykitError::not_found(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn test_frame() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(16, 8, |x, y| {
            image::Rgba([x as u8 * 10, y as u8 * 20, 0, 255])
        }))
    }

    #[test]
    fn png_encoding_round_trips() {
        let bytes = encode_frame(test_frame(), ImageFormat::Png).unwrap();
        assert!(!bytes.is_empty());

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 16);
        assert_eq!(decoded.height(), 8);
        assert_eq!(
            image::guess_format(&bytes).unwrap(),
            image::ImageFormat::Png
        );
    }

    #[test]
    fn jpeg_encoding_drops_alpha_and_succeeds() {
        let bytes = encode_frame(test_frame(), ImageFormat::Jpeg).unwrap();
        assert_eq!(
            image::guess_format(&bytes).unwrap(),
            image::ImageFormat::Jpeg
        );
    }

    #[test]
    fn tiff_encoding_succeeds() {
        let bytes = encode_frame(test_frame(), ImageFormat::Tiff).unwrap();
        assert_eq!(
            image::guess_format(&bytes).unwrap(),
            image::ImageFormat::Tiff
        );
    }
}
