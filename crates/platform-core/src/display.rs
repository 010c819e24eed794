//! Display snapshot model and screenshot value types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::geometry::Rect;

/// Stable handle to a display for the duration of a process session.
///
/// Ids are assigned by the OS window system and are not guaranteed stable
/// across hardware reconfiguration (hot-plug).
pub type DisplayId = u32;

/// Color space of a display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSpaceInfo {
    /// Human-readable color space name (e.g. "sRGB").
    pub name: String,
    /// Number of color components, excluding alpha.
    pub component_count: u32,
}

/// Immutable snapshot of one physical or virtual output device at query
/// time.
///
/// Serialized with camelCase field names, the wire contract of the
/// scripting surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Display {
    /// Stable id used to address subsequent mirror/screenshot calls.
    pub id: DisplayId,

    /// Human-readable name.
    pub name: String,

    /// Full display rectangle in virtual-screen coordinates.
    pub bounds: Rect,

    /// Subset of `bounds` excluding OS-reserved regions (menu bars, docks,
    /// task bars).
    pub work_area: Rect,

    /// Pixel density multiplier (e.g. 1.0, 1.25, 2.0).
    pub scale_factor: f64,

    /// Rotation in degrees; one of 0, 90, 180, 270 in practice.
    pub rotation: u32,

    /// Bits per pixel.
    pub depth: u32,

    /// Whether the display renders grayscale only.
    pub is_monochrome: bool,

    /// Whether this is a built-in panel rather than an external monitor.
    pub internal: bool,

    /// Whether the display is currently asleep.
    pub is_asleep: bool,

    /// Refresh rate in Hz; 0 when unknown.
    #[serde(rename = "refreshRate")]
    pub refresh_rate_hz: u32,

    /// Window depths the display supports, in preference order.
    pub supported_window_depths: Vec<u32>,

    /// Color space description.
    pub color_space: ColorSpaceInfo,
}

/// Image formats a screenshot can be encoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Jpeg,
    Tiff,
}

/// Formats accepted by [`ImageFormat::from_str`], in the order error
/// messages list them.
pub const SUPPORTED_FORMATS: [&str; 3] = ["jpeg", "tiff", "png"];

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Tiff => "tiff",
        }
    }

    /// Conventional file extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Tiff => "tiff",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(ImageFormat::Png),
            "jpeg" => Ok(ImageFormat::Jpeg),
            "tiff" => Ok(ImageFormat::Tiff),
            _ => Err(format!(
                "'format' must be one of {}",
                SUPPORTED_FORMATS.join(", ")
            )),
        }
    }
}

/// Per-call screenshot options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenshotOptions {
    /// Encoding format; `None` selects the configured default (png).
    pub format: Option<ImageFormat>,

    /// Capture region in virtual-screen coordinates; `None` captures the
    /// full display.
    pub bounds: Option<Rect>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_display() -> Display {
        Display {
            id: 7,
            name: "Built-in Display".to_string(),
            bounds: Rect::new(0, 0, 2560, 1600),
            work_area: Rect::new(0, 25, 2560, 1575),
            scale_factor: 2.0,
            rotation: 0,
            depth: 24,
            is_monochrome: false,
            internal: true,
            is_asleep: false,
            refresh_rate_hz: 60,
            supported_window_depths: vec![24, 30],
            color_space: ColorSpaceInfo {
                name: "sRGB".to_string(),
                component_count: 3,
            },
        }
    }

    #[test]
    fn display_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample_display()).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["workArea"]["y"], 25);
        assert_eq!(json["scaleFactor"], 2.0);
        assert_eq!(json["isMonochrome"], false);
        assert_eq!(json["refreshRate"], 60);
        assert_eq!(json["supportedWindowDepths"][0], 24);
        assert_eq!(json["colorSpace"]["componentCount"], 3);
    }

    #[test]
    fn image_format_round_trips_through_from_str() {
        for name in SUPPORTED_FORMATS {
            let format: ImageFormat = name.parse().unwrap();
            assert_eq!(format.as_str(), name);
        }
    }

    #[test]
    fn image_format_rejects_unknown_names() {
        let err = "bmp".parse::<ImageFormat>().unwrap_err();
        assert_eq!(err, "'format' must be one of jpeg, tiff, png");
    }

    #[test]
    fn default_format_is_png() {
        assert_eq!(ImageFormat::default(), ImageFormat::Png);
    }
}
