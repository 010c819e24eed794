//! Display detection and metadata queries.

use displaykit_common::error::{DisplaykitError, DisplaykitResult};
use displaykit_platform_core::{ColorSpaceInfo, Display, DisplayId, Rect};
use xcap::Monitor;

/// Window depths advertised for X11/Wayland outputs. Neither display server
/// exposes the per-display depth list the way CoreGraphics does, so this is
/// the TrueColor set every mainstream compositor supports.
const DEFAULT_WINDOW_DEPTHS: [u32; 2] = [24, 32];

/// Detect connected displays.
///
/// Enumeration order is whatever the window system reports; it stays stable
/// within a session unless hardware is plugged or unplugged.
pub fn detect_displays() -> DisplaykitResult<Vec<Display>> {
    tracing::debug!("Detecting displays");

    let monitors = Monitor::all()
        .map_err(|e| DisplaykitError::unavailable(format!("failed to enumerate displays: {e}")))?;

    monitors.iter().map(snapshot_from_monitor).collect()
}

/// Get the OS-designated primary display.
pub fn primary_display() -> DisplaykitResult<Display> {
    let monitors = Monitor::all()
        .map_err(|e| DisplaykitError::unavailable(format!("failed to enumerate displays: {e}")))?;

    for monitor in &monitors {
        if monitor
            .is_primary()
            .map_err(|e| DisplaykitError::unavailable(format!("failed to query display: {e}")))?
        {
            return snapshot_from_monitor(monitor);
        }
    }

    Err(DisplaykitError::unavailable(
        "the window system reports no primary display",
    ))
}

/// Look up a display by id. `Ok(None)` means no such display exists right
/// now, which is expected after hot-plug.
pub fn display_from_id(id: DisplayId) -> DisplaykitResult<Option<Display>> {
    let monitors = Monitor::all()
        .map_err(|e| DisplaykitError::unavailable(format!("failed to enumerate displays: {e}")))?;

    for monitor in &monitors {
        let monitor_id = monitor
            .id()
            .map_err(|e| DisplaykitError::unavailable(format!("failed to query display: {e}")))?;
        if monitor_id == id {
            return snapshot_from_monitor(monitor).map(Some);
        }
    }

    Ok(None)
}

/// Configure or stop display mirroring.
///
/// Neither X11 (short of RandR CRTC reprogramming) nor Wayland exposes a
/// portable mirroring call, so this backend rejects the request.
pub fn set_mirror(
    _first: DisplayId,
    _second: Option<DisplayId>,
    _enable: bool,
) -> DisplaykitResult<()> {
    Err(DisplaykitError::unsupported(
        "display mirroring is not supported on the X11/Wayland backend",
    ))
}

/// Build a snapshot from one monitor handle.
///
/// X11/Wayland expose far less metadata than CoreGraphics: work area, depth,
/// color space, and sleep state are filled with best-effort values.
fn snapshot_from_monitor(monitor: &Monitor) -> DisplaykitResult<Display> {
    let query =
        |e: xcap::XCapError| DisplaykitError::unavailable(format!("failed to query display: {e}"));

    let name = monitor.name().map_err(query)?;
    let bounds = Rect::new(
        monitor.x().map_err(query)?,
        monitor.y().map_err(query)?,
        monitor.width().map_err(query)?,
        monitor.height().map_err(query)?,
    );

    Ok(Display {
        id: monitor.id().map_err(query)?,
        internal: is_internal_panel(&name),
        name,
        bounds,
        // No portable work-area query; panels/docks are compositor-side.
        work_area: bounds,
        scale_factor: monitor.scale_factor().map_err(query)? as f64,
        rotation: normalize_rotation(monitor.rotation().map_err(query)?),
        depth: 24,
        is_monochrome: false,
        is_asleep: false,
        refresh_rate_hz: monitor.frequency().map_err(query)?.round() as u32,
        supported_window_depths: DEFAULT_WINDOW_DEPTHS.to_vec(),
        color_space: ColorSpaceInfo {
            name: "sRGB".to_string(),
            component_count: 3,
        },
    })
}

/// Map a reported rotation to degrees in {0, 90, 180, 270}.
fn normalize_rotation(rotation: f32) -> u32 {
    let degrees = rotation.rem_euclid(360.0).round() as u32;
    (degrees / 90) * 90 % 360
}

/// Built-in panels show up under connector names like eDP-1 or LVDS-1.
fn is_internal_panel(name: &str) -> bool {
    ["eDP", "LVDS", "DSI"]
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

/// Detect the current display server.
pub fn detect_display_server() -> DisplayServer {
    if std::env::var("WAYLAND_DISPLAY").is_ok() {
        DisplayServer::Wayland
    } else if std::env::var("DISPLAY").is_ok() {
        DisplayServer::X11
    } else {
        DisplayServer::Unknown
    }
}

/// Display server type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayServer {
    Wayland,
    X11,
    Unknown,
}
