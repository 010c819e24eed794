use displaykit_common::error::DisplaykitResult;
use displaykit_platform_core::{Display, DisplayId, ImageFormat, Rect};

/// Abstract interface for platform-specific display capabilities.
///
/// All methods are synchronous request/response: they either return a value
/// or fail immediately. Implementations own any shared OS resources and are
/// responsible for their own thread-safety; the engine never caches state
/// across calls.
pub trait DisplayBackend: Send + Sync {
    /// Enumerate connected displays. Order is backend-defined but stable
    /// within a session absent hardware changes. An empty vector is valid.
    fn enumerate(&self) -> DisplaykitResult<Vec<Display>>;

    /// Get the OS-designated primary display.
    fn primary(&self) -> DisplaykitResult<Display>;

    /// Look up a display by id. `Ok(None)` means the id does not reference
    /// a live display (normal after hot-plug).
    fn by_id(&self, id: DisplayId) -> DisplaykitResult<Option<Display>>;

    /// Configure `first` to mirror `second` (backend-chosen target when
    /// `None`), or stop mirroring `first` when `enable` is false.
    /// Reapplying a configuration that already holds is a no-op success.
    fn set_mirror(
        &self,
        first: DisplayId,
        second: Option<DisplayId>,
        enable: bool,
    ) -> DisplaykitResult<()>;

    /// Capture a region of a display and encode it in the given format.
    /// `bounds` is in virtual-screen coordinates, already clipped to the
    /// display rectangle by the caller; `None` captures the full display.
    fn capture(
        &self,
        id: DisplayId,
        bounds: Option<Rect>,
        format: ImageFormat,
    ) -> DisplaykitResult<Vec<u8>>;
}

pub mod linux;
pub mod macos;
pub mod windows;

pub use linux::LinuxBackend;
pub use macos::MacOSBackend;
pub use windows::WindowsBackend;

/// Get the platform-specific backend.
pub fn get_backend() -> Box<dyn DisplayBackend> {
    #[cfg(target_os = "linux")]
    {
        Box::new(LinuxBackend::new())
    }
    #[cfg(target_os = "windows")]
    {
        Box::new(WindowsBackend::new())
    }
    #[cfg(target_os = "macos")]
    {
        Box::new(MacOSBackend::new())
    }
    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    {
        // Fallback or panic, though this code path should be unreachable on supported platforms
        panic!("Unsupported platform");
    }
}
