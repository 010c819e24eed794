//! DisplayKit Linux Platform Integration
//!
//! Platform-specific implementations for Linux:
//! - **Display Detection:** Monitor enumeration via the window system
//! - **Frame Capture:** Screen readback and image encoding
//! - **Permissions:** Capability detection and user guidance
//!
//! Works on X11 directly; on Wayland, capture goes through the compositor's
//! screenshot interface and may prompt the user for consent.

pub mod capture;
pub mod display;
pub mod permissions;

pub use display::*;
