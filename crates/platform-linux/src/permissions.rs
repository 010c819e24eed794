//! Permission detection and guidance for Linux.
//!
//! Screenshot readback needs different access depending on the display
//! server: X11 allows direct readback, Wayland routes through the
//! compositor's screenshot portal.

use crate::display::{detect_display_server, detect_displays, DisplayServer};

/// A system capability that DisplayKit may need.
#[derive(Debug, Clone)]
pub struct Capability {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub required: bool,
    pub fix_instructions: Option<String>,
}

/// Check all capabilities and report status.
pub fn check_capabilities() -> Vec<Capability> {
    vec![
        check_graphical_session(),
        check_display_enumeration(),
        check_screenshot_portal(),
    ]
}

/// Check that a graphical session is reachable at all.
fn check_graphical_session() -> Capability {
    let available = detect_display_server() != DisplayServer::Unknown;

    Capability {
        name: "Graphical Session".to_string(),
        description: "X11 or Wayland display server connection".to_string(),
        available,
        required: true,
        fix_instructions: if !available {
            Some(
                "Ensure you are running a graphical desktop session (GNOME, KDE, etc.)".to_string(),
            )
        } else {
            None
        },
    }
}

/// Check that displays can actually be enumerated.
fn check_display_enumeration() -> Capability {
    let result = detect_displays();
    let available = matches!(&result, Ok(displays) if !displays.is_empty());

    Capability {
        name: "Display Enumeration".to_string(),
        description: "Monitor listing through the window system".to_string(),
        available,
        required: true,
        fix_instructions: match result {
            Err(e) => Some(format!("Display query failed: {e}")),
            Ok(displays) if displays.is_empty() => {
                Some("No displays reported; check monitor connections".to_string())
            }
            Ok(_) => None,
        },
    }
}

/// Check the Wayland screenshot portal prerequisites.
fn check_screenshot_portal() -> Capability {
    let on_wayland = detect_display_server() == DisplayServer::Wayland;
    // The portal lives on the session bus; without a runtime dir there is
    // no bus to talk to.
    let available = !on_wayland || std::path::Path::new("/run/user").exists();

    Capability {
        name: "Screenshot Portal".to_string(),
        description: "XDG Desktop Portal used for capture consent on Wayland".to_string(),
        available,
        required: false,
        fix_instructions: if !available {
            Some("Install xdg-desktop-portal and a compositor backend for it".to_string())
        } else {
            None
        },
    }
}

/// Print a user-friendly capability report.
pub fn print_capability_report(capabilities: &[Capability]) {
    println!("DisplayKit System Capabilities:");
    println!("{}", "-".repeat(60));

    for cap in capabilities {
        let status = if cap.available {
            "[OK]"
        } else if cap.required {
            "[MISSING - REQUIRED]"
        } else {
            "[MISSING - OPTIONAL]"
        };

        println!("  {} {}: {}", status, cap.name, cap.description);

        if let Some(ref fix) = cap.fix_instructions {
            println!("    Fix: {fix}");
        }
    }
}
