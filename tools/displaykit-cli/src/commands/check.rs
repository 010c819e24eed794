//! Check system capabilities.

use displaykit_display_engine::DisplayService;
use displaykit_platform_core::virtual_desktop_bounds;
use displaykit_platform_linux::{detect_display_server, DisplayServer};

pub fn run() -> anyhow::Result<()> {
    println!("DisplayKit System Check");
    println!("{}", "=".repeat(50));

    // Display server
    let ds = detect_display_server();
    match ds {
        DisplayServer::Wayland => println!("[OK] Display server: Wayland"),
        DisplayServer::X11 => println!("[OK] Display server: X11"),
        _ => println!("[WARN] Display server: Unknown"),
    }

    // Check displays
    let service = DisplayService::new();
    match service.all_displays() {
        Ok(displays) => {
            println!("[OK] Displays detected: {}", displays.len());
            for d in &displays {
                println!(
                    "     [{}] {} {}x{} @ {}Hz (scale: {}x){}",
                    d.id,
                    d.name,
                    d.bounds.width,
                    d.bounds.height,
                    d.refresh_rate_hz,
                    d.scale_factor,
                    if d.internal { " [internal]" } else { "" }
                );
            }

            let desktop = virtual_desktop_bounds(
                &displays.iter().map(|d| d.bounds).collect::<Vec<_>>(),
            );
            println!(
                "     Virtual desktop: {}x{} at ({}, {})",
                desktop.width, desktop.height, desktop.x, desktop.y
            );
        }
        Err(e) => println!("[WARN] Display detection failed: {e}"),
    }

    // Check permissions
    let capabilities = displaykit_platform_linux::permissions::check_capabilities();
    println!();
    displaykit_platform_linux::permissions::print_capability_report(&capabilities);

    let all_required_ok = capabilities
        .iter()
        .filter(|c| c.required)
        .all(|c| c.available);

    println!();
    if all_required_ok {
        println!("All required capabilities are available. DisplayKit is ready.");
    } else {
        println!("Some required capabilities are missing. See above for fixes.");
    }

    Ok(())
}
