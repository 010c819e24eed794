//! List all connected displays.

use displaykit_display_engine::DisplayService;

pub fn run(json: bool) -> anyhow::Result<()> {
    let service = DisplayService::new();
    let displays = service.all_displays()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&displays)?);
        return Ok(());
    }

    if displays.is_empty() {
        println!("No displays detected.");
        return Ok(());
    }

    // Primary lookup is best-effort here; a listing should still work when
    // the platform cannot name a primary.
    let primary_id = service.primary_display().ok().map(|d| d.id);

    println!("Displays ({}):", displays.len());
    for d in &displays {
        println!(
            "  [{}] {} {}x{} at ({}, {}) @ {}Hz (scale: {}x){}{}",
            d.id,
            d.name,
            d.bounds.width,
            d.bounds.height,
            d.bounds.x,
            d.bounds.y,
            d.refresh_rate_hz,
            d.scale_factor,
            if d.internal { " [internal]" } else { "" },
            if primary_id == Some(d.id) {
                " (primary)"
            } else {
                ""
            }
        );
    }

    Ok(())
}
