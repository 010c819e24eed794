//! Show details for one display.

use displaykit_display_engine::DisplayService;
use displaykit_platform_core::Display;

pub fn run(id: u32, json: bool) -> anyhow::Result<()> {
    let service = DisplayService::new();
    let display = service.display_from_id(id)?;
    print_display(&display, json)
}

pub fn run_primary(json: bool) -> anyhow::Result<()> {
    let service = DisplayService::new();
    let display = service.primary_display()?;
    print_display(&display, json)
}

fn print_display(d: &Display, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(d)?);
        return Ok(());
    }

    println!("Display: {}", d.name);
    println!("  ID: {}", d.id);
    println!(
        "  Bounds: {}x{} at ({}, {})",
        d.bounds.width, d.bounds.height, d.bounds.x, d.bounds.y
    );
    println!(
        "  Work area: {}x{} at ({}, {})",
        d.work_area.width, d.work_area.height, d.work_area.x, d.work_area.y
    );
    println!("  Scale factor: {}", d.scale_factor);
    println!("  Rotation: {} deg", d.rotation);
    println!("  Refresh rate: {} Hz", d.refresh_rate_hz);
    println!("  Depth: {} bpp", d.depth);
    println!(
        "  Color space: {} ({} components)",
        d.color_space.name, d.color_space.component_count
    );
    println!(
        "  Window depths: {}",
        d.supported_window_depths
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("  Internal: {}", d.internal);
    println!("  Monochrome: {}", d.is_monochrome);
    println!("  Asleep: {}", d.is_asleep);

    Ok(())
}
