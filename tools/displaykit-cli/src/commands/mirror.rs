//! Enable or disable display mirroring.

use displaykit_display_engine::DisplayService;

pub fn run(first: u32, second: Option<u32>, enable: bool) -> anyhow::Result<()> {
    let service = DisplayService::new();
    service.mirror(enable, first, second)?;

    if enable {
        match second {
            Some(second) => println!("Display {first} now mirrors display {second}."),
            None => println!("Display {first} now mirrors the default target."),
        }
    } else {
        println!("Mirroring disabled for display {first}.");
    }

    Ok(())
}
