//! Capture a display to an image file.

use std::path::PathBuf;

use displaykit_common::config::AppConfig;
use displaykit_display_engine::DisplayService;
use displaykit_platform_core::{ImageFormat, Rect, ScreenshotOptions};

pub fn run(
    id: u32,
    format: Option<String>,
    bounds: Option<String>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = AppConfig::load();

    let format_name = format.unwrap_or(config.screenshot.format);
    let format: ImageFormat = format_name
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let bounds = bounds.as_deref().map(parse_bounds).transpose()?;

    let service = DisplayService::new();
    let bytes = service.screenshot(
        id,
        &ScreenshotOptions {
            format: Some(format),
            bounds,
        },
    )?;

    let path = output.unwrap_or_else(|| {
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        config
            .screenshot
            .output_dir
            .join(format!("screenshot-{id}-{stamp}.{}", format.extension()))
    });

    std::fs::write(&path, &bytes)?;
    println!("Wrote {} bytes to {}", bytes.len(), path.display());

    Ok(())
}

/// Parse a capture region given as `X,Y,WIDTH,HEIGHT`.
fn parse_bounds(spec: &str) -> anyhow::Result<Rect> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        anyhow::bail!("bounds must be X,Y,WIDTH,HEIGHT (got '{spec}')");
    }

    let x: i32 = parts[0]
        .parse()
        .map_err(|_| anyhow::anyhow!("bounds x must be an integer (got '{}')", parts[0]))?;
    let y: i32 = parts[1]
        .parse()
        .map_err(|_| anyhow::anyhow!("bounds y must be an integer (got '{}')", parts[1]))?;
    let width: u32 = parts[2]
        .parse()
        .map_err(|_| anyhow::anyhow!("bounds width must be a non-negative integer (got '{}')", parts[2]))?;
    let height: u32 = parts[3]
        .parse()
        .map_err(|_| anyhow::anyhow!("bounds height must be a non-negative integer (got '{}')", parts[3]))?;

    Ok(Rect::new(x, y, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_spec_parses_with_negative_origin() {
        let rect = parse_bounds("-1920, 0, 1920, 1080").unwrap();
        assert_eq!(rect, Rect::new(-1920, 0, 1920, 1080));
    }

    #[test]
    fn bounds_spec_rejects_wrong_arity() {
        assert!(parse_bounds("1,2,3").is_err());
        assert!(parse_bounds("1,2,3,4,5").is_err());
    }

    #[test]
    fn bounds_spec_rejects_non_numeric_fields() {
        assert!(parse_bounds("a,0,10,10").is_err());
        assert!(parse_bounds("0,0,-10,10").is_err());
    }
}
