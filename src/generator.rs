use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

use crate::color::parse_color;

/// Border drawn around every placeholder, regardless of fill color.
pub const BORDER_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Default edge length of generated placeholders, in pixels.
pub const DEFAULT_SIZE: u32 = 32;

// Trait to abstract the generator configuration
pub trait GeneratorConfig {
    fn output_dir(&self) -> &str;
    fn size(&self) -> u32;
}

/// Render a solid `fill` raster of the given dimensions with a one-pixel
/// black border and write it to `path` as PNG, overwriting any existing
/// file. The parent directory must already exist.
pub fn generate_placeholder(path: &Path, fill: Rgb<u8>, size: (u32, u32)) -> Result<()> {
    let (width, height) = size;
    let mut img = RgbImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let on_border = x == 0 || x == width - 1 || y == 0 || y == height - 1;
            let color = if on_border { BORDER_COLOR } else { fill };
            img.put_pixel(x, y, color);
        }
    }

    img.save(path)
        .with_context(|| format!("Failed to save placeholder to {}", path.display()))?;

    println!("Created {}", path.display());

    Ok(())
}

/// Generate the fixed placeholder set for the game client: a blue square
/// for the local player and a red square for other players.
pub fn generate_placeholder_set<T: GeneratorConfig>(config: &T) -> Result<Vec<PathBuf>> {
    let output_dir = Path::new(config.output_dir());
    let size = (config.size(), config.size());

    let placeholders = [
        ("placeholder-player.png", "blue"),
        ("placeholder-other-player.png", "red"),
    ];

    let mut created = Vec::new();
    for (filename, color_name) in placeholders {
        let fill = parse_color(color_name)?;
        let path = output_dir.join(filename);

        generate_placeholder(&path, fill, size)
            .with_context(|| format!("Failed to generate {}", filename))?;

        created.push(path);
    }

    Ok(created)
}
