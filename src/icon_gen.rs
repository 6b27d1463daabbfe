use crate::png::{self, IconSpec};
use anyhow::{ensure, Context, Result};
use std::fs;
use std::path::Path;

/// The size/color configuration for one generation run.
///
/// Sizes and palette are passed in rather than hard-coded in the generation
/// loop so tests can substitute their own lists. When there are more sizes
/// than colors the palette cycles.
#[derive(Debug, Clone)]
pub struct IconSet {
    pub sizes: Vec<u32>,
    pub palette: Vec<(u8, u8, u8)>,
}

impl Default for IconSet {
    /// The stock placeholder set: blue, purple and green squares.
    fn default() -> Self {
        Self {
            sizes: vec![16, 48, 128],
            palette: vec![(102, 126, 234), (118, 75, 162), (76, 175, 80)],
        }
    }
}

/// Generate one `icon<size>.png` per configured size into `out_dir`,
/// overwriting any existing file of that name.
///
/// A filesystem failure aborts the remaining iterations; files already
/// written are left in place.
pub fn generate_icons(set: &IconSet, out_dir: &Path) -> Result<()> {
    ensure!(!set.palette.is_empty(), "Icon palette must not be empty");

    fs::create_dir_all(out_dir).context("Can't create output directory")?;

    for (i, &size) in set.sizes.iter().enumerate() {
        let color = set.palette[i % set.palette.len()];
        let buffer = png::encode(&IconSpec::square(size, color))?;

        let filename = format!("icon{size}.png");
        fs::write(out_dir.join(&filename), &buffer)
            .with_context(|| format!("Failed to write {filename}"))?;

        println!(
            "Created {filename} ({size}x{size}) with color ({}, {}, {})",
            color.0, color.1, color.2
        );
    }

    println!("All icons created successfully!");
    Ok(())
}
