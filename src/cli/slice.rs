//! Slice command implementation.
//!
//! Cuts a grid spritesheet into one PNG per tile plus a JSON tile index.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use image::RgbaImage;

use crate::error::{FxError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::write_png;
use crate::sheet::Spritesheet;
use crate::types::Colour;

/// A single tile cut from a spritesheet.
pub struct SlicedTile {
    pub name: String,
    pub index: usize,
    pub image: RgbaImage,
}

/// Slice a grid spritesheet into one PNG per tile
#[derive(Args, Debug)]
pub struct SliceArgs {
    /// Spritesheet PNG to slice
    #[arg(required = true)]
    pub input: PathBuf,

    /// Tile edge length in pixels
    #[arg(long)]
    pub tile: u32,

    /// Output directory for tiles (default: current directory)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Base name for tile files (default: input filename stem)
    #[arg(long)]
    pub name: Option<String>,

    /// Keep fully transparent tiles
    #[arg(long)]
    pub keep_empty: bool,
}

/// Returns true if every pixel in the image has alpha == 0.
fn is_fully_transparent(img: &RgbaImage) -> bool {
    img.pixels().all(|&p| Colour::from(p).is_transparent())
}

/// Cut every tile out of `sheet`, naming each `<base>-<index>`.
fn slice_tiles(sheet: &Spritesheet, base_name: &str, keep_empty: bool) -> (Vec<SlicedTile>, usize) {
    let mut tiles = Vec::with_capacity(sheet.tile_count());
    let mut skipped = 0;

    for (index, image) in sheet.tiles().enumerate() {
        if !keep_empty && is_fully_transparent(&image) {
            skipped += 1;
            continue;
        }
        tiles.push(SlicedTile {
            name: format!("{}-{}", base_name, index),
            index,
            image,
        });
    }

    (tiles, skipped)
}

pub fn run(args: SliceArgs, printer: &Printer) -> Result<Vec<SlicedTile>> {
    let path = &args.input;
    let display = display_path(path);

    if !path.exists() {
        return Err(FxError::Io {
            path: path.clone(),
            message: format!("File not found: {}", display),
        });
    }

    // Warn if not a .png file
    if path.extension().and_then(|e| e.to_str()) != Some("png") {
        printer.warning("Warning", &format!("{} does not have a .png extension", display));
    }

    printer.status("Loading", &display);
    let sheet = Spritesheet::open(path, args.tile)?;

    if sheet.tile_count() == 0 {
        return Err(FxError::Build {
            message: format!("{} has no whole {}x{} tiles", display, args.tile, args.tile),
            help: Some("Check --tile against the image dimensions".to_string()),
        });
    }

    let output = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
    if !output.exists() {
        fs::create_dir_all(&output).map_err(|e| FxError::Io {
            path: output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let base_name = args.name.clone().unwrap_or_else(|| {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("sprite")
            .to_string()
    });

    printer.status(
        "Slicing",
        &format!(
            "{}x{} grid ({}x{} tiles)",
            sheet.columns(),
            sheet.rows(),
            args.tile,
            args.tile
        ),
    );

    let (tiles, skipped) = slice_tiles(&sheet, &base_name, args.keep_empty);

    for tile in &tiles {
        let tile_path = output.join(format!("{}.png", tile.name));
        write_png(&tile.image, &tile_path, 1)?;
        printer.verbose("Wrote", &display_path(&tile_path));
    }

    let index_path = output.join(format!("{}.tiles.json", base_name));
    sheet.index().write_json(&index_path)?;

    if skipped > 0 {
        printer.info(
            "Finished",
            &format!(
                "{} ({} empty, skipped)",
                plural(tiles.len(), "tile", "tiles"),
                skipped
            ),
        );
    } else {
        printer.info("Finished", &plural(tiles.len(), "tile", "tiles"));
    }

    Ok(tiles)
}
