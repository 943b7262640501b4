//! Grid spritesheets.
//!
//! A spritesheet is an image tiled into square cells of a fixed size. Tiles
//! are numbered row-major from the top-left; partial cells along the right
//! and bottom edges are ignored.

use std::fs;
use std::path::Path;

use image::{imageops, RgbaImage};
use serde::Serialize;

use crate::error::{FxError, Result};

/// A decoded spritesheet sliced into `tile_size` x `tile_size` tiles.
#[derive(Debug, Clone)]
pub struct Spritesheet {
    image: RgbaImage,
    tile_size: u32,
    columns: u32,
    rows: u32,
}

impl Spritesheet {
    /// Decode an encoded image (PNG or any format `image` can guess).
    pub fn from_bytes(bytes: &[u8], tile_size: u32) -> Result<Self> {
        let image = image::load_from_memory(bytes)?.to_rgba8();
        Self::from_image(image, tile_size)
    }

    /// Read and decode an image file.
    pub fn open(path: &Path, tile_size: u32) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| FxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read spritesheet: {}", e),
        })?;
        Self::from_bytes(&bytes, tile_size)
    }

    /// Wrap an already-decoded image.
    pub fn from_image(image: RgbaImage, tile_size: u32) -> Result<Self> {
        if tile_size == 0 {
            return Err(FxError::Config {
                message: "Tile size must be non-zero".to_string(),
                help: Some("Pass the edge length of one tile in pixels, e.g. 16".to_string()),
            });
        }

        Ok(Self {
            columns: image.width() / tile_size,
            rows: image.height() / tile_size,
            image,
            tile_size,
        })
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of whole tiles in the sheet.
    pub fn tile_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Pixel origin of tile `index`, if it exists.
    pub fn tile_origin(&self, index: usize) -> Option<(u32, u32)> {
        if index >= self.tile_count() {
            return None;
        }
        let columns = self.columns as usize;
        let col = (index % columns) as u32;
        let row = (index / columns) as u32;
        Some((col * self.tile_size, row * self.tile_size))
    }

    /// Copy tile `index` out into its own image.
    pub fn tile(&self, index: usize) -> Option<RgbaImage> {
        let (x, y) = self.tile_origin(index)?;
        Some(imageops::crop_imm(&self.image, x, y, self.tile_size, self.tile_size).to_image())
    }

    /// All tiles in index order.
    pub fn tiles(&self) -> impl Iterator<Item = RgbaImage> + '_ {
        (0..self.tile_count()).filter_map(move |index| self.tile(index))
    }

    /// Describe the sheet's layout for serialisation.
    pub fn index(&self) -> TileIndex {
        let tiles = (0..self.tile_count())
            .filter_map(|index| {
                let (x, y) = self.tile_origin(index)?;
                Some(TileEntry {
                    index,
                    col: x / self.tile_size,
                    row: y / self.tile_size,
                    x,
                    y,
                })
            })
            .collect();

        TileIndex {
            image: Size {
                w: self.image.width(),
                h: self.image.height(),
            },
            tile_size: self.tile_size,
            columns: self.columns,
            rows: self.rows,
            tiles,
        }
    }
}

/// Serialisable layout of a spritesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileIndex {
    pub image: Size,
    #[serde(rename = "tileSize")]
    pub tile_size: u32,
    pub columns: u32,
    pub rows: u32,
    pub tiles: Vec<TileEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileEntry {
    pub index: usize,
    pub col: u32,
    pub row: u32,
    pub x: u32,
    pub y: u32,
}

impl TileIndex {
    /// Write the index as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| FxError::Build {
            message: format!("Failed to serialize tile index: {}", e),
            help: None,
        })?;
        fs::write(path, json).map_err(|e| FxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write tile index: {}", e),
        })
    }
}
