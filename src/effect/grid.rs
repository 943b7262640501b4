//! Raster plumbing shared by the effect engines.

use image::{ImageBuffer, RgbaImage};

use crate::types::Gradient;

/// Read-only view of an input layer's occupied (non-transparent) pixels.
pub(crate) struct Silhouette<'a> {
    layer: &'a RgbaImage,
}

impl<'a> Silhouette<'a> {
    pub fn new(layer: &'a RgbaImage) -> Self {
        Self { layer }
    }

    pub fn width(&self) -> u32 {
        self.layer.width()
    }

    pub fn height(&self) -> u32 {
        self.layer.height()
    }

    /// True if `(x, y)` is in bounds and has non-zero alpha.
    ///
    /// Out-of-bounds coordinates read as unoccupied.
    pub fn is_occupied(&self, x: i64, y: i64) -> bool {
        in_bounds(x, y, self.width(), self.height())
            && self.layer.get_pixel(x as u32, y as u32)[3] != 0
    }
}

/// Overlay under construction, storing a gradient index per pixel instead
/// of a colour so lookups never depend on colour equality.
pub(crate) struct StepGrid {
    width: u32,
    height: u32,
    cells: Vec<Option<usize>>,
}

impl StepGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Gradient index at `(x, y)`; `None` if unset or out of bounds.
    pub fn get(&self, x: i64, y: i64) -> Option<usize> {
        if !in_bounds(x, y, self.width, self.height) {
            return None;
        }
        self.cells[self.offset(x as u32, y as u32)]
    }

    pub fn is_set(&self, x: i64, y: i64) -> bool {
        self.get(x, y).is_some()
    }

    pub fn set(&mut self, x: u32, y: u32, index: usize) {
        let offset = self.offset(x, y);
        self.cells[offset] = Some(index);
    }

    /// Paint every set cell with its gradient colour; unset cells stay
    /// fully transparent.
    pub fn render(&self, gradient: &Gradient) -> RgbaImage {
        let mut image: RgbaImage = ImageBuffer::new(self.width, self.height);
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            let cell = self.cells[self.offset(x, y)];
            if let Some(colour) = cell.and_then(|index| gradient.get(index)) {
                *pixel = colour.into();
            }
        }
        image
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

pub(crate) fn in_bounds(x: i64, y: i64, width: u32, height: u32) -> bool {
    x >= 0 && y >= 0 && x < i64::from(width) && y < i64::from(height)
}

/// The 3x3 block centred on `(x, y)`, centre included, clipped to bounds.
pub(crate) fn neighbourhood(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> impl Iterator<Item = (u32, u32)> {
    let (cx, cy) = (i64::from(x), i64::from(y));
    (-1..=1)
        .flat_map(move |dy| (-1..=1).map(move |dx| (cx + dx, cy + dy)))
        .filter(move |&(nx, ny)| in_bounds(nx, ny, width, height))
        .map(|(nx, ny)| (nx as u32, ny as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use image::Rgba;

    #[test]
    fn test_silhouette_out_of_bounds_is_unoccupied() {
        let layer = RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 255]));
        let silhouette = Silhouette::new(&layer);

        assert!(silhouette.is_occupied(0, 0));
        assert!(silhouette.is_occupied(1, 1));
        assert!(!silhouette.is_occupied(-1, 0));
        assert!(!silhouette.is_occupied(0, 2));
        assert!(!silhouette.is_occupied(2, 0));
    }

    #[test]
    fn test_silhouette_uses_alpha_only() {
        let mut layer = RgbaImage::from_pixel(2, 1, Rgba([255, 255, 255, 0]));
        layer.put_pixel(1, 0, Rgba([0, 0, 0, 1]));
        let silhouette = Silhouette::new(&layer);

        assert!(!silhouette.is_occupied(0, 0));
        assert!(silhouette.is_occupied(1, 0));
    }

    #[test]
    fn test_neighbourhood_interior() {
        let cells: Vec<_> = neighbourhood(1, 1, 3, 3).collect();
        assert_eq!(cells.len(), 9);
        assert!(cells.contains(&(1, 1)));
    }

    #[test]
    fn test_neighbourhood_corner_is_clipped() {
        let cells: Vec<_> = neighbourhood(0, 0, 3, 3).collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_step_grid_render() {
        let gradient = Gradient::new(Colour::BLACK, Colour::WHITE, 2);
        let mut grid = StepGrid::new(2, 1);
        grid.set(1, 0, 1);

        assert!(!grid.is_set(0, 0));
        assert_eq!(grid.get(1, 0), Some(1));
        assert_eq!(grid.get(5, 0), None);

        let image = grid.render(&gradient);
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(image.get_pixel(1, 0).0, [255, 255, 255, 255]);
    }
}
