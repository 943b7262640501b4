//! Glow: a halo diffused outward from the sprite in every direction.
//!
//! Pass 0 rings the sprite with the first gradient colour. Each later pass
//! `k` lets well-supported halo pixels from earlier passes paint their empty
//! neighbours with colour `k`, producing concentric bands.

use image::RgbaImage;
use rand::Rng;

use crate::error::Result;
use crate::types::{Colour, Gradient};

use super::grid::{neighbourhood, Silhouette, StepGrid};
use super::{check_probability, check_steps};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    /// Number of gradient colours, one band per colour.
    pub steps: usize,
    /// Halo pixels (self included) a pixel's 3x3 block must hold from
    /// earlier bands before it may spread.
    pub min_neighbours: usize,
    /// Probability that an eligible pixel is skipped anyway.
    pub skip: f64,
}

impl Default for Glow {
    fn default() -> Self {
        Self {
            steps: 3,
            min_neighbours: 3,
            skip: 0.1,
        }
    }
}

impl Glow {
    pub fn validate(&self) -> Result<()> {
        check_steps(self.steps)?;
        check_probability("skip", self.skip)
    }

    /// Diffuse a `from` -> `to` halo around `layer`, returning the overlay.
    ///
    /// # Panics
    ///
    /// Panics if `steps` is below [`Gradient::MIN_STEPS`].
    pub fn apply<R: Rng + ?Sized>(
        &self,
        layer: &RgbaImage,
        from: Colour,
        to: Colour,
        rng: &mut R,
    ) -> RgbaImage {
        let gradient = Gradient::new(from, to, self.steps);
        let silhouette = Silhouette::new(layer);
        let mut grid = StepGrid::new(silhouette.width(), silhouette.height());

        self.seed(&silhouette, &mut grid);
        for band in 1..gradient.len() {
            self.spread(band, &silhouette, &mut grid, rng);
        }

        grid.render(&gradient)
    }

    /// Ring every sprite pixel with band 0.
    fn seed(&self, silhouette: &Silhouette<'_>, grid: &mut StepGrid) {
        let (width, height) = (silhouette.width(), silhouette.height());

        for y in 0..height {
            for x in 0..width {
                if !silhouette.is_occupied(x.into(), y.into()) {
                    continue;
                }
                for (nx, ny) in neighbourhood(x, y, width, height) {
                    let (nxi, nyi) = (i64::from(nx), i64::from(ny));
                    if !silhouette.is_occupied(nxi, nyi) && !grid.is_set(nxi, nyi) {
                        grid.set(nx, ny, 0);
                    }
                }
            }
        }
    }

    fn spread<R: Rng + ?Sized>(
        &self,
        band: usize,
        silhouette: &Silhouette<'_>,
        grid: &mut StepGrid,
        rng: &mut R,
    ) {
        let (width, height) = (silhouette.width(), silhouette.height());

        for y in 0..height {
            for x in 0..width {
                let (xi, yi) = (i64::from(x), i64::from(y));
                if silhouette.is_occupied(xi, yi) || !settled_before(grid, xi, yi, band) {
                    continue;
                }

                let support = neighbourhood(x, y, width, height)
                    .filter(|&(nx, ny)| settled_before(grid, nx.into(), ny.into(), band))
                    .count();

                if support < self.min_neighbours || rng.random::<f64>() < self.skip {
                    continue;
                }

                for (nx, ny) in neighbourhood(x, y, width, height) {
                    let (nxi, nyi) = (i64::from(nx), i64::from(ny));
                    if !silhouette.is_occupied(nxi, nyi) && !grid.is_set(nxi, nyi) {
                        grid.set(nx, ny, band);
                    }
                }
            }
        }
    }
}

/// True if `(x, y)` carries a band other than `band`. During pass `band`
/// that means a band painted by an earlier pass.
fn settled_before(grid: &StepGrid, x: i64, y: i64, band: usize) -> bool {
    grid.get(x, y).is_some_and(|i| i != band)
}
