//! Directional growth: flames rising off a sprite and drips falling from it.
//!
//! Rows are scanned starting at the edge the effect grows away from. Each
//! empty pixel looks one row back along the growth axis: a sprite pixel
//! there seeds the first gradient colour, an effect pixel there continues
//! the ramp one step further, subject to thinning.

use image::RgbaImage;
use rand::Rng;

use crate::error::Result;
use crate::types::{Colour, Gradient};

use super::grid::{neighbourhood, Silhouette, StepGrid};
use super::{check_probability, check_steps};

/// Which way along the vertical axis an effect grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0 (flames).
    Up,
    /// Towards the last row (drips).
    Down,
}

impl Direction {
    /// Row delta of a single growth step.
    fn row_step(self) -> i64 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }

    /// Rows in scan order: leading edge first.
    fn scan_rows(self, height: u32) -> Vec<u32> {
        match self {
            Direction::Up => (0..height).rev().collect(),
            Direction::Down => (0..height).collect(),
        }
    }
}

/// Stochastic thinning applied before a pixel continues the gradient.
///
/// A pixel whose 3x3 block holds fewer than `sparse_neighbours` filled
/// pixels (sprite or effect) is dropped with probability `sparse_skip`.
/// Independently, any pixel is dropped with probability `skip`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thinning {
    pub sparse_neighbours: usize,
    pub sparse_skip: f64,
    pub skip: f64,
}

impl Thinning {
    /// Thinning that never drops a pixel.
    pub const NONE: Self = Self {
        sparse_neighbours: 0,
        sparse_skip: 0.0,
        skip: 0.0,
    };

    pub const FLAME: Self = Self {
        sparse_neighbours: 3,
        sparse_skip: 0.5,
        skip: 0.1,
    };

    pub const DRIP: Self = Self {
        sparse_neighbours: 3,
        sparse_skip: 0.5,
        skip: 0.2,
    };

    /// Roll for whether a pixel with `neighbours` filled cells is dropped.
    ///
    /// Draws lazily: the sparse roll only happens for sparse pixels, and the
    /// general roll only if the sparse roll did not already drop it.
    pub fn should_skip<R: Rng + ?Sized>(&self, neighbours: usize, rng: &mut R) -> bool {
        (neighbours < self.sparse_neighbours && rng.random::<f64>() < self.sparse_skip)
            || rng.random::<f64>() < self.skip
    }

    pub fn validate(&self) -> Result<()> {
        check_probability("sparse_skip", self.sparse_skip)?;
        check_probability("skip", self.skip)
    }
}

/// Gradient growth along one vertical direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Growth {
    /// Number of gradient colours.
    pub steps: usize,
    pub direction: Direction,
    pub thinning: Thinning,
}

impl Growth {
    pub const FLAME_STEPS: usize = 10;
    pub const DRIP_STEPS: usize = 15;

    /// Upward growth over a 10-colour ramp.
    pub fn flame() -> Self {
        Self {
            steps: Self::FLAME_STEPS,
            direction: Direction::Up,
            thinning: Thinning::FLAME,
        }
    }

    /// Downward growth over a 15-colour ramp.
    pub fn drip() -> Self {
        Self {
            steps: Self::DRIP_STEPS,
            direction: Direction::Down,
            thinning: Thinning::DRIP,
        }
    }

    pub fn with_thinning(mut self, thinning: Thinning) -> Self {
        self.thinning = thinning;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_steps(self.steps)?;
        self.thinning.validate()
    }

    /// Grow a `from` -> `to` gradient off `layer`, returning the overlay.
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
        let (width, height) = (silhouette.width(), silhouette.height());
        let mut grid = StepGrid::new(width, height);
        let step = self.direction.row_step();

        for y in self.direction.scan_rows(height) {
            for x in 0..width {
                let (xi, yi) = (i64::from(x), i64::from(y));
                if silhouette.is_occupied(xi, yi) {
                    continue;
                }

                // The pixel this one would grow out of.
                let source = yi - step;

                if silhouette.is_occupied(xi, source) {
                    grid.set(x, y, 0);
                    continue;
                }

                let Some(index) = grid.get(xi, source) else {
                    continue;
                };

                let neighbours = neighbourhood(x, y, width, height)
                    .filter(|&(nx, ny)| {
                        let (nx, ny) = (i64::from(nx), i64::from(ny));
                        silhouette.is_occupied(nx, ny) || grid.is_set(nx, ny)
                    })
                    .count();

                if self.thinning.should_skip(neighbours, rng) {
                    continue;
                }

                if let Some(next) = gradient.next_index(index) {
                    grid.set(x, y, next);
                }
            }
        }

        grid.render(&gradient)
    }
}
