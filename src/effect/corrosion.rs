//! Corrosion: a seeded cellular automaton confined to the sprite.
//!
//! Random sprite pixels are seeded, then each generation an uncorroded
//! sprite pixel turns with probability `corroded neighbours / 8`. The
//! automaton reads one generation and writes the other, swapping them after
//! every sweep.

use image::{ImageBuffer, RgbaImage};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::Colour;

use super::grid::{neighbourhood, Silhouette};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corrosion {
    pub colour: Colour,
    /// Number of automaton generations.
    pub iterations: usize,
    /// Number of sprite pixels corroded before the first generation.
    pub seeds: usize,
}

impl Corrosion {
    pub const DEFAULT_ITERATIONS: usize = 8;
    pub const DEFAULT_SEEDS: usize = 4;

    pub fn new(colour: Colour) -> Self {
        Self {
            colour,
            iterations: Self::DEFAULT_ITERATIONS,
            seeds: Self::DEFAULT_SEEDS,
        }
    }

    /// Run the automaton over `layer`, returning the corroded pixels painted
    /// in `colour` on an otherwise transparent overlay.
    pub fn apply<R: Rng + ?Sized>(&self, layer: &RgbaImage, rng: &mut R) -> RgbaImage {
        let silhouette = Silhouette::new(layer);
        let (width, height) = (silhouette.width(), silhouette.height());
        let mut cells = Generations::new(width, height);

        self.seed(&silhouette, &mut cells, rng);

        for _ in 0..self.iterations {
            cells.step(&silhouette, rng);
            cells.swap();
        }

        let mut overlay: RgbaImage = ImageBuffer::new(width, height);
        for (x, y, pixel) in overlay.enumerate_pixels_mut() {
            if cells.previous[cells.offset(x, y)] {
                *pixel = self.colour.into();
            }
        }
        overlay
    }

    /// Visit cells in random order, marking occupied ones until the seed
    /// budget runs out or every cell has been visited.
    fn seed<R: Rng + ?Sized>(
        &self,
        silhouette: &Silhouette<'_>,
        cells: &mut Generations,
        rng: &mut R,
    ) {
        let mut order: Vec<usize> = (0..cells.current.len()).collect();
        order.shuffle(rng);

        let mut budget = self.seeds;
        for offset in order {
            if budget == 0 {
                break;
            }
            let (x, y) = cells.coords(offset);
            if silhouette.is_occupied(x.into(), y.into()) {
                cells.current[offset] = true;
                budget -= 1;
            }
        }
    }
}

/// Double-buffered automaton state over the layer's bounds.
struct Generations {
    width: u32,
    height: u32,
    current: Vec<bool>,
    previous: Vec<bool>,
}

impl Generations {
    fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            current: vec![false; len],
            previous: vec![false; len],
        }
    }

    /// Write the next generation into `current`, reading only `previous`.
    fn step<R: Rng + ?Sized>(&mut self, silhouette: &Silhouette<'_>, rng: &mut R) {
        for y in 0..self.height {
            for x in 0..self.width {
                if !silhouette.is_occupied(x.into(), y.into()) {
                    continue;
                }

                let offset = self.offset(x, y);
                if self.previous[offset] {
                    self.current[offset] = true;
                    continue;
                }

                let corroded = neighbourhood(x, y, self.width, self.height)
                    .filter(|&(nx, ny)| self.previous[self.offset(nx, ny)])
                    .count();

                if rng.random_range(0..8usize) < corroded {
                    self.current[offset] = true;
                }
            }
        }
    }

    fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.previous);
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn coords(&self, offset: usize) -> (u32, u32) {
        let width = self.width as usize;
        ((offset % width) as u32, (offset / width) as u32)
    }
}
