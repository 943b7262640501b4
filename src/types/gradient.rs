//! Ordered colour ramps used by the effect engines.

use super::Colour;

/// An ordered sequence of colours interpolated between two endpoints.
///
/// Entry `i` of an `n`-step gradient is `start.lerp(end, i / (n - 1))`, so the
/// first entry is always `start` and the last is always `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    stops: Vec<Colour>,
}

impl Gradient {
    /// Smallest number of steps a gradient can have.
    pub const MIN_STEPS: usize = 2;

    /// Build a gradient of `steps` colours from `start` to `end` inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `steps` is less than [`Gradient::MIN_STEPS`]. Configuration
    /// types validate their step counts before reaching this point.
    pub fn new(start: Colour, end: Colour, steps: usize) -> Self {
        assert!(
            steps >= Self::MIN_STEPS,
            "a gradient needs at least {} steps, got {}",
            Self::MIN_STEPS,
            steps
        );

        let last = (steps - 1) as f64;
        let stops = (0..steps)
            .map(|i| start.lerp(end, i as f64 / last))
            .collect();

        Self { stops }
    }

    /// Number of colours in the gradient.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false; a gradient has at least two stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Colour at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<Colour> {
        self.stops.get(index).copied()
    }

    /// Index following `index`, or `None` if `index` is the last stop.
    pub fn next_index(&self, index: usize) -> Option<usize> {
        let next = index + 1;
        (next < self.stops.len()).then_some(next)
    }

    /// All colours in order.
    pub fn colours(&self) -> &[Colour] {
        &self.stops
    }
}
