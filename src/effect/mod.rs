//! Procedural overlay effects.
//!
//! Every effect reads a sprite layer, treats pixels with non-zero alpha as
//! the silhouette, and returns a freshly allocated overlay of the same size
//! to be composited over the sprite. Overlays never paint over the
//! silhouette, except corrosion, which only ever paints on it.
//!
//! Randomness is injected: pass any `rand::Rng`, and seed it (for example
//! with `StdRng::seed_from_u64`) for reproducible output.

mod corrosion;
mod directional;
mod glow;
mod grid;

use std::fmt;

use image::RgbaImage;
use rand::Rng;

use crate::error::{FxError, Result};
use crate::types::{Colour, Gradient};

pub use corrosion::Corrosion;
pub use directional::{Direction, Growth, Thinning};
pub use glow::Glow;

/// The effects spritefx knows how to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum EffectKind {
    Flame,
    Drip,
    Glow,
    Corrosion,
}

impl EffectKind {
    pub fn name(self) -> &'static str {
        match self {
            EffectKind::Flame => "flame",
            EffectKind::Drip => "drip",
            EffectKind::Glow => "glow",
            EffectKind::Corrosion => "corrosion",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully configured effect, ready to run against any number of layers.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Growth {
        growth: Growth,
        from: Colour,
        to: Colour,
    },
    Glow {
        glow: Glow,
        from: Colour,
        to: Colour,
    },
    Corrosion(Corrosion),
}

impl Effect {
    pub fn kind(&self) -> EffectKind {
        match self {
            Effect::Growth { growth, .. } => match growth.direction {
                Direction::Up => EffectKind::Flame,
                Direction::Down => EffectKind::Drip,
            },
            Effect::Glow { .. } => EffectKind::Glow,
            Effect::Corrosion(_) => EffectKind::Corrosion,
        }
    }

    /// Reject tunables the engines cannot run with.
    pub fn validate(&self) -> Result<()> {
        match self {
            Effect::Growth { growth, .. } => growth.validate(),
            Effect::Glow { glow, .. } => glow.validate(),
            Effect::Corrosion(_) => Ok(()),
        }
    }

    /// Generate the overlay for `layer`.
    ///
    /// # Panics
    ///
    /// Panics on a gradient shorter than two steps; call [`Effect::validate`]
    /// first for user-supplied settings.
    pub fn apply<R: Rng + ?Sized>(&self, layer: &RgbaImage, rng: &mut R) -> RgbaImage {
        match self {
            Effect::Growth { growth, from, to } => growth.apply(layer, *from, *to, rng),
            Effect::Glow { glow, from, to } => glow.apply(layer, *from, *to, rng),
            Effect::Corrosion(corrosion) => corrosion.apply(layer, rng),
        }
    }
}

/// Flames rising off `layer`, shading from `from` to `to`.
pub fn flame<R: Rng + ?Sized>(layer: &RgbaImage, from: Colour, to: Colour, rng: &mut R) -> RgbaImage {
    Growth::flame().apply(layer, from, to, rng)
}

/// Drips falling from `layer`, shading from `from` to `to`.
pub fn drip<R: Rng + ?Sized>(layer: &RgbaImage, from: Colour, to: Colour, rng: &mut R) -> RgbaImage {
    Growth::drip().apply(layer, from, to, rng)
}

/// A three-band halo around `layer`, shading from `from` to `to`.
pub fn glow<R: Rng + ?Sized>(layer: &RgbaImage, from: Colour, to: Colour, rng: &mut R) -> RgbaImage {
    Glow::default().apply(layer, from, to, rng)
}

/// Corrosion patches grown inside `layer`.
pub fn corrode<R: Rng + ?Sized>(
    layer: &RgbaImage,
    colour: Colour,
    iterations: usize,
    seeds: usize,
    rng: &mut R,
) -> RgbaImage {
    Corrosion {
        colour,
        iterations,
        seeds,
    }
    .apply(layer, rng)
}

fn check_steps(steps: usize) -> Result<()> {
    if steps < Gradient::MIN_STEPS {
        return Err(FxError::Config {
            message: format!("Gradient needs at least {} steps, got {}", Gradient::MIN_STEPS, steps),
            help: Some("Set `steps` to 2 or more".to_string()),
        });
    }
    Ok(())
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(FxError::Config {
            message: format!("`{}` must be a probability, got {}", name, value),
            help: Some("Use a value between 0.0 and 1.0".to_string()),
        });
    }
    Ok(())
}

/// Fixed-output random sources for pinning down stochastic branches.
#[cfg(test)]
pub(crate) mod testing {
    use rand::RngCore;

    /// Every draw is zero: `random::<f64>()` is 0.0, so any positive
    /// probability check passes, and ranged integers sit at their minimum.
    pub struct ZeroBits;

    impl RngCore for ZeroBits {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    /// Every bit set: `random::<f64>()` sits just below 1.0, so probability
    /// checks below 1.0 always fail.
    pub struct OneBits;

    impl RngCore for OneBits {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }

        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(u8::MAX);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sprite() -> RgbaImage {
        let mut layer = RgbaImage::new(10, 10);
        for y in 3..7 {
            for x in 3..7 {
                layer.put_pixel(x, y, image::Rgba([10, 20, 30, 255]));
            }
        }
        layer
    }

    #[test]
    fn test_effect_kind() {
        let flame = Effect::Growth {
            growth: Growth::flame(),
            from: Colour::WHITE,
            to: Colour::BLACK,
        };
        let drip = Effect::Growth {
            growth: Growth::drip(),
            from: Colour::WHITE,
            to: Colour::BLACK,
        };
        assert_eq!(flame.kind(), EffectKind::Flame);
        assert_eq!(drip.kind(), EffectKind::Drip);
        assert_eq!(Effect::Corrosion(Corrosion::new(Colour::BLACK)).kind(), EffectKind::Corrosion);
    }

    #[test]
    fn test_effect_matches_free_functions() {
        let layer = sprite();
        let effect = Effect::Glow {
            glow: Glow::default(),
            from: Colour::WHITE,
            to: Colour::BLACK,
        };

        let via_effect = effect.apply(&layer, &mut StdRng::seed_from_u64(8));
        let via_fn = glow(&layer, Colour::WHITE, Colour::BLACK, &mut StdRng::seed_from_u64(8));
        assert_eq!(via_effect, via_fn);

        let via_corrode = corrode(&layer, Colour::BLACK, 8, 4, &mut StdRng::seed_from_u64(8));
        let via_struct = Effect::Corrosion(Corrosion::new(Colour::BLACK))
            .apply(&layer, &mut StdRng::seed_from_u64(8));
        assert_eq!(via_corrode, via_struct);
    }

    #[test]
    fn test_overlays_keep_layer_dimensions() {
        let layer = sprite();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(flame(&layer, Colour::WHITE, Colour::BLACK, &mut rng).dimensions(), (10, 10));
        assert_eq!(drip(&layer, Colour::WHITE, Colour::BLACK, &mut rng).dimensions(), (10, 10));
        assert_eq!(glow(&layer, Colour::WHITE, Colour::BLACK, &mut rng).dimensions(), (10, 10));
        assert_eq!(corrode(&layer, Colour::BLACK, 3, 2, &mut rng).dimensions(), (10, 10));
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let effect = Effect::Glow {
            glow: Glow {
                steps: 1,
                ..Glow::default()
            },
            from: Colour::WHITE,
            to: Colour::BLACK,
        };
        let err = effect.validate().unwrap_err();
        assert!(err.to_string().contains("at least 2 steps"));
    }

    #[test]
    fn test_check_probability() {
        assert!(check_probability("skip", 0.0).is_ok());
        assert!(check_probability("skip", 1.0).is_ok());
        assert!(check_probability("skip", 1.01).is_err());
        assert!(check_probability("skip", f64::NAN).is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(EffectKind::Corrosion.to_string(), "corrosion");
    }
}
