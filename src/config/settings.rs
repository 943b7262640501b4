//! Per-effect tuning as it appears in `spritefx.yaml` and on the command
//! line.
//!
//! Every field is optional. Command-line values are merged over the
//! manifest's values, and anything still unset falls back to the built-in
//! defaults for the effect.

use serde::{Deserialize, Serialize};

use crate::effect::{Corrosion, Effect, EffectKind, Glow, Growth, Thinning};
use crate::error::Result;
use crate::types::Colour;

/// Optional overrides for one effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectSettings {
    /// Gradient start colour (flame, drip, glow).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Colour>,

    /// Gradient end colour (flame, drip, glow).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Colour>,

    /// Paint colour (corrosion).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<Colour>,

    /// Gradient length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,

    /// Automaton generations (corrosion).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,

    /// Initial corroded pixels (corrosion).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeds: Option<usize>,

    /// Neighbour count below which a growing pixel counts as sparse
    /// (flame, drip).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparse_neighbours: Option<usize>,

    /// Chance a sparse pixel is dropped (flame, drip).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparse_skip: Option<f64>,

    /// Minimum halo support before a pixel spreads (glow).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_neighbours: Option<usize>,

    /// Chance any eligible pixel is dropped (flame, drip, glow).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<f64>,
}

impl EffectSettings {
    /// The built-in defaults for `kind`, with every relevant field set.
    pub fn builtin(kind: EffectKind) -> Self {
        match kind {
            EffectKind::Flame | EffectKind::Drip => {
                let growth = builtin_growth(kind);
                let (from, to) = builtin_gradient(kind);
                Self {
                    from: Some(from),
                    to: Some(to),
                    steps: Some(growth.steps),
                    sparse_neighbours: Some(growth.thinning.sparse_neighbours),
                    sparse_skip: Some(growth.thinning.sparse_skip),
                    skip: Some(growth.thinning.skip),
                    ..Self::default()
                }
            }
            EffectKind::Glow => {
                let glow = Glow::default();
                let (from, to) = builtin_gradient(kind);
                Self {
                    from: Some(from),
                    to: Some(to),
                    steps: Some(glow.steps),
                    min_neighbours: Some(glow.min_neighbours),
                    skip: Some(glow.skip),
                    ..Self::default()
                }
            }
            EffectKind::Corrosion => Self {
                colour: Some(CORROSION),
                iterations: Some(Corrosion::DEFAULT_ITERATIONS),
                seeds: Some(Corrosion::DEFAULT_SEEDS),
                ..Self::default()
            },
        }
    }

    /// Fill every unset field from `fallback`.
    pub fn merge(self, fallback: &EffectSettings) -> Self {
        Self {
            from: self.from.or(fallback.from),
            to: self.to.or(fallback.to),
            colour: self.colour.or(fallback.colour),
            steps: self.steps.or(fallback.steps),
            iterations: self.iterations.or(fallback.iterations),
            seeds: self.seeds.or(fallback.seeds),
            sparse_neighbours: self.sparse_neighbours.or(fallback.sparse_neighbours),
            sparse_skip: self.sparse_skip.or(fallback.sparse_skip),
            min_neighbours: self.min_neighbours.or(fallback.min_neighbours),
            skip: self.skip.or(fallback.skip),
        }
    }

    /// Resolve into a validated [`Effect`] of the given kind.
    pub fn build(&self, kind: EffectKind) -> Result<Effect> {
        let (default_from, default_to) = builtin_gradient(kind);
        let from = self.from.unwrap_or(default_from);
        let to = self.to.unwrap_or(default_to);

        let effect = match kind {
            EffectKind::Flame | EffectKind::Drip => {
                let base = builtin_growth(kind);
                let growth = Growth {
                    steps: self.steps.unwrap_or(base.steps),
                    direction: base.direction,
                    thinning: Thinning {
                        sparse_neighbours: self
                            .sparse_neighbours
                            .unwrap_or(base.thinning.sparse_neighbours),
                        sparse_skip: self.sparse_skip.unwrap_or(base.thinning.sparse_skip),
                        skip: self.skip.unwrap_or(base.thinning.skip),
                    },
                };
                Effect::Growth { growth, from, to }
            }
            EffectKind::Glow => {
                let base = Glow::default();
                let glow = Glow {
                    steps: self.steps.unwrap_or(base.steps),
                    min_neighbours: self.min_neighbours.unwrap_or(base.min_neighbours),
                    skip: self.skip.unwrap_or(base.skip),
                };
                Effect::Glow { glow, from, to }
            }
            EffectKind::Corrosion => Effect::Corrosion(Corrosion {
                colour: self.colour.unwrap_or(CORROSION),
                iterations: self.iterations.unwrap_or(Corrosion::DEFAULT_ITERATIONS),
                seeds: self.seeds.unwrap_or(Corrosion::DEFAULT_SEEDS),
            }),
        };

        effect.validate()?;
        Ok(effect)
    }
}

const CORROSION: Colour = Colour::rgb(0x4E, 0x7A, 0x27);

fn builtin_growth(kind: EffectKind) -> Growth {
    match kind {
        EffectKind::Drip => Growth::drip(),
        _ => Growth::flame(),
    }
}

fn builtin_gradient(kind: EffectKind) -> (Colour, Colour) {
    match kind {
        EffectKind::Flame => (Colour::rgb(0xFF, 0xE4, 0x5C), Colour::rgb(0xB8, 0x26, 0x0B)),
        EffectKind::Drip => (Colour::rgb(0x7F, 0xD1, 0xFF), Colour::rgb(0x1F, 0x3A, 0x93)),
        EffectKind::Glow => (Colour::new(255, 255, 255, 0xC0), Colour::new(255, 255, 255, 0x20)),
        EffectKind::Corrosion => (CORROSION, CORROSION),
    }
}
