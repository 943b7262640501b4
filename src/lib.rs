//! spritefx - Procedural overlay effects for pixel-art sprites
//!
//! Grows flame, drip, glow, and corrosion overlays from a sprite's
//! silhouette, and slices grid spritesheets into tiles.
//!
//! ```no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use spritefx::{effect, Colour};
//!
//! let sprite = image::open("hero.png").unwrap().to_rgba8();
//! let mut rng = StdRng::seed_from_u64(7);
//! let flames = effect::flame(&sprite, Colour::rgb(255, 228, 92), Colour::rgb(184, 38, 11), &mut rng);
//! let out = spritefx::render::composite(&sprite, &flames);
//! out.save("hero.flame.png").unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod effect;
pub mod error;
pub mod output;
pub mod render;
pub mod sheet;
pub mod types;

pub use config::{EffectSettings, Manifest, MANIFEST_FILENAME};
pub use effect::{Corrosion, Direction, Effect, EffectKind, Glow, Growth, Thinning};
pub use error::{FxError, Result};
pub use render::{composite, replace_colour, scale_image, write_png};
pub use sheet::{Spritesheet, TileIndex};
pub use types::{Colour, Gradient};
