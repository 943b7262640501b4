//! Project manifest (spritefx.yaml) parsing.
//!
//! The manifest holds output settings, discovery excludes, and per-effect
//! tuning. Every key is optional.

mod settings;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::effect::{Effect, EffectKind};
use crate::error::{FxError, Result};

pub use settings::EffectSettings;

/// Manifest file looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "spritefx.yaml";

/// Project manifest loaded from spritefx.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Output directory for generated images.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Default scale factor for output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,

    /// Write sprite + overlay instead of the bare overlay.
    pub composite: bool,

    /// Patterns to exclude when scanning directories.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excludes: Vec<String>,

    pub flame: EffectSettings,
    pub drip: EffectSettings,
    pub glow: EffectSettings,
    pub corrosion: EffectSettings,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_output(),
            scale: None,
            composite: false,
            excludes: vec![],
            flame: EffectSettings::default(),
            drip: EffectSettings::default(),
            glow: EffectSettings::default(),
            corrosion: EffectSettings::default(),
        }
    }
}

impl Manifest {
    /// A manifest with every effect's built-in tuning written out, as
    /// generated by `spritefx init`.
    pub fn with_builtins() -> Self {
        Self {
            scale: Some(1),
            flame: EffectSettings::builtin(EffectKind::Flame),
            drip: EffectSettings::builtin(EffectKind::Drip),
            glow: EffectSettings::builtin(EffectKind::Glow),
            corrosion: EffectSettings::builtin(EffectKind::Corrosion),
            ..Self::default()
        }
    }

    /// Load manifest from a spritefx.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `explicit` if given, otherwise `spritefx.yaml` in `dir` if it
    /// exists, otherwise the defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let implicit = dir.join(MANIFEST_FILENAME);
        if implicit.is_file() {
            Self::load(&implicit)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| FxError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| FxError::Build {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    /// Tuning section for `kind`.
    pub fn settings(&self, kind: EffectKind) -> &EffectSettings {
        match kind {
            EffectKind::Flame => &self.flame,
            EffectKind::Drip => &self.drip,
            EffectKind::Glow => &self.glow,
            EffectKind::Corrosion => &self.corrosion,
        }
    }

    /// Build `kind` from `overrides` layered over this manifest's tuning.
    pub fn effect(&self, kind: EffectKind, overrides: &EffectSettings) -> Result<Effect> {
        overrides.clone().merge(self.settings(kind)).build(kind)
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.contains(&format!("/{}/", dir)) || path.starts_with(&format!("{}/", dir));
            }
            return path.contains(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !pattern.contains('/') {
                // Match file extension or suffix
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Get the effective scale factor.
    pub fn effective_scale(&self) -> u32 {
        self.scale.unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::Glow;
    use crate::types::Colour;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("output: build").unwrap();

        assert_eq!(manifest.output, PathBuf::from("build"));
        assert!(!manifest.composite);
        assert_eq!(manifest.flame, EffectSettings::default());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r##"
output: dist/fx
scale: 4
composite: true
excludes:
  - "*.bak.png"
  - "**/raw/*"
flame:
  from: "#FFFF00"
  to: "#FF0000"
  steps: 12
  skip: 0.05
glow:
  min_neighbours: 2
corrosion:
  colour: "#00FF0080"
  iterations: 20
  seeds: 10
"##;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.output, PathBuf::from("dist/fx"));
        assert_eq!(manifest.effective_scale(), 4);
        assert!(manifest.composite);
        assert_eq!(manifest.excludes, vec!["*.bak.png", "**/raw/*"]);
        assert_eq!(manifest.flame.from, Some(Colour::rgb(255, 255, 0)));
        assert_eq!(manifest.flame.steps, Some(12));
        assert_eq!(manifest.flame.skip, Some(0.05));
        assert_eq!(manifest.glow.min_neighbours, Some(2));
        assert_eq!(manifest.corrosion.colour, Some(Colour::new(0, 255, 0, 128)));
        assert_eq!(manifest.corrosion.iterations, Some(20));
        assert_eq!(manifest.drip, EffectSettings::default());
    }

    #[test]
    fn test_parse_invalid_colour() {
        let err = Manifest::parse("flame:\n  from: \"#XYZ\"\n").unwrap_err();
        assert!(matches!(err, FxError::Parse { .. }));
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_builtins_round_trip_through_yaml() {
        let manifest = Manifest::with_builtins();
        let yaml = manifest.to_yaml().unwrap();

        assert!(yaml.contains("output: dist"));
        assert!(yaml.contains("steps: 15"));
        assert_eq!(Manifest::parse(&yaml).unwrap(), manifest);
    }

    #[test]
    fn test_effect_layers_overrides() {
        let manifest = Manifest::parse("glow:\n  steps: 6\n  skip: 0.0\n").unwrap();
        let overrides = EffectSettings {
            steps: Some(4),
            ..Default::default()
        };

        match manifest.effect(EffectKind::Glow, &overrides).unwrap() {
            Effect::Glow { glow, .. } => assert_eq!(
                glow,
                Glow {
                    steps: 4,
                    min_neighbours: 3,
                    skip: 0.0
                }
            ),
            other => panic!("expected glow, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_prefers_explicit_then_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Manifest::resolve(None, dir.path()).unwrap(), Manifest::default());

        std::fs::write(dir.path().join(MANIFEST_FILENAME), "output: here").unwrap();
        let found = Manifest::resolve(None, dir.path()).unwrap();
        assert_eq!(found.output, PathBuf::from("here"));

        let explicit = dir.path().join("other.yaml");
        std::fs::write(&explicit, "output: there").unwrap();
        let loaded = Manifest::resolve(Some(&explicit), dir.path()).unwrap();
        assert_eq!(loaded.output, PathBuf::from("there"));
    }

    #[test]
    fn test_resolve_missing_explicit_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(Manifest::resolve(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn test_is_excluded_extension() {
        let manifest = Manifest {
            excludes: vec!["*.bak.png".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("sprite.bak.png")));
        assert!(manifest.is_excluded(Path::new("path/to/sprite.bak.png")));
        assert!(!manifest.is_excluded(Path::new("sprite.png")));
    }

    #[test]
    fn test_is_excluded_directory() {
        let manifest = Manifest {
            excludes: vec!["**/raw/*".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("raw/hero.png")));
        assert!(manifest.is_excluded(Path::new("art/raw/hero.png")));
        assert!(!manifest.is_excluded(Path::new("art/hero.png")));
    }
}
