//! Effect command implementation.
//!
//! Generates an overlay for every input sprite and writes it as
//! `<output>/<stem>.<effect>.png`.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{EffectSettings, Manifest};
use crate::discovery::collect_pngs;
use crate::effect::EffectKind;
use crate::error::{FxError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{composite, write_png};
use crate::types::Colour;

/// Generate a flame, drip, glow, or corrosion overlay for sprites
#[derive(Args, Debug)]
pub struct EffectArgs {
    /// Effect to generate
    #[arg(value_enum)]
    pub kind: EffectKind,

    /// PNG files or directories to process
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Gradient start colour (hex)
    #[arg(long)]
    pub from: Option<Colour>,

    /// Gradient end colour (hex)
    #[arg(long)]
    pub to: Option<Colour>,

    /// Corrosion colour (hex)
    #[arg(long)]
    pub colour: Option<Colour>,

    /// Gradient length
    #[arg(long)]
    pub steps: Option<usize>,

    /// Corrosion generations
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Initial corrosion pixels
    #[arg(long)]
    pub seeds: Option<usize>,

    /// Random seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the sprite with the overlay on top instead of the bare overlay
    #[arg(long)]
    pub composite: bool,

    /// Scale factor for output (integer upscaling)
    #[arg(long)]
    pub scale: Option<u32>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl EffectArgs {
    fn overrides(&self) -> EffectSettings {
        EffectSettings {
            from: self.from,
            to: self.to,
            colour: self.colour,
            steps: self.steps,
            iterations: self.iterations,
            seeds: self.seeds,
            ..Default::default()
        }
    }
}

/// Run the effect command, returning the paths written.
pub fn run(args: EffectArgs, config: Option<&Path>, printer: &Printer) -> Result<Vec<PathBuf>> {
    let manifest = Manifest::resolve(config, Path::new("."))?;
    let effect = manifest.effect(args.kind, &args.overrides())?;

    let output = args.output.clone().unwrap_or_else(|| manifest.output.clone());
    let scale = args.scale.unwrap_or_else(|| manifest.effective_scale());
    let overlay_only = !(args.composite || manifest.composite);

    let files = collect_pngs(&args.inputs, &manifest, Some(&output))?;
    if files.is_empty() {
        return Err(FxError::Build {
            message: "No PNG files found".to_string(),
            help: Some("Pass PNG files or directories containing them".to_string()),
        });
    }

    if !output.exists() {
        fs::create_dir_all(&output).map_err(|e| FxError::Io {
            path: output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut written = Vec::with_capacity(files.len());
    for file in &files {
        let display = display_path(file);
        printer.status("Generating", &format!("{} {}", args.kind, display));

        let bytes = fs::read(file).map_err(|e| FxError::Io {
            path: file.clone(),
            message: format!("Failed to read image: {}", e),
        })?;
        let layer = image::load_from_memory(&bytes)?.to_rgba8();

        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let overlay = effect.apply(&layer, &mut rng);
        let image = if overlay_only {
            overlay
        } else {
            composite(&layer, &overlay)
        };

        let stem = file.file_stem().and_then(|s| s.to_str()).unwrap_or("sprite");
        let path = output.join(format!("{}.{}.png", stem, args.kind));
        write_png(&image, &path, scale)?;

        let scale = scale.max(1);
        printer.verbose(
            "Wrote",
            &format!(
                "{} ({}x{})",
                display_path(&path),
                image.width() * scale,
                image.height() * scale
            ),
        );
        written.push(path);
    }

    printer.success(
        "Finished",
        &format!(
            "{} to {}",
            plural(written.len(), "overlay", "overlays"),
            display_path(&output)
        ),
    );

    Ok(written)
}
