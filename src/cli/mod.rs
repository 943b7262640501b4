pub mod completions;
pub mod effect;
pub mod init;
pub mod slice;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// spritefx - Procedural overlay effects for pixel-art sprites
#[derive(Parser, Debug)]
#[command(name = "spritefx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Manifest to load instead of ./spritefx.yaml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Show per-file detail
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a flame, drip, glow, or corrosion overlay for sprites
    Effect(effect::EffectArgs),

    /// Slice a grid spritesheet into one PNG per tile
    Slice(slice::SliceArgs),

    /// Write a spritefx.yaml with the built-in effect tuning
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
