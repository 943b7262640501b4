//! Init command implementation.
//!
//! Writes a `spritefx.yaml` holding the built-in tuning for every effect,
//! ready to be edited.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Manifest, MANIFEST_FILENAME};
use crate::error::{FxError, Result};
use crate::output::{display_path, Printer};

/// Write a spritefx.yaml with the built-in effect tuning
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the manifest into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing spritefx.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(FxError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let yaml = Manifest::with_builtins().to_yaml()?;

    fs::write(&manifest_path, &yaml).map_err(|e| FxError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.success("Created", &display_path(&manifest_path));

    Ok(())
}
