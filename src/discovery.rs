//! Input discovery.
//!
//! Expands the paths given on the command line into the list of PNG files
//! to process. Files are taken as-is; directories are walked recursively.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Manifest;
use crate::error::{FxError, Result};

/// Collect PNG inputs from `paths`.
///
/// Directory walks skip anything under `skip_dir` (typically the output
/// directory, so generated overlays are not fed back in) and anything the
/// manifest excludes. Results are sorted and de-duplicated.
pub fn collect_pngs(
    paths: &[PathBuf],
    manifest: &Manifest,
    skip_dir: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for path in paths {
        if path.is_file() {
            found.push(path.clone());
            continue;
        }

        if !path.is_dir() {
            return Err(FxError::Io {
                path: path.clone(),
                message: "No such file or directory".to_string(),
            });
        }

        let walker = WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| !is_under(e.path(), skip_dir))
            .filter_map(|e| e.ok());

        for entry in walker {
            let path = entry.path();
            if entry.file_type().is_file() && is_png(path) && !manifest.is_excluded(path) {
                found.push(path.to_path_buf());
            }
        }
    }

    found.sort();
    found.dedup();
    Ok(found)
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

fn is_under(path: &Path, dir: Option<&Path>) -> bool {
    let Some(dir) = dir else {
        return false;
    };
    match (path.canonicalize(), dir.canonicalize()) {
        (Ok(path), Ok(dir)) => path.starts_with(dir),
        _ => false,
    }
}
