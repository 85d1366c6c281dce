use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Resolve the export directory given on the command line.
///
/// Relative paths are taken relative to the current working directory.
pub fn resolve_input_dir(arg: &Path) -> Result<PathBuf> {
    let base = env::current_dir().context("Failed to determine current directory")?;
    resolve_against(&base, arg)
}

pub(crate) fn resolve_against(base: &Path, arg: &Path) -> Result<PathBuf> {
    let dir = if arg.is_absolute() { arg.to_path_buf() } else { base.join(arg) };

    if !dir.exists() {
        bail!("Export directory not found: {}", dir.display());
    }
    if !dir.is_dir() {
        bail!("Not a directory: {}", dir.display());
    }

    Ok(dir)
}
