use std::fs::File;
use std::path::Path;

use crate::error::{AnalyzeError, Result};

/// Maximum size of a single export file: 512MB
pub const MAX_FILE_SIZE_BYTES: u64 = 512 * 1024 * 1024;

/// Validates that a file's size is within acceptable limits
///
/// Takes an open file handle so the check applies to the file that is
/// subsequently read, not whatever occupies the path later.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than [`MAX_FILE_SIZE_BYTES`]
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata =
        file.metadata().map_err(|source| AnalyzeError::Io { path: path.to_path_buf(), source })?;

    check_size(metadata.len(), MAX_FILE_SIZE_BYTES, path)
}

fn check_size(file_size: u64, limit: u64, path: &Path) -> Result<()> {
    if file_size > limit {
        return Err(AnalyzeError::InvalidDocument {
            path: path.to_path_buf(),
            reason: format!("file too large ({} bytes, max {} bytes)", file_size, limit),
        });
    }

    Ok(())
}
