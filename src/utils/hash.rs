//! File digest utilities.
//!
//! Digests are rendered as lowercase hex strings, matching the form used in
//! CycloneDX hash records.

use crate::error::{BomError, Result};
use sha1::{Digest, Sha1};
use sha2::Sha256;
use std::fs;
use std::path::Path;

/// Compute the SHA-1 digest of a file's full contents as lowercase hex.
///
/// The file is read in one blocking pass. Fails with `FileNotFound` if the
/// path does not exist at call time.
pub fn file_sha1(path: &Path) -> Result<String> {
    let bytes = read_file(path)?;
    let mut hasher = Sha1::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Compute the SHA-256 digest of a file's full contents as lowercase hex.
pub fn file_sha256(path: &Path) -> Result<String> {
    let bytes = read_file(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(BomError::file_not_found(path));
    }
    fs::read(path).map_err(|e| BomError::io(path, e))
}
