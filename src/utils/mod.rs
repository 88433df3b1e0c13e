//! Shared utilities.

pub mod hash;

pub use hash::{file_sha1, file_sha256};
