//! SHA-256 file hashing.
//!
//! The file hash is recorded in the output document so downstream consumers
//! can detect when a source PDF has changed without re-reading it.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read buffer size for streaming the file through the hasher.
const HASH_CHUNK_SIZE: usize = 4096;

/// Compute the SHA-256 hash of a file, streaming it in chunks.
///
/// Returns the lowercase hex digest. The hash is best-effort metadata: on
/// any I/O failure the error is logged and an empty string is returned, so
/// a transient read problem never aborts a conversion.
pub fn compute_file_hash<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    match try_compute_file_hash(path) {
        Ok(digest) => digest,
        Err(e) => {
            log::error!("Failed to hash file {}: {}", path.display(), e);
            String::new()
        }
    }
}

/// Compute the SHA-256 hash of a file, propagating I/O errors.
pub fn try_compute_file_hash<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; HASH_CHUNK_SIZE];

    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
