//! PDF format detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFormat {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,
}

impl std::fmt::Display for PdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Probe a file's header for the PDF format.
///
/// # Arguments
/// * `path` - Path to the file to probe
///
/// # Returns
/// * `Ok(PdfFormat)` if the file starts with a valid PDF header
/// * `Err(Error::UnknownFormat)` if the header is not a PDF header
///
/// # Example
/// ```no_run
/// use pdfjson::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("document.pdf").unwrap();
/// println!("PDF version: {}", format.version);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<PdfFormat> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 16];
    let n = file.read(&mut header)?;
    detect_format_from_bytes(&header[..n])
}

/// Probe a byte slice for the PDF format.
///
/// # Arguments
/// * `data` - At least the first bytes of the file, 8 or more
///
/// # Returns
/// * `Ok(PdfFormat)` if the data starts with a valid PDF header
/// * `Err(Error::UnknownFormat)` if the data is not a PDF header
pub fn detect_format_from_bytes(data: &[u8]) -> Result<PdfFormat> {
    let after_magic = data.strip_prefix(PDF_MAGIC).ok_or(Error::UnknownFormat)?;
    let version_bytes = after_magic.get(..VERSION_LEN).ok_or(Error::UnknownFormat)?;

    let version = String::from_utf8_lossy(version_bytes).to_string();
    if !is_valid_version(&version) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(PdfFormat { version })
}

/// A version reads as digit, dot, digit ("1.0" through "2.0" in practice).
fn is_valid_version(version: &str) -> bool {
    matches!(
        version.as_bytes(),
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit()
    )
}

/// Check whether a file starts with a PDF header.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check whether bytes start with a PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

/// Check that a file is a readable PDF document.
///
/// Goes beyond the header probe: the file must exist, be non-empty, carry
/// the PDF magic bytes, and parse as a PDF document. Returns a plain
/// verdict; a file is either usable as input or it is not.
pub fn is_valid_pdf<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();

    let len = match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => meta.len(),
        _ => return false,
    };
    if len == 0 {
        return false;
    }

    match detect_format_from_path(path) {
        Ok(format) => log::debug!("{}: {}", path.display(), format),
        Err(_) => return false,
    }

    match lopdf::Document::load(path) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Failed to parse PDF {}: {}", path.display(), e);
            false
        }
    }
}
