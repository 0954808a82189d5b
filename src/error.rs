//! Error types for the pdfjson library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pdfjson operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during PDF-to-JSON conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No PDF file path was configured.
    #[error("PDF file path is not configured")]
    MissingPdfPath,

    /// The configured PDF file does not exist.
    #[error("PDF file not found: {}", .0.display())]
    PdfNotFound(PathBuf),

    /// The configured file does not have a `.pdf` extension.
    #[error("Not a PDF file: {}", .0.display())]
    NotPdf(PathBuf),

    /// The file exists but is not a readable PDF document.
    #[error("Invalid or corrupted PDF file: {}", .0.display())]
    InvalidPdf(PathBuf),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version header is malformed.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The PDF document is encrypted and cannot be read.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// Error serializing the conversion document to JSON.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
