//! # pdfjson
//!
//! Convert PDF documents into structured JSON artifacts.
//!
//! A conversion reads one PDF, extracts text page by page, and writes a
//! JSON file with two nodes: `metadata` (file name, size, SHA-256 hash,
//! timestamps, page counters) followed by `content` (the aggregate text
//! plus per-page records).
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfjson::convert_file;
//!
//! fn main() -> pdfjson::Result<()> {
//!     let document = convert_file("document.pdf")?;
//!     println!(
//!         "{} of {} pages had text",
//!         document.metadata.pages_with_text,
//!         document.metadata.total_pages
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Per-page extraction**: every page is attempted; unreadable or
//!   blank pages are skipped and logged, never fatal
//! - **File integrity metadata**: size, modification time, and a
//!   streaming SHA-256 hash of the source file
//! - **Deterministic output**: 2-space indented UTF-8 JSON with the
//!   metadata node first and non-ASCII text preserved literally
//! - **Progress tracking**: per-page counters, remaining-time estimates,
//!   and completion callbacks

pub mod config;
pub mod convert;
pub mod detect;
pub mod error;
pub mod extract;
pub mod hash;
pub mod model;
pub mod source;

// Re-export commonly used types
pub use config::ConversionConfig;
pub use convert::{PdfToJsonConverter, Phase};
pub use detect::{
    detect_format_from_bytes, detect_format_from_path, is_pdf, is_valid_pdf, PdfFormat,
};
pub use error::{Error, Result};
pub use extract::{assemble_full_text, PageOutcome, SkipReason, TextExtractor};
pub use hash::{compute_file_hash, try_compute_file_hash};
pub use model::{
    ConversionDocument, DocumentContent, DocumentMetadata, ExtractionResult, JsonFormat, PageText,
    DATA_TYPE,
};
pub use source::{
    ConnectionSchema, DataSource, FieldSpec, ProgressCallback, ProgressTracker, StatusCallback,
    DEFAULT_ICON,
};

use std::path::Path;

/// Convert a PDF file to JSON with default settings.
///
/// Writes the output next to the source file, as `<basename>.json`, and
/// returns the assembled document.
///
/// # Arguments
///
/// * `path` - Path to the PDF file
///
/// # Example
///
/// ```no_run
/// use pdfjson::convert_file;
///
/// let document = convert_file("document.pdf").unwrap();
/// println!("Pages: {}", document.metadata.total_pages);
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<ConversionDocument> {
    convert_file_with_config(ConversionConfig::new(path.as_ref()))
}

/// Convert a PDF file with a custom configuration.
///
/// # Arguments
///
/// * `config` - Conversion configuration
///
/// # Example
///
/// ```no_run
/// use pdfjson::{convert_file_with_config, ConversionConfig};
///
/// let config = ConversionConfig::new("document.pdf")
///     .with_output_path("out/document.json")
///     .with_page_numbers(false);
/// let document = convert_file_with_config(config).unwrap();
/// ```
pub fn convert_file_with_config(config: ConversionConfig) -> Result<ConversionDocument> {
    let mut converter = PdfToJsonConverter::new(config);
    converter.convert()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_file_missing_path() {
        let result = convert_file("/nonexistent/document.pdf");
        assert!(matches!(result, Err(Error::PdfNotFound(_))));
    }

    #[test]
    fn test_convert_file_with_config_empty_path() {
        let result = convert_file_with_config(ConversionConfig::new(""));
        assert!(matches!(result, Err(Error::MissingPdfPath)));
    }

    #[test]
    fn test_detect_reexports() {
        let format = detect_format_from_bytes(b"%PDF-1.7\n%test").unwrap();
        assert_eq!(format.version, "1.7");
        assert!(detect::is_pdf_bytes(b"%PDF-1.4\ntest"));
    }

    #[test]
    fn test_json_format_variants() {
        let _pretty = JsonFormat::Pretty;
        let _compact = JsonFormat::Compact;
        assert_eq!(JsonFormat::default(), JsonFormat::Pretty);
    }

    #[test]
    fn test_config_reexport_builder() {
        let config = ConversionConfig::new("a.pdf").with_page_numbers(false);
        assert!(!config.include_page_numbers);
    }
}
