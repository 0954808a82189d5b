//! Conversion configuration and validation.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Configuration for a single PDF-to-JSON conversion.
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Path to the source PDF file
    pub pdf_path: PathBuf,

    /// Path for the output JSON file; derived from `pdf_path` when unset
    pub output_path: Option<PathBuf>,

    /// Whether to embed `--- Page N ---` markers in the aggregate text
    pub include_page_numbers: bool,
}

impl ConversionConfig {
    /// Create a configuration for the given PDF file.
    pub fn new(pdf_path: impl Into<PathBuf>) -> Self {
        Self {
            pdf_path: pdf_path.into(),
            output_path: None,
            include_page_numbers: true,
        }
    }

    /// Set an explicit output path.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Enable or disable page markers in the aggregate text.
    pub fn with_page_numbers(mut self, include: bool) -> Self {
        self.include_page_numbers = include;
        self
    }

    /// Validate the configuration and return the resolved output path.
    ///
    /// Checks are eager and typed: an unset path, a missing file, and a
    /// non-`.pdf` suffix each produce their own error, so a
    /// misconfiguration is reported before any file is opened. Contents
    /// are not inspected here; that is the integrity check's job.
    pub fn validate(&self) -> Result<PathBuf> {
        if self.pdf_path.as_os_str().is_empty() {
            return Err(Error::MissingPdfPath);
        }
        if !self.pdf_path.is_file() {
            return Err(Error::PdfNotFound(self.pdf_path.clone()));
        }
        if !has_pdf_extension(&self.pdf_path) {
            return Err(Error::NotPdf(self.pdf_path.clone()));
        }
        Ok(self.resolved_output_path())
    }

    /// Validate and fill in the derived output path when none was set.
    pub fn validate_mut(&mut self) -> Result<()> {
        let resolved = self.validate()?;
        self.output_path = Some(resolved);
        Ok(())
    }

    /// The output path this configuration resolves to.
    ///
    /// An unset or empty output path falls back to the PDF's own location
    /// with the extension replaced by `.json`.
    pub fn resolved_output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) if !path.as_os_str().is_empty() => path.clone(),
            _ => self.pdf_path.with_extension("json"),
        }
    }
}

/// Check for a `.pdf` extension, case-insensitively.
fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
