//! PDF-to-JSON conversion orchestration.

use std::time::Instant;

use crate::config::ConversionConfig;
use crate::detect::is_valid_pdf;
use crate::error::{Error, Result};
use crate::extract::{assemble_full_text, PageOutcome, TextExtractor};
use crate::model::{ConversionDocument, DocumentMetadata, ExtractionResult};
use crate::source::{
    ConnectionSchema, DataSource, FieldSpec, ProgressCallback, ProgressTracker, StatusCallback,
};

/// Default name a converter reports to hosts and callbacks.
const DEFAULT_NAME: &str = "pdf_to_json";

/// Lifecycle of a conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No conversion attempted yet
    #[default]
    NotStarted,
    /// Checking the configuration
    Validating,
    /// Reading pages from the source document
    Extracting,
    /// The output file has been written
    Completed,
    /// The run stopped on an error
    Failed,
}

/// Converts one PDF document into a structured JSON artifact.
///
/// The converter runs a fixed pipeline: validate the configuration, check
/// that the source is a readable PDF, extract text page by page, assemble
/// the output document, and write it to the resolved output path.
/// Progress is tracked per extracted page; optional callbacks fire once
/// the run completes.
///
/// # Example
/// ```no_run
/// use pdfjson::{ConversionConfig, PdfToJsonConverter};
///
/// let config = ConversionConfig::new("report.pdf").with_page_numbers(false);
/// let mut converter = PdfToJsonConverter::new(config);
/// let document = converter.convert().unwrap();
/// println!("{} pages with text", document.metadata.pages_with_text);
/// ```
pub struct PdfToJsonConverter {
    config: ConversionConfig,
    name: String,
    phase: Phase,
    tracker: ProgressTracker,
    progress_callback: Option<ProgressCallback>,
    status_callback: Option<StatusCallback>,
}

impl PdfToJsonConverter {
    /// Create a converter for the given configuration.
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            config,
            name: DEFAULT_NAME.to_string(),
            phase: Phase::NotStarted,
            tracker: ProgressTracker::new(),
            progress_callback: None,
            status_callback: None,
        }
    }

    /// Override the name reported to hosts and callbacks.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set a callback fired with the final progress counters.
    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Set a callback fired with a completion message.
    pub fn with_status_callback(mut self, callback: StatusCallback) -> Self {
        self.status_callback = Some(callback);
        self
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The configuration this converter runs with.
    ///
    /// After a successful run the output path has been filled in with its
    /// resolved value.
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Progress counters for the current or most recent run.
    pub fn progress(&self) -> &ProgressTracker {
        &self.tracker
    }

    /// Run the conversion and write the output file.
    ///
    /// Returns the assembled document on success. Errors are typed, so a
    /// caller can tell a misconfiguration from an unreadable PDF from an
    /// I/O failure; nothing is absorbed here. No output file exists unless
    /// the returned result is `Ok`.
    pub fn convert(&mut self) -> Result<ConversionDocument> {
        let result = self.run();
        if result.is_err() {
            self.phase = Phase::Failed;
        }
        result
    }

    fn run(&mut self) -> Result<ConversionDocument> {
        self.phase = Phase::Validating;
        self.config.validate_mut()?;

        log::info!(
            "Starting PDF to JSON conversion for: {}",
            self.config.pdf_path.display()
        );

        if !is_valid_pdf(&self.config.pdf_path) {
            return Err(Error::InvalidPdf(self.config.pdf_path.clone()));
        }

        self.phase = Phase::Extracting;
        let extractor = TextExtractor::open(&self.config.pdf_path)?;
        self.tracker.set_total_items(extractor.page_count());
        let started = Instant::now();

        let mut pages = Vec::new();
        for outcome in extractor.pages() {
            match outcome {
                PageOutcome::Extracted(page) => {
                    self.tracker.increment_processed_items();
                    pages.push(page);
                }
                PageOutcome::Skipped {
                    page_number,
                    reason,
                } => {
                    log::warn!(
                        "Skipping page {} in {}: {}",
                        page_number,
                        self.config.pdf_path.display(),
                        reason
                    );
                }
            }
        }

        let full_text = assemble_full_text(&pages, self.config.include_page_numbers);
        let extraction = ExtractionResult::new(pages, full_text, extractor.page_count());

        let metadata = DocumentMetadata::capture(&self.config.pdf_path, &extraction)?;
        let document = ConversionDocument::new(metadata, extraction);

        let output_path = self.config.resolved_output_path();
        document.write_to(&output_path)?;
        log::info!(
            "Successfully converted PDF to JSON: {}",
            output_path.display()
        );

        self.tracker
            .set_total_processing_time(started.elapsed().as_secs_f64());
        self.tracker.set_fetch_completed(true);
        self.phase = Phase::Completed;

        if let Some(ref callback) = self.progress_callback {
            callback(
                &self.name,
                self.tracker.total_to_process(),
                self.tracker.total_processed(),
                self.tracker.estimated_remaining_time(),
            );
        }
        if let Some(ref callback) = self.status_callback {
            let output_name = output_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            callback(
                &self.name,
                &format!("Successfully converted PDF to JSON: {}", output_name),
            );
        }

        Ok(document)
    }

    /// Run the conversion, absorbing any failure.
    ///
    /// This is the data-source contract: a failed run is logged and
    /// yields an empty vec, so hosts polling many sources never have to
    /// handle per-source errors. Use [`convert`](Self::convert) when the
    /// failure reason matters.
    pub fn fetch(&mut self) -> Vec<ConversionDocument> {
        match self.convert() {
            Ok(document) => vec![document],
            Err(e) => {
                log::error!("Error in fetch: {}", e);
                Vec::new()
            }
        }
    }
}

impl DataSource for PdfToJsonConverter {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&mut self) -> Vec<serde_json::Value> {
        PdfToJsonConverter::fetch(self)
            .iter()
            .filter_map(|document| match document.to_value() {
                Ok(value) => Some(value),
                Err(e) => {
                    log::error!("Failed to serialize document: {}", e);
                    None
                }
            })
            .collect()
    }

    fn progress(&self) -> &ProgressTracker {
        &self.tracker
    }

    fn connection_schema(&self) -> ConnectionSchema {
        ConnectionSchema::new("FileSystem")
            .with_field(FieldSpec::required_string(
                "pdf_file_path",
                "Path to the PDF file to convert",
            ))
            .with_field(FieldSpec::optional_string(
                "output_file_path",
                "Path for output JSON file (defaults to PDF name with .json extension)",
            ))
            .with_field(FieldSpec::optional_bool(
                "include_page_numbers",
                true,
                "Whether to include page numbers in extracted text",
            ))
    }
}
