//! Per-page text extraction using lopdf.

use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::error::Result;
use crate::model::{ExtractionResult, PageText};

/// Why a page was left out of the extraction result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Extraction succeeded but produced no visible text
    Blank,
    /// The page-level extraction call failed
    Failed(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Blank => write!(f, "no visible text"),
            SkipReason::Failed(msg) => write!(f, "{}", msg),
        }
    }
}

/// The outcome of extracting a single page.
///
/// A full-document scan reports one outcome per page, so callers can see
/// exactly which pages contributed text and why the others did not.
#[derive(Debug, Clone)]
pub enum PageOutcome {
    /// The page yielded text
    Extracted(PageText),
    /// The page was skipped
    Skipped {
        /// Page number (1-indexed)
        page_number: u32,
        /// Why the page was skipped
        reason: SkipReason,
    },
}

impl PageOutcome {
    /// Page number this outcome refers to (1-indexed).
    pub fn page_number(&self) -> u32 {
        match self {
            PageOutcome::Extracted(page) => page.page_number,
            PageOutcome::Skipped { page_number, .. } => *page_number,
        }
    }

    /// Check if the page yielded text.
    pub fn is_extracted(&self) -> bool {
        matches!(self, PageOutcome::Extracted(_))
    }
}

/// Extracts text from a PDF document one page at a time.
pub struct TextExtractor {
    doc: LopdfDocument,
}

impl TextExtractor {
    /// Open a PDF file for extraction.
    ///
    /// Fails only when the document itself cannot be read; individual page
    /// failures surface later as skipped pages.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let doc = LopdfDocument::load(path)?;
        Ok(Self { doc })
    }

    /// Read a PDF document from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self { doc })
    }

    /// Total number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Visit every page in ascending order and report each outcome.
    pub fn pages(&self) -> impl Iterator<Item = PageOutcome> + '_ {
        // get_pages returns a BTreeMap keyed by page number, so the
        // collected keys are already in ascending order.
        let page_numbers: Vec<u32> = self.doc.get_pages().keys().copied().collect();
        page_numbers
            .into_iter()
            .map(move |page_num| self.extract_page(page_num))
    }

    /// Extract a single page.
    fn extract_page(&self, page_num: u32) -> PageOutcome {
        match self.doc.extract_text(&[page_num]) {
            Ok(text) => {
                let page = PageText::new(page_num, text);
                if page.has_text() {
                    PageOutcome::Extracted(page)
                } else {
                    PageOutcome::Skipped {
                        page_number: page_num,
                        reason: SkipReason::Blank,
                    }
                }
            }
            Err(e) => PageOutcome::Skipped {
                page_number: page_num,
                reason: SkipReason::Failed(e.to_string()),
            },
        }
    }

    /// Scan the whole document and assemble the aggregate text.
    ///
    /// Skipped pages are logged at `warn` and never abort the scan. The
    /// per-page records keep their original page numbers, so gaps reveal
    /// which pages were skipped.
    pub fn extract(&self, include_page_numbers: bool) -> ExtractionResult {
        let total_pages = self.page_count();
        let mut pages = Vec::new();

        for outcome in self.pages() {
            match outcome {
                PageOutcome::Extracted(page) => pages.push(page),
                PageOutcome::Skipped {
                    page_number,
                    reason,
                } => {
                    log::warn!("Skipping page {}: {}", page_number, reason);
                }
            }
        }

        let full_text = assemble_full_text(&pages, include_page_numbers);
        ExtractionResult::new(pages, full_text, total_pages)
    }
}

/// Join per-page texts into the aggregate document text.
///
/// With page numbers enabled, every page is preceded by a
/// `--- Page N ---` marker and the parts are joined with single newlines.
/// Without, page texts are joined with blank lines.
pub fn assemble_full_text(pages: &[PageText], include_page_numbers: bool) -> String {
    if include_page_numbers {
        let mut parts = Vec::with_capacity(pages.len() * 2);
        for page in pages {
            parts.push(format!("\n--- Page {} ---\n", page.page_number));
            parts.push(page.text.clone());
        }
        parts.join("\n")
    } else {
        pages
            .iter()
            .map(|page| page.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
