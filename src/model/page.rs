//! Page-level extraction types.

use serde::{Deserialize, Serialize};

/// Text extracted from a single page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageText {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Extracted text, stored as produced by the extractor
    pub text: String,

    /// Number of characters in `text` (Unicode scalar values)
    pub character_count: usize,
}

impl PageText {
    /// Create a page record, counting characters from the text.
    pub fn new(page_number: u32, text: impl Into<String>) -> Self {
        let text = text.into();
        let character_count = text.chars().count();
        Self {
            page_number,
            text,
            character_count,
        }
    }

    /// Check if the page carries any visible text.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// The outcome of scanning every page of a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Pages that yielded text, in ascending page order
    pub pages: Vec<PageText>,

    /// Aggregate text assembled from the extracted pages
    pub full_text: String,

    /// Total number of pages in the document, including skipped ones
    pub total_pages: u32,

    /// Number of characters in `full_text` (Unicode scalar values)
    pub total_characters: usize,
}

impl ExtractionResult {
    /// Create a result, counting aggregate characters from the full text.
    pub fn new(pages: Vec<PageText>, full_text: String, total_pages: u32) -> Self {
        let total_characters = full_text.chars().count();
        Self {
            pages,
            full_text,
            total_pages,
            total_characters,
        }
    }

    /// Number of pages that yielded text.
    pub fn pages_with_text(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Check if no page yielded any text.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_text_counts_scalar_values() {
        let page = PageText::new(1, "café ☕");
        assert_eq!(page.page_number, 1);
        assert_eq!(page.character_count, 6);
        assert!(page.has_text());
    }

    #[test]
    fn test_blank_page_has_no_text() {
        let page = PageText::new(2, "  \n\t ");
        assert!(!page.has_text());
    }

    #[test]
    fn test_extraction_result_counters() {
        let pages = vec![PageText::new(1, "one"), PageText::new(3, "three")];
        let result = ExtractionResult::new(pages, "one\n\nthree".to_string(), 3);
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.pages_with_text(), 2);
        assert_eq!(result.total_characters, 10);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_empty_extraction_result() {
        let result = ExtractionResult::new(Vec::new(), String::new(), 0);
        assert!(result.is_empty());
        assert_eq!(result.pages_with_text(), 0);
        assert_eq!(result.total_characters, 0);
    }
}
