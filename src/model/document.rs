//! Document-level output types.

use super::{ExtractionResult, PageText};
use crate::error::Result;
use crate::hash::compute_file_hash;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Data type marker recorded in every document's metadata node.
pub const DATA_TYPE: &str = "from_pdf";

/// Output serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Human-readable, 2-space indentation
    #[default]
    Pretty,
    /// Single line, no extra whitespace
    Compact,
}

/// The complete conversion artifact.
///
/// Field order is load-bearing: consumers expect the `metadata` node to
/// precede `content` in the emitted JSON, and serde serializes struct
/// fields in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionDocument {
    /// Source-file metadata
    pub metadata: DocumentMetadata,

    /// Extracted text content
    pub content: DocumentContent,
}

/// Metadata describing the source PDF and the extraction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Document name (PDF file name without extension)
    pub name: String,

    /// Always [`DATA_TYPE`]
    pub data_type: String,

    /// When the document node was assembled
    pub timestamp: DateTime<Utc>,

    /// PDF file name including extension
    pub pdf_file_name: String,

    /// Absolute path to the source PDF
    pub pdf_file_path: String,

    /// Source file size in bytes
    pub pdf_file_size: u64,

    /// Lowercase SHA-256 hex digest of the source file; empty when hashing failed
    pub pdf_file_hash: String,

    /// Source file modification time
    pub pdf_modified_time: DateTime<Utc>,

    /// Total number of pages in the source document
    pub total_pages: u32,

    /// Number of characters in the aggregate text
    pub total_characters: usize,

    /// Number of pages that yielded text
    pub pages_with_text: u32,

    /// When extraction finished; same instant as `timestamp`
    pub extraction_timestamp: DateTime<Utc>,
}

impl DocumentMetadata {
    /// Capture file metadata for a source PDF alongside its extraction result.
    ///
    /// Reads size and modification time from the filesystem and hashes the
    /// file contents. Fails only if the file cannot be stat'ed; a failed
    /// hash degrades to an empty string.
    pub fn capture<P: AsRef<Path>>(path: P, extraction: &ExtractionResult) -> Result<Self> {
        let path = path.as_ref();
        let stat = fs::metadata(path)?;

        let pdf_file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let absolute = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let modified: DateTime<Utc> = stat.modified()?.into();
        let now = Utc::now();

        Ok(Self {
            name,
            data_type: DATA_TYPE.to_string(),
            timestamp: now,
            pdf_file_name,
            pdf_file_path: absolute.to_string_lossy().into_owned(),
            pdf_file_size: stat.len(),
            pdf_file_hash: compute_file_hash(path),
            pdf_modified_time: modified,
            total_pages: extraction.total_pages,
            total_characters: extraction.total_characters,
            pages_with_text: extraction.pages_with_text(),
            extraction_timestamp: now,
        })
    }
}

/// Extracted text content: the aggregate plus per-page records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentContent {
    /// Aggregate text assembled from the extracted pages
    pub full_text: String,

    /// Per-page extraction records, ascending page order
    pub pages: Vec<PageText>,
}

impl ConversionDocument {
    /// Assemble a document from captured metadata and an extraction result.
    pub fn new(metadata: DocumentMetadata, extraction: ExtractionResult) -> Self {
        Self {
            metadata,
            content: DocumentContent {
                full_text: extraction.full_text,
                pages: extraction.pages,
            },
        }
    }

    /// Serialize the document to JSON.
    ///
    /// Pretty output uses 2-space indentation; non-ASCII characters are
    /// written literally in both formats.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let json = match format {
            JsonFormat::Pretty => serde_json::to_string_pretty(self)?,
            JsonFormat::Compact => serde_json::to_string(self)?,
        };
        Ok(json)
    }

    /// Convert the document to an untyped JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Write the document to a file as pretty JSON, creating parent
    /// directories as needed.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json(JsonFormat::Pretty)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_extraction() -> ExtractionResult {
        let pages = vec![PageText::new(1, "hello")];
        ExtractionResult::new(pages, "hello".to_string(), 1)
    }

    fn sample_document() -> ConversionDocument {
        let mut file = tempfile::NamedTempFile::with_suffix(".pdf").unwrap();
        file.write_all(b"%PDF-1.4 stub").unwrap();
        file.flush().unwrap();

        let extraction = sample_extraction();
        let metadata = DocumentMetadata::capture(file.path(), &extraction).unwrap();
        ConversionDocument::new(metadata, extraction)
    }

    #[test]
    fn test_capture_metadata() {
        let mut file = tempfile::NamedTempFile::with_suffix(".pdf").unwrap();
        file.write_all(b"%PDF-1.4 stub").unwrap();
        file.flush().unwrap();

        let extraction = sample_extraction();
        let metadata = DocumentMetadata::capture(file.path(), &extraction).unwrap();

        assert_eq!(metadata.data_type, DATA_TYPE);
        assert_eq!(metadata.pdf_file_size, 13);
        assert_eq!(metadata.pdf_file_hash.len(), 64);
        assert_eq!(metadata.total_pages, 1);
        assert_eq!(metadata.pages_with_text, 1);
        assert_eq!(metadata.timestamp, metadata.extraction_timestamp);
        assert!(metadata.pdf_file_name.ends_with(".pdf"));
        assert!(!metadata.name.ends_with(".pdf"));
        assert!(Path::new(&metadata.pdf_file_path).is_absolute());
    }

    #[test]
    fn test_capture_fails_for_missing_file() {
        let extraction = sample_extraction();
        assert!(DocumentMetadata::capture("/nonexistent/file.pdf", &extraction).is_err());
    }

    #[test]
    fn test_metadata_node_comes_first() {
        let doc = sample_document();
        let json = doc.to_json(JsonFormat::Pretty).unwrap();

        let metadata_pos = json.find("\"metadata\"").unwrap();
        let content_pos = json.find("\"content\"").unwrap();
        assert!(metadata_pos < content_pos);
    }

    #[test]
    fn test_pretty_json_uses_two_space_indent() {
        let doc = sample_document();
        let json = doc.to_json(JsonFormat::Pretty).unwrap();
        assert!(json.starts_with("{\n  \"metadata\""));
    }

    #[test]
    fn test_compact_json_is_single_line() {
        let doc = sample_document();
        let json = doc.to_json(JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let mut doc = sample_document();
        doc.content.full_text = "résumé 简历 ☕".to_string();

        let json = doc.to_json(JsonFormat::Pretty).unwrap();
        assert!(json.contains("résumé 简历 ☕"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_write_to_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("out").join("doc.json");

        let doc = sample_document();
        doc.write_to(&target).unwrap();

        let written = fs::read_to_string(&target).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert!(value.get("metadata").is_some());
        assert!(value.get("content").is_some());
    }
}
