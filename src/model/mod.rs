//! Document model types for the conversion output.
//!
//! This module defines the JSON artifact produced by a conversion: a
//! metadata node describing the source file and the extraction run,
//! followed by a content node carrying the extracted text.

mod document;
mod page;

pub use document::{
    ConversionDocument, DocumentContent, DocumentMetadata, JsonFormat, DATA_TYPE,
};
pub use page::{ExtractionResult, PageText};
