//! Integration tests for the data source trait surface.

use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use pdfjson::{ConversionConfig, DataSource, PdfToJsonConverter};

/// Save a minimal one-page PDF into `dir` and return its path.
fn write_one_page_pdf(dir: &Path, name: &str, text: &str) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![100.into(), 700.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let path = dir.join(name);
    doc.save(&path).unwrap();
    path
}

#[test]
fn test_trait_fetch_yields_json_values() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = write_one_page_pdf(dir.path(), "trait.pdf", "Trait fetch text");

    let mut converter = PdfToJsonConverter::new(ConversionConfig::new(&pdf));
    let source: &mut dyn DataSource = &mut converter;

    let values = source.fetch();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0]["metadata"]["data_type"], "from_pdf");
    assert_eq!(values[0]["metadata"]["total_pages"], 1);
    assert!(values[0]["content"]["full_text"]
        .as_str()
        .unwrap()
        .contains("Trait fetch text"));
    assert_eq!(values[0]["content"]["pages"].as_array().unwrap().len(), 1);
}

#[test]
fn test_trait_fetch_failure_yields_empty() {
    let mut converter = PdfToJsonConverter::new(ConversionConfig::new("/nonexistent/gone.pdf"));
    let source: &mut dyn DataSource = &mut converter;

    assert!(source.fetch().is_empty());
    assert!(!source.progress().is_fetch_completed());
}

#[test]
fn test_trait_progress_reflects_completed_run() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = write_one_page_pdf(dir.path(), "progress.pdf", "one page");

    let mut converter = PdfToJsonConverter::new(ConversionConfig::new(&pdf));
    let source: &mut dyn DataSource = &mut converter;
    source.fetch();

    let tracker = source.progress();
    assert_eq!(tracker.total_to_process(), 1);
    assert_eq!(tracker.total_processed(), 1);
    assert!(tracker.is_fetch_completed());
}

#[test]
fn test_source_name_defaults_and_overrides() {
    let converter = PdfToJsonConverter::new(ConversionConfig::new("a.pdf"));
    assert_eq!(DataSource::name(&converter), "pdf_to_json");

    let named = PdfToJsonConverter::new(ConversionConfig::new("a.pdf")).with_name("contracts");
    assert_eq!(DataSource::name(&named), "contracts");
}

#[test]
fn test_connection_schema_describes_parameters() {
    let converter = PdfToJsonConverter::new(ConversionConfig::new("a.pdf"));
    let schema = converter.connection_schema();

    assert_eq!(schema.connection_type, "FileSystem");
    let names: Vec<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        ["pdf_file_path", "output_file_path", "include_page_numbers"]
    );
    assert!(schema.fields[0].required);
    assert!(!schema.fields[1].required);

    let json = serde_json::to_value(&schema).unwrap();
    assert_eq!(json["fields"][0]["type"], "string");
    assert_eq!(json["fields"][2]["type"], "bool");
    assert_eq!(json["fields"][2]["default"], true);
}

#[test]
fn test_icon_is_inline_svg() {
    let converter = PdfToJsonConverter::new(ConversionConfig::new("a.pdf"));
    let icon = converter.icon();
    assert!(icon.contains("<svg"));
    assert!(icon.contains("</svg>"));
}
