//! pdfjson CLI - convert a PDF document into a structured JSON file

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfjson::{ConversionConfig, JsonFormat, PdfToJsonConverter};

#[derive(Parser)]
#[command(name = "pdfjson")]
#[command(version)]
#[command(about = "Convert a PDF document into a structured JSON file", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE", env = "PDF_FILE_PATH")]
    input: PathBuf,

    /// Output JSON file (defaults to the PDF name with .json extension)
    #[arg(short, long, value_name = "FILE", env = "OUTPUT_FILE_PATH")]
    output: Option<PathBuf>,

    /// Include "--- Page N ---" markers in the aggregate text
    #[arg(
        long,
        value_name = "BOOL",
        env = "INCLUDE_PAGE_NUMBERS",
        action = clap::ArgAction::Set,
        default_value_t = true
    )]
    page_numbers: bool,

    /// Print the resulting JSON to stdout as well
    #[arg(long)]
    print: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ConversionConfig::new(&cli.input).with_page_numbers(cli.page_numbers);
    if let Some(ref output) = cli.output {
        config = config.with_output_path(output);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Converting {}...", cli.input.display()));

    let mut converter = PdfToJsonConverter::new(config);
    let result = converter.convert();
    spinner.finish_and_clear();
    let document = result?;

    let metadata = &document.metadata;
    let output_path = converter.config().resolved_output_path();

    println!("{}", "PDF to JSON conversion completed".green().bold());
    println!("{}", "-".repeat(40).dimmed());
    println!("{}: {}", "PDF File".bold(), metadata.pdf_file_name);
    println!("{}: {}", "Total Pages".bold(), metadata.total_pages);
    println!("{}: {}", "Pages With Text".bold(), metadata.pages_with_text);
    println!(
        "{}: {}",
        "Total Characters".bold(),
        format_count(metadata.total_characters)
    );
    println!("{}: {}", "File Hash".bold(), metadata.pdf_file_hash);
    println!("{}: {}", "Data Type".bold(), metadata.data_type);
    println!("{}: {}", "Timestamp".bold(), metadata.timestamp.to_rfc3339());
    println!("{}: {}", "Output".bold(), output_path.display());

    if cli.print {
        println!();
        println!("{}", document.to_json(JsonFormat::Pretty)?);
    }

    Ok(())
}

/// Format a count with thousands separators (e.g. 1234567 -> "1,234,567").
fn format_count(n: usize) -> String {
    let digits: Vec<char> = n.to_string().chars().rev().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    grouped.chars().rev().collect()
}
