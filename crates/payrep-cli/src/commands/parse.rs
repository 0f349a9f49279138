use payrep_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;
use crate::LayoutArgs;

pub fn run(
    pdf_file: PathBuf,
    layout: &LayoutArgs,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), payrep_core::error::PayrepError> {
    let parser = super::load_parser(layout)?;
    if !PdftotextExtractor::is_available() {
        return Err(payrep_core::error::PayrepError::PdftotextNotFound);
    }
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PdftotextExtractor::new();
    let document = payrep_core::parse_pdf(&pdf_bytes, &extractor, &parser)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&document)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Parsed {} record(s), written to {}",
                document.records.len(),
                path.display()
            );
            if document.period.is_empty() {
                eprintln!("  warning: no reporting period found");
            }
        }
        None => match output_format {
            "json" => output::json::print(&document)?,
            _ => println!("{}", output::table::format_document(&document)),
        },
    }

    Ok(())
}
