pub mod analytics;
pub mod layout;
pub mod parse;
pub mod report;

use payrep_core::batch::{is_saved_document, parse_files};
use payrep_core::error::PayrepError;
use payrep_core::extraction::pdftotext::PdftotextExtractor;
use payrep_core::model::SourcedDocument;
use payrep_core::DocumentParser;
use std::path::PathBuf;

use crate::LayoutArgs;

pub fn load_parser(args: &LayoutArgs) -> Result<DocumentParser, PayrepError> {
    payrep_core::load_parser(args.layout.as_deref(), args.preset.as_deref())
}

/// Load every input as a document: PDFs are parsed and JSON files are read
/// as previously saved documents, in parallel. Inputs that fail are logged
/// and skipped. The result keeps the order the inputs were given in.
pub fn load_documents(
    inputs: &[PathBuf],
    parser: &DocumentParser,
    jobs: usize,
) -> Result<Vec<SourcedDocument>, PayrepError> {
    let needs_pdftotext = inputs.iter().any(|p| !is_saved_document(p));
    if needs_pdftotext && !PdftotextExtractor::is_available() {
        return Err(PayrepError::PdftotextNotFound);
    }

    let extractor = PdftotextExtractor::new();
    let batch = parse_files(inputs, &extractor, parser, jobs)?;
    Ok(batch.documents)
}
