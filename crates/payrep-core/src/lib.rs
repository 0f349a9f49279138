pub mod aggregate;
pub mod batch;
pub mod error;
pub mod extraction;
pub mod layout;
pub mod model;
pub mod parsing;
pub mod storage;

pub use aggregate::{aggregate, aggregate_for_analytics};
pub use parsing::DocumentParser;

use error::PayrepError;
use extraction::TokenExtractor;
use layout::builtin;
use model::Document;
use std::path::Path;

/// Main API entry point: extract and parse one payment-report PDF.
pub fn parse_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn TokenExtractor,
    parser: &DocumentParser,
) -> Result<Document, PayrepError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    Ok(parser.parse(&pages))
}

/// Build a parser from a layout file, a named preset, or the default preset.
///
/// A layout file takes precedence over a preset.
pub fn load_parser(
    layout_file: Option<&Path>,
    preset: Option<&str>,
) -> Result<DocumentParser, PayrepError> {
    let layout = match (layout_file, preset) {
        (Some(path), _) => layout::load_layout(path)?,
        (None, Some(name)) => builtin::load_preset(name)?,
        (None, None) => builtin::load_preset(builtin::DEFAULT_PRESET)?,
    };
    tracing::debug!(layout = %layout.name, version = %layout.version, "loaded column layout");
    DocumentParser::new(&layout)
}
