use crate::error::PayrepError;
use crate::extraction::TokenExtractor;
use crate::model::{Document, SourcedDocument};
use crate::parsing::DocumentParser;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// A file that could not be read or extracted.
#[derive(Debug)]
pub struct FailedFile {
    pub path: PathBuf,
    pub error: PayrepError,
}

/// Outcome of parsing a batch of files.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// Successfully parsed documents, in input order.
    pub documents: Vec<SourcedDocument>,
    pub failures: Vec<FailedFile>,
}

/// Read and parse many report files on a bounded worker pool.
///
/// `jobs` caps the number of worker threads; `0` lets rayon pick one per
/// core. A file that fails to read, extract or deserialize is reported in
/// [`BatchResult::failures`] and does not stop the rest of the batch.
pub fn parse_files(
    paths: &[PathBuf],
    extractor: &dyn TokenExtractor,
    parser: &DocumentParser,
    jobs: usize,
) -> Result<BatchResult, PayrepError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| PayrepError::WorkerPool(e.to_string()))?;

    let outcomes: Vec<Result<SourcedDocument, FailedFile>> = pool.install(|| {
        paths
            .par_iter()
            .map(|path| {
                parse_file(path, extractor, parser).map_err(|error| FailedFile {
                    path: path.clone(),
                    error,
                })
            })
            .collect()
    });

    let mut result = BatchResult::default();
    for outcome in outcomes {
        match outcome {
            Ok(document) => result.documents.push(document),
            Err(failed) => {
                tracing::warn!(
                    path = %failed.path.display(),
                    error = %failed.error,
                    "failed to parse report"
                );
                result.failures.push(failed);
            }
        }
    }

    tracing::info!(
        parsed = result.documents.len(),
        failed = result.failures.len(),
        backend = extractor.backend_name(),
        "parsed report batch"
    );

    Ok(result)
}

/// Whether a path holds a previously saved [`Document`] rather than a PDF.
pub fn is_saved_document(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Read and parse a single report file.
///
/// `.json` files are read as saved documents; anything else goes through
/// the extractor.
pub fn parse_file(
    path: &Path,
    extractor: &dyn TokenExtractor,
    parser: &DocumentParser,
) -> Result<SourcedDocument, PayrepError> {
    let bytes = std::fs::read(path)?;
    let document: Document = if is_saved_document(path) {
        serde_json::from_slice(&bytes)?
    } else {
        let pages = extractor.extract_pages(&bytes)?;
        parser.parse(&pages)
    };
    tracing::debug!(
        path = %path.display(),
        records = document.records.len(),
        "parsed report"
    );
    Ok(SourcedDocument {
        path: path.to_path_buf(),
        document,
    })
}
