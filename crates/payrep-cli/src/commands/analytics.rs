use payrep_core::error::PayrepError;
use payrep_core::storage::LocalFileStore;
use std::path::PathBuf;

use crate::output;
use crate::LayoutArgs;

pub fn run(input_files: &[PathBuf], layout: &LayoutArgs, jobs: usize) -> Result<(), PayrepError> {
    let parser = super::load_parser(layout)?;
    let documents = super::load_documents(input_files, &parser, jobs)?;
    let analytics = payrep_core::aggregate_for_analytics(&documents, &LocalFileStore);
    output::json::print(&analytics)
}
