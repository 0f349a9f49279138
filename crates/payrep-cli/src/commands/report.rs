use payrep_core::error::PayrepError;
use payrep_core::storage::LocalFileStore;
use std::path::PathBuf;

use crate::output;
use crate::LayoutArgs;

pub fn run(
    input_files: &[PathBuf],
    layout: &LayoutArgs,
    jobs: usize,
    output_format: &str,
) -> Result<(), PayrepError> {
    let parser = super::load_parser(layout)?;
    let documents = super::load_documents(input_files, &parser, jobs)?;
    let report = payrep_core::aggregate(&documents, &LocalFileStore);

    match output_format {
        "json" => output::json::print(&report)?,
        _ => println!("{}", output::table::format_report(&report)),
    }

    Ok(())
}
