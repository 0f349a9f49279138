mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "payrep",
    version,
    about = "Extract payment records from report PDFs and merge them into one chronological report"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Which column layout to parse with.
#[derive(Args, Clone)]
pub struct LayoutArgs {
    /// Predefined layout name (default: kz-budget)
    #[arg(short, long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Custom JSON layout file (overrides --preset)
    #[arg(short, long, value_name = "FILE")]
    pub layout: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a single report PDF into structured records
    Parse {
        /// Path to the report PDF
        input_file: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the parsed document to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Merge several reports (PDF or parsed JSON) into one chronological report
    Report {
        /// Report PDFs or previously saved JSON documents
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Number of parallel parse workers (0 = one per core)
        #[arg(short, long, default_value_t = 0)]
        jobs: usize,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Print the numeric view of merged reports (amounts, filter values) as JSON
    Analytics {
        /// Report PDFs or previously saved JSON documents
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Number of parallel parse workers (0 = one per core)
        #[arg(short, long, default_value_t = 0)]
        jobs: usize,
    },
    /// Inspect and validate column layouts
    Layout {
        #[command(subcommand)]
        action: LayoutAction,
    },
}

#[derive(Subcommand)]
enum LayoutAction {
    /// List predefined layouts
    List,
    /// Print a predefined layout as JSON
    Show {
        /// Preset name (e.g., "kz-budget")
        preset: String,
    },
    /// Validate a custom layout file
    Validate {
        /// Path to JSON layout file
        file: PathBuf,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            layout,
            output,
            out,
        } => commands::parse::run(input_file, &layout, &output, out),
        Commands::Report {
            input_files,
            layout,
            jobs,
            output,
        } => commands::report::run(&input_files, &layout, jobs, &output),
        Commands::Analytics {
            input_files,
            layout,
            jobs,
        } => commands::analytics::run(&input_files, &layout, jobs),
        Commands::Layout { action } => match action {
            LayoutAction::List => commands::layout::list(),
            LayoutAction::Show { preset } => commands::layout::show(&preset),
            LayoutAction::Validate { file } => commands::layout::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
