// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

use std::path::{Path, PathBuf};

// Re-export commonly used types outside of crate (for the binaries)
pub use data::{RowReadError, RowReader};
pub use domain::{
    ExtractError, IssueDate, PriceSeries, Record, ScatterSeries, SortOrder, extract_records_from,
};
pub use ui::ScatterApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Semicolon-delimited records file
    pub path: PathBuf,

    /// Order of points along the date axis. `lexical` sorts the DD-Mon-YY
    /// labels as text; `chronological` sorts by the calendar date.
    #[arg(long, value_enum, default_value_t = SortOrder::Lexical)]
    pub sort_order: SortOrder,
}

/// Read and fold every row of `path` into finalized records.
pub fn load_records(path: &Path) -> Result<Vec<Record>, ExtractError> {
    let reader = RowReader::open(path)?;
    extract_records_from(reader)
}

/// The whole pipeline short of drawing: rows, records, aligned series, cleaned series.
pub fn load_scatter(path: &Path, sort_order: SortOrder) -> Result<ScatterSeries, ExtractError> {
    let records = load_records(path)?;
    Ok(PriceSeries::from_records(&records).clean(sort_order))
}

/// Main application entry point - creates the GUI app
pub fn run_app(
    cc: &eframe::CreationContext<'_>,
    source_name: String,
    scatter: ScatterSeries,
) -> ScatterApp {
    ScatterApp::new(cc, source_name, scatter)
}
