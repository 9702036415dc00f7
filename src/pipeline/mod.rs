use indexmap::IndexMap;
use log::{debug, info};
use std::path::Path;
use thiserror::Error;

pub mod aggregator;
pub mod grouper;
pub mod source;

pub use aggregator::average;
pub use grouper::group;
pub use source::CsvSource;

/// Column holding the grouping key in a conventional loan listing.
pub const CATEGORY_COLUMN: &str = "purpose";

/// Column holding the rate being averaged.
pub const RATE_COLUMN: &str = "int_rate";

/// Conventional input file name when none is given.
pub const DEFAULT_INPUT: &str = "data.csv";

/// Error type used across the pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("missing header line")]
    MissingHeader,

    #[error("missing column: {0}")]
    MissingColumn(String),

    #[error("line {line}: expected {expected} fields, got {found}")]
    RowShape {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid rate value '{value}'")]
    RateParse { line: usize, value: String },
}

/// One-to-many mapping from category key to the rates observed for it,
/// in first-occurrence key order and source row order within each key.
pub type GroupedRates = IndexMap<String, Vec<f64>>;

/// One-to-one mapping from category key to the mean of its observed rates.
pub type MeanRates<K = String> = IndexMap<K, f64>;

/// Runs the whole pipeline on a loan listing using the conventional
/// `purpose` / `int_rate` columns.
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Errors
/// Returns a [`PipelineError`] if:
/// - The file cannot be opened or read
/// - A required column is missing from the header
/// - A rate value is not a decimal number
///
/// # Example
/// ```rust,no_run
/// # use std::path::Path;
/// let means = ratechart::pipeline::mean_rates_by_purpose(Path::new("data.csv")).unwrap();
/// for (purpose, mean) in &means {
///     println!("{purpose} => {mean:.2}");
/// }
/// ```
pub fn mean_rates_by_purpose(path: &Path) -> Result<MeanRates, PipelineError> {
    mean_rates(path, CATEGORY_COLUMN, RATE_COLUMN)
}

/// Same as [`mean_rates_by_purpose`] with explicit column names.
pub fn mean_rates(
    path: &Path,
    category_col: &str,
    rate_col: &str,
) -> Result<MeanRates, PipelineError> {
    // The source owns the file mapping; dropping it at the end of this
    // scope releases the handle on both the success and the error path.
    let csv = CsvSource::open(path)?;
    debug!("opened {} with columns {:?}", path.display(), csv.headers());

    let grouped = group(&csv, category_col, rate_col)?;
    let rows: usize = grouped.values().map(Vec::len).sum();
    info!("grouped {} rows into {} {} buckets", rows, grouped.len(), category_col);

    Ok(average(grouped))
}
