//! # ratechart
//!
//! `ratechart` is a small loan-data reporting pipeline written in Rust. It
//! reads a comma-delimited loan listing, buckets interest rates by loan
//! purpose, averages each bucket, and hands the result to a bar-chart
//! surface. It supports:
//!
//! - Memory-mapped CSV reading (zero-copy field access)
//! - One-to-many grouping of a numeric column by a string column,
//!   preserving source order
//! - Per-group arithmetic means over any numeric value type
//! - Pluggable chart surfaces (terminal text bars, standalone SVG)
//! - Typed errors for every failure mode (missing file, missing column,
//!   malformed rate)
//!
//! # Example
//!
//! ```rust,no_run
//! use ratechart::chart::{BarChart, ChartSurface, TextSurface};
//! use ratechart::pipeline;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let means = pipeline::mean_rates_by_purpose(Path::new("data.csv"))?;
//!
//!     let chart = BarChart::from_series(&means);
//!     let mut surface = TextSurface::new(std::io::stdout());
//!     surface.render(&chart)?;
//!
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod pipeline;

pub use chart::{BarChart, ChartError, ChartSurface, SvgSurface, TextSurface};
pub use pipeline::{GroupedRates, MeanRates, PipelineError};
