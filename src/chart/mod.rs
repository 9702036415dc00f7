use thiserror::Error;

use crate::pipeline::MeanRates;

mod svg;
mod term;

pub use svg::SvgSurface;
pub use term::TextSurface;

/// Error type used by chart surfaces
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Default chart title for the purpose/rate report.
pub const DEFAULT_TITLE: &str = "mean interest rate by purpose";

/// Default x-axis label.
pub const DEFAULT_X_LABEL: &str = "purpose";

/// Default y-axis label.
pub const DEFAULT_Y_LABEL: &str = "mean interest rates (%)";

/// Labeled bar data ready for a surface
///
/// Holds a title, axis labels, and two positionally-aligned sequences of
/// category labels and values. Alignment is guaranteed by construction:
/// bars are only added in pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    title: String,
    x_label: String,
    y_label: String,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl BarChart {
    /// Creates an empty chart with the given title and axis labels
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        BarChart {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            labels: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Builds a chart from an averaged series, one bar per key in series
    /// order, under the default title and axis labels
    pub fn from_series(series: &MeanRates) -> Self {
        let mut chart = BarChart::new(DEFAULT_TITLE, DEFAULT_X_LABEL, DEFAULT_Y_LABEL);
        for (label, &value) in series {
            chart.push(label.clone(), value);
        }
        chart
    }

    /// Appends one labeled bar
    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.labels.push(label.into());
        self.values.push(value);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Largest value on the chart, 0.0 when empty
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

/// Rendering seam for bar charts
///
/// A surface owns all layout and drawing mechanics; the pipeline only
/// hands it aligned label/value pairs plus titles.
pub trait ChartSurface {
    fn render(&mut self, chart: &BarChart) -> Result<(), ChartError>;
}
