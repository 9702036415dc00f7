use std::io::Write;

use crate::chart::{BarChart, ChartError, ChartSurface};

const DEFAULT_BAR_WIDTH: usize = 40;

/// Terminal surface drawing horizontal bars scaled to the widest value
///
/// # Example
/// ```rust
/// # use ratechart::chart::{BarChart, ChartSurface, TextSurface};
/// let mut chart = BarChart::new("rates", "purpose", "rate");
/// chart.push("car", 5.0);
/// let mut surface = TextSurface::new(Vec::new());
/// surface.render(&chart).unwrap();
/// ```
#[derive(Debug)]
pub struct TextSurface<W: Write> {
    out: W,
    bar_width: usize,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        TextSurface {
            out,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    /// Overrides the width, in characters, of the longest bar
    pub fn with_bar_width(out: W, bar_width: usize) -> Self {
        TextSurface { out, bar_width }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartSurface for TextSurface<W> {
    fn render(&mut self, chart: &BarChart) -> Result<(), ChartError> {
        writeln!(self.out, "{}", chart.title())?;
        writeln!(self.out, "{}", "=".repeat(chart.title().chars().count()))?;

        let max = chart.max_value();
        let label_width = chart
            .labels()
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);

        for (label, &value) in chart.labels().iter().zip(chart.values()) {
            let bar_len = if max > 0.0 {
                ((value / max).max(0.0) * self.bar_width as f64).round() as usize
            } else {
                0
            };
            writeln!(
                self.out,
                "{:<width$}  {:>8.2}  {}",
                label,
                value,
                "#".repeat(bar_len),
                width = label_width
            )?;
        }

        writeln!(self.out)?;
        writeln!(self.out, "{} per {}", chart.y_label(), chart.x_label())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(chart: &BarChart) -> String {
        let mut surface = TextSurface::with_bar_width(Vec::new(), 10);
        surface.render(chart).unwrap();
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn widest_bar_spans_the_full_width() {
        let mut chart = BarChart::new("rates", "purpose", "mean rate");
        chart.push("car", 5.0);
        chart.push("education", 10.0);
        let out = rendered(&chart);

        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[2].starts_with("car"));
        assert!(lines[2].ends_with(&"#".repeat(5)));
        assert!(lines[3].ends_with(&"#".repeat(10)));
    }

    #[test]
    fn empty_chart_still_renders_a_frame() {
        let chart = BarChart::new("rates", "purpose", "mean rate");
        let out = rendered(&chart);
        assert!(out.contains("rates"));
        assert!(out.contains("mean rate per purpose"));
    }

    #[test]
    fn values_are_printed_next_to_labels() {
        let mut chart = BarChart::new("t", "x", "y");
        chart.push("credit_card", 12.3);
        let out = rendered(&chart);
        assert!(out.contains("credit_card"));
        assert!(out.contains("12.30"));
    }
}
