use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::chart::{BarChart, ChartError, ChartSurface};

const BAR_SLOT: f64 = 72.0;
const BAR_WIDTH: f64 = 48.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 112.0; // room for rotated tick labels
const PLOT_HEIGHT: f64 = 320.0;
const MIN_WIDTH: f64 = 320.0;

/// File surface writing a standalone SVG bar chart
///
/// Each render replaces the target file. Category tick labels are rotated
/// so long purpose names stay readable.
///
/// # Example
/// ```rust,no_run
/// # use ratechart::chart::{BarChart, ChartSurface, SvgSurface};
/// let mut chart = BarChart::new("rates", "purpose", "rate");
/// chart.push("car", 5.0);
/// let mut surface = SvgSurface::create("chart.svg");
/// surface.render(&chart).unwrap();
/// ```
#[derive(Debug)]
pub struct SvgSurface {
    path: PathBuf,
}

impl SvgSurface {
    pub fn create(path: impl Into<PathBuf>) -> Self {
        SvgSurface { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChartSurface for SvgSurface {
    fn render(&mut self, chart: &BarChart) -> Result<(), ChartError> {
        let file = File::create(&self.path)?;
        let mut out = BufWriter::new(file);
        write_svg(&mut out, chart)?;
        out.flush()?;
        Ok(())
    }
}

fn write_svg<W: Write>(out: &mut W, chart: &BarChart) -> io::Result<()> {
    let width = (MARGIN_LEFT + MARGIN_RIGHT + chart.len() as f64 * BAR_SLOT).max(MIN_WIDTH);
    let height = MARGIN_TOP + PLOT_HEIGHT + MARGIN_BOTTOM;
    let base_y = MARGIN_TOP + PLOT_HEIGHT;
    let max = chart.max_value();

    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif">"#
    )?;
    writeln!(
        out,
        r#"  <rect width="{width}" height="{height}" fill="white"/>"#
    )?;
    writeln!(
        out,
        r#"  <text x="{x}" y="28" text-anchor="middle" font-size="16">{title}</text>"#,
        x = width / 2.0,
        title = xml_escape(chart.title())
    )?;
    writeln!(
        out,
        r#"  <text x="16" y="{y}" text-anchor="middle" font-size="12" transform="rotate(-90 16 {y})">{label}</text>"#,
        y = MARGIN_TOP + PLOT_HEIGHT / 2.0,
        label = xml_escape(chart.y_label())
    )?;
    writeln!(
        out,
        r#"  <text x="{x}" y="{y}" text-anchor="middle" font-size="12">{label}</text>"#,
        x = width / 2.0,
        y = height - 12.0,
        label = xml_escape(chart.x_label())
    )?;

    // axes
    writeln!(
        out,
        r#"  <line x1="{x}" y1="{top}" x2="{x}" y2="{base}" stroke="black"/>"#,
        x = MARGIN_LEFT,
        top = MARGIN_TOP,
        base = base_y
    )?;
    writeln!(
        out,
        r#"  <line x1="{left}" y1="{base}" x2="{right}" y2="{base}" stroke="black"/>"#,
        left = MARGIN_LEFT,
        base = base_y,
        right = width - MARGIN_RIGHT
    )?;

    for (i, (label, &value)) in chart.labels().iter().zip(chart.values()).enumerate() {
        let bar_h = if max > 0.0 {
            (value / max).max(0.0) * PLOT_HEIGHT
        } else {
            0.0
        };
        let x = MARGIN_LEFT + i as f64 * BAR_SLOT + (BAR_SLOT - BAR_WIDTH) / 2.0;
        let y = base_y - bar_h;
        let center = x + BAR_WIDTH / 2.0;

        writeln!(
            out,
            r#"  <rect x="{x:.1}" y="{y:.1}" width="{BAR_WIDTH}" height="{bar_h:.1}" fill="steelblue"/>"#
        )?;
        writeln!(
            out,
            r#"  <text x="{center:.1}" y="{vy:.1}" text-anchor="middle" font-size="11">{value:.2}</text>"#,
            vy = y - 6.0
        )?;
        writeln!(
            out,
            r#"  <text x="{center:.1}" y="{ty:.1}" text-anchor="end" font-size="11" transform="rotate(-40 {center:.1} {ty:.1})">{label}</text>"#,
            ty = base_y + 16.0,
            label = xml_escape(label)
        )?;
    }

    writeln!(out, "</svg>")
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
