use std::io::Write;

use ratechart::chart::{BarChart, ChartSurface, TextSurface};
use ratechart::pipeline;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = tempfile::NamedTempFile::new()?;
    write!(
        tmp,
        "purpose,int_rate\ncar,4.0\ncar,6.0\neducation,10.0\ncredit_card,12.3\n"
    )?;

    // Average the rates per purpose and draw the result
    let means = pipeline::mean_rates_by_purpose(tmp.path())?;

    let chart = BarChart::from_series(&means);
    let mut surface = TextSurface::new(std::io::stdout());
    surface.render(&chart)?;

    Ok(())
}
