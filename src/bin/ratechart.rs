use log::error;
use std::{env, path::Path, process};

use ratechart::chart::{BarChart, ChartSurface, SvgSurface, TextSurface};
use ratechart::pipeline::{self, DEFAULT_INPUT};

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    if args.len() > 3 {
        error!("usage: ratechart [input.csv] [chart.svg]");
        process::exit(1);
    }
    let input = args.get(1).map(String::as_str).unwrap_or(DEFAULT_INPUT);

    let means = match pipeline::mean_rates_by_purpose(Path::new(input)) {
        Ok(means) => means,
        Err(e) => {
            error!("{}: {}", input, e);
            process::exit(1);
        }
    };

    let chart = BarChart::from_series(&means);

    let mut term = TextSurface::new(std::io::stdout());
    if let Err(e) = term.render(&chart) {
        error!("{}", e);
        process::exit(1);
    }

    if let Some(svg_path) = args.get(2) {
        let mut svg = SvgSurface::create(svg_path);
        if let Err(e) = svg.render(&chart) {
            error!("{}: {}", svg_path, e);
            process::exit(1);
        }
    }
}
