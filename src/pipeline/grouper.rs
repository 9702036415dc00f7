use crate::pipeline::{CsvSource, GroupedRates, PipelineError};

/// One-to-many grouping of a rate column by a category column
///
/// Reads the source to exhaustion. Keys appear in first-occurrence order;
/// the rates under each key keep the order of their source rows, so every
/// value observed for a category appears exactly once, in arrival order.
///
/// # Arguments
/// * `csv` - Record source to read
/// * `category_col` - Column holding the grouping key (matched exactly)
/// * `rate_col` - Column holding the decimal rate
///
/// # Errors
/// Returns a [`PipelineError`] if either column is missing from the header,
/// a row has the wrong field count, a category is not valid UTF-8, or a
/// rate does not parse as a decimal number. Nothing is skipped; the first
/// bad row ends the run.
///
/// # Example
/// ```rust,no_run
/// # use ratechart::pipeline::{grouper, CsvSource};
/// let csv = CsvSource::open("data.csv".as_ref()).unwrap();
/// let grouped = grouper::group(&csv, "purpose", "int_rate").unwrap();
/// for (purpose, rates) in &grouped {
///     println!("{purpose}: {} rows", rates.len());
/// }
/// ```
pub fn group(
    csv: &CsvSource,
    category_col: &str,
    rate_col: &str,
) -> Result<GroupedRates, PipelineError> {
    let category_idx = csv.column_index(category_col)?;
    let rate_idx = csv.column_index(rate_col)?;

    let mut grouped = GroupedRates::new();
    for row in csv.rows() {
        let row = row?;
        let key = row.str_field(category_idx)?;
        let raw = row.field(rate_idx);
        let rate = fast_float::parse::<f64, _>(raw).map_err(|_| PipelineError::RateParse {
            line: row.line(),
            value: String::from_utf8_lossy(raw).to_string(),
        })?;

        grouped
            .entry(key.to_string())
            .or_insert_with(Vec::new)
            .push(rate);
    }

    Ok(grouped)
}
