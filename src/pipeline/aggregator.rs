use indexmap::IndexMap;
use std::hash::Hash;

use crate::pipeline::MeanRates;

/// Arithmetic mean of each key's values
///
/// Generic over the key (anything hashable) and over the numeric value
/// type. The output carries exactly the input's keys, in the input's
/// iteration order, with one mean per key computed under real division.
/// A single-element sequence averages to that element unchanged.
///
/// Precondition: every sequence is non-empty. The grouper never produces
/// an empty one, and the mean of an empty sequence is undefined here.
///
/// # Example
/// ```rust
/// # use indexmap::IndexMap;
/// # use ratechart::pipeline::aggregator::average;
/// let mut grouped: IndexMap<String, Vec<f64>> = IndexMap::new();
/// grouped.insert("car".to_string(), vec![4.0, 6.0]);
/// let means = average(grouped);
/// assert_eq!(means["car"], 5.0);
/// ```
pub fn average<K, V>(grouped: IndexMap<K, Vec<V>>) -> MeanRates<K>
where
    K: Hash + Eq,
    V: Copy + Into<f64>,
{
    grouped
        .into_iter()
        .map(|(key, values)| {
            let count = values.len() as f64;
            let sum: f64 = values.iter().map(|&v| v.into()).sum();
            (key, sum / count)
        })
        .collect()
}
