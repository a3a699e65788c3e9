//! Descriptive statistics over the record store

use crate::core::record::{RecordStore, SuburbSelector};
use anyhow::{bail, Result};
use std::collections::BTreeMap;

/// Describe-style statistics for one numeric column.
///
/// `std` is the sample standard deviation and is `None` for fewer than
/// two values. Quantiles interpolate linearly between closest ranks.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// Summary of both numeric columns for a suburb selection.
#[derive(Debug)]
pub struct DatasetSummary {
    pub selection: String,
    pub price: ColumnSummary,
    pub land_size: ColumnSummary,
}

/// One bucket of a value histogram; `upper` is inclusive on the last bin.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

pub fn describe(values: &[f64]) -> ColumnSummary {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    ColumnSummary {
        count: sorted.len(),
        mean: mean(&sorted),
        std: sample_std(&sorted),
        min: sorted.first().copied(),
        q25: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q75: quantile(&sorted, 0.75),
        max: sorted.last().copied(),
    }
}

fn require_known_suburb(store: &RecordStore, selector: &SuburbSelector) -> Result<()> {
    if let SuburbSelector::Named(name) = selector {
        if !store.has_suburb(name) {
            bail!("Suburb '{name}' does not exist in the dataset");
        }
    }
    Ok(())
}

/// Describe statistics for the selection, one column per numeric field.
///
/// A named suburb that is absent from the dataset is an error here,
/// unlike on the search path.
pub fn suburb_summary(store: &RecordStore, selector: &SuburbSelector) -> Result<DatasetSummary> {
    require_known_suburb(store, selector)?;

    Ok(DatasetSummary {
        selection: selector.label().to_string(),
        price: describe(&store.prices(selector)),
        land_size: describe(&store.land_sizes(selector)),
    })
}

/// Mean land size over the selection; `None` when no record in the
/// selection carries a land size.
pub fn avg_land_size(store: &RecordStore, selector: &SuburbSelector) -> Result<Option<f64>> {
    require_known_suburb(store, selector)?;
    Ok(mean(&store.land_sizes(selector)))
}

/// Bins `values` into `bin_count` equal-width buckets over `[min, max]`.
///
/// Returns `None` for an empty value set. A degenerate set where every
/// value is equal collapses into a single bucket.
pub fn histogram(values: &[f64], bin_count: usize) -> Option<Vec<HistogramBin>> {
    if values.is_empty() || bin_count == 0 {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return Some(vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len(),
        }]);
    }

    let width = (max - min) / bin_count as f64;
    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for value in values {
        let idx = (((value - min) / (max - min)) * bin_count as f64) as usize;
        bins[idx.min(bin_count - 1)].count += 1;
    }

    Some(bins)
}

/// Number of properties sold per calendar year, ascending by year.
/// Records without a parseable sold date are excluded.
pub fn sales_per_year(store: &RecordStore) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for year in store.sold_years() {
        *counts.entry(year).or_insert(0) += 1;
    }
    counts
}
