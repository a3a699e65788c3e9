//! Suburb price index and existence search

use crate::core::record::RecordStore;
use std::cmp::Ordering;
use tracing::debug;

/// Builds the descending-sorted price sequence for one suburb.
///
/// Exact, case-sensitive suburb match; records with a missing price are
/// excluded. An unknown suburb yields an empty sequence rather than an
/// error. The sequence is derived fresh on every call and never cached.
pub fn price_index(store: &RecordStore, suburb: &str) -> Vec<f64> {
    let mut prices: Vec<f64> = store
        .records()
        .iter()
        .filter(|r| r.suburb == suburb)
        .filter_map(|r| r.price)
        .collect();
    prices.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    prices
}

/// Binary search for an exact value in a descending-sorted slice.
///
/// Precondition: `prices` is fully sorted in descending order; this is
/// not re-validated. Comparison is exact, with no tolerance for
/// near-matches. Duplicates: any occurrence at a probed midpoint counts.
pub fn exists(prices: &[f64], target: f64) -> bool {
    if prices.is_empty() {
        return false;
    }

    let mut low = 0usize;
    let mut high = prices.len() - 1;
    while low <= high {
        let mid = (low + high) / 2;
        if prices[mid] == target {
            return true;
        }
        if prices[mid] > target {
            // Descending order: anything smaller sits to the right of mid.
            low = mid + 1;
        } else {
            if mid == 0 {
                return false;
            }
            high = mid - 1;
        }
    }
    false
}

/// Whether any listing in `target_suburb` sold for exactly `target_price`.
pub fn locate_price(store: &RecordStore, target_price: f64, target_suburb: &str) -> bool {
    let index = price_index(store, target_suburb);
    debug!(
        "Searching {} listed prices in suburb '{}'",
        index.len(),
        target_suburb
    );
    exists(&index, target_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::PropertyRecord;

    fn record(suburb: &str, price: Option<f64>) -> PropertyRecord {
        PropertyRecord {
            suburb: suburb.to_string(),
            price,
            land_size: None,
            sold_date: None,
        }
    }

    fn clayton_store() -> RecordStore {
        RecordStore::new(vec![
            record("Clayton", Some(950000.0)),
            record("Clayton", Some(900000.0)),
            record("Glen Waverley", Some(1500000.0)),
            record("Clayton", Some(1000000.0)),
            record("Clayton", None),
            record("Clayton", Some(800000.0)),
        ])
    }

    #[test]
    fn test_price_index_sorted_descending() {
        let index = price_index(&clayton_store(), "Clayton");
        assert_eq!(index, vec![1000000.0, 950000.0, 900000.0, 800000.0]);
    }

    #[test]
    fn test_price_index_unknown_suburb_is_empty() {
        assert!(price_index(&clayton_store(), "Nowhereville").is_empty());
    }

    #[test]
    fn test_exists_empty_sequence() {
        assert!(!exists(&[], 1000000.0));
    }

    #[test]
    fn test_exists_single_element() {
        assert!(exists(&[5.0], 5.0));
        assert!(!exists(&[5.0], 6.0));
        assert!(!exists(&[5.0], 4.0));
    }

    #[test]
    fn test_exists_duplicates() {
        assert!(exists(&[10.0, 10.0, 7.0, 3.0], 10.0));
    }

    #[test]
    fn test_exists_matches_linear_scan() {
        let sequences: &[&[f64]] = &[
            &[],
            &[5.0],
            &[9.0, 7.0, 5.0, 3.0, 1.0],
            &[10.0, 10.0, 7.0, 3.0],
            &[1000000.0, 950000.0, 900000.0, 800000.0],
            &[8.0, 6.0, 6.0, 6.0, 2.0, 0.0],
        ];
        let probes = [
            -1.0, 0.0, 1.0, 2.0, 3.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 800000.0, 999999.0,
            1000000.0,
        ];

        for seq in sequences {
            for probe in probes {
                assert_eq!(
                    exists(seq, probe),
                    seq.contains(&probe),
                    "mismatch for {probe} in {seq:?}"
                );
            }
        }
    }

    #[test]
    fn test_exists_is_idempotent() {
        let seq = [9.0, 7.0, 5.0];
        assert_eq!(exists(&seq, 7.0), exists(&seq, 7.0));
        assert_eq!(exists(&seq, 4.0), exists(&seq, 4.0));
    }

    #[test]
    fn test_locate_price_clayton_scenario() {
        let store = clayton_store();
        assert!(locate_price(&store, 1000000.0, "Clayton"));
        assert!(!locate_price(&store, 999999.0, "Clayton"));
    }

    #[test]
    fn test_locate_price_unknown_suburb_is_not_found() {
        assert!(!locate_price(&clayton_store(), 1000000.0, "Nowhereville"));
    }
}
