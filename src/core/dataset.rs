//! CSV ingestion for property records

use crate::core::record::{PropertyRecord, RecordStore};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};
use tracing::debug;

const SOLD_DATE_FORMAT: &str = "%d/%m/%Y";

/// Row shape of the source CSV. Empty numeric fields deserialize to
/// `None`; the sold date stays textual until parsed below.
#[derive(Debug, Deserialize)]
struct RawRecord {
    suburb: String,
    price: Option<f64>,
    land_size: Option<f64>,
    sold_date: Option<String>,
}

impl From<RawRecord> for PropertyRecord {
    fn from(raw: RawRecord) -> Self {
        let sold_date = raw
            .sold_date
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s, SOLD_DATE_FORMAT).ok());

        PropertyRecord {
            suburb: raw.suburb,
            price: raw.price,
            land_size: raw.land_size,
            sold_date,
        }
    }
}

/// Reads property records from any CSV source with a header row.
///
/// Malformed numeric fields fail the load; an unparseable sold date is
/// tolerated and stored as `None`, since only the sales trend consumes
/// dates.
pub fn read_records<R: Read>(reader: R) -> Result<RecordStore> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut records = Vec::new();
    for (row, result) in csv_reader.deserialize().enumerate() {
        let raw: RawRecord = result.with_context(|| {
            // +2: one for the header line, one for 1-based numbering
            format!("Failed to parse property record at line {}", row + 2)
        })?;
        records.push(PropertyRecord::from(raw));
    }

    debug!("Read {} property records", records.len());
    Ok(RecordStore::new(records))
}

/// Loads the record store from a CSV file on disk.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<RecordStore> {
    let file = File::open(path.as_ref())
        .with_context(|| format!("Failed to open data file: {}", path.as_ref().display()))?;
    read_records(file)
        .with_context(|| format!("Failed to load data file: {}", path.as_ref().display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
suburb,price,land_size,sold_date
Clayton,950000,448,21/10/2019
Clayton,,602,3/5/2017
Glen Waverley,1210500.5,655,30/11/2021
Oakleigh,780000,,unknown
";

    #[test]
    fn test_read_records_parses_fields() {
        let store = read_records(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(store.len(), 4);

        let first = &store.records()[0];
        assert_eq!(first.suburb, "Clayton");
        assert_eq!(first.price, Some(950000.0));
        assert_eq!(first.land_size, Some(448.0));
        assert_eq!(first.sold_date, NaiveDate::from_ymd_opt(2019, 10, 21));
    }

    #[test]
    fn test_read_records_missing_price_is_none() {
        let store = read_records(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(store.records()[1].price, None);
        assert_eq!(store.records()[3].land_size, None);
    }

    #[test]
    fn test_read_records_tolerates_bad_dates() {
        let store = read_records(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(store.records()[3].sold_date, None);
    }

    #[test]
    fn test_read_records_rejects_malformed_price() {
        let csv = "suburb,price,land_size,sold_date\nClayton,not-a-number,448,21/10/2019\n";
        let err = read_records(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_load_records_missing_file() {
        let err = load_records("/definitely/not/here.csv").unwrap_err();
        assert!(err.to_string().contains("Failed to open data file"));
    }
}
