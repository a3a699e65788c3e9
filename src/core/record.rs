//! Property records and the in-memory record store

use chrono::{Datelike, NaiveDate};

/// A single property sale record as loaded from the dataset.
///
/// `price` and `land_size` may be absent in the source data; `sold_date`
/// is `None` when the field is missing or not in `day/month/year` form.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    pub suburb: String,
    pub price: Option<f64>,
    pub land_size: Option<f64>,
    pub sold_date: Option<NaiveDate>,
}

/// Selects either the whole dataset or a single suburb.
///
/// The CLI uses the literal `all` to mean the whole dataset; any other
/// text is matched against suburb names exactly, case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuburbSelector {
    All,
    Named(String),
}

impl SuburbSelector {
    pub fn parse(text: &str) -> Self {
        if text == "all" {
            SuburbSelector::All
        } else {
            SuburbSelector::Named(text.to_string())
        }
    }

    pub fn matches(&self, suburb: &str) -> bool {
        match self {
            SuburbSelector::All => true,
            SuburbSelector::Named(name) => name == suburb,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SuburbSelector::All => "all",
            SuburbSelector::Named(name) => name,
        }
    }
}

/// Owns the full record set for one analysis session.
///
/// Loaded once, read many times; commands borrow it and derive transient
/// views (price sequences, column projections) per query.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<PropertyRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn has_suburb(&self, suburb: &str) -> bool {
        self.records.iter().any(|r| r.suburb == suburb)
    }

    pub fn select<'a>(
        &'a self,
        selector: &'a SuburbSelector,
    ) -> impl Iterator<Item = &'a PropertyRecord> {
        self.records.iter().filter(|r| selector.matches(&r.suburb))
    }

    /// Non-missing prices for the selection, in record order.
    pub fn prices(&self, selector: &SuburbSelector) -> Vec<f64> {
        self.select(selector).filter_map(|r| r.price).collect()
    }

    /// Non-missing land sizes for the selection, in record order.
    pub fn land_sizes(&self, selector: &SuburbSelector) -> Vec<f64> {
        self.select(selector).filter_map(|r| r.land_size).collect()
    }

    /// Sale years for every record with a parseable sold date.
    pub fn sold_years(&self) -> Vec<i32> {
        self.records
            .iter()
            .filter_map(|r| r.sold_date)
            .map(|d| d.year())
            .collect()
    }
}
