//! Currency conversion abstractions

use anyhow::{anyhow, Result};
use std::collections::HashMap;
use tracing::warn;

/// All configured rates are expressed against this base.
pub const BASE_CURRENCY: &str = "AUD";

pub trait CurrencyRateProvider {
    fn rate(&self, code: &str) -> Result<f64>;
}

/// Rate provider backed by the exchange-rate table from the config file.
pub struct TableRateProvider {
    rates: HashMap<String, f64>,
}

impl TableRateProvider {
    pub fn new(rates: HashMap<String, f64>) -> Self {
        Self { rates }
    }
}

impl CurrencyRateProvider for TableRateProvider {
    fn rate(&self, code: &str) -> Result<f64> {
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| anyhow!("No exchange rate configured for currency '{code}'"))
    }
}

/// Resolves the requested display currency to an effective (code, rate)
/// pair, falling back to the base currency when the code is unknown.
pub fn resolve(provider: &dyn CurrencyRateProvider, requested: &str) -> (String, f64) {
    match provider.rate(requested) {
        Ok(rate) => (requested.to_string(), rate),
        Err(e) => {
            warn!("{e}; falling back to {BASE_CURRENCY}");
            let rate = provider.rate(BASE_CURRENCY).unwrap_or(1.0);
            (BASE_CURRENCY.to_string(), rate)
        }
    }
}

/// Applies an exchange rate to every price in the sequence.
pub fn convert_prices(prices: &[f64], rate: f64) -> Vec<f64> {
    prices.iter().map(|p| p * rate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::default_rates;

    #[test]
    fn test_table_rate_lookup() {
        let provider = TableRateProvider::new(default_rates());
        assert_eq!(provider.rate("AUD").unwrap(), 1.0);
        assert_eq!(provider.rate("USD").unwrap(), 0.66);
        assert!(provider.rate("XYZ").is_err());
    }

    #[test]
    fn test_resolve_falls_back_to_base() {
        let provider = TableRateProvider::new(default_rates());

        let (code, rate) = resolve(&provider, "INR");
        assert_eq!(code, "INR");
        assert_eq!(rate, 54.25);

        let (code, rate) = resolve(&provider, "XYZ");
        assert_eq!(code, BASE_CURRENCY);
        assert_eq!(rate, 1.0);
    }

    #[test]
    fn test_convert_prices() {
        let converted = convert_prices(&[1000000.0, 500000.0], 0.66);
        assert_eq!(converted, vec![660000.0, 330000.0]);
    }
}
