use super::ui;
use crate::core::currency::{self, CurrencyRateProvider};
use crate::core::record::{RecordStore, SuburbSelector};
use crate::core::stats;
use anyhow::Result;
use comfy_table::Cell;
use tracing::warn;

const HISTOGRAM_BINS: usize = 30;
const BAR_WIDTH: usize = 40;

pub fn run(
    store: &RecordStore,
    selector: &SuburbSelector,
    requested_currency: &str,
    rate_provider: &dyn CurrencyRateProvider,
) -> Result<()> {
    // An unknown suburb is not fatal on this path; the chart falls back
    // to the whole dataset.
    let effective = match selector {
        SuburbSelector::Named(name) if !store.has_suburb(name) => {
            warn!("Suburb '{name}' does not exist in the dataset; charting all suburbs");
            SuburbSelector::All
        }
        other => other.clone(),
    };

    let (display_currency, rate) = currency::resolve(rate_provider, requested_currency);
    let values = currency::convert_prices(&store.prices(&effective), rate);

    let Some(bins) = stats::histogram(&values, HISTOGRAM_BINS) else {
        println!(
            "{}",
            ui::style_text(
                &format!("No property values available to chart for '{}'", effective.label()),
                ui::StyleType::Subtle
            )
        );
        return Ok(());
    };

    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0);

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell(&format!("Value ({display_currency})")),
        ui::header_cell("Distribution"),
        ui::header_cell("Properties"),
    ]);
    for bin in &bins {
        table.add_row(vec![
            Cell::new(format!("{:.2} to {:.2}", bin.lower, bin.upper)),
            ui::bar_cell(bin.count, max_count, BAR_WIDTH),
            ui::format_optional_cell(Some(bin.count), |c| c.to_string()),
        ]);
    }

    println!(
        "Property value distribution: {}\n\n{}",
        ui::style_text(effective.label(), ui::StyleType::Title),
        table
    );
    Ok(())
}
