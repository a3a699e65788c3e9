use super::ui;
use crate::core::record::RecordStore;
use crate::core::search;
use anyhow::Result;
use tracing::info;

/// Runs the existence search and reports the outcome.
///
/// An unknown suburb is indistinguishable from a suburb with no matching
/// price: both print "not listed".
pub fn run(store: &RecordStore, target_price: f64, target_suburb: &str) -> Result<()> {
    info!("Locating price {target_price} in suburb '{target_suburb}'");

    let found = search::locate_price(store, target_price, target_suburb);

    let message = format!("Price {target_price:.2} in {target_suburb}: ");
    if found {
        println!(
            "{}{}",
            message,
            ui::style_text("listed", ui::StyleType::TotalValue)
        );
    } else {
        println!(
            "{}{}",
            message,
            ui::style_text("not listed", ui::StyleType::Error)
        );
    }
    Ok(())
}
