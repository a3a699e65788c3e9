use super::ui;
use crate::core::record::{RecordStore, SuburbSelector};
use crate::core::stats;
use anyhow::Result;

pub fn run(store: &RecordStore, selector: &SuburbSelector) -> Result<()> {
    let average = stats::avg_land_size(store, selector)?;

    let label = format!("Average land size ({})", selector.label());
    let value = match average {
        Some(avg) => ui::style_text(&format!("{avg:.2}"), ui::StyleType::TotalValue),
        None => ui::style_text("N/A", ui::StyleType::Error),
    };
    println!(
        "{}: {}",
        ui::style_text(&label, ui::StyleType::TotalLabel),
        value
    );
    Ok(())
}
