use super::ui;
use crate::core::record::RecordStore;
use crate::core::stats;
use anyhow::Result;
use comfy_table::Cell;

const BAR_WIDTH: usize = 40;

pub fn run(store: &RecordStore) -> Result<()> {
    let sales = stats::sales_per_year(store);

    if sales.is_empty() {
        println!(
            "{}",
            ui::style_text(
                "No records with a sold date; nothing to chart",
                ui::StyleType::Subtle
            )
        );
        return Ok(());
    }

    let max_count = sales.values().copied().max().unwrap_or(0);

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Year"),
        ui::header_cell("Sales"),
        ui::header_cell("Sold"),
    ]);
    for (year, count) in &sales {
        table.add_row(vec![
            Cell::new(year.to_string()),
            ui::bar_cell(*count, max_count, BAR_WIDTH),
            ui::format_optional_cell(Some(*count), |c| c.to_string()),
        ]);
    }

    println!(
        "Sales trend: {}\n\n{}",
        ui::style_text("properties sold per year", ui::StyleType::Title),
        table
    );
    Ok(())
}
