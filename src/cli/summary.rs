use super::ui;
use crate::core::record::{RecordStore, SuburbSelector};
use crate::core::stats::{self, ColumnSummary, DatasetSummary};
use anyhow::Result;
use comfy_table::Cell;

impl DatasetSummary {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();

        table.set_header(vec![
            ui::header_cell("Statistic"),
            ui::header_cell("Price"),
            ui::header_cell("Land Size"),
        ]);

        let rows: [(&str, fn(&ColumnSummary) -> Option<f64>); 7] = [
            ("mean", |c| c.mean),
            ("std", |c| c.std),
            ("min", |c| c.min),
            ("25%", |c| c.q25),
            ("50%", |c| c.median),
            ("75%", |c| c.q75),
            ("max", |c| c.max),
        ];

        table.add_row(vec![
            Cell::new("count"),
            Cell::new(self.price.count.to_string()),
            Cell::new(self.land_size.count.to_string()),
        ]);
        for (label, pick) in rows {
            table.add_row(vec![
                Cell::new(label),
                ui::format_optional_cell(pick(&self.price), |v| format!("{v:.2}")),
                ui::format_optional_cell(pick(&self.land_size), |v| format!("{v:.2}")),
            ]);
        }

        let mut output = format!(
            "Suburb summary: {}\n\n",
            ui::style_text(&self.selection, ui::StyleType::Title)
        );
        output.push_str(&table.to_string());
        output
    }
}

pub fn run(store: &RecordStore, selector: &SuburbSelector) -> Result<()> {
    let summary = stats::suburb_summary(store, selector)?;
    println!("{}", summary.display_as_table());
    Ok(())
}
