//! Sizes command - show the size presets that pre-fill the calculator

use clap::Args;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::sizes::SizeCode;

#[derive(Args, Debug)]
pub struct SizesCommand {
    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

/// Row for the size preset table
#[derive(Debug, Tabled, Serialize)]
struct SizeRow {
    #[tabled(rename = "Size")]
    size: &'static str,

    #[tabled(rename = "Hours")]
    hours: f64,

    #[tabled(rename = "Yarn")]
    yarn: f64,

    #[tabled(rename = "Accessories")]
    accessories: f64,

    #[tabled(rename = "Stuffing")]
    stuffing: f64,

    #[tabled(rename = "Packaging")]
    packaging: f64,
}

impl SizesCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let rows: Vec<SizeRow> = [SizeCode::P, SizeCode::M, SizeCode::G]
            .iter()
            .filter_map(|size| {
                size.defaults().map(|defaults| SizeRow {
                    size: size.display(),
                    hours: defaults.labor_hours,
                    yarn: defaults.yarn_cost,
                    accessories: defaults.accessories_cost,
                    stuffing: defaults.stuffing_cost,
                    packaging: defaults.packaging_cost,
                })
            })
            .collect();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else {
            let table = Table::new(&rows)
                .with(Style::rounded())
                .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
                .to_string();
            println!("{}", table);
            println!();
            println!("Selecting a size pre-fills hours and materials; custom keeps your values.");
        }
        Ok(())
    }
}
