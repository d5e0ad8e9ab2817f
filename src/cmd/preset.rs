//! Preset command - CRUD over the saved preset store

use clap::{Args, Subcommand};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use uuid::Uuid;

use crate::cmd::{open_store, store_failure, InputOverrides, InputSource};
use crate::currency::format_brl;
use crate::preset::{Preset, PresetUpdate};
use crate::store::StoreError;

#[derive(Args, Debug)]
pub struct PresetCommand {
    /// Preset store file (defaults to the platform data directory)
    #[arg(long)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    action: PresetAction,
}

#[derive(Subcommand, Debug)]
enum PresetAction {
    /// Save the given input as a named preset
    Save(SaveArgs),
    /// List saved presets, newest first
    List(ListArgs),
    /// Show a single preset
    Show(ShowArgs),
    /// Update fields of an existing preset
    Update(UpdateArgs),
    /// Delete a preset
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
struct SaveArgs {
    #[command(flatten)]
    source: InputSource,

    #[command(flatten)]
    overrides: InputOverrides,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Preset identifier
    id: Uuid,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct UpdateArgs {
    /// Preset identifier
    id: Uuid,

    #[command(flatten)]
    overrides: InputOverrides,
}

#[derive(Args, Debug)]
struct DeleteArgs {
    /// Preset identifier
    id: Uuid,
}

impl PresetCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let store = open_store(self.store.as_deref())?;
        match &self.action {
            PresetAction::Save(args) => {
                let mut input = args.source.resolve(Some(&store), None)?;
                args.overrides.apply_to(&mut input);
                match store.create(input) {
                    Ok(preset) => {
                        println!("Saved preset {} ({})", preset.id, preset.input.name);
                        Ok(())
                    }
                    Err(err) => store_failure(err),
                }
            }
            PresetAction::List(args) => {
                let presets = store.list();
                let rows: Vec<PresetRow> = presets.iter().map(PresetRow::from).collect();
                if args.csv {
                    write_csv(&rows)
                } else if args.json {
                    println!("{}", serde_json::to_string_pretty(&presets)?);
                    Ok(())
                } else {
                    print_list(&rows);
                    Ok(())
                }
            }
            PresetAction::Show(args) => match store.get(args.id) {
                Ok(preset) => {
                    if args.json {
                        println!("{}", serde_json::to_string_pretty(&preset)?);
                    } else {
                        print_preset(&preset);
                    }
                    Ok(())
                }
                Err(err) => store_failure(err),
            },
            PresetAction::Update(args) => {
                let update = to_update(&args.overrides);
                if update.is_empty() {
                    store_failure(StoreError::InvalidInput(
                        "no fields to update".to_string(),
                    ));
                }
                match store.update(args.id, &update) {
                    Ok(preset) => {
                        println!("Updated preset {} ({})", preset.id, preset.input.name);
                        Ok(())
                    }
                    Err(err) => store_failure(err),
                }
            }
            PresetAction::Delete(args) => match store.delete(args.id) {
                Ok(()) => {
                    println!("Deleted preset {}", args.id);
                    Ok(())
                }
                Err(err) => store_failure(err),
            },
        }
    }
}

fn to_update(overrides: &InputOverrides) -> PresetUpdate {
    PresetUpdate {
        name: overrides.name.clone(),
        size: overrides.size,
        yarn_cost: overrides.yarn,
        accessories_cost: overrides.accessories,
        stuffing_cost: overrides.stuffing,
        packaging_cost: overrides.packaging,
        labor_hours: overrides.hours,
        hourly_rate: overrides.rate,
        difficulty_percent: overrides.difficulty,
        overhead: overrides.overhead,
        shipping: overrides.shipping,
        platform_fee_percent: overrides.platform_fee,
        tax_percent: overrides.tax,
        margin_percent: overrides.margin,
        cash_discount_percent: overrides.discount,
        psychological_rounding: overrides.round,
    }
}

/// Row for the preset list output
#[derive(Debug, Clone, Tabled, Serialize)]
struct PresetRow {
    #[tabled(rename = "Id")]
    id: String,

    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Size")]
    size: String,

    #[tabled(rename = "Hours")]
    hours: String,

    #[tabled(rename = "Materials")]
    materials: String,

    #[tabled(rename = "Margin %")]
    margin: String,

    #[tabled(rename = "Created")]
    created: String,
}

impl From<&Preset> for PresetRow {
    fn from(preset: &Preset) -> Self {
        let input = &preset.input;
        let materials =
            input.yarn_cost + input.accessories_cost + input.stuffing_cost + input.packaging_cost;
        PresetRow {
            id: preset.id.to_string(),
            name: input.name.clone(),
            size: input.size.to_string(),
            hours: format!("{}", input.labor_hours),
            materials: format_brl(materials),
            margin: format!("{}", input.margin_percent),
            created: preset.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

fn print_list(rows: &[PresetRow]) {
    if rows.is_empty() {
        println!("No presets saved");
        return;
    }
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}

fn write_csv(rows: &[PresetRow]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Row for the single-preset field view
#[derive(Debug, Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,

    #[tabled(rename = "Value")]
    value: String,
}

fn print_preset(preset: &Preset) {
    let input = &preset.input;
    let rows = vec![
        FieldRow {
            field: "Id",
            value: preset.id.to_string(),
        },
        FieldRow {
            field: "Created",
            value: preset.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        },
        FieldRow {
            field: "Name",
            value: input.name.clone(),
        },
        FieldRow {
            field: "Size",
            value: input.size.to_string(),
        },
        FieldRow {
            field: "Yarn",
            value: format_brl(input.yarn_cost),
        },
        FieldRow {
            field: "Accessories",
            value: format_brl(input.accessories_cost),
        },
        FieldRow {
            field: "Stuffing",
            value: format_brl(input.stuffing_cost),
        },
        FieldRow {
            field: "Packaging",
            value: format_brl(input.packaging_cost),
        },
        FieldRow {
            field: "Hours",
            value: format!("{}", input.labor_hours),
        },
        FieldRow {
            field: "Hourly rate",
            value: format_brl(input.hourly_rate),
        },
        FieldRow {
            field: "Difficulty %",
            value: format!("{}", input.difficulty_percent),
        },
        FieldRow {
            field: "Overhead",
            value: format_brl(input.overhead),
        },
        FieldRow {
            field: "Shipping",
            value: format_brl(input.shipping),
        },
        FieldRow {
            field: "Platform fee %",
            value: format!("{}", input.platform_fee_percent),
        },
        FieldRow {
            field: "Tax %",
            value: format!("{}", input.tax_percent),
        },
        FieldRow {
            field: "Margin %",
            value: format!("{}", input.margin_percent),
        },
        FieldRow {
            field: "Cash discount %",
            value: format!("{}", input.cash_discount_percent),
        },
        FieldRow {
            field: "Psychological rounding",
            value: input.psychological_rounding.to_string(),
        },
    ];
    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{}", table);
}
