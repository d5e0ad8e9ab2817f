//! Price command - run the pricing engine and show the breakdown

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cmd::{InputOverrides, InputSource};
use crate::currency::{format_brl, format_percent};
use crate::pricing::{cash_price, compute_pricing, MarginRating, PricingInput, PricingResult};

#[derive(Args, Debug)]
pub struct PriceCommand {
    #[command(flatten)]
    source: InputSource,

    #[command(flatten)]
    overrides: InputOverrides,

    /// Preset store file (defaults to the platform data directory)
    #[arg(long)]
    store: Option<PathBuf>,

    /// Session file (defaults to the platform data directory)
    #[arg(long)]
    session_file: Option<PathBuf>,

    /// Output as JSON instead of formatted tables
    #[arg(long)]
    json: bool,

    /// Do not save this input as the last session
    #[arg(long)]
    no_session: bool,
}

/// Full report for JSON output
#[derive(Debug, Serialize)]
struct PriceReport<'a> {
    input: &'a PricingInput,
    result: &'a PricingResult,
    margin_rating: MarginRating,
}

impl PriceCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let store = if self.source.needs_store() {
            Some(crate::cmd::open_store(self.store.as_deref())?)
        } else {
            None
        };
        let mut input = self
            .source
            .resolve(store.as_ref(), self.session_file.as_deref())?;
        self.overrides.apply_to(&mut input);

        let result = compute_pricing(&input);

        // Fees at or above 100% gross up to an infinite price. Surface it
        // as a configuration error, never as a numeric price.
        if !result.minimum_price.is_finite() {
            eprintln!(
                "error: pricing impossible, platform fee and taxes together reach {}% of the sale price",
                input.platform_fee_percent + input.tax_percent
            );
            std::process::exit(2);
        }

        if self.json {
            self.print_json(&input, &result)?;
        } else {
            self.print_report(&input, &result);
        }

        if !self.no_session {
            if let Err(err) = crate::session::save(&input, self.session_file.as_deref()) {
                log::warn!("failed to save session: {err:#}");
            }
        }
        Ok(())
    }

    fn print_json(&self, input: &PricingInput, result: &PricingResult) -> anyhow::Result<()> {
        let report = PriceReport {
            input,
            result,
            margin_rating: MarginRating::from_margin(result.effective_margin),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }

    fn print_report(&self, input: &PricingInput, result: &PricingResult) {
        println!();
        if input.name.is_empty() {
            println!("PRICING");
        } else {
            println!("PRICING ({})", input.name);
        }
        println!();

        self.print_table(&cost_rows(result));
        println!();
        self.print_table(&tier_rows(input, result));
        println!();

        let rating = MarginRating::from_margin(result.effective_margin);
        println!(
            "Effective margin: {} ({})",
            format_percent(result.effective_margin),
            rating
        );
        println!();
    }

    fn print_table<R: Tabled>(&self, rows: &[R]) {
        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
    }
}

/// Row for the cost breakdown table
#[derive(Debug, Tabled)]
struct CostRow {
    #[tabled(rename = "Cost")]
    label: &'static str,

    #[tabled(rename = "Amount")]
    amount: String,
}

fn cost_rows(result: &PricingResult) -> Vec<CostRow> {
    vec![
        CostRow {
            label: "Materials",
            amount: format_brl(result.material_total),
        },
        CostRow {
            label: "Labor",
            amount: format_brl(result.labor_cost),
        },
        CostRow {
            label: "Production (labor + overhead + shipping)",
            amount: format_brl(result.production_cost),
        },
    ]
}

/// Row for the price tiers table
#[derive(Debug, Tabled)]
struct TierRow {
    #[tabled(rename = "Tier")]
    tier: &'static str,

    #[tabled(rename = "Price")]
    price: String,

    #[tabled(rename = "Pay now")]
    pay_now: String,
}

fn tier_rows(input: &PricingInput, result: &PricingResult) -> Vec<TierRow> {
    let discount = input.cash_discount_percent;
    vec![
        TierRow {
            tier: "Minimum",
            price: format_brl(result.minimum_price),
            pay_now: format_brl(cash_price(result.minimum_price, discount)),
        },
        TierRow {
            tier: "Recommended",
            price: format_brl(result.recommended_price),
            pay_now: format_brl(cash_price(result.recommended_price, discount)),
        },
        TierRow {
            tier: "Premium",
            price: format_brl(result.premium_price),
            pay_now: format_brl(cash_price(result.premium_price, discount)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_rows_apply_the_cash_discount() {
        let input = PricingInput {
            cash_discount_percent: 10.0,
            psychological_rounding: false,
            ..PricingInput::default()
        };
        let result = PricingResult {
            material_total: 0.0,
            labor_cost: 0.0,
            production_cost: 0.0,
            minimum_price: 100.0,
            recommended_price: 200.0,
            premium_price: 230.0,
            effective_margin: 0.5,
        };
        let rows = tier_rows(&input, &result);
        assert_eq!(rows[0].pay_now, "R$ 90,00");
        assert_eq!(rows[1].pay_now, "R$ 180,00");
        assert_eq!(rows[2].pay_now, "R$ 207,00");
    }
}
