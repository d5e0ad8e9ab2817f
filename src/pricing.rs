//! Pricing engine - turns costs, fees and margin into sale prices

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::sizes::SizeCode;

/// Calculator input. Percentages are whole numbers (40 means 40%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PricingInput {
    /// Product name, used when saving the input as a preset
    pub name: String,
    pub size: SizeCode,
    pub yarn_cost: f64,
    pub accessories_cost: f64,
    pub stuffing_cost: f64,
    pub packaging_cost: f64,
    pub labor_hours: f64,
    pub hourly_rate: f64,
    /// Extra surcharge on the base cost for difficult pieces
    pub difficulty_percent: f64,
    pub overhead: f64,
    pub shipping: f64,
    /// Percent of the sale price kept by the marketplace
    pub platform_fee_percent: f64,
    /// Percent of the sale price paid as tax
    pub tax_percent: f64,
    pub margin_percent: f64,
    /// Discount shown for immediate payment, never part of the stored result
    pub cash_discount_percent: f64,
    pub psychological_rounding: bool,
}

impl Default for PricingInput {
    fn default() -> Self {
        PricingInput {
            name: String::new(),
            size: SizeCode::Custom,
            yarn_cost: 25.0,
            accessories_cost: 6.0,
            stuffing_cost: 4.0,
            packaging_cost: 3.0,
            labor_hours: 6.0,
            hourly_rate: 20.0,
            difficulty_percent: 10.0,
            overhead: 2.5,
            shipping: 0.0,
            platform_fee_percent: 8.0,
            tax_percent: 6.0,
            margin_percent: 40.0,
            cash_discount_percent: 5.0,
            psychological_rounding: true,
        }
    }
}

/// Derived prices and cost breakdown. Recomputed on every input change,
/// carries no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub material_total: f64,
    pub labor_cost: f64,
    /// Labor plus overhead plus shipping. Materials and the difficulty
    /// surcharge are excluded from this figure.
    pub production_cost: f64,
    /// Covers cost and fees with zero profit
    pub minimum_price: f64,
    pub recommended_price: f64,
    pub premium_price: f64,
    /// Realized profit fraction of the recommended price actually charged
    pub effective_margin: f64,
}

/// Compute sale prices from a calculator input.
///
/// Pure and total: no field is range-checked and the function never fails.
/// When the combined fee rate reaches 100% the prices come out as positive
/// infinity, which callers must detect and surface as an unsatisfiable
/// configuration rather than a price.
pub fn compute_pricing(input: &PricingInput) -> PricingResult {
    let material_total =
        input.yarn_cost + input.accessories_cost + input.stuffing_cost + input.packaging_cost;
    let labor_cost = input.labor_hours * input.hourly_rate;
    let base_cost = material_total + labor_cost + input.overhead + input.shipping;
    let cost_with_difficulty = base_cost * (1.0 + input.difficulty_percent / 100.0);

    // Fees come out of the sale price, so the price is grossed up by
    // division instead of adding the fee on top of cost.
    let fee_rate = (input.platform_fee_percent + input.tax_percent) / 100.0;
    let pre_margin_price = if fee_rate >= 1.0 {
        f64::INFINITY
    } else {
        cost_with_difficulty / (1.0 - fee_rate)
    };

    let recommended_raw = pre_margin_price * (1.0 + input.margin_percent / 100.0);
    let minimum_raw = pre_margin_price;
    let premium_raw = recommended_raw * 1.15;

    let (minimum_price, recommended_price, premium_price) = if input.psychological_rounding {
        (
            round_psychological(minimum_raw),
            round_psychological(recommended_raw),
            round_psychological(premium_raw),
        )
    } else {
        (minimum_raw, recommended_raw, premium_raw)
    };

    // Margin of the price actually charged, so rounding feeds back into it.
    let effective_margin = (recommended_price - pre_margin_price) / recommended_price;

    let production_cost = labor_cost + input.overhead + input.shipping;

    log::debug!(
        "pricing: materials={}, labor={}, grossed-up={}, recommended={}",
        material_total,
        labor_cost,
        pre_margin_price,
        recommended_price
    );

    PricingResult {
        material_total,
        labor_cost,
        production_cost,
        minimum_price,
        recommended_price,
        premium_price,
        effective_margin,
    }
}

/// Round a price up to the nearest `.90` ending, never down.
///
/// Negative and non-finite values are passed through unchanged.
pub fn round_psychological(value: f64) -> f64 {
    if !value.is_finite() || value < 0.0 {
        return value;
    }
    let whole = value.floor();
    let candidate = whole + 0.90;
    if candidate < value {
        whole + 1.0 + 0.90
    } else {
        candidate
    }
}

/// Price after the immediate-payment discount. Display only.
pub fn cash_price(price: f64, cash_discount_percent: f64) -> f64 {
    price * (1.0 - cash_discount_percent / 100.0)
}

/// Qualitative rating of the effective margin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginRating {
    Excellent,
    Good,
    Low,
    Critical,
}

impl MarginRating {
    /// Rate an effective margin expressed as a fraction
    pub fn from_margin(margin: f64) -> Self {
        if margin >= 0.3 {
            MarginRating::Excellent
        } else if margin >= 0.2 {
            MarginRating::Good
        } else if margin >= 0.1 {
            MarginRating::Low
        } else {
            MarginRating::Critical
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            MarginRating::Excellent => "excellent",
            MarginRating::Good => "good",
            MarginRating::Low => "low",
            MarginRating::Critical => "critical",
        }
    }
}

impl std::fmt::Display for MarginRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
