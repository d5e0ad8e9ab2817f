//! Preset records - named snapshots of calculator input

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pricing::PricingInput;
use crate::sizes::SizeCode;

/// A saved snapshot of the calculator input, keyed by a generated
/// identifier. Created on an explicit save, never implicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Preset {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub input: PricingInput,
}

/// Partial update for a stored preset. Only the fields that are set are
/// replaced; everything else keeps its stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetUpdate {
    pub name: Option<String>,
    pub size: Option<SizeCode>,
    pub yarn_cost: Option<f64>,
    pub accessories_cost: Option<f64>,
    pub stuffing_cost: Option<f64>,
    pub packaging_cost: Option<f64>,
    pub labor_hours: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub difficulty_percent: Option<f64>,
    pub overhead: Option<f64>,
    pub shipping: Option<f64>,
    pub platform_fee_percent: Option<f64>,
    pub tax_percent: Option<f64>,
    pub margin_percent: Option<f64>,
    pub cash_discount_percent: Option<f64>,
    pub psychological_rounding: Option<bool>,
}

impl PresetUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.size.is_none()
            && self.yarn_cost.is_none()
            && self.accessories_cost.is_none()
            && self.stuffing_cost.is_none()
            && self.packaging_cost.is_none()
            && self.labor_hours.is_none()
            && self.hourly_rate.is_none()
            && self.difficulty_percent.is_none()
            && self.overhead.is_none()
            && self.shipping.is_none()
            && self.platform_fee_percent.is_none()
            && self.tax_percent.is_none()
            && self.margin_percent.is_none()
            && self.cash_discount_percent.is_none()
            && self.psychological_rounding.is_none()
    }

    /// Replace the set fields on an input
    pub fn apply_to(&self, input: &mut PricingInput) {
        if let Some(name) = &self.name {
            input.name = name.clone();
        }
        if let Some(size) = self.size {
            input.size = size;
        }
        if let Some(value) = self.yarn_cost {
            input.yarn_cost = value;
        }
        if let Some(value) = self.accessories_cost {
            input.accessories_cost = value;
        }
        if let Some(value) = self.stuffing_cost {
            input.stuffing_cost = value;
        }
        if let Some(value) = self.packaging_cost {
            input.packaging_cost = value;
        }
        if let Some(value) = self.labor_hours {
            input.labor_hours = value;
        }
        if let Some(value) = self.hourly_rate {
            input.hourly_rate = value;
        }
        if let Some(value) = self.difficulty_percent {
            input.difficulty_percent = value;
        }
        if let Some(value) = self.overhead {
            input.overhead = value;
        }
        if let Some(value) = self.shipping {
            input.shipping = value;
        }
        if let Some(value) = self.platform_fee_percent {
            input.platform_fee_percent = value;
        }
        if let Some(value) = self.tax_percent {
            input.tax_percent = value;
        }
        if let Some(value) = self.margin_percent {
            input.margin_percent = value;
        }
        if let Some(value) = self.cash_discount_percent {
            input.cash_discount_percent = value;
        }
        if let Some(value) = self.psychological_rounding {
            input.psychological_rounding = value;
        }
    }
}
