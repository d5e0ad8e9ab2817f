//! Size presets - static defaults for labor hours and material costs

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::pricing::PricingInput;

/// Closed set of product sizes. `Custom` means the user keeps whatever
/// values were last entered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, ValueEnum,
)]
pub enum SizeCode {
    #[serde(rename = "P")]
    P,
    #[serde(rename = "M")]
    M,
    #[serde(rename = "G")]
    G,
    #[default]
    #[serde(rename = "custom")]
    Custom,
}

/// Default hours and material costs for a size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeDefaults {
    pub labor_hours: f64,
    pub yarn_cost: f64,
    pub accessories_cost: f64,
    pub stuffing_cost: f64,
    pub packaging_cost: f64,
}

impl SizeCode {
    /// Defaults pre-filled when the size is selected. `Custom` has none.
    pub fn defaults(&self) -> Option<SizeDefaults> {
        match self {
            SizeCode::P => Some(SizeDefaults {
                labor_hours: 4.5,
                yarn_cost: 18.0,
                accessories_cost: 5.0,
                stuffing_cost: 3.0,
                packaging_cost: 3.0,
            }),
            SizeCode::M => Some(SizeDefaults {
                labor_hours: 6.5,
                yarn_cost: 25.0,
                accessories_cost: 6.0,
                stuffing_cost: 4.0,
                packaging_cost: 3.5,
            }),
            SizeCode::G => Some(SizeDefaults {
                labor_hours: 9.0,
                yarn_cost: 35.0,
                accessories_cost: 7.0,
                stuffing_cost: 5.0,
                packaging_cost: 4.0,
            }),
            SizeCode::Custom => None,
        }
    }

    /// Select this size on an input, pre-filling hours and materials for
    /// P/M/G. `Custom` only records the selection and leaves the entered
    /// values alone.
    pub fn apply(&self, input: &mut PricingInput) {
        input.size = *self;
        if let Some(defaults) = self.defaults() {
            input.labor_hours = defaults.labor_hours;
            input.yarn_cost = defaults.yarn_cost;
            input.accessories_cost = defaults.accessories_cost;
            input.stuffing_cost = defaults.stuffing_cost;
            input.packaging_cost = defaults.packaging_cost;
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            SizeCode::P => "P (10-14 cm)",
            SizeCode::M => "M (15-20 cm)",
            SizeCode::G => "G (21-30 cm)",
            SizeCode::Custom => "custom",
        }
    }
}

impl std::fmt::Display for SizeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
