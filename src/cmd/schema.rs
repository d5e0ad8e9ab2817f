//! Schema command - print expected input formats

use clap::Args;
use schemars::schema_for;

use crate::preset::Preset;
use crate::pricing::PricingInput;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Which format to print
    #[arg(value_enum, default_value = "input")]
    target: SchemaTarget,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaTarget {
    /// JSON Schema for the calculator input
    Input,
    /// JSON Schema for stored preset records
    Preset,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let schema = match self.target {
            SchemaTarget::Input => schema_for!(PricingInput),
            SchemaTarget::Preset => schema_for!(Preset),
        };
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}
