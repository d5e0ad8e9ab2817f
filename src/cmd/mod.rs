pub mod preset;
pub mod price;
pub mod schema;
pub mod sizes;

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use clap::Args;

use crate::pricing::PricingInput;
use crate::sizes::SizeCode;
use crate::store::{default_store_path, PresetStore, StoreError};

/// Read a calculator input (JSON) from a file, or stdin with "-"
pub fn read_input(path: &Path) -> anyhow::Result<PricingInput> {
    if path.as_os_str() == "-" {
        read_from_stdin()
    } else {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

fn read_from_stdin() -> anyhow::Result<PricingInput> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    Ok(serde_json::from_slice(&buffer)?)
}

/// Open the preset store at the given path, falling back to the platform
/// data directory
pub fn open_store(path: Option<&Path>) -> anyhow::Result<PresetStore> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_store_path()
            .ok_or_else(|| anyhow::anyhow!("could not determine the data directory"))?,
    };
    Ok(PresetStore::open(&path)?)
}

/// Report a store failure and exit with its kind-specific code, so that
/// invalid input, not found and internal failures stay distinguishable.
pub fn store_failure(err: StoreError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(err.exit_code())
}

/// Field overrides shared by the price and preset commands. Every flag is
/// optional; unset flags keep the underlying value.
#[derive(Args, Debug, Default)]
pub struct InputOverrides {
    /// Product name
    #[arg(long)]
    pub name: Option<String>,

    /// Size preset pre-filling hours and materials (custom leaves them)
    #[arg(short, long, value_enum)]
    pub size: Option<SizeCode>,

    /// Yarn / thread cost
    #[arg(long)]
    pub yarn: Option<f64>,

    /// Accessories cost (eyes, buttons, ...)
    #[arg(long)]
    pub accessories: Option<f64>,

    /// Stuffing and glue cost
    #[arg(long)]
    pub stuffing: Option<f64>,

    /// Packaging cost
    #[arg(long)]
    pub packaging: Option<f64>,

    /// Hours of labor
    #[arg(long)]
    pub hours: Option<f64>,

    /// Hourly rate charged for labor
    #[arg(long)]
    pub rate: Option<f64>,

    /// Difficulty surcharge (percent of base cost)
    #[arg(long)]
    pub difficulty: Option<f64>,

    /// Flat overhead cost
    #[arg(long)]
    pub overhead: Option<f64>,

    /// Flat shipping cost
    #[arg(long)]
    pub shipping: Option<f64>,

    /// Platform fee (percent of the sale price)
    #[arg(long)]
    pub platform_fee: Option<f64>,

    /// Taxes (percent of the sale price)
    #[arg(long)]
    pub tax: Option<f64>,

    /// Target profit margin (percent)
    #[arg(long)]
    pub margin: Option<f64>,

    /// Cash payment discount (percent, display only)
    #[arg(long)]
    pub discount: Option<f64>,

    /// Enable or disable .90 psychological rounding
    #[arg(long)]
    pub round: Option<bool>,
}

impl InputOverrides {
    /// Apply the overrides on top of an input. A size selection is applied
    /// first so explicit hour/material flags win over its pre-fill.
    pub fn apply_to(&self, input: &mut PricingInput) {
        if let Some(size) = self.size {
            size.apply(input);
        }
        if let Some(name) = &self.name {
            input.name = name.clone();
        }
        if let Some(value) = self.yarn {
            input.yarn_cost = value;
        }
        if let Some(value) = self.accessories {
            input.accessories_cost = value;
        }
        if let Some(value) = self.stuffing {
            input.stuffing_cost = value;
        }
        if let Some(value) = self.packaging {
            input.packaging_cost = value;
        }
        if let Some(value) = self.hours {
            input.labor_hours = value;
        }
        if let Some(value) = self.rate {
            input.hourly_rate = value;
        }
        if let Some(value) = self.difficulty {
            input.difficulty_percent = value;
        }
        if let Some(value) = self.overhead {
            input.overhead = value;
        }
        if let Some(value) = self.shipping {
            input.shipping = value;
        }
        if let Some(value) = self.platform_fee {
            input.platform_fee_percent = value;
        }
        if let Some(value) = self.tax {
            input.tax_percent = value;
        }
        if let Some(value) = self.margin {
            input.margin_percent = value;
        }
        if let Some(value) = self.discount {
            input.cash_discount_percent = value;
        }
        if let Some(value) = self.round {
            input.psychological_rounding = value;
        }
    }
}

/// Base input for a command: an input file, a stored preset, the last
/// session, or the defaults
#[derive(Args, Debug, Default)]
pub struct InputSource {
    /// JSON file with calculator input (or "-" for stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Start from a saved preset
    #[arg(short, long)]
    pub preset: Option<uuid::Uuid>,

    /// Restore the input saved by the previous run
    #[arg(long)]
    pub last: bool,
}

impl InputSource {
    /// Whether resolving will need an open preset store
    pub fn needs_store(&self) -> bool {
        self.preset.is_some()
    }

    /// Resolve the base input. `store` must be provided when a preset was
    /// requested; it is the caller's already-open store, so the file is
    /// read once per command.
    pub fn resolve(
        &self,
        store: Option<&PresetStore>,
        session_file: Option<&Path>,
    ) -> anyhow::Result<PricingInput> {
        if let Some(path) = &self.input {
            return read_input(path);
        }
        if let Some(id) = self.preset {
            let store = store
                .ok_or_else(|| anyhow::anyhow!("no preset store opened for --preset"))?;
            return match store.get(id) {
                Ok(preset) => Ok(preset.input),
                Err(err) => store_failure(err),
            };
        }
        if self.last {
            if let Some(input) = crate::session::load(session_file)? {
                return Ok(input);
            }
            log::warn!("no previous session found, starting from defaults");
        }
        Ok(PricingInput::default())
    }
}
