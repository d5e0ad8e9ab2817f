use clap::{Parser, Subcommand};

mod cmd;
mod currency;
mod preset;
mod pricing;
mod session;
mod sizes;
mod store;

/// Pricing calculator for handmade craft sellers
#[derive(Parser, Debug)]
#[command(name = "precifica", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute sale prices from costs, fees and margin
    Price(cmd::price::PriceCommand),
    /// Manage saved presets
    Preset(cmd::preset::PresetCommand),
    /// Show the size presets that pre-fill hours and materials
    Sizes(cmd::sizes::SizesCommand),
    /// Print expected input formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Price(cmd) => cmd.exec(),
        Command::Preset(cmd) => cmd.exec(),
        Command::Sizes(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
