//! # ShipCalc CLI Application
//!
//! Command line and terminal UI front end for `ship_core`.
//!
//! - `shipcalc calc` prints one scenario (the default command)
//! - `shipcalc tui` opens the interactive form
//! - `shipcalc formulas` prints the formula cheat sheet
//! - `shipcalc settings` prints the effective settings

mod tui;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ship_core::calculations::{compute, ScenarioInput};
use ship_core::file_io::{load_scenario, save_scenario};
use ship_core::report;
use ship_core::settings::{Settings, SETTINGS_FILE_NAME};

#[derive(Parser)]
#[command(name = "shipcalc", version)]
#[command(about = "Freight cost and container packing calculator")]
struct Cli {
    /// Settings file (JSON). Defaults to settings.json in the user config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate one scenario and print the overview
    Calc(CalcArgs),
    /// Open the interactive form
    Tui,
    /// Print the formula cheat sheet
    Formulas,
    /// Print the effective settings as JSON
    Settings,
}

#[derive(Args, Default)]
struct CalcArgs {
    /// Load the scenario from a JSON file before applying flags
    #[arg(long)]
    input: Option<PathBuf>,

    /// Write the effective scenario to a JSON file
    #[arg(long)]
    save_input: Option<PathBuf>,

    /// Target-currency units per one source unit
    #[arg(long)]
    exchange_rate: Option<f64>,

    /// Freight amount in the source currency
    #[arg(long)]
    freight_cost: Option<f64>,

    /// Volume (CBM) the freight amount covers
    #[arg(long)]
    coverage_cbm: Option<f64>,

    /// Usable container volume (CBM)
    #[arg(long)]
    container_cbm: Option<f64>,

    /// Item length (inches)
    #[arg(long)]
    length: Option<f64>,

    /// Item width (inches)
    #[arg(long)]
    width: Option<f64>,

    /// Item height (inches)
    #[arg(long)]
    height: Option<f64>,

    /// Number of items to ship
    #[arg(long)]
    quantity: Option<u32>,

    /// Print input and result as JSON
    #[arg(long)]
    json: bool,
}

impl CalcArgs {
    /// Apply the flags that were given on top of `input`.
    fn apply(&self, mut input: ScenarioInput) -> ScenarioInput {
        if let Some(v) = self.exchange_rate {
            input.exchange_rate = v;
        }
        if let Some(v) = self.freight_cost {
            input.freight_cost = v;
        }
        if let Some(v) = self.coverage_cbm {
            input.freight_coverage_cbm = v;
        }
        if let Some(v) = self.container_cbm {
            input.container_cbm = v;
        }
        if let Some(v) = self.length {
            input.length_in = v;
        }
        if let Some(v) = self.width {
            input.width_in = v;
        }
        if let Some(v) = self.height {
            input.height_in = v;
        }
        if let Some(v) = self.quantity {
            input.quantity = v;
        }
        input
    }
}

/// Initialize tracing, always on stderr so stdout stays clean for output
fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn default_settings_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "shipcalc").map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
}

fn load_settings(explicit: Option<&Path>) -> anyhow::Result<Settings> {
    match explicit {
        Some(path) => Settings::load(path).with_context(|| format!("loading settings from {}", path.display())),
        None => match default_settings_path() {
            Some(path) => Ok(Settings::load_or_default(&path)?),
            None => Ok(Settings::default()),
        },
    }
}

fn run_calc(args: &CalcArgs, settings: &Settings) -> anyhow::Result<()> {
    let base = match &args.input {
        Some(path) => load_scenario(path).with_context(|| format!("loading scenario from {}", path.display()))?,
        None => settings.defaults.to_input(),
    };
    let input = args.apply(base);
    tracing::debug!(?input, "calculating scenario");

    let result = match compute(&input) {
        Ok(result) => result,
        Err(e) => {
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            return Err(e.into());
        }
    };

    if let Some(path) = &args.save_input {
        save_scenario(&input, path)?;
        tracing::info!(path = %path.display(), "scenario written");
    }

    if args.json {
        let out = serde_json::json!({ "input": input, "result": result });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("═══════════════════════════════════════");
        println!("  SCENARIO OVERVIEW");
        println!("═══════════════════════════════════════");
        println!();
        println!("{}", report::summary(&input, &result, &settings.currencies));
        println!();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so logging stays off unless RUST_LOG asks for it
    let tui_mode = matches!(cli.command, Some(Commands::Tui));
    init_tracing(if tui_mode { "off" } else { "warn" });

    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Calc(args)) => run_calc(&args, &settings)?,
        None => run_calc(&CalcArgs::default(), &settings)?,
        Some(Commands::Tui) => tui::run(settings)?,
        Some(Commands::Formulas) => println!("{}", report::formulas_text()),
        Some(Commands::Settings) => println!("{}", serde_json::to_string_pretty(&settings)?),
    }

    Ok(())
}
