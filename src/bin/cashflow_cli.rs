use std::{path::PathBuf, process::ExitCode};

use cashflow_core::{
    config::{Config, ConfigManager},
    currency::LocaleConfig,
    errors::Result,
    report::{render_json, render_text, RenderOptions},
    scenario::{load_scenario_from_file, ScenarioWarning},
    services::ForecastService,
};
use clap::{Parser, Subcommand};

/// Cashflow forecasts from scenario files.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding `config.json` (defaults to $CASHFLOW_CORE_HOME or ~/.cashflow_core).
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the monthly series and KPIs for a scenario.
    Report(ReportArgs),
    /// Check a scenario for bad data without forecasting it.
    Validate(ValidateArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// Path to the scenario JSON file.
    scenario: PathBuf,

    /// Emit the report as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Override the scenario's opening cash balance.
    #[arg(long, allow_negative_numbers = true)]
    opening_balance: Option<f64>,

    /// Disable coloured output.
    #[arg(long)]
    no_color: bool,
}

#[derive(Parser)]
struct ValidateArgs {
    /// Path to the scenario JSON file.
    scenario: PathBuf,
}

fn main() -> ExitCode {
    cashflow_core::init();
    let cli = Cli::parse();

    let outcome = load_config(cli.config_dir).and_then(|config| match cli.command {
        Commands::Report(args) => handle_report(args, &config),
        Commands::Validate(args) => handle_validate(args),
    });

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(dir: Option<PathBuf>) -> Result<Config> {
    let manager = match dir {
        Some(dir) => ConfigManager::with_base_dir(dir)?,
        None => ConfigManager::new()?,
    };
    manager.load()
}

fn handle_report(args: ReportArgs, config: &Config) -> Result<()> {
    let mut scenario = load_scenario_from_file(&args.scenario)?;
    if let Some(balance) = args.opening_balance {
        scenario.opening_balance = Some(balance);
    } else if scenario.opening_balance.is_none() {
        scenario.opening_balance = config.default_opening_balance;
    }

    let report = ForecastService::report(&scenario, config);
    if args.json {
        println!("{}", render_json(&report)?);
        return Ok(());
    }

    if args.no_color {
        colored::control::set_override(false);
    }
    let options = RenderOptions {
        locale: LocaleConfig::from_tag(&config.locale),
        color: !args.no_color,
        ..RenderOptions::default()
    };
    println!("{}", render_text(&report, &options));
    Ok(())
}

fn handle_validate(args: ValidateArgs) -> Result<()> {
    let scenario = load_scenario_from_file(&args.scenario)?;
    let warnings = scenario.validate()?;
    if warnings.is_empty() {
        println!("Scenario `{}` is valid.", scenario.name);
        return Ok(());
    }
    println!(
        "Scenario `{}` is valid with {} warning(s):",
        scenario.name,
        warnings.len()
    );
    for warning in warnings {
        match warning {
            ScenarioWarning::LengthMismatch {
                label,
                len,
                horizon,
            } => println!("  - `{label}` has {len} month(s), forecast horizon is {horizon}"),
            ScenarioWarning::EventOutsideHorizon { label } => {
                println!("  - event `{label}` falls outside the forecast and is ignored")
            }
        }
    }
    Ok(())
}
