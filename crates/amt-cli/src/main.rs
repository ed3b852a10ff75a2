// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use amt_core::report::{render_text, write_csv};
use amt_core::settings::{Settings, SettingsManager};
use amt_core::{
    AircraftCatalog, AircraftLimits, AircraftSelection, ConstantSet, DemandVector, Schedule,
    SeatSolver, TimeBudget,
};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to settings.json
    #[arg(long, env = "AMT_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DemandArgs {
    /// Daily economy demand
    #[arg(short, long, default_value = "0")]
    economy: String,
    /// Daily business demand
    #[arg(short, long, default_value = "0")]
    business: String,
    /// Daily first class demand
    #[arg(short, long, default_value = "0")]
    first: String,
    /// Daily cargo demand (tonnes)
    #[arg(short, long, default_value = "0")]
    cargo: String,
}

impl DemandArgs {
    fn to_demand(&self) -> DemandVector {
        DemandVector::parse(&self.economy, &self.business, &self.first, &self.cargo)
    }
}

#[derive(Args)]
struct AircraftArgs {
    /// Aircraft model from the catalog (exact name, see `aircraft`)
    #[arg(short, long, conflicts_with_all = ["capacity", "payload"])]
    aircraft: Option<String>,
    /// Custom seat capacity (0 = unlimited)
    #[arg(long)]
    capacity: Option<String>,
    /// Custom payload in tonnes (0 = unlimited)
    #[arg(long)]
    payload: Option<String>,
}

#[derive(Args)]
struct TimeArgs {
    /// Round trip duration, e.g. 2h30m, 150m or 2:30
    #[arg(long, conflicts_with_all = ["hours", "minutes"])]
    cycle: Option<String>,
    /// Round trip hours (2-24)
    #[arg(long)]
    hours: Option<u32>,
    /// Round trip minutes (0, 15, 30 or 45)
    #[arg(long, requires = "hours")]
    minutes: Option<u32>,
}

impl TimeArgs {
    fn to_schedule(&self) -> Result<Schedule> {
        let budget = match (&self.cycle, self.hours) {
            (Some(cycle), _) => Some(TimeBudget::parse(cycle)?),
            (None, Some(hours)) => Some(TimeBudget::from_dropdown(
                hours,
                self.minutes.unwrap_or(0),
            )?),
            (None, None) => None,
        };
        Ok(match budget {
            Some(budget) => Schedule::TimeLimited(budget),
            None => Schedule::Fixed,
        })
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare seat configurations across round-trip counts
    Table {
        #[command(flatten)]
        demand: DemandArgs,
        #[command(flatten)]
        aircraft: AircraftArgs,
        #[command(flatten)]
        time: TimeArgs,
        /// Constant table to calculate with (canonical or simplified)
        #[arg(long)]
        constants: Option<ConstantSet>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Seats per flight for a single round-trip count
    Evaluate {
        #[command(flatten)]
        demand: DemandArgs,
        /// Round trips per day
        #[arg(short = 'n', long)]
        round_trips: u32,
        #[arg(long)]
        constants: Option<ConstantSet>,
    },
    /// List catalog aircraft, optionally filtered by name
    Aircraft { filter: Option<String> },
    /// Write a default settings.json
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(verbose: u8, settings: &Settings) {
    let configured = settings.log_level_filter();
    let level = match verbose {
        0 => configured.unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
    if configured.is_none() {
        log::warn!(
            "Unknown log_level {:?} in settings, using warn",
            settings.log_level
        );
    }
}

fn load_catalog(settings: &Settings) -> Result<AircraftCatalog> {
    let mut catalog = AircraftCatalog::builtin();
    if let Some(path) = &settings.aircraft_overlay {
        let added = catalog
            .extend_from_json(path)
            .with_context(|| format!("Failed to load aircraft overlay {:?}", path))?;
        log::info!("Added {} aircraft from {:?}", added, path);
    }
    Ok(catalog)
}

fn select_aircraft(args: &AircraftArgs, settings: &Settings) -> Option<AircraftSelection> {
    if args.capacity.is_some() || args.payload.is_some() {
        return Some(AircraftSelection::Custom {
            capacity: args.capacity.clone().unwrap_or_else(|| "0".to_string()),
            payload: args.payload.clone().unwrap_or_else(|| "0".to_string()),
        });
    }
    args.aircraft
        .clone()
        .or_else(|| settings.default_aircraft.clone())
        .map(AircraftSelection::Catalog)
}

fn solver_for(constants: Option<ConstantSet>, settings: &Settings) -> SeatSolver {
    match constants {
        Some(set) => SeatSolver::new(set.parameters()),
        None => SeatSolver::new(settings.solver_parameters()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let manager = match &cli.config {
        Some(path) => SettingsManager::with_path(path),
        None => SettingsManager::new(),
    };

    // A broken settings file must not block writing a fresh one.
    let settings = match &cli.command {
        Commands::InitConfig { .. } => Settings::default(),
        _ => manager.load()?,
    };
    init_logging(cli.verbose, &settings);
    log::debug!("Settings loaded from {:?}", manager.path());

    match &cli.command {
        Commands::Table {
            demand,
            aircraft,
            time,
            constants,
            format,
        } => {
            let catalog = load_catalog(&settings)?;
            let limits = match select_aircraft(aircraft, &settings) {
                Some(selection) => selection.resolve(&catalog)?,
                None => AircraftLimits::unconstrained(),
            };
            let schedule = time.to_schedule()?;
            let solver = solver_for(*constants, &settings);

            let table = solver.build_comparison_table(&demand.to_demand(), &limits, &schedule);

            match format {
                OutputFormat::Text => print!("{}", render_text(&table, &limits)),
                OutputFormat::Csv => write_csv(&table, std::io::stdout().lock())?,
                OutputFormat::Json => {
                    let report = serde_json::json!({
                        "aircraft": limits,
                        "table": table,
                    });
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
        }
        Commands::Evaluate {
            demand,
            round_trips,
            constants,
        } => {
            let solver = solver_for(*constants, &settings);
            let seats = solver.evaluate_configuration(&demand.to_demand(), *round_trips);
            println!("Round trips:  {}", round_trips);
            println!("Economy:      {}", seats.economy);
            println!("Business:     {}", seats.business);
            println!("First:        {}", seats.first);
            println!("Cargo:        {}", seats.cargo);
            println!("Payload:      {:.2} t", seats.total_payload);
            println!("Space used:   {:.2}", seats.total_space_used);
        }
        Commands::Aircraft { filter } => {
            let catalog = load_catalog(&settings)?;
            let matches: Vec<&AircraftLimits> = match filter {
                Some(fragment) => catalog.search(fragment),
                None => catalog.iter().collect(),
            };
            if matches.is_empty() {
                println!(
                    "No aircraft found matching '{}'",
                    filter.as_deref().unwrap_or_default()
                );
            }
            for aircraft in matches {
                println!(
                    "{:<32} {:>5} seats {:>7.2} t",
                    aircraft.model, aircraft.max_capacity, aircraft.max_payload
                );
            }
        }
        Commands::InitConfig { force } => {
            if manager.path().exists() && !force {
                anyhow::bail!(
                    "{:?} already exists. Use --force to overwrite.",
                    manager.path()
                );
            }
            manager.save(&settings)?;
            println!("Wrote default settings to {:?}", manager.path());
        }
    }

    Ok(())
}
