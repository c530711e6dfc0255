use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;
use tz_controls::Thermostat;
use tz_project::{IntegratorDef, Scenario, validate_scenario};
use tz_sim::{
    IntegratorType, SimError, SimOptions, Trajectory, ZoneModel, ZoneState, grid, run_grid,
};

#[derive(Parser)]
#[command(name = "tz-cli")]
#[command(about = "Thermozone CLI - thermal zone hysteresis simulation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and structure
    Validate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Run a simulation and export the trajectory as CSV
    Run {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(thiserror::Error, Debug)]
enum AppError {
    #[error(transparent)]
    Project(#[from] tz_project::ProjectError),

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

type AppResult<T> = Result<T, AppError>;

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Run {
            scenario_path,
            output,
        } => cmd_run(&scenario_path, output.as_deref()),
    }
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = tz_project::load_yaml(scenario_path)?;
    validate_scenario(&scenario).map_err(tz_project::ProjectError::from)?;
    println!("✓ Scenario is valid");
    Ok(())
}

fn cmd_run(scenario_path: &Path, output: Option<&Path>) -> AppResult<()> {
    let scenario = tz_project::load_yaml(scenario_path)?;
    println!("Running scenario: {}", scenario.name);

    let trajectory = run_scenario(&scenario)?;
    info!(points = trajectory.len(), "simulation completed");

    write_csv(&trajectory, output)?;

    if let Some(last) = trajectory.last() {
        println!(
            "✓ Simulation completed: {} points, final value {:.3} (setpoint {:.3})",
            trajectory.len(),
            last.value,
            scenario.thermostat.setpoint
        );
    }
    Ok(())
}

fn run_scenario(scenario: &Scenario) -> AppResult<Trajectory> {
    let plant = tz_sim::ZonePlant::new(scenario.plant.a, scenario.plant.b, scenario.plant.c)?;
    let thermostat = Thermostat::new(scenario.thermostat.setpoint, scenario.thermostat.deadband)
        .map_err(SimError::from)?;
    let mut model = ZoneModel::new(plant, thermostat, scenario.thermostat.initial_on);

    let time_grid = grid::uniform(scenario.grid.t_end_s, scenario.grid.samples)?;
    let initial = ZoneState::new(scenario.initial.value, scenario.initial.rate);

    let opts = SimOptions {
        substep_divisor: scenario.sim.substep_divisor,
        max_substeps: scenario.sim.max_substeps,
        integrator: match scenario.sim.integrator {
            IntegratorDef::Rk4 => IntegratorType::RK4,
            IntegratorDef::ForwardEuler => IntegratorType::ForwardEuler,
        },
    };

    Ok(run_grid(&mut model, initial, &time_grid, &opts)?)
}

fn write_csv(trajectory: &Trajectory, output: Option<&Path>) -> AppResult<()> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(io::stdout()),
    };

    writeln!(writer, "time_s,value,rate")?;
    for (t, x) in trajectory.t.iter().zip(trajectory.x.iter()) {
        writeln!(writer, "{},{},{}", t, x.value, x.rate)?;
    }
    writer.flush()?;

    if let Some(path) = output {
        println!("✓ Trajectory written to {}", path.display());
    }
    Ok(())
}
