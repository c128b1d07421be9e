use gravsim::{bench_simulate, load_config, render_trajectories, save_state, write_collision_report};
use gravsim::Simulation;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

/// Central-body gravity simulation: trajectories, collision report and state snapshot
#[derive(Parser, Debug)]
struct Args {
    /// Number of steps to simulate
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..), required_unless_present = "bench")]
    steps: Option<u64>,

    /// Configuration file (JSON, or YAML by extension)
    #[arg(short, long, required_unless_present = "bench")]
    config: Option<PathBuf>,

    /// Collision report file
    #[arg(short, long, default_value = "collision_report.txt")]
    output: PathBuf,

    /// State snapshot file
    #[arg(long, default_value = "simulation_state.json")]
    state: PathBuf,

    /// Trajectory plot file
    #[arg(long, default_value = "simulation_result.png")]
    image: PathBuf,

    /// Skip rendering the trajectory plot
    #[arg(long)]
    no_plot: bool,

    /// Run the throughput benchmark instead of a simulation
    #[arg(long)]
    bench: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_simulate();
        return Ok(());
    }

    // both are required unless --bench
    let (Some(steps), Some(config_path)) = (args.steps, args.config.as_ref()) else {
        anyhow::bail!("--steps and --config are required");
    };

    let config = load_config(config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    let mut simulation = Simulation::from_config(&config)
        .with_context(|| format!("invalid simulation setup in {}", config_path.display()))?;

    let run = simulation.simulate(steps as usize);

    if !args.no_plot {
        render_trajectories(&simulation, &run, &args.image)?;
    }
    write_collision_report(&args.output, &run.collision_descriptions())?;
    info!("collision report written to {}", args.output.display());
    save_state(&simulation, &args.state)?;
    info!("state written to {}", args.state.display());

    Ok(())
}
