use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use colored::*;
use cranes::{
    dynamic::DynamicSolver, exhaustive::{ExhaustiveSolver, STEP_LIMIT}, generator::GridGenerator,
    grid::Grid, logger::DevLogger, solver::Solver,
};
use log::{info, warn};
use std::{fs, path::PathBuf, time::Instant};

#[derive(Parser, Debug)]
#[command(name = "cranes", version, about = "Crane unloading path optimizer with devlogs")]
struct Cli {
    /// Grid file, one row per line (X = building, . = empty, 0-9 = cranes). If omitted, a random grid is generated.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Rows of the random grid
    #[arg(long, default_value_t = 6)]
    rows: usize,

    /// Columns of the random grid
    #[arg(long, default_value_t = 6)]
    columns: usize,

    /// Seed for the random grid
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that a random cell is a building
    #[arg(long, default_value_t = 0.2)]
    buildings: f64,

    /// Largest crane count in a random cell
    #[arg(long, default_value_t = 9)]
    max_cranes: u32,

    /// Choose solving approach
    #[arg(short, long, value_enum, default_value_t = Method::Both)]
    method: Method,

    /// Refuse exhaustive search when rows + columns - 2 reaches this many steps
    #[arg(long, default_value_t = STEP_LIMIT)]
    step_limit: usize,

    /// Directory for devlogs
    #[arg(long, default_value = "devlogs")]
    devlogs: PathBuf,

    /// Maximum devlogs to write (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_logs: usize,

    /// Emit devlogs and paths to console with colors
    #[arg(long)]
    color: bool,

    /// Debug-level diagnostics from the solvers
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Method { Exhaustive, Dynamic, Both }

fn load_grid(cli: &Cli) -> Result<Grid> {
    match &cli.input {
        Some(p) => {
            let s = fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            Grid::parse(&s).with_context(|| format!("parsing {}", p.display()))
        }
        None => GridGenerator::new(cli.seed)
            .generate(cli.rows, cli.columns, cli.buildings, cli.max_cranes)
            .context("generate grid"),
    }
}

fn run(solver: &dyn Solver, grid: &Grid, logger: &mut DevLogger) -> Result<u64> {
    let start = Instant::now();
    let path = solver.solve(grid);
    let elapsed = start.elapsed();
    info!("{} finished in {:?}", solver.name(), elapsed);
    logger.log_solution(solver.name(), &path, elapsed)?;
    Ok(path.total_cranes())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let grid = load_grid(&cli)?;
    let mut logger = DevLogger::new(cli.devlogs.clone(), cli.color, cli.max_logs)?;
    logger.log_grid(&grid)?;

    let exhaustive = ExhaustiveSolver::with_step_limit(cli.step_limit);
    if matches!(cli.method, Method::Exhaustive | Method::Both) && grid.max_steps() >= exhaustive.step_limit() {
        bail!("grid needs {} steps, exhaustive search is limited to fewer than {}", grid.max_steps(), exhaustive.step_limit());
    }

    match cli.method {
        Method::Exhaustive => { run(&exhaustive, &grid, &mut logger)?; }
        Method::Dynamic => { run(&DynamicSolver::new(), &grid, &mut logger)?; }
        Method::Both => {
            let brute = run(&exhaustive, &grid, &mut logger)?;
            let dyn_prog = run(&DynamicSolver::new(), &grid, &mut logger)?;
            if brute == dyn_prog {
                let msg = format!("both solvers collect {} cranes", brute);
                println!("{}", if cli.color { msg.green().to_string() } else { msg });
            } else {
                warn!("solvers disagree: exhaustive {} vs dynamic {}", brute, dyn_prog);
                let msg = format!("MISMATCH: exhaustive {} vs dynamic {}", brute, dyn_prog);
                println!("{}", if cli.color { msg.red().bold().to_string() } else { msg });
            }
        }
    }
    Ok(())
}
