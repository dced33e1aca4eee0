use std::io;

use anyhow::anyhow;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sapper_core::{CellCount, Coord, Grid, GridConfig};
use web_time::SystemTime;

use crate::session::Session;

mod command;
mod render;
mod session;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Number of columns
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(Coord).range(1..))]
    width: Coord,

    /// Number of rows
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(Coord).range(1..))]
    height: Coord,

    /// Requested hazard count, capped at 5/9 of the cells
    #[arg(long, default_value_t = 5)]
    hazards: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    log::debug!("seed: {}", seed);

    let config = GridConfig::new((args.width, args.height), args.hazards);
    let grid = Grid::with_seed(config, seed);
    log::info!(
        "Started a {}x{} game with {} hazards",
        grid.width(),
        grid.height(),
        grid.hazard_count()
    );

    let mut session = Session::new(grid, io::stdin().lock(), io::stdout().lock());
    let report = session.run()?;
    log::info!(
        "Game ended: {:?} after {:?}, {} of {} safe cells revealed",
        report.state,
        report.elapsed,
        session.grid().revealed_safe_count(),
        session.grid().safe_cell_count()
    );
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|since| since.as_nanos() as u64)
        .unwrap_or_default()
}
