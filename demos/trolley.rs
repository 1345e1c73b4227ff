//! Trolley Example
//!
//! Prices a trolley fixture and prints its receipt.
//!
//! Use `-f` to pick a fixture from `fixtures/trolleys`
//! Use `-l` or `RUST_LOG` to see the solver's tracing output

use std::{io, time::Instant};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use trolley::{
    fixtures::Fixture,
    logging::init_subscriber,
    receipt::Receipt,
    solvers::{CombinationSolver, Solver},
    utils::DemoTrolleyArgs,
    validation::validate,
};

/// Trolley Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = DemoTrolleyArgs::parse();

    init_subscriber(&args.logging)?;

    let trolley = Fixture::with_base_path(&args.fixtures_dir).load_trolley(&args.fixture)?;

    validate(&trolley)?;

    let start = Instant::now();
    let result = CombinationSolver::solve(&trolley);
    let elapsed = start.elapsed();

    info!(fixture = %args.fixture, ?elapsed, "priced fixture");

    let stdout = io::stdout();
    let handle = stdout.lock();

    Receipt::from_solver_result(&trolley, result).write_to(handle)?;

    println!("\nSolution: {}s", elapsed.as_secs_f32());

    Ok(())
}
