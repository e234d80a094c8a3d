use clap::Parser;
use gridsearch::{
    eater::Coordinate,
    search::{init_logging, Verbosity},
    wumpus::{save_problem, WumpusWorld},
};
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Generate a random Wumpus World instance as a PDDL problem file.
struct Cli {
    #[arg(
        help = "The output problem file",
        short = 'o',
        long = "output",
        id = "OUTPUT",
        default_value = "wumpus-problem.pddl"
    )]
    output: PathBuf,
    #[arg(
        help = "Width and height of the grid",
        long = "size",
        id = "SIZE",
        default_value_t = 4
    )]
    size: i32,
    #[arg(help = "Seed for the random placement", long = "seed", id = "SEED")]
    seed: Option<u64>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity, false);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let result = WumpusWorld::random(Coordinate::new(cli.size, cli.size), &mut rng)
        .and_then(|world| {
            info!(?world);
            save_problem(&world, &cli.output)
        });

    match result {
        Ok(()) => {
            println!("PDDL problem file created: {}", cli.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
