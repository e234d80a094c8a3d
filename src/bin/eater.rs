use clap::Parser;
use gridsearch::{
    eater::{create_player, replay, EaterWorld},
    search::{init_logging, search_engines::SearchEngineName, SearchConfig, Verbosity},
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Plan the moves of the eater in an eater world.
struct Cli {
    #[arg(help = "The eater world file (JSON)")]
    world: PathBuf,
    #[arg(
        help = "A TOML file with search settings, overridden by the options below",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    search_engine_name: Option<SearchEngineName>,
    #[arg(
        help = "The largest depth limit tried by iterative deepening",
        long = "max-depth",
        id = "MAX_DEPTH"
    )]
    max_depth: Option<usize>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity, cli.colour);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };
    if let Some(engine) = cli.search_engine_name {
        config = config.with_engine(engine);
    }
    if let Some(max_depth) = cli.max_depth {
        config = config.with_max_depth(max_depth);
    }
    info!(engine = ?config.engine, max_depth = config.max_depth);

    let world = EaterWorld::from_path(&cli.world)?;
    println!("{}", world.render());

    let player = create_player(&config);
    let moves = player.start_episode(&world)?;

    info!("validating moves");
    let end = replay(&world, player.food_order(&world), &moves)?;
    info!(eater = %end.eater, "all foods eaten");

    println!("Moves found:");
    for direction in &moves {
        println!("{}", direction);
    }
    println!("Number of moves: {}", moves.len());
    Ok(())
}
