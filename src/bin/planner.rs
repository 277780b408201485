use aquaplan::search::{
    search_engines::{SearchEngineName, SearchResult, TerminationCondition},
    validate, HeuristicName, Plan, Verbosity, WateringProblem, WateringTask,
};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Search for a plan that waters every plant of a grid watering problem.
struct Cli {
    #[arg(help = "The watering problem file (RON)")]
    problem: PathBuf,
    #[arg(
        help = "Also write the plan to this file",
        short = 'o',
        long = "output",
        id = "OUTPUT"
    )]
    output: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::AStar
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        value_enum,
        help = "The heuristic to use, defaults to the engine's usual pairing",
        long = "heuristic",
        id = "HEURISTIC"
    )]
    heuristic_name: Option<HeuristicName>,
    #[arg(
        help = "Give up after expanding this many nodes",
        long = "node-limit",
        id = "NODES"
    )]
    node_limit: Option<usize>,
    #[arg(
        help = "Give up after this much time, e.g. \"30s\" or \"5m\"",
        long = "time-limit",
        id = "DURATION",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(
        help = "Give up above this memory usage",
        long = "memory-limit-mb",
        id = "MEGABYTES"
    )]
    memory_limit_mb: Option<usize>,
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

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let problem = match WateringProblem::from_path(&cli.problem) {
        Ok(problem) => problem,
        Err(error) => {
            error!("failed to load {}: {}", cli.problem.display(), error);
            return ExitCode::FAILURE;
        }
    };
    let task = match WateringTask::new(&problem) {
        Ok(task) => task,
        Err(error) => {
            error!("invalid problem: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let termination =
        TerminationCondition::new(cli.node_limit, cli.time_limit, cli.memory_limit_mb);
    let heuristic_name = cli
        .heuristic_name
        .unwrap_or_else(|| cli.search_engine_name.default_heuristic());
    info!(
        engine = ?cli.search_engine_name,
        heuristic = ?heuristic_name,
    );

    let mut engine = cli.search_engine_name.create(termination);
    let (result, _statistics) = engine.search(&task, heuristic_name.create());

    match result {
        SearchResult::Success(steps) => {
            let plan = Plan::new(steps);
            info!("validating plan");
            if let Err(error) = validate(&plan, &task) {
                error!("search produced an invalid plan: {}", error);
                return ExitCode::FAILURE;
            }
            info!("plan is valid");
            info!(plan_length = plan.len());

            print!("{plan}");
            if let Some(path) = &cli.output {
                if let Err(error) = std::fs::write(path, plan.to_string()) {
                    error!("failed to write {}: {}", path.display(), error);
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        other => {
            println!("No plan found: {other:?}");
            ExitCode::FAILURE
        }
    }
}
