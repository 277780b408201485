use aquaplan::search::{replay_text, Verbosity, WateringProblem, WateringTask};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(version)]
/// Replay a plan file against a watering problem, one step at a time.
///
/// Unlike the planner's own validation, the replay does not stop at the
/// first bad step: every token is reported, and the exit status is zero only
/// if all steps applied and the mission completed.
struct Cli {
    #[arg(help = "The watering problem file (RON)")]
    problem: PathBuf,
    #[arg(help = "The plan file to replay")]
    plan: PathBuf,
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
    let text = match std::fs::read_to_string(&cli.plan) {
        Ok(text) => text,
        Err(error) => {
            error!("failed to read {}: {}", cli.plan.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let report = replay_text(&task, &text);
    for (index, step) in report.steps.iter().enumerate() {
        match &step.outcome {
            Ok(action) => println!("{:4}: {} ok", index + 1, action),
            Err(error) => println!("{:4}: {} FAILED: {}", index + 1, step.token, error),
        }
    }
    println!("applied {} of {} steps", report.applied(), report.steps.len());
    println!(
        "mission complete: {}",
        if report.is_mission_complete() {
            "yes"
        } else {
            "no"
        }
    );

    if report.failures() == 0 && report.is_mission_complete() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
