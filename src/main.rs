use match_scoreboard::config::engine_config::EngineConfig;
use match_scoreboard::file_creation::file_creator::create_json_file;
use match_scoreboard::match_processing::match_processor::process_matches_in_parallel;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Parses command-line arguments for output directory, number of threads and event logs.
///
/// # Returns
///
/// * `Ok((output_dir, num_threads, event_logs))` - The parsed arguments.
/// * `Err(String)` - An error message if the arguments are invalid or missing.
fn parse_args() -> Result<(PathBuf, usize, Vec<PathBuf>), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        return Err("Usage: scoreboard <output-dir> <num-threads> <event-log>...".into());
    }

    let output_dir = PathBuf::from(&args[1]);
    let num_threads: usize = args[2]
        .parse()
        .map_err(|_| "Number of threads must be a valid integer.")?;
    let event_logs = args[3..].iter().map(PathBuf::from).collect();

    Ok((output_dir, num_threads, event_logs))
}

/// Output file for an event log: `<output_dir>/<log stem>.json`.
fn output_path(output_dir: &Path, event_log: &Path) -> PathBuf {
    let stem = event_log
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scoreboard".to_owned());
    output_dir.join(format!("{}.json", stem))
}

fn run() -> Result<bool, String> {
    let (output_dir, num_threads, event_logs) = parse_args()?;
    let config = EngineConfig::from_env().map_err(|err| err.to_string())?;

    fs::create_dir_all(&output_dir)
        .map_err(|err| format!("Failed to create {}: {}", output_dir.display(), err))?;

    let outcomes = process_matches_in_parallel(&event_logs, num_threads, &config)
        .map_err(|err| err.to_string())?;

    let mut all_succeeded = true;
    for (event_log, outcome) in outcomes {
        let scoreboard = match outcome {
            Ok(scoreboard) => scoreboard,
            Err(err) => {
                error!(log = %event_log.display(), "{}", err);
                all_succeeded = false;
                continue;
            }
        };

        let path = output_path(&output_dir, &event_log);
        match create_json_file(&path, &scoreboard) {
            Ok(()) => info!(
                file = %path.display(),
                players = scoreboard.len(),
                rounds = scoreboard.rounds(),
                "scoreboard written"
            ),
            Err(err) => {
                error!(log = %event_log.display(), "{}", err);
                all_succeeded = false;
            }
        }
    }

    Ok(all_succeeded)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
