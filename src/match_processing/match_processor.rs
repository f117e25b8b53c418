use crate::config::engine_config::EngineConfig;
use crate::event_source::event_log::EventLog;
use crate::event_source::source_error::SourceError;
use crate::event_source::EventSource;
use crate::player_registry::registry_builder::build_registry;
use crate::scoreboard::snapshot_builder::{finalize, Scoreboard};
use crate::stat_accumulation::stat_accumulator::accumulate;

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use rayon::ThreadPoolBuilder;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info_span};

/// Why a match produced no scoreboard.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("identity pass failed: {0}")]
    IdentityPass(#[source] SourceError),

    #[error("accumulation pass failed: {0}")]
    AccumulationPass(#[source] SourceError),
}

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Builds the scoreboard of one match with two sequential passes.
///
/// The first pass collects every participant; the second one only starts once
/// the first is exhausted and accumulates statistics seeded with them. If
/// either pass fails, no scoreboard is built.
///
/// # Arguments
///
/// * `source` - The match recording, traversed twice from its start.
/// * `config` - Engine settings.
///
/// # Returns
///
/// * `Ok(Scoreboard)` - The finalized scoreboard.
/// * `Err(MatchError)` - If the recording could not be read to its end.
pub fn build_scoreboard<S>(source: &S, config: &EngineConfig) -> Result<Scoreboard, MatchError>
where
    S: EventSource,
{
    let registry = source
        .open_pass()
        .and_then(build_registry)
        .map_err(MatchError::IdentityPass)?;

    let state = source
        .open_pass()
        .and_then(|pass| accumulate(pass, &registry, config))
        .map_err(MatchError::AccumulationPass)?;

    Ok(finalize(state))
}

/// Builds the scoreboards of several independent matches in parallel.
///
/// Each match is still processed by a single thread from start to end; only
/// different matches run concurrently.
///
/// # Arguments
///
/// * `paths` - Event logs, one per match.
/// * `num_threads` - The number of threads to use.
/// * `config` - Engine settings shared by every match.
///
/// # Returns
///
/// The outcome of every match, in the order of `paths`, or a `BatchError` if the thread pool could not be created.
pub fn process_matches_in_parallel(
    paths: &[PathBuf],
    num_threads: usize,
    config: &EngineConfig,
) -> Result<Vec<(PathBuf, Result<Scoreboard, MatchError>)>, BatchError> {
    let thread_pool = ThreadPoolBuilder::new().num_threads(num_threads).build()?;

    let outcomes = thread_pool.install(|| {
        paths
            .par_iter()
            .map(|path| {
                let _span = info_span!("match", path = %path.display()).entered();
                debug!("processing match");
                let outcome = build_scoreboard(&EventLog::new(path), config);
                (path.clone(), outcome)
            })
            .collect()
    });

    Ok(outcomes)
}
