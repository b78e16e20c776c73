//! Parameter-sweep drivers
//!
//! Both sweeps walk their grid in ascending order, one blocking external run
//! per point, and return the timing series they accumulated. The caller owns
//! the series from then on; there is no shared accumulation state.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use crate::artifacts::clean_index_artifacts;
use crate::engine;
use crate::runner::Runner;

/// One index-sweep observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexSample {
    /// Shard count the engine was asked to build
    pub shards: u32,
    /// Wall-clock build time
    pub seconds: f64,
}

/// One search-sweep grid point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchSample {
    /// Shard count the queries ran against
    pub shards: u32,
    /// Worker count passed to the engine
    pub workers: u32,
    /// Wall-clock query time
    pub seconds: f64,
}

/// Time index construction for every shard count in 1..=max_shards.
///
/// Artifacts are cleaned once up front, not between steps: the engine reuses
/// earlier shard files when building a larger index, and that reuse is part
/// of what is being measured.
pub fn index_sweep<R: Runner>(
    runner: &mut R,
    max_shards: u32,
    data: &str,
    work_dir: &Path,
) -> Result<Vec<IndexSample>> {
    clean_index_artifacts(work_dir)?;

    let mut series = Vec::with_capacity(max_shards as usize);
    for shards in 1..=max_shards {
        progress(&format!("index: {shards}/{max_shards} shards"));

        let elapsed = runner.run(&engine::index_build(shards, data));
        series.push(IndexSample {
            shards,
            seconds: elapsed.as_secs_f64(),
        });
    }
    clear_progress();

    Ok(series)
}

/// Time the fixed query set over the (shard count x worker count) grid,
/// shard-major.
///
/// The index is rebuilt once per outer shard step and shared by the whole
/// inner worker sweep; rebuilding per grid point would swamp the query
/// timings with construction cost. Each rebuild starts from a clean
/// directory so shard files from the previous step cannot leak in.
pub fn search_sweep<R: Runner>(
    runner: &mut R,
    max_shards: u32,
    max_workers: u32,
    data: &str,
    work_dir: &Path,
) -> Result<Vec<SearchSample>> {
    let mut series = Vec::with_capacity((max_shards * max_workers) as usize);

    for shards in 1..=max_shards {
        clean_index_artifacts(work_dir)?;
        runner.run(&engine::index_build(shards, data));

        for workers in 1..=max_workers {
            progress(&format!(
                "search: {shards}/{max_shards} shards, {workers}/{max_workers} workers"
            ));

            let elapsed = runner.run(&engine::search_query(workers));
            series.push(SearchSample {
                shards,
                workers,
                seconds: elapsed.as_secs_f64(),
            });
        }
    }
    clear_progress();

    Ok(series)
}

/// Overwrite the current terminal line with a status message.
fn progress(msg: &str) {
    print!("\r{msg:<80}");
    let _ = io::stdout().flush();
}

fn clear_progress() {
    print!("\r{:<80}\r", "");
    let _ = io::stdout().flush();
}
