//! `--mode search` - time the query workload over the shard/worker grid

use anyhow::{Context, Result};

use searchbench::engine;
use searchbench::plot;
use searchbench::runner::ProcessRunner;
use searchbench::sweep;

/// Chart artifact written into the working directory
const CHART_PATH: &str = "search_benchmark.svg";

pub fn execute(max_shards: u32, max_workers: u32, data: &str) -> Result<()> {
    engine::ensure_available()?;
    let work_dir = std::env::current_dir().context("Failed to get current directory")?;

    println!(
        "🔬 Search benchmark: 1..={max_shards} shards, 1..={max_workers} workers, data: {data}"
    );

    let mut runner = ProcessRunner;
    let series = sweep::search_sweep(&mut runner, max_shards, max_workers, data, &work_dir)?;

    println!("Finish! Computing figure...");
    plot::search_surface(&series, &work_dir.join(CHART_PATH))?;
    println!("✅ Chart saved: {CHART_PATH}");

    Ok(())
}
