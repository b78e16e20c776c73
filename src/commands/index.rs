//! `--mode index` - time index construction across shard counts

use anyhow::{Context, Result};

use searchbench::engine;
use searchbench::plot;
use searchbench::runner::ProcessRunner;
use searchbench::sweep;

/// Chart artifact written into the working directory
const CHART_PATH: &str = "index_benchmark.svg";

pub fn execute(max_shards: u32, data: &str) -> Result<()> {
    engine::ensure_available()?;
    let work_dir = std::env::current_dir().context("Failed to get current directory")?;

    println!("🔬 Index benchmark: 1..={max_shards} shards, data: {data}");

    let mut runner = ProcessRunner;
    let series = sweep::index_sweep(&mut runner, max_shards, data, &work_dir)?;

    println!("Finish! Computing figure...");
    plot::index_chart(&series, &work_dir.join(CHART_PATH))?;
    println!("✅ Chart saved: {CHART_PATH}");

    Ok(())
}
