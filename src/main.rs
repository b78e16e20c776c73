use anyhow::{bail, Result};
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Search engine benchmarker", long_about = None)]
struct Cli {
    /// Max number of index shards
    #[arg(long, default_value_t = 5)]
    index: u32,

    /// Max number of goroutines
    #[arg(long, default_value_t = 10)]
    go: u32,

    /// Either "index" or "search"
    #[arg(long)]
    mode: String,

    /// Data path
    #[arg(long)]
    data: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.mode.as_str() {
        "index" => commands::index::execute(cli.index, &cli.data)?,
        "search" => commands::search::execute(cli.index, cli.go, &cli.data)?,
        other => bail!("Invalid mode: {other}"),
    }

    Ok(())
}
