//! Wire contract with the search-engine executable
//!
//! The engine is a black box driven through its command line: `index` writes
//! shard files into the working directory, `search` reads query terms from
//! stdin and fans them out across worker goroutines. Everything here is
//! about producing the exact arguments the engine expects.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Relative path of the benchmarked executable
pub const ENGINE_BIN: &str = "./myGoogle";

/// Label the engine uses as the shard file prefix
pub const INDEX_LABEL: &str = "tmp";

/// Shard glob handed to `search` verbatim (the engine expands it, not a shell)
pub const SHARD_GLOB: &str = "tmp_*.idx";

/// Query terms fed to every timed search run, in this order
pub const QUERY_WORDS: [&str; 11] = [
    "arthur",
    "king",
    "actress",
    "obama",
    "computer",
    "apple",
    "chair",
    "plane",
    "wikipedia",
    "name",
    "is",
];

/// A fully-specified external command: program, argument vector and optional
/// stdin payload. Arguments are passed as a structured list, never through a
/// shell, so quoting stays a wire-format concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to execute
    pub program: String,
    /// Arguments in order, one element per argv slot
    pub args: Vec<String>,
    /// Payload piped to the child's stdin, if any
    pub stdin: Option<String>,
}

/// Build-index invocation: `index -go=<shards> -index=tmp -path=<data>`
///
/// The engine derives both the shard count and its internal build
/// concurrency from the same `-go` flag.
pub fn index_build(shards: u32, data: &str) -> Invocation {
    Invocation {
        program: ENGINE_BIN.to_string(),
        args: vec![
            "index".to_string(),
            format!("-go={shards}"),
            format!("-index={INDEX_LABEL}"),
            format!("-path={data}"),
        ],
        stdin: None,
    }
}

/// Search invocation: `search -index=tmp_*.idx -go=<workers>` with the fixed
/// query terms on stdin, one double-quoted term per line.
///
/// Only the `-go` flag varies between calls; the word list and its order are
/// constants.
pub fn search_query(workers: u32) -> Invocation {
    let mut payload = QUERY_WORDS
        .iter()
        .map(|word| format!("\"{word}\""))
        .collect::<Vec<_>>()
        .join("\n");
    payload.push('\n');

    Invocation {
        program: ENGINE_BIN.to_string(),
        args: vec![
            "search".to_string(),
            format!("-index={SHARD_GLOB}"),
            format!("-go={workers}"),
        ],
        stdin: Some(payload),
    }
}

/// Resolve the engine binary before a sweep starts.
pub fn ensure_available() -> Result<PathBuf> {
    which::which(ENGINE_BIN)
        .with_context(|| format!("Search engine binary not found: {ENGINE_BIN}"))
}
