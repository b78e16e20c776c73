//! Cleanup of stale index shard files
//!
//! The engine leaves `<label>_<n>.idx` shards in the working directory.
//! Sweeps remove them so every build starts from a known on-disk state.

use std::fs;
use std::path::Path;

use anyhow::Result;

/// Glob matching every shard file the engine can leave behind
pub const INDEX_ARTIFACT_GLOB: &str = "*.idx";

/// Remove all `*.idx` files directly under `dir`.
///
/// Idempotent: zero matches is success, and a file vanishing between
/// listing and removal is ignored.
pub fn clean_index_artifacts(dir: &Path) -> Result<()> {
    let pattern = dir.join(INDEX_ARTIFACT_GLOB);
    for path in glob::glob(&pattern.to_string_lossy())?.flatten() {
        let _ = fs::remove_file(path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_removes_only_shard_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tmp_1.idx"), b"shard").unwrap();
        fs::write(dir.path().join("tmp_2.idx"), b"shard").unwrap();
        fs::write(dir.path().join("corpus.txt"), b"data").unwrap();

        clean_index_artifacts(dir.path()).unwrap();

        assert!(!dir.path().join("tmp_1.idx").exists());
        assert!(!dir.path().join("tmp_2.idx").exists());
        assert!(dir.path().join("corpus.txt").exists());
    }

    #[test]
    fn test_idempotent_on_empty_directory() {
        let dir = TempDir::new().unwrap();

        clean_index_artifacts(dir.path()).unwrap();
        clean_index_artifacts(dir.path()).unwrap();
    }
}
