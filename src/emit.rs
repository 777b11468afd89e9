use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use thiserror::Error;

use crate::types::UnifiedTokenRecord;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to create output directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize unified record: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Serialize the record and write it to
/// `{output_dir}/token_data_{mint}_{unixSeconds}.json`, stamped with the
/// current wall clock.
pub fn emit(
    record: &UnifiedTokenRecord,
    mint: &str,
    output_dir: &Path,
) -> Result<PathBuf, EmitError> {
    emit_at(record, mint, output_dir, chrono::Utc::now().timestamp())
}

/// Same as [`emit`] but with an explicit timestamp, so the filename is
/// testable. Sequential runs collide only within the same second for the
/// same mint, which is acceptable for a one-shot collector.
pub fn emit_at(
    record: &UnifiedTokenRecord,
    mint: &str,
    output_dir: &Path,
    unix_seconds: i64,
) -> Result<PathBuf, EmitError> {
    let json = serde_json::to_string_pretty(record)?;

    fs::create_dir_all(output_dir).map_err(|source| EmitError::Directory {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(format!("token_data_{}_{}.json", mint, unix_seconds));
    fs::write(&path, json).map_err(|source| EmitError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// Scan previously emitted files for a record with the same mint, so a token
/// enters the dataset at most once. Unreadable or unparsable files are
/// skipped with a warning rather than blocking the run.
pub fn existing_record_for_mint(output_dir: &Path, mint: &str) -> Option<PathBuf> {
    let entries = fs::read_dir(output_dir).ok()?;

    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().map_or(true, |ext| ext != "json") {
            continue;
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("failed to read {}: {}", path.display(), e);
                continue;
            }
        };

        let value: serde_json::Value = match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(e) => {
                warn!("failed to parse {}: {}", path.display(), e);
                continue;
            }
        };

        if value.get("mint").and_then(|m| m.as_str()) == Some(mint) {
            return Some(path);
        }
    }

    None
}
