use std::fs;
use std::path::Path;

use log::info;

use crate::config::DecodeConfig;
use crate::error::{DecodeError, Result};
use crate::pipeline::Candidate;

/// Writes `full` as raw bytes and `trimmed` as ASCII text for each candidate.
pub fn write_candidates(config: &DecodeConfig, candidates: &[Candidate]) -> Result<()> {
    fs::create_dir_all(&config.out_dir).map_err(|source| DecodeError::Write {
        path: config.out_dir.clone(),
        source,
    })?;

    for candidate in candidates {
        let full = config.full_path(candidate.mode);
        write_file(&full, &candidate.stream)?;

        let trimmed = config.trimmed_path(candidate.mode);
        write_file(&trimmed, ascii_lossy(candidate.trimmed()).as_bytes())?;

        info!(
            "[{}] Wrote {} (full) and {} (trimmed)",
            candidate.mode,
            full.display(),
            trimmed.display()
        );
    }
    Ok(())
}

/// ASCII bytes pass through; anything above 0x7F becomes U+FFFD.
pub fn ascii_lossy(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { char::REPLACEMENT_CHARACTER })
        .collect()
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|source| DecodeError::Write {
        path: path.to_path_buf(),
        source,
    })
}
