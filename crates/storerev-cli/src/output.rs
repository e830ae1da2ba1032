//! Output writer: one pretty-printed JSON document per run, plus a CSV
//! of the review rows when any exist.
//!
//! Writes go to a `.tmp` sibling first and are renamed into place, so a
//! failed serialization or interrupted write never leaves a truncated
//! file where a previous run's good output used to be. Re-running
//! overwrites unconditionally.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use storerev_core::RunResult;

/// Writes the run's JSON document and (when reviews exist) CSV table.
/// Returns the paths written.
pub(crate) fn write_outputs(
    run: &RunResult,
    family_slug: &str,
    output_dir: &Path,
) -> anyhow::Result<Vec<PathBuf>> {
    let base = format!(
        "{}_{}_reviews_{}",
        run.identity.slug.replace('-', "_"),
        run.identity.store.file_slug(),
        family_slug
    );
    let mut written = Vec::new();

    let json_path = output_dir.join(format!("{base}.json"));
    let json_bytes = serde_json::to_vec_pretty(run)?;
    write_atomic(&json_path, &json_bytes)?;
    written.push(json_path);

    if run.reviews.is_empty() {
        tracing::info!("no reviews to tabulate; skipping CSV");
        return Ok(written);
    }

    let mut csv_writer = csv::Writer::from_writer(Vec::new());
    for review in &run.reviews {
        csv_writer.serialize(review)?;
    }
    let csv_bytes = csv_writer.into_inner()?;

    let csv_path = output_dir.join(format!("{base}.csv"));
    write_atomic(&csv_path, &csv_bytes)?;
    written.push(csv_path);

    Ok(written)
}

/// Writes `bytes` to a `.tmp` sibling of `path`, then renames it into
/// place. The tmp file is removed on failure.
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    if let Err(e) = fs::write(&tmp_path, bytes) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
