//! All-or-nothing output writing
//!
//! Every output is staged next to its destination first. Destinations are
//! only touched once every stage has been written; existing destinations
//! are parked as backups and put back if any later rename fails, so a failed
//! run never leaves a fresh text report beside a stale (or missing) CSV.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::ReportError;

/// One rendered output and where it goes.
#[derive(Debug, Clone)]
pub struct OutputFile {
    /// Short label used in errors and logs, e.g. `"text"` or `"csv"`
    pub stage: &'static str,
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

impl OutputFile {
    pub fn new(stage: &'static str, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            stage,
            path: path.into(),
            contents: contents.into(),
        }
    }
}

fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(suffix);
    path.with_file_name(name)
}

fn staging_path(path: &Path) -> PathBuf {
    sibling_path(path, ".pullsift-tmp")
}

fn backup_path(path: &Path) -> PathBuf {
    sibling_path(path, ".pullsift-bak")
}

fn discard(staged: &[PathBuf]) {
    for path in staged {
        if let Err(err) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %err, "Failed to remove staged output");
        }
    }
}

/// A destination already replaced by its staged output.
struct Committed<'a> {
    path: &'a Path,
    backup: Option<PathBuf>,
}

fn restore(path: &Path, backup: Option<&Path>) {
    match backup {
        Some(backup) => {
            if let Err(err) = fs::rename(backup, path) {
                warn!(path = %path.display(), error = %err, "Failed to restore previous output");
            }
        }
        None => {
            if let Err(err) = fs::remove_file(path) {
                warn!(path = %path.display(), error = %err, "Failed to remove new output");
            }
        }
    }
}

/// Puts every committed destination back the way it was, newest first.
fn roll_back(committed: &[Committed<'_>]) {
    for entry in committed.iter().rev() {
        restore(entry.path, entry.backup.as_deref());
    }
}

pub fn write_all_or_nothing(outputs: &[OutputFile]) -> Result<(), ReportError> {
    for output in outputs {
        if output.path.is_dir() {
            return Err(ReportError::Rename {
                stage: output.stage,
                path: output.path.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::IsADirectory,
                    "destination is a directory",
                ),
            });
        }
    }

    let mut staged = Vec::with_capacity(outputs.len());
    for output in outputs {
        let stage_path = staging_path(&output.path);
        if let Err(source) = fs::write(&stage_path, &output.contents) {
            // a failed write may still have created the file
            if stage_path.exists() {
                staged.push(stage_path);
            }
            discard(&staged);
            return Err(ReportError::WriteFile {
                stage: output.stage,
                path: output.path.clone(),
                source,
            });
        }
        staged.push(stage_path);
    }

    // previous destinations are parked as backups until every rename lands
    let mut committed: Vec<Committed<'_>> = Vec::with_capacity(outputs.len());
    for (index, (output, stage_path)) in outputs.iter().zip(&staged).enumerate() {
        let fail = |committed: &[Committed<'_>], source: std::io::Error| {
            roll_back(committed);
            discard(&staged[index..]);
            ReportError::Rename {
                stage: output.stage,
                path: output.path.clone(),
                source,
            }
        };

        let backup = if output.path.exists() {
            let backup = backup_path(&output.path);
            if let Err(source) = fs::rename(&output.path, &backup) {
                return Err(fail(&committed, source));
            }
            Some(backup)
        } else {
            None
        };

        if let Err(source) = fs::rename(stage_path, &output.path) {
            if let Some(backup) = &backup
                && let Err(err) = fs::rename(backup, &output.path)
            {
                warn!(path = %output.path.display(), error = %err, "Failed to restore previous output");
            }
            return Err(fail(&committed, source));
        }

        committed.push(Committed {
            path: &output.path,
            backup,
        });
    }

    for entry in &committed {
        if let Some(backup) = &entry.backup
            && let Err(err) = fs::remove_file(backup)
        {
            warn!(path = %backup.display(), error = %err, "Failed to remove previous output");
        }
    }
    for output in outputs {
        debug!(stage = output.stage, path = %output.path.display(), bytes = output.contents.len(), "Wrote output");
    }

    Ok(())
}
