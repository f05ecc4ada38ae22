use colored::Colorize;
use miette::Diagnostic;
use std::path::Path;
use thiserror::Error;

use crate::{
    errors::{FileOperation, IoError},
    vfs::VirtualFS,
};

/// Number of directories ensured and files written by one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub directories: usize,
    pub files: usize,
}

#[derive(Debug, Error, Diagnostic)]
#[error("{} entries could not be created", .failures.len())]
#[diagnostic(
    code(sprout::materialize),
    help("Entries created before and after the failures were left in place")
)]
pub struct MaterializeError {
    /// What did get created.
    pub summary: Summary,
    #[related]
    pub failures: Vec<IoError>,
}

/// Creates all directories in the specified path if they do not exist.
fn create_directory(path: &Path) -> Result<(), IoError> {
    std::fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))
}

/// Writes a file with the provided contents to the specified path, creating or
/// overwriting it, and prints a status line.
fn write_file(path: &Path, contents: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_directory(parent)?;
    }

    std::fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    let msg = format!("{} {}", "create".green(), path.display());

    println!("{}", &msg);

    Ok(())
}

/// Applies directory and file creation operations from a [`VirtualFS`].
///
/// All directories are created before any file. A failing entry does not stop the
/// remaining ones; nothing already written is removed.
///
/// # Errors
///
/// Returns a [`MaterializeError`] carrying every failure when at least one entry could not
/// be created.
pub fn apply_vfs(vfs: &VirtualFS) -> Result<Summary, MaterializeError> {
    let mut summary = Summary::default();
    let mut failures = Vec::new();

    for entry in vfs.directories() {
        match create_directory(&entry.destination) {
            Ok(()) => summary.directories += 1,
            Err(error) => {
                log::warn!("{}", error);
                failures.push(error);
            }
        }
    }

    for entry in vfs.files() {
        let contents = entry.content.as_deref().unwrap_or_default();

        match write_file(&entry.destination, contents) {
            Ok(()) => summary.files += 1,
            Err(error) => {
                log::warn!("{}", error);
                failures.push(error);
            }
        }
    }

    log::info!(
        "created {} directories and {} files ({} failures)",
        summary.directories,
        summary.files,
        failures.len()
    );

    if failures.is_empty() {
        Ok(summary)
    } else {
        Err(MaterializeError { summary, failures })
    }
}
