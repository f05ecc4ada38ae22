use std::path::Path;

use crate::{
    config::{ConfigError, Settings},
    contents::extract_contents,
    document::{Document, DocumentError},
    errors::{FileOperation, IoError},
    materialize::{apply_vfs, MaterializeError, Summary},
    prompt::PromptError,
    tree::parse_tree,
    vfs::VirtualFS,
};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SproutError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Materialize(#[from] MaterializeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] PromptError),
}

/// Turns the text of a structure document into the list of entries to create.
///
/// This performs no I/O.
///
/// # Errors
///
/// Returns a [`SproutError::Document`] if the text is empty or has no root folder name.
pub fn plan_structure(text: &str, settings: &Settings) -> Result<VirtualFS, SproutError> {
    let document = Document::parse(text, &settings.separator)?;

    let layout = parse_tree(&document.tree_lines, &document.root, settings.indent_width);

    let contents = extract_contents(&document.content_lines, &settings.separator);

    log::debug!(
        "planned {} directories, {} files, {} content blocks",
        layout.directories.len(),
        layout.files.len(),
        contents.len()
    );

    Ok(VirtualFS::plan(layout, &contents))
}

/// Reads and plans the structure document at `path` without touching anything else on disk.
///
/// # Errors
///
/// Returns a [`SproutError`] if the file cannot be read or has no root folder name.
pub fn preview_structure_file<P: AsRef<Path>>(
    path: P,
    settings: &Settings,
) -> Result<VirtualFS, SproutError> {
    let path = path.as_ref();

    log::debug!("reading structure document: {}", path.display());

    let text = std::fs::read_to_string(path)
        .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;

    plan_structure(&text, settings)
}

/// Builds the directory and file hierarchy described by the document at `path`.
///
/// Paths are created relative to the current working directory unless the root folder
/// name is absolute. Existing files are overwritten.
///
/// # Errors
///
/// Returns a [`SproutError`] if:
///
/// - The document cannot be read, is empty, or has no root folder name. Nothing is written.
/// - One or more directories or files cannot be created. Every other entry is still
///   attempted and left in place.
pub fn process_structure_file<P: AsRef<Path>>(
    path: P,
    settings: &Settings,
) -> Result<Summary, SproutError> {
    let vfs = preview_structure_file(path, settings)?;

    let summary = apply_vfs(&vfs)?;

    Ok(summary)
}
