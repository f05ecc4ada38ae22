use std::path::PathBuf;

use crate::{contents::ContentsMap, tree::TreeLayout};

/// Represents a virtual file or directory entry to be created before writing to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEntry {
    /// The target path, prefixed with the root folder name.
    pub destination: PathBuf,
    /// Contents to be written if the entry represents a file. `None` creates an empty file.
    pub content: Option<String>,
    /// Indicates whether this entry is a file (`true`) or a directory (`false`).
    pub is_file: bool,
}

/// Every directory and file a structure document describes, directories first, each group
/// in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualFS {
    pub entries: Vec<VirtualEntry>,
}
impl VirtualFS {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
    /// Pairs every file of `layout` with its body from `contents`, looked up by basename.
    pub fn plan(layout: TreeLayout, contents: &ContentsMap) -> Self {
        let mut vfs = VirtualFS::new();

        for directory in layout.directories {
            vfs.entries.push(VirtualEntry {
                destination: directory,
                content: None,
                is_file: false,
            });
        }

        for file in layout.files {
            let file_name = file
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();

            let content = contents.lookup(&file_name).map(str::to_string);

            if content.is_none() {
                log::debug!("no contents found for {}, it will be empty", file.display());
            }

            vfs.entries.push(VirtualEntry {
                destination: file,
                content,
                is_file: true,
            });
        }

        vfs
    }

    pub fn directories(&self) -> impl Iterator<Item = &VirtualEntry> {
        self.entries.iter().filter(|entry| !entry.is_file)
    }

    pub fn files(&self) -> impl Iterator<Item = &VirtualEntry> {
        self.entries.iter().filter(|entry| entry.is_file)
    }

    pub fn directory_count(&self) -> usize {
        self.directories().count()
    }

    pub fn file_count(&self) -> usize {
        self.files().count()
    }
}
