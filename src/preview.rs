use crate::vfs::VirtualFS;
use colored::Colorize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<usize>,
    is_file: bool,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
        }
    }
}

/// Arena of nodes; index 0 is a synthetic top node holding every parentless entry.
struct Tree {
    nodes: Vec<TreeNode>,
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Build the tree from the VFS entries.
fn build_tree(vfs: &VirtualFS) -> Tree {
    let mut nodes = vec![TreeNode::new(String::new(), false)];

    // map directory path to node
    let mut lookup: HashMap<PathBuf, usize> = HashMap::new();

    for entry in &vfs.entries {
        let parent_index = entry
            .destination
            .parent()
            .and_then(|parent| lookup.get(parent).copied())
            .unwrap_or(0);

        let index = nodes.len();
        nodes.push(TreeNode::new(
            display_name(&entry.destination),
            entry.is_file,
        ));
        nodes[parent_index].children.push(index);

        if !entry.is_file {
            lookup.entry(entry.destination.clone()).or_insert(index);
        }
    }

    Tree { nodes }
}

fn render_node(tree: &Tree, index: usize, prefix: &str, is_last: bool, out: &mut Vec<String>) {
    let node = &tree.nodes[index];

    let connector = if is_last { "└── " } else { "├── " };
    let name = if node.is_file {
        node.name.green()
    } else {
        node.name.blue()
    };
    out.push(format!("{}{}{}", prefix.yellow(), connector.yellow(), name));

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    render_children(tree, index, &child_prefix, out);
}

fn render_children(tree: &Tree, index: usize, prefix: &str, out: &mut Vec<String>) {
    let children = &tree.nodes[index].children;
    let len = children.len();

    for (i, child) in children.iter().enumerate() {
        render_node(tree, *child, prefix, i == len - 1, out);
    }
}

/// Renders the planned entries as a box-drawing tree, one line per entry.
pub fn render_tree(vfs: &VirtualFS) -> Vec<String> {
    let tree = build_tree(vfs);
    let mut out = Vec::new();

    render_children(&tree, 0, "", &mut out);

    out
}

pub fn preview_as_tree(vfs: &VirtualFS) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);

    for line in render_tree(vfs) {
        println!("{}", line);
    }

    println!(
        "\n{} {} directories, {} files\n",
        "└─".bold().bright_blue(),
        vfs.directory_count(),
        vfs.file_count()
    );
}
