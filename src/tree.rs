use std::path::PathBuf;

/// Box-drawing characters recognised in a tree diagram.
pub const TREE_GLYPHS: [char; 4] = ['├', '└', '─', '│'];

/// Number of prefix characters that make up one level of nesting (`│   ` or `├── `).
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Directories and files described by a tree diagram, rooted at the root folder name.
///
/// Both lists keep document order and are not deduplicated. `directories[0]` is always the
/// root itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLayout {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

fn is_prefix_char(c: char) -> bool {
    c == ' ' || TREE_GLYPHS.contains(&c)
}

pub fn is_tree_line(line: &str) -> bool {
    line.chars().any(|c| TREE_GLYPHS.contains(&c))
}

/// Nesting depth of a tree line: the length of its leading glyph/space run divided by
/// `indent_width`.
pub fn indent_depth(line: &str, indent_width: usize) -> usize {
    let prefix = line.chars().take_while(|c| is_prefix_char(*c)).count();

    prefix / indent_width.max(1)
}

/// Entry name with the leading glyph/space run removed. Spaces inside the name are kept.
pub fn entry_name(line: &str) -> &str {
    line.trim_start_matches(is_prefix_char).trim()
}

/// `true` when `name` carries a non-empty extension, e.g. `main.rs` or `.gitignore`.
///
/// Names such as `v1.2` are classified as files too; only the shape of the name matters.
pub fn is_file_name(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, extension)| !extension.trim().is_empty())
        .unwrap_or(false)
}

/// Converts the tree section of a document into ordered directory and file paths.
///
/// Lines without any tree glyph, blank lines and entries with an empty name are dropped.
pub fn parse_tree<S: AsRef<str>>(lines: &[S], root: &str, indent_width: usize) -> TreeLayout {
    let root_path = PathBuf::from(root);

    let mut directories = vec![root_path.clone()];
    let mut files = Vec::new();

    // open ancestors, innermost last; the root frame is never popped
    let mut stack: Vec<(PathBuf, usize)> = vec![(root_path, 0)];

    for line in lines {
        let line = line.as_ref();

        if line.trim().is_empty() || !is_tree_line(line) {
            continue;
        }

        let depth = indent_depth(line, indent_width);
        let name = entry_name(line);

        if name.is_empty() {
            log::debug!("skipping tree line without a name: '{}'", line);
            continue;
        }

        while stack.len() > 1 && stack.last().is_some_and(|(_, top)| *top >= depth) {
            stack.pop();
        }

        let full_path = match stack.last() {
            Some((parent, _)) => parent.join(name),
            None => PathBuf::from(root).join(name),
        };

        if is_file_name(name) {
            log::debug!("file {} (depth {})", full_path.display(), depth);
            files.push(full_path);
        } else {
            log::debug!("directory {} (depth {})", full_path.display(), depth);
            directories.push(full_path.clone());
            stack.push((full_path, depth));
        }
    }

    TreeLayout { directories, files }
}
