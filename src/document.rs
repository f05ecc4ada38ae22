use miette::Diagnostic;
use thiserror::Error;

/// Marker line that ends the tree diagram and delimits file bodies in the appendix.
pub const SEPARATOR: &str = "------------------------------------";

const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, Error, Diagnostic)]
pub enum DocumentError {
    #[error("Empty file")]
    #[diagnostic(
        code(sprout::document::empty),
        help("The first line must hold the root folder name, followed by the tree diagram")
    )]
    Empty,

    #[error("No root folder name found")]
    #[diagnostic(
        code(sprout::document::missing_root),
        help("Put the root folder name on the very first line, without leading blank lines")
    )]
    MissingRoot,
}

/// A structure description split into its two sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: String,
    pub tree_lines: Vec<String>,
    pub content_lines: Vec<String>,
}
impl Document {
    /// Splits `text` into the root folder name, the tree section and the contents section.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Empty`] when `text` has no lines at all and
    /// [`DocumentError::MissingRoot`] when the first line is blank.
    pub fn parse(text: &str, separator: &str) -> Result<Self, DocumentError> {
        let mut lines = text.lines();

        let first = lines.next().ok_or(DocumentError::Empty)?;

        let root = first.trim_start_matches(BYTE_ORDER_MARK).trim();

        if root.is_empty() {
            return Err(DocumentError::MissingRoot);
        }

        let rest: Vec<&str> = lines.collect();

        let (tree_lines, content_lines) = split_sections(&rest, separator);

        log::debug!(
            "root '{}': {} tree lines, {} content lines",
            root,
            tree_lines.len(),
            content_lines.len()
        );

        Ok(Document {
            root: root.to_string(),
            tree_lines,
            content_lines,
        })
    }
}

/// Partitions `lines` at the first line containing `separator`.
///
/// The separator line itself opens the contents section. Without a separator every line
/// belongs to the tree section.
pub fn split_sections(lines: &[&str], separator: &str) -> (Vec<String>, Vec<String>) {
    let boundary = lines
        .iter()
        .position(|line| line.contains(separator))
        .unwrap_or(lines.len());

    let (tree, contents) = lines.split_at(boundary);

    (
        tree.iter().map(|line| line.to_string()).collect(),
        contents.iter().map(|line| line.to_string()).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_text_is_err() {
        let result = Document::parse("", SEPARATOR);

        assert!(matches!(result, Err(DocumentError::Empty)));
    }

    #[test]
    fn test_parse_blank_root_is_err() {
        let result = Document::parse("   \n├── src\n", SEPARATOR);

        assert!(matches!(result, Err(DocumentError::MissingRoot)));
    }

    #[test]
    fn test_parse_trims_root_and_bom() {
        let document = Document::parse("\u{feff}  project  \r\n└── a.txt\r\n", SEPARATOR).unwrap();

        assert_eq!(document.root, "project");
        assert_eq!(document.tree_lines, vec!["└── a.txt"]);
        assert!(document.content_lines.is_empty());
    }

    #[test]
    fn test_split_sections_separator_starts_contents() {
        let lines = vec!["├── a", "└── b.txt", SEPARATOR, "b.txt", "body", SEPARATOR];

        let (tree, contents) = split_sections(&lines, SEPARATOR);

        assert_eq!(tree, vec!["├── a", "└── b.txt"]);
        assert_eq!(contents, vec![SEPARATOR, "b.txt", "body", SEPARATOR]);
    }

    #[test]
    fn test_split_sections_matches_separator_as_substring() {
        let padded = format!("  {}---", SEPARATOR);
        let lines = vec!["└── a", padded.as_str(), "a.txt"];

        let (tree, contents) = split_sections(&lines, SEPARATOR);

        assert_eq!(tree, vec!["└── a"]);
        assert_eq!(contents.len(), 2);
    }

    #[test]
    fn test_split_sections_without_separator() {
        let lines = vec!["├── a", "--- too short ---"];

        let (tree, contents) = split_sections(&lines, SEPARATOR);

        assert_eq!(tree.len(), 2);
        assert!(contents.is_empty());
    }
}
