use indexmap::IndexMap;

use crate::tree::TREE_GLYPHS;

/// File bodies keyed by the header line that introduced them, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentsMap(pub IndexMap<String, String>);
impl ContentsMap {
    /// Body of the first entry whose header ends with `file_name`.
    ///
    /// Two files sharing a basename in different directories both resolve to the first
    /// matching header.
    pub fn lookup(&self, file_name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(header, _)| header.ends_with(file_name))
            .map(|(_, body)| body.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

enum State {
    Idle,
    InBody { header: String, body: Vec<String> },
}

/// A header line is flush, contains a dot and has no tree glyphs.
fn is_header(line: &str) -> bool {
    line.contains('.') && !line.contains(&TREE_GLYPHS[..]) && line.trim() == line
}

fn finish(contents: &mut ContentsMap, header: String, body: Vec<String>) {
    let text = body.join("\n").trim_end().to_string();

    log::debug!("contents for '{}': {} bytes", header, text.len());

    contents.0.insert(header, text);
}

/// Extracts header/body pairs from the contents section of a document.
///
/// Bodies run until the next separator line or the end of input; blank lines inside a
/// body are preserved and trailing whitespace is trimmed. Lines outside of a body that
/// are not headers are ignored.
pub fn extract_contents<S: AsRef<str>>(lines: &[S], separator: &str) -> ContentsMap {
    let mut contents = ContentsMap::default();

    let state = lines.iter().fold(State::Idle, |state, line| {
        let line = line.as_ref();

        match state {
            State::InBody { header, body } if line.contains(separator) => {
                finish(&mut contents, header, body);
                State::Idle
            }
            State::InBody { header, mut body } => {
                body.push(line.to_string());
                State::InBody { header, body }
            }
            State::Idle if !line.contains(separator) && is_header(line) => State::InBody {
                header: line.to_string(),
                body: Vec::new(),
            },
            State::Idle => State::Idle,
        }
    });

    if let State::InBody { header, body } = state {
        finish(&mut contents, header, body);
    }

    contents
}
