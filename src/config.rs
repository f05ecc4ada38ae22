use miette::Diagnostic;
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};
use thiserror::Error;

use crate::{
    document::SEPARATOR,
    errors::{FileOperation, IoError},
    tree::DEFAULT_INDENT_WIDTH,
};

#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("I/O error within config domain")]
    #[diagnostic(code(sprout::config::io))]
    Io(#[from] IoError),

    #[error("Unable to parse toml file at '{path}': {source}")]
    #[diagnostic(code(sprout::config::parse_toml), help("Review toml file"))]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid setting '{key}' in '{path}'")]
    #[diagnostic(
        code(sprout::config::invalid),
        help("`indent_width` must be at least 1 and `separator` must not be empty")
    )]
    Invalid { key: String, path: PathBuf },
}

/// Parsing knobs for structure documents.
///
/// ```toml
/// separator = "------------------------------------"
/// indent_width = 4
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub separator: String,
    pub indent_width: usize,
}
impl Default for Settings {
    fn default() -> Self {
        Self {
            separator: SEPARATOR.to_string(),
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}
impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;

        let settings: Settings = toml::from_str(&content).map_err(|err| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source: err,
        })?;

        let invalid = |key: &str| ConfigError::Invalid {
            key: key.to_string(),
            path: path.to_path_buf(),
        };

        if settings.indent_width == 0 {
            return Err(invalid("indent_width"));
        }

        if settings.separator.is_empty() {
            return Err(invalid("separator"));
        }

        log::debug!("loaded settings from {}: {:?}", path.display(), settings);

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("sprout.toml");
        fs::write(&path, content).unwrap();

        (tmp, path)
    }

    #[test]
    fn test_from_file_partial_uses_defaults() {
        let (_tmp, path) = write_config("indent_width = 2\n");

        let settings = Settings::from_file(&path).unwrap();

        assert_eq!(settings.indent_width, 2);
        assert_eq!(settings.separator, SEPARATOR);
    }

    #[test]
    fn test_from_file_rejects_zero_indent() {
        let (_tmp, path) = write_config("indent_width = 0\n");

        let result = Settings::from_file(&path);

        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_from_file_rejects_unknown_keys() {
        let (_tmp, path) = write_config("indent = 2\n");

        let result = Settings::from_file(&path);

        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let result = Settings::from_file("does/not/exist.toml");

        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
