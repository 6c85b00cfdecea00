use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::{Error, Result};

/// Encodings a data file may use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DataFormat {
    #[default]
    Json,
    Toml,
}

impl DataFormat {
    pub fn extension(self) -> &'static str {
        match self {
            DataFormat::Json => "json",
            DataFormat::Toml => "toml",
        }
    }

    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for DataFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(DataFormat::Json),
            "toml" => Ok(DataFormat::Toml),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(
            DataFormat::from_path(Path::new("data/items.toml")).unwrap(),
            DataFormat::Toml
        );
        assert_eq!(
            DataFormat::from_path(Path::new("ENEMIES.JSON")).unwrap(),
            DataFormat::Json
        );
    }

    #[test]
    fn test_unsupported_format() {
        let err = DataFormat::from_path(Path::new("items.yaml")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ref s) if s == "yaml"));
        assert_eq!(
            err.to_string(),
            "missing support for opening files of type: yaml"
        );
    }
}
