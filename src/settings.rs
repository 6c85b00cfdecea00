//! Where game data lives and how it is encoded.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::data::{self, Category, DataFormat};

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read settings '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Data file configuration.
///
/// Every key is optional. A category without an explicit file falls back to
/// `<data_dir>/<category>.<data_format>`, e.g. `data/enemies.json`.
///
/// `data_format` is kept as written and only checked when a lookup needs it,
/// so an unknown encoding surfaces as [`data::Error::UnsupportedFormat`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data_format: String,
    pub data_dir: PathBuf,
    pub items_file: Option<PathBuf>,
    pub enemies_file: Option<PathBuf>,
    pub npcs_file: Option<PathBuf>,
    pub entities_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            data_format: DataFormat::Json.to_string(),
            data_dir: PathBuf::from("data"),
            items_file: None,
            enemies_file: None,
            npcs_file: None,
            entities_file: None,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading settings");
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn with_format(mut self, format: DataFormat) -> Self {
        self.data_format = format.to_string();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_file(mut self, category: Category, path: impl Into<PathBuf>) -> Self {
        let path = Some(path.into());
        match category {
            Category::Items => self.items_file = path,
            Category::Enemies => self.enemies_file = path,
            Category::Npcs => self.npcs_file = path,
            Category::Entities => self.entities_file = path,
        }
        self
    }

    fn explicit_file(&self, category: Category) -> Option<&PathBuf> {
        match category {
            Category::Items => self.items_file.as_ref(),
            Category::Enemies => self.enemies_file.as_ref(),
            Category::Npcs => self.npcs_file.as_ref(),
            Category::Entities => self.entities_file.as_ref(),
        }
    }

    /// Resolve the file a category is read from.
    pub fn file_for(&self, category: Category) -> PathBuf {
        match self.explicit_file(category) {
            Some(path) => path.clone(),
            None => self.data_dir.join(format!(
                "{}.{}",
                category.file_stem(),
                self.data_format.trim().to_lowercase()
            )),
        }
    }

    /// Resolve the encoding a category is read with.
    ///
    /// An explicit file with an extension is read in the format that extension
    /// names; everything else uses `data_format`.
    pub fn format_for(&self, category: Category) -> data::Result<DataFormat> {
        match self.explicit_file(category) {
            Some(path) if path.extension().is_some() => DataFormat::from_path(path),
            _ => self.data_format.parse(),
        }
    }
}
