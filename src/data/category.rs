use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Error;

/// The object-type sections a data file can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Items,
    Enemies,
    Npcs,
    Entities,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Items,
        Category::Enemies,
        Category::Npcs,
        Category::Entities,
    ];

    /// Top-level key of this category's table inside a data file.
    pub fn key(self) -> &'static str {
        match self {
            Category::Items => "items",
            Category::Enemies => "enemies",
            Category::Npcs => "NPCs",
            Category::Entities => "entities",
        }
    }

    /// Default file stem used when no explicit path is configured.
    pub fn file_stem(self) -> &'static str {
        match self {
            Category::Items => "items",
            Category::Enemies => "enemies",
            Category::Npcs => "npcs",
            Category::Entities => "entities",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "item" | "items" => Ok(Category::Items),
            "enemy" | "enemies" => Ok(Category::Enemies),
            "npc" | "npcs" => Ok(Category::Npcs),
            "entity" | "entities" => Ok(Category::Entities),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}
