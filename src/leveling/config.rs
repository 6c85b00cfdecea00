use serde::{Deserialize, Serialize};

use crate::data::Record;

pub const DEFAULT_LEVEL: u32 = 1;
pub const DEFAULT_EXPONENT: f64 = 1.6;
pub const DEFAULT_BASE_EXP: i64 = 85;

/// Starting values for a leveling state.
///
/// Deserializes from any map with the keys `level`, `max_level`, `exp`,
/// `exponent` and `base_exp`. Every key is optional and unknown keys are
/// ignored, so a whole enemy or NPC record can be fed in directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelingConfig {
    pub level: u32,
    pub max_level: Option<u32>,
    #[serde(rename = "exp")]
    pub experience: i64,
    pub exponent: f64,
    pub base_exp: i64,
}

impl Default for LevelingConfig {
    fn default() -> Self {
        LevelingConfig {
            level: DEFAULT_LEVEL,
            max_level: None,
            experience: 0,
            exponent: DEFAULT_EXPONENT,
            base_exp: DEFAULT_BASE_EXP,
        }
    }
}

impl LevelingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the leveling keys out of a loaded data record.
    pub fn from_record(record: &Record) -> serde_json::Result<Self> {
        Self::deserialize(record)
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = Some(max_level);
        self
    }

    pub fn with_experience(mut self, experience: i64) -> Self {
        self.experience = experience;
        self
    }

    pub fn with_exponent(mut self, exponent: f64) -> Self {
        self.exponent = exponent;
        self
    }

    pub fn with_base_exp(mut self, base_exp: i64) -> Self {
        self.base_exp = base_exp;
        self
    }
}
