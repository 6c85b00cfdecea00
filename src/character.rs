//! A ready-made entity that opts into every capability: it is built from a
//! data record, levels up, and describes itself.

use serde::Deserialize;

use crate::data::{self, Category, DataLoadable, Record, decode_record};
use crate::describe::{Describable, FieldValue};
use crate::leveling::{Leveling, LevelingConfig, LevelingState};

#[derive(Deserialize)]
struct CharacterRecord {
    name: String,
    #[serde(default)]
    health: i64,
    #[serde(default)]
    attack: i64,
    #[serde(default)]
    defence: i64,
    #[serde(flatten)]
    leveling: LevelingConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: u64,
    pub category: Category,
    pub name: String,
    pub health: i64,
    pub attack: i64,
    pub defence: i64,
    leveling: LevelingState,
}

impl Character {
    pub fn new(
        id: u64,
        category: Category,
        name: impl Into<String>,
        leveling: LevelingConfig,
    ) -> Self {
        Character {
            id,
            category,
            name: name.into(),
            health: 0,
            attack: 0,
            defence: 0,
            leveling: LevelingState::new(leveling),
        }
    }

    /// Build a character from an already loaded record.
    pub fn from_record(category: Category, id: u64, record: Record) -> data::Result<Self> {
        let raw: CharacterRecord = decode_record(record, category, id)?;
        Ok(Self::from_raw(category, id, raw))
    }

    /// Look the record up through `source` and build a character from it.
    pub fn load<S: DataLoadable>(source: &S, category: Category, id: u64) -> data::Result<Self> {
        let raw: CharacterRecord = source.get_as(category, id)?;
        Ok(Self::from_raw(category, id, raw))
    }

    fn from_raw(category: Category, id: u64, raw: CharacterRecord) -> Self {
        Character {
            id,
            category,
            name: raw.name,
            health: raw.health,
            attack: raw.attack,
            defence: raw.defence,
            leveling: LevelingState::new(raw.leveling),
        }
    }
}

impl Leveling for Character {
    fn leveling(&self) -> &LevelingState {
        &self.leveling
    }

    fn leveling_mut(&mut self) -> &mut LevelingState {
        &mut self.leveling
    }
}

impl Describable for Character {
    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        let mut fields = vec![
            ("id", self.id.into()),
            ("name", (&self.name).into()),
            ("health", self.health.into()),
            ("attack", self.attack.into()),
            ("defence", self.defence.into()),
        ];
        fields.extend(self.leveling.fields());
        fields
    }
}
