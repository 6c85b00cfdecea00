use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::{Category, DataFormat, Error, Result};
use crate::settings::Settings;

/// A single record pulled out of a data file.
///
/// JSON and TOML documents are both read into this one value type so callers
/// never have to care which encoding a file used.
pub type Record = serde_json::Value;

/////////////////////////
/// DOCUMENT HELPERS  ///
/////////////////////////

/// Parse a whole data document from a string.
pub fn parse_document(contents: &str, format: DataFormat) -> Result<Record> {
    let document = match format {
        DataFormat::Json => serde_json::from_str(contents)?,
        DataFormat::Toml => toml::from_str(contents)?,
    };
    Ok(document)
}

/// Read and parse a whole data file. Nothing is cached; every call hits the disk.
pub fn read_document(path: &Path, format: DataFormat) -> Result<Record> {
    debug!(path = %path.display(), %format, "reading data file");
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&contents, format)
}

/// Pull `document[category][id]` out of a parsed document.
pub fn take_record(document: Record, category: Category, id: u64) -> Result<Record> {
    let Record::Object(mut root) = document else {
        return Err(Error::CategoryNotFound { category });
    };

    let Some(Record::Object(mut records)) = root.remove(category.key()) else {
        return Err(Error::CategoryNotFound { category });
    };

    records
        .remove(&id.to_string())
        .ok_or(Error::RecordNotFound { category, id })
}

/// Low-level access: load `path` in the given format and return one record.
pub fn lookup_in(path: &Path, format: DataFormat, category: Category, id: u64) -> Result<Record> {
    let document = read_document(path, format)?;
    let record = take_record(document, category, id)?;
    debug!(%category, id, "found record");
    Ok(record)
}

/// Decode a record into a caller type, tagging failures with where the record came from.
pub fn decode_record<T: DeserializeOwned>(record: Record, category: Category, id: u64) -> Result<T> {
    serde_json::from_value(record).map_err(|source| Error::Decode {
        category,
        id,
        source,
    })
}

//////////////////////
/// CAPABILITY     ///
//////////////////////

/// Lets a type fetch game data by numeric ID.
///
/// Implementors only say where their data lives; the lookups come for free.
pub trait DataLoadable {
    fn data_settings(&self) -> &Settings;

    fn get_by_id(&self, category: Category, id: u64) -> Result<Record> {
        let settings = self.data_settings();
        let format = settings.format_for(category)?;
        lookup_in(&settings.file_for(category), format, category, id)
    }

    fn get_as<T: DeserializeOwned>(&self, category: Category, id: u64) -> Result<T>
    where
        Self: Sized,
    {
        let record = self.get_by_id(category, id)?;
        decode_record(record, category, id)
    }

    fn get_item_by_id(&self, id: u64) -> Result<Record> {
        self.get_by_id(Category::Items, id)
    }

    fn get_enemy_by_id(&self, id: u64) -> Result<Record> {
        self.get_by_id(Category::Enemies, id)
    }

    fn get_npc_by_id(&self, id: u64) -> Result<Record> {
        self.get_by_id(Category::Npcs, id)
    }

    fn get_entity_by_id(&self, id: u64) -> Result<Record> {
        self.get_by_id(Category::Entities, id)
    }
}

impl DataLoadable for Settings {
    fn data_settings(&self) -> &Settings {
        self
    }
}
