mod category;
mod error;
mod format;
mod loader;

pub use category::Category;
pub use error::{Error, Result};
pub use format::DataFormat;
pub use loader::{
    DataLoadable, Record, decode_record, lookup_in, parse_document, read_document, take_record,
};
