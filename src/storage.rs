//! Persistence for aggregated outcome tables
//!
//! A season of raw pitches is expensive to re-aggregate, so the table is
//! saved once and reloaded per session. Two formats: JSON for inspectable
//! artifacts, MessagePack for compact ones. The format is picked off the
//! file extension.

use std::{fs::File, path::Path};

use crate::{
    error::{Error, Result},
    statcast::OutcomeTable,
};

/// Storage backend for [`OutcomeTable`] artifacts.
pub trait TableStore {
    fn save(&self, table: &OutcomeTable, path: &Path) -> Result<()>;
    fn load(&self, path: &Path) -> Result<OutcomeTable>;
}

/// Human-readable JSON storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTableStore;

impl TableStore for JsonTableStore {
    fn save(&self, table: &OutcomeTable, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, table)?;
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<OutcomeTable> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_reader(file)?)
    }
}

/// Compact MessagePack storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackTableStore;

impl TableStore for MsgPackTableStore {
    fn save(&self, table: &OutcomeTable, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {}", path.display()),
            source,
        })?;
        rmp_serde::encode::write(&mut file, table).map_err(|e| Error::SerializationContext {
            operation: format!("serialize outcome table to {}", path.display()),
            message: e.to_string(),
        })?;
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<OutcomeTable> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {}", path.display()),
            source,
        })?;
        rmp_serde::decode::from_read(file).map_err(|e| Error::SerializationContext {
            operation: format!("deserialize outcome table from {}", path.display()),
            message: e.to_string(),
        })
    }
}

/// Pick a store from the path's extension (`.json`, `.msgpack`/`.mpk`).
///
/// # Errors
///
/// Returns [`Error::UnknownTableFormat`] for any other extension.
pub fn store_for_path(path: &Path) -> Result<Box<dyn TableStore>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(Box::new(JsonTableStore)),
        Some("msgpack" | "mpk") => Ok(Box::new(MsgPackTableStore)),
        _ => Err(Error::UnknownTableFormat {
            path: path.display().to_string(),
        }),
    }
}
