use crate::libs::data_storage::DataStorage;
use rusqlite::Connection;
use std::io;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "taskboard.db";

/// An open SQLite connection to the taskboard database.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the default data directory.
    pub fn new() -> anyhow::Result<Db> {
        let db_file_path = Self::default_path()?;
        Ok(Self::open(db_file_path)?)
    }

    pub fn open(path: impl AsRef<Path>) -> rusqlite::Result<Db> {
        let conn = Connection::open(path)?;
        Ok(Db { conn })
    }

    pub fn in_memory() -> rusqlite::Result<Db> {
        let conn = Connection::open_in_memory()?;
        Ok(Db { conn })
    }

    pub fn default_path() -> io::Result<PathBuf> {
        DataStorage::new().get_path(DB_FILE_NAME)
    }
}
