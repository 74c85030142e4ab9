//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open and bring the schema up to date.
    pub fn open_initialized(path: &str) -> AppResult<Self> {
        let pool = Self::new(path)?;
        init_db(&pool.conn)?;
        Ok(pool)
    }
}
