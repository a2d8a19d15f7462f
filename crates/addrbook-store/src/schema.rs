//! Layout of a snapshot file. Snapshots are always written from scratch, so there is one
//! schema per format version rather than a chain of upgrades.

use crate::error::{Result, StoreError};
use rusqlite::{Connection, OptionalExtension};

pub const SCHEMA_VERSION: i64 = 1;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the tables in an empty database and stamps it with [`SCHEMA_VERSION`].
pub fn create(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    conn.execute(
        "INSERT INTO addrbook_schema (version) VALUES (?1);",
        [SCHEMA_VERSION],
    )?;
    Ok(())
}

/// Fails unless `conn` is a snapshot written with [`SCHEMA_VERSION`].
pub fn ensure_current(conn: &Connection) -> Result<()> {
    match version(conn)? {
        None => Err(StoreError::Schema(
            "not an address book snapshot".to_string(),
        )),
        Some(SCHEMA_VERSION) => Ok(()),
        Some(found) => Err(StoreError::Schema(format!(
            "snapshot version {found} is not supported (expected {SCHEMA_VERSION})"
        ))),
    }
}

/// Version stamp of a snapshot, `None` when the database has no stamp table or row.
pub fn version(conn: &Connection) -> Result<Option<i64>> {
    let has_table = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'addrbook_schema';",
            [],
            |_| Ok(()),
        )
        .optional()?
        .is_some();
    if !has_table {
        return Ok(None);
    }
    let version = conn
        .query_row("SELECT version FROM addrbook_schema LIMIT 1;", [], |row| {
            row.get::<_, i64>(0)
        })
        .optional()?;
    Ok(version)
}
