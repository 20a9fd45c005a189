use rusqlite::Connection;
use std::cell::RefCell;
use std::fs;

use crate::errors::ServerError;

// Thread-local connection slot, remembered together with the file it opened.
thread_local! {
    static DB_CONN: RefCell<Option<(String, Connection)>> = RefCell::new(None);
}

#[derive(Clone)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Provides a mutable connection to the closure.
    ///
    /// Each worker thread opens its own connection on first use. A thread
    /// that switches to a different database file reopens.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ServerError>,
    {
        DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();
                let stale = !matches!(slot.as_ref(), Some((path, _)) if *path == self.path);
                if stale {
                    let conn = open(&self.path)?;
                    *slot = Some((self.path.clone(), conn));
                }
                match slot.as_mut() {
                    Some((_, conn)) => f(conn),
                    None => Err(ServerError::InternalError),
                }
            })
            .map_err(|_| ServerError::InternalError)?
    }
}

fn open(path: &str) -> Result<Connection, ServerError> {
    let conn = Connection::open(path)
        .map_err(|e| ServerError::DbError(format!("Open DB failed: {e}")))?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(|e| ServerError::DbError(format!("Enable foreign keys failed: {e}")))?;
    Ok(conn)
}

/// Initialize database from a SQL schema file
pub fn init_db(db: &Database, schema_path: &str) -> Result<(), ServerError> {
    let schema_sql = fs::read_to_string(schema_path)
        .map_err(|e| ServerError::DbError(format!("Failed to read schema file: {e}")))?;

    db.with_conn(|conn| {
        conn.execute_batch(&schema_sql)
            .map_err(|e| ServerError::DbError(format!("Failed to apply schema: {e}")))?;
        Ok(())
    })?;

    tracing::info!(schema = schema_path, db = db.path(), "database schema applied");
    Ok(())
}

/// Load sample listings when the properties table is empty.
/// Returns how many listings were inserted (0 when data already existed).
pub fn seed_if_empty(db: &Database, seed_path: &str) -> Result<usize, ServerError> {
    let existing: i64 = db.with_conn(|conn| {
        conn.query_row("select count(*) from properties", [], |r| r.get(0))
            .map_err(|e| ServerError::DbError(format!("Count properties failed: {e}")))
    })?;

    if existing > 0 {
        tracing::info!(count = existing, "properties already present, skipping seed");
        return Ok(0);
    }

    let seed_sql = fs::read_to_string(seed_path)
        .map_err(|e| ServerError::DbError(format!("Failed to read seed file: {e}")))?;

    let inserted = db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| ServerError::DbError(format!("begin tx failed: {e}")))?;
        tx.execute_batch(&seed_sql)
            .map_err(|e| ServerError::DbError(format!("Failed to apply seed: {e}")))?;
        let n: i64 = tx
            .query_row("select count(*) from properties", [], |r| r.get(0))
            .map_err(|e| ServerError::DbError(format!("Count properties failed: {e}")))?;
        tx.commit()
            .map_err(|e| ServerError::DbError(format!("commit tx failed: {e}")))?;
        Ok(n as usize)
    })?;

    tracing::info!(count = inserted, seed = seed_path, "seeded sample listings");
    Ok(inserted)
}
