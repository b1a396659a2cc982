// src/db.rs
// Read-only access to a SQLite copy of the mainbot database.

use crate::errors::{DatabaseError, Result};
use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, Value, ValueRef};
use rusqlite::{Connection, OpenFlags, Row};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Opens the database so that no statement issued through it can modify data.
pub fn open_read_only(db_path: &Path) -> Result<Connection> {
    if !db_path.is_file() {
        return Err(DatabaseError::Connection(format!(
            "Database file not found: {}",
            db_path.display()
        )));
    }
    let conn = Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| {
        DatabaseError::Connection(format!("Failed to open database at '{}': {}", db_path.display(), e))
    })?;
    conn.pragma_update(None, "query_only", true)?;
    info!("Opened mainbot database read-only: {}", db_path.display());
    Ok(conn)
}

/// Wrapper for `DECIMAL` columns. SQLite may hand them back as integer,
/// real or text depending on how the row was written.
pub struct SqlDecimal(pub Decimal);

impl FromSql for SqlDecimal {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let parsed = match value {
            ValueRef::Integer(i) => Some(Decimal::from(i)),
            ValueRef::Real(f) => Decimal::from_f64(f),
            ValueRef::Text(bytes) => std::str::from_utf8(bytes)
                .ok()
                .and_then(|s| Decimal::from_str(s.trim()).ok()),
            _ => return Err(FromSqlError::InvalidType),
        };
        parsed.map(SqlDecimal).ok_or(FromSqlError::InvalidType)
    }
}

pub fn get_decimal(row: &Row<'_>, column: &str) -> rusqlite::Result<Decimal> {
    row.get::<_, SqlDecimal>(column).map(|d| d.0)
}

pub fn get_opt_decimal(row: &Row<'_>, column: &str) -> rusqlite::Result<Option<Decimal>> {
    row.get::<_, Option<SqlDecimal>>(column).map(|d| d.map(|d| d.0))
}

/// Timestamps without a zone offset are taken to be UTC.
pub fn get_opt_timestamp(row: &Row<'_>, column: &str) -> rusqlite::Result<Option<DateTime<Utc>>> {
    row.get::<_, Option<DateTime<Utc>>>(column)
}

/// JSON columns. Unparseable text is kept as a JSON string rather than failing the row.
pub fn get_opt_json(row: &Row<'_>, column: &str) -> rusqlite::Result<Option<serde_json::Value>> {
    let raw: Value = row.get(column)?;
    Ok(match raw {
        Value::Null => None,
        Value::Text(text) => {
            Some(serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text)))
        }
        Value::Integer(i) => Some(serde_json::Value::from(i)),
        Value::Real(f) => Some(serde_json::Value::from(f)),
        Value::Blob(bytes) => serde_json::from_slice(&bytes).ok(),
    })
}
