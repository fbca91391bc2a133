//! SQLite query results as a Quill row source.
//!
//! [`SqliteCursor`] runs a query through `sqlx` and exposes the result as a
//! [`ResultCursor`], so it can feed
//! [`Document::tr_th_cursor`](quill_markup::Document::tr_th_cursor) and
//! [`Document::tr_td_cursor`](quill_markup::Document::tr_td_cursor).
//!
//! Rows are fetched eagerly; the cursor then walks them synchronously while
//! the document is built.

use std::path::Path;

use quill_markup::{ResultCursor, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{Column, Decode, Executor, Row, Sqlite, Statement, TypeInfo, ValueRef};

/// Error type for database cursors.
#[derive(Debug, thiserror::Error)]
pub enum SqlError {
    /// Error reported by the database driver.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    /// `scan` was given the wrong number of slots.
    #[error("expected {expected} slots, got {found}")]
    SlotCount { expected: usize, found: usize },
    /// `scan` was called before `next_row` or after exhaustion.
    #[error("no current row")]
    NoCurrentRow,
}

/// Open an existing SQLite database file read-only.
///
/// # Errors
///
/// Returns [`SqlError::Database`] if the file cannot be opened.
pub async fn open_read_only(path: &Path) -> Result<SqlitePool, SqlError> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .read_only(true)
        .create_if_missing(false);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    tracing::debug!(path = %path.display(), "Opened database");
    Ok(pool)
}

/// A fetched query result.
pub struct SqliteCursor {
    columns: Vec<String>,
    rows: Vec<SqliteRow>,
    position: Option<usize>,
}

impl std::fmt::Debug for SqliteCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteCursor")
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("position", &self.position)
            .finish()
    }
}

impl SqliteCursor {
    /// Run `sql` and fetch all rows.
    ///
    /// Column names come from the prepared statement, so they are available
    /// even when the query returns no rows.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::Database`] if the query cannot be prepared or run.
    pub async fn query(pool: &SqlitePool, sql: &str) -> Result<Self, SqlError> {
        let statement = pool.prepare(sql).await?;
        let columns = statement
            .columns()
            .iter()
            .map(|column| column.name().to_owned())
            .collect::<Vec<_>>();
        let rows = sqlx::query(sql).fetch_all(pool).await?;
        tracing::debug!(columns = columns.len(), rows = rows.len(), "Fetched query result");
        Ok(Self {
            columns,
            rows,
            position: None,
        })
    }

    /// Number of fetched rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ResultCursor for SqliteCursor {
    type Error = SqlError;

    fn columns(&self) -> Result<Vec<String>, SqlError> {
        Ok(self.columns.clone())
    }

    fn next_row(&mut self) -> bool {
        let next = self.position.map_or(0, |p| p + 1);
        if next < self.rows.len() {
            self.position = Some(next);
            true
        } else {
            self.position = Some(self.rows.len());
            false
        }
    }

    fn scan(&self, slots: &mut [Value]) -> Result<(), SqlError> {
        let row = self
            .position
            .and_then(|p| self.rows.get(p))
            .ok_or(SqlError::NoCurrentRow)?;
        if slots.len() != row.len() {
            return Err(SqlError::SlotCount {
                expected: row.len(),
                found: slots.len(),
            });
        }
        for (index, slot) in slots.iter_mut().enumerate() {
            *slot = decode_column(row, index)?;
        }
        Ok(())
    }
}

/// Decode one column by its runtime storage class.
fn decode_column(row: &SqliteRow, index: usize) -> Result<Value, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let type_name = raw.type_info().name().to_owned();
    let decoded = match type_name.as_str() {
        "INTEGER" | "INT8" | "BIGINT" => <i64 as Decode<'_, Sqlite>>::decode(raw).map(Value::Int),
        "BOOLEAN" => <bool as Decode<'_, Sqlite>>::decode(raw).map(Value::Bool),
        "REAL" => <f64 as Decode<'_, Sqlite>>::decode(raw).map(Value::Float),
        "BLOB" => <Vec<u8> as Decode<'_, Sqlite>>::decode(raw)
            .map(|bytes| Value::Text(String::from_utf8_lossy(&bytes).into_owned())),
        _ => <String as Decode<'_, Sqlite>>::decode(raw).map(Value::Text),
    };
    decoded.map_err(|source| sqlx::Error::ColumnDecode {
        index: index.to_string(),
        source,
    })
}
