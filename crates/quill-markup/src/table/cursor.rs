//! Query result cursors as a row source.

use super::value::Value;
use crate::document::Document;
use crate::error::MarkupError;

/// A forward-only cursor over a tabular query result.
///
/// Mirrors the usual database driver protocol: read column names, advance to
/// the next row, then scan the current row into one slot per column.
pub trait ResultCursor {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Column names in result order.
    fn columns(&self) -> Result<Vec<String>, Self::Error>;

    /// Advance to the next row; `false` once the cursor is exhausted.
    fn next_row(&mut self) -> bool;

    /// Copy the current row into `slots`, one slot per column.
    fn scan(&self, slots: &mut [Value]) -> Result<(), Self::Error>;
}

/// Errors reported by [`MemoryCursor`].
#[derive(Debug, thiserror::Error)]
pub enum CursorError {
    #[error("expected {expected} slots, got {found}")]
    SlotCount { expected: usize, found: usize },

    #[error("no current row; call next_row() first")]
    NoCurrentRow,
}

/// Cursor over rows held in memory.
///
/// ```
/// use quill_markup::{Document, MemoryCursor, NewlineMode, values};
///
/// # fn main() -> Result<(), quill_markup::MarkupError> {
/// let mut cursor = MemoryCursor::new(["id", "name"], vec![values![1, "Ada"]]);
/// let mut doc = Document::new("", NewlineMode::NONE);
/// doc.tr_th_cursor("", "", &cursor)?.tr_td_cursor("", "", &mut cursor)?;
/// assert_eq!(
///     doc.as_str(),
///     "<tr><th>id</th><th>name</th></tr><tr><td>1</td><td>Ada</td></tr>"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MemoryCursor {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    position: Option<usize>,
}

impl MemoryCursor {
    #[must_use]
    pub fn new<I, S>(columns: I, rows: Vec<Vec<Value>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows,
            position: None,
        }
    }
}

impl ResultCursor for MemoryCursor {
    type Error = CursorError;

    fn columns(&self) -> Result<Vec<String>, CursorError> {
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

    fn scan(&self, slots: &mut [Value]) -> Result<(), CursorError> {
        let row = self
            .position
            .and_then(|p| self.rows.get(p))
            .ok_or(CursorError::NoCurrentRow)?;
        if row.len() != slots.len() {
            return Err(CursorError::SlotCount {
                expected: row.len(),
                found: slots.len(),
            });
        }
        slots.clone_from_slice(row);
        Ok(())
    }
}

impl Document {
    /// Header row from the cursor's column names.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::CursorColumns`] if the columns cannot be read.
    pub fn tr_th_cursor<C: ResultCursor>(
        &mut self,
        tr_class: &str,
        th_class: &str,
        cursor: &C,
    ) -> Result<&mut Self, MarkupError> {
        let columns = cursor
            .columns()
            .map_err(|e| MarkupError::CursorColumns(Box::new(e)))?;
        let headers: Vec<Value> = columns.into_iter().map(Value::Text).collect();
        Ok(self.tr_th(tr_class, th_class, &headers))
    }

    /// One data row per remaining cursor row. Exhausts the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::CursorColumns`] or [`MarkupError::CursorScan`]
    /// when the cursor fails; rows rendered before the failure stay in the
    /// document.
    pub fn tr_td_cursor<C: ResultCursor>(
        &mut self,
        tr_class: &str,
        td_class: &str,
        cursor: &mut C,
    ) -> Result<&mut Self, MarkupError> {
        let columns = cursor
            .columns()
            .map_err(|e| MarkupError::CursorColumns(Box::new(e)))?;
        let mut slots = vec![Value::Null; columns.len()];
        let mut rows = 0;
        while cursor.next_row() {
            cursor
                .scan(&mut slots)
                .map_err(|e| MarkupError::CursorScan {
                    row: rows,
                    source: Box::new(e),
                })?;
            self.tr_td(tr_class, td_class, &slots);
            rows += 1;
        }
        tracing::debug!(rows, columns = columns.len(), "Rendered cursor rows");
        Ok(self)
    }
}
