//! Row generators.

use super::compare::CompareFn;
use super::value::{Record, RecordSchema, Tabular, Value};
use super::PLACEHOLDER;
use crate::document::Document;
use crate::error::MarkupError;

fn cell_text(value: &Value) -> String {
    if value.is_null() {
        PLACEHOLDER.to_owned()
    } else {
        value.to_string()
    }
}

impl Document {
    /// One header row, one `<th>` per value.
    pub fn tr_th(&mut self, tr_class: &str, th_class: &str, values: &[Value]) -> &mut Self {
        self.row_open(tr_class);
        for value in values {
            self.cell("th", &cell_text(value), th_class, "", "");
        }
        self.close_top()
    }

    /// One data row, one `<td>` per value.
    ///
    /// ```
    /// use quill_markup::{Document, NewlineMode, Value, values};
    ///
    /// let mut doc = Document::new("", NewlineMode::NONE);
    /// doc.tr_td("", "", &values![1, "two", None::<f64>]);
    /// assert_eq!(doc.as_str(), "<tr><td>1</td><td>two</td><td>&nbsp;</td></tr>");
    /// ```
    pub fn tr_td(&mut self, tr_class: &str, td_class: &str, values: &[Value]) -> &mut Self {
        self.row_open(tr_class);
        for value in values {
            self.cell("td", &cell_text(value), td_class, "", "");
        }
        self.close_top()
    }

    /// Header row for a record schema: one `<th>` per rendered field.
    ///
    /// `key_header` adds a leading cell, for tables whose rows come from a
    /// mapping of records.
    pub fn tr_th_record(
        &mut self,
        tr_class: &str,
        th_class: &str,
        key_header: Option<&str>,
        schema: &RecordSchema,
    ) -> &mut Self {
        self.row_open(tr_class);
        if let Some(key) = key_header {
            self.cell("th", key, th_class, "", "");
        }
        for (_, field) in schema.rendered_fields() {
            let header_class = field.directive().header_class.as_deref().unwrap_or("");
            self.cell("th", field.header_text(), th_class, header_class, "");
        }
        self.close_top()
    }

    /// Data row for a record value: one `<td>` per rendered field.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::NotARecord`] if `value` is not a record.
    pub fn tr_td_record(
        &mut self,
        tr_class: &str,
        td_class: &str,
        key: Option<&str>,
        value: &Value,
    ) -> Result<&mut Self, MarkupError> {
        let Value::Record(record) = value else {
            return Err(MarkupError::NotARecord {
                generator: "tr_td_record",
                found: value.kind(),
            });
        };
        Ok(self.record_row(tr_class, td_class, key, record))
    }

    /// Header row for a [`Tabular`] type.
    pub fn tr_th_tabular<T: Tabular>(
        &mut self,
        tr_class: &str,
        th_class: &str,
        key_header: Option<&str>,
    ) -> &mut Self {
        self.tr_th_record(tr_class, th_class, key_header, &T::schema())
    }

    /// Data row for a [`Tabular`] value.
    pub fn tr_td_tabular<T: Tabular>(&mut self, tr_class: &str, td_class: &str, item: &T) -> &mut Self {
        self.record_row(tr_class, td_class, None, &item.to_record())
    }

    fn record_row(
        &mut self,
        tr_class: &str,
        td_class: &str,
        key: Option<&str>,
        record: &Record,
    ) -> &mut Self {
        self.row_open(tr_class);
        if let Some(key) = key {
            self.cell("td", key, td_class, "", "");
        }
        for (index, field) in record.schema().rendered_fields() {
            let directive = field.directive();
            self.cell(
                "td",
                &cell_text(&record.values()[index]),
                td_class,
                directive.data_class.as_deref().unwrap_or(""),
                directive.style.as_deref().unwrap_or(""),
            );
        }
        self.close_top()
    }

    /// One row per mapping entry, keys sorted by `compare` when given.
    ///
    /// The entry value decides the layout: a record becomes a record row with
    /// the key in front, a sequence becomes the key followed by its elements,
    /// anything else becomes a two-cell row.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::NotAMapping`] if `value` is not a mapping.
    pub fn tr_td_map(
        &mut self,
        tr_class: &str,
        td_class: &str,
        compare: Option<CompareFn>,
        value: &Value,
    ) -> Result<&mut Self, MarkupError> {
        let Value::Map(map) = value else {
            return Err(MarkupError::NotAMapping {
                generator: "tr_td_map",
                found: value.kind(),
            });
        };
        let mut entries: Vec<(&Value, &Value)> = map.iter().collect();
        if let Some(compare) = compare {
            entries.sort_by(|(a, _), (b, _)| compare(a, b));
        }
        for (key, entry) in entries {
            let key = key.to_string();
            match entry {
                Value::Record(record) => {
                    self.record_row(tr_class, td_class, Some(&key), record);
                }
                Value::Seq(values) => {
                    let mut row = Vec::with_capacity(values.len() + 1);
                    row.push(Value::Text(key));
                    row.extend(values.iter().cloned());
                    self.tr_td(tr_class, td_class, &row);
                }
                scalar => {
                    self.row_open(tr_class)
                        .cell("td", &key, td_class, "", "")
                        .cell("td", &cell_text(scalar), td_class, "", "")
                        .close_top();
                }
            }
        }
        Ok(self)
    }

    /// Rows from a sequence.
    ///
    /// The first element decides the layout: a sequence of records yields
    /// one row per record (null elements are skipped), a sequence of
    /// sequences is expanded recursively, and a sequence of scalars is a
    /// single row. An empty sequence produces no rows.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::NotASequence`] if `value` is not a sequence, or
    /// [`MarkupError::NotARecord`] / [`MarkupError::NotASequence`] if a later
    /// element does not match the shape of the first. Shapes are checked
    /// before any row is written, so on error the document is unchanged.
    pub fn tr_td_seq(
        &mut self,
        tr_class: &str,
        td_class: &str,
        value: &Value,
    ) -> Result<&mut Self, MarkupError> {
        let Value::Seq(rows) = value else {
            return Err(MarkupError::NotASequence {
                generator: "tr_td_seq",
                found: value.kind(),
            });
        };
        check_seq_shape(rows)?;
        self.seq_rows(tr_class, td_class, rows);
        Ok(self)
    }

    /// Render a sequence already accepted by [`check_seq_shape`].
    fn seq_rows(&mut self, tr_class: &str, td_class: &str, rows: &[Value]) {
        match rows.first() {
            None => {
                tracing::warn!("Sequence has no elements, no rows rendered");
            }
            Some(Value::Record(_)) => {
                for row in rows {
                    if let Value::Record(record) = row {
                        self.record_row(tr_class, td_class, None, record);
                    }
                }
            }
            Some(Value::Seq(_)) => {
                for row in rows {
                    if let Value::Seq(inner) = row {
                        self.seq_rows(tr_class, td_class, inner);
                    }
                }
            }
            Some(_) => {
                self.tr_td(tr_class, td_class, rows);
            }
        }
    }
}

/// Every element must match the shape of the first one; nulls are allowed
/// anywhere. Runs before anything is written, so a rejected sequence leaves
/// the document untouched.
fn check_seq_shape(rows: &[Value]) -> Result<(), MarkupError> {
    match rows.first() {
        Some(Value::Record(_)) => {
            for row in rows {
                match row {
                    Value::Record(_) | Value::Null => {}
                    other => {
                        return Err(MarkupError::NotARecord {
                            generator: "tr_td_seq",
                            found: other.kind(),
                        });
                    }
                }
            }
        }
        Some(Value::Seq(_)) => {
            for row in rows {
                match row {
                    Value::Seq(inner) => check_seq_shape(inner)?,
                    Value::Null => {}
                    other => {
                        return Err(MarkupError::NotASequence {
                            generator: "tr_td_seq",
                            found: other.kind(),
                        });
                    }
                }
            }
        }
        _ => {}
    }
    Ok(())
}
