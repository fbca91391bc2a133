//! Programmatic markup document builder.
//!
//! Documents are assembled through a stateful [`Document`] instead of
//! template files. The builder appends text to a buffer, remembers which tags
//! are still open so they can be closed automatically, and renders in-memory
//! data (mappings, sequences, records) into table rows.
//!
//! # Architecture
//!
//! - [`render_tag`] and [`encode_attributes`]: stateless tag rendering.
//! - [`Document`]: append-only buffer plus open-tag stack, with a
//!   [`NewlineMode`] policy and a single-slot `when`/`otherwise`/`end_when`
//!   gate through which every append passes.
//! - Row generators (`tr_th`, `tr_td_record`, `tr_td_map`, `tr_td_seq`,
//!   `tr_td_cursor`, ...): turn [`Value`]s and [`ResultCursor`]s into `<tr>`
//!   rows, honoring per-field [`FieldDirective`]s.
//!
//! Nothing is escaped implicitly; use [`escape_html`] on untrusted text.
//!
//! # Example
//!
//! ```
//! use quill_markup::{Document, NewlineMode, Value, cmp_asc, doctype};
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<(), quill_markup::MarkupError> {
//! let stock: HashMap<&str, u32> = [("pears", 3), ("apples", 12)].into();
//!
//! let mut doc = Document::new(doctype::HTML5, NewlineMode::NONE);
//! doc.html_open(&[])
//!     .head_open(&[])
//!     .title("Stock", &[])
//!     .close_until("head")
//!     .body_open(&[])
//!     .table_open(&["class", "stock"])
//!     .tr_th("", "", &[Value::from("Fruit"), Value::from("Count")])
//!     .tr_td_map("", "", Some(cmp_asc), &Value::from(stock))?
//!     .close_all();
//!
//! assert!(doc.as_str().ends_with(
//!     "<tr><td>apples</td><td>12</td></tr><tr><td>pears</td><td>3</td></tr></table></body></html>"
//! ));
//! # Ok(())
//! # }
//! ```

mod attrs;
pub mod doctype;
mod document;
mod elements;
mod error;
pub mod form;
mod gate;
mod newline;
mod table;
pub mod tag;

pub use attrs::{encode_attributes, escape_html, push_attribute};
pub use document::Document;
pub use elements::a;
pub use error::{BoxError, MarkupError};
pub use newline::{NEWLINE, NewlineMode};
pub use table::{
    CompareFn, CursorError, FieldDef, FieldDirective, Mapping, MemoryCursor, PLACEHOLDER, Record,
    RecordSchema, ResultCursor, Tabular, Value, cmp_asc, cmp_desc, records,
};
pub use tag::{render_tag, render_tagf};

/// Build a `Vec<Value>` from heterogeneous expressions.
///
/// ```
/// use quill_markup::{Value, values};
///
/// let row = values![1, "two", 3.5, None::<i32>];
/// assert_eq!(row[1], Value::Text("two".to_owned()));
/// assert_eq!(row[3], Value::Null);
/// ```
#[macro_export]
macro_rules! values {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::Value::from($value)),*]
    };
}
