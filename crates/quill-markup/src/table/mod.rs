//! Table markup: structure wrappers and row generators.
//!
//! The generators turn [`Value`]s into `<tr>` rows:
//!
//! - [`Document::tr_th`] / [`Document::tr_td`]: one row from a list of values.
//! - [`Document::tr_th_record`] / [`Document::tr_td_record`]: one row per record,
//!   one cell per rendered field (see [`FieldDirective`]).
//! - [`Document::tr_td_map`]: one row per mapping entry, keys optionally sorted.
//! - [`Document::tr_td_seq`]: one or more rows from a (nested) sequence.
//! - [`Document::tr_th_cursor`] / [`Document::tr_td_cursor`]: rows from a
//!   [`ResultCursor`].
//!
//! Null values render as [`PLACEHOLDER`].

mod compare;
mod cursor;
mod directive;
mod rows;
mod value;

use std::fmt;

pub use compare::{CompareFn, cmp_asc, cmp_desc};
pub use cursor::{CursorError, MemoryCursor, ResultCursor};
pub use directive::FieldDirective;
pub use value::{FieldDef, Mapping, Record, RecordSchema, Tabular, Value, records};

use crate::attrs::join_classes;
use crate::document::Document;

/// Cell content rendered for null values.
pub const PLACEHOLDER: &str = "&nbsp;";

impl Document {
    pub fn table_open(&mut self, attrs: &[&str]) -> &mut Self {
        self.open("table", attrs)
    }

    pub fn thead_open(&mut self, attrs: &[&str]) -> &mut Self {
        self.open("thead", attrs)
    }

    pub fn tbody_open(&mut self, attrs: &[&str]) -> &mut Self {
        self.open("tbody", attrs)
    }

    pub fn tfoot_open(&mut self, attrs: &[&str]) -> &mut Self {
        self.open("tfoot", attrs)
    }

    pub fn tr_open(&mut self, attrs: &[&str]) -> &mut Self {
        self.open("tr", attrs)
    }

    pub fn th_open(&mut self, attrs: &[&str]) -> &mut Self {
        self.open("th", attrs)
    }

    pub fn td_open(&mut self, attrs: &[&str]) -> &mut Self {
        self.open("td", attrs)
    }

    pub fn caption(&mut self, content: &str, attrs: &[&str]) -> &mut Self {
        self.tag("caption", content, attrs)
    }

    /// Caption with formatted content and optional class.
    pub fn captionf(&mut self, class: &str, args: fmt::Arguments<'_>) -> &mut Self {
        self.tagf("caption", class, args)
    }

    pub fn th(&mut self, content: &str, attrs: &[&str]) -> &mut Self {
        self.tag("th", content, attrs)
    }

    pub fn thf(&mut self, class: &str, args: fmt::Arguments<'_>) -> &mut Self {
        self.tagf("th", class, args)
    }

    pub fn td(&mut self, content: &str, attrs: &[&str]) -> &mut Self {
        self.tag("td", content, attrs)
    }

    pub fn tdf(&mut self, class: &str, args: fmt::Arguments<'_>) -> &mut Self {
        self.tagf("td", class, args)
    }

    /// Open a generated row, with a class when `class` is non-empty.
    pub(crate) fn row_open(&mut self, class: &str) -> &mut Self {
        if class.is_empty() {
            self.tr_open(&[])
        } else {
            self.tr_open(&["class", class])
        }
    }

    /// Append a generated cell.
    ///
    /// `class` is the generator's cell class, `extra_class` and `style` come
    /// from field directives.
    pub(crate) fn cell(
        &mut self,
        name: &str,
        content: &str,
        class: &str,
        extra_class: &str,
        style: &str,
    ) -> &mut Self {
        let class = join_classes(class, extra_class);
        let mut attrs = Vec::with_capacity(4);
        if let Some(class) = class.as_deref() {
            attrs.extend(["class", class]);
        }
        if !style.is_empty() {
            attrs.extend(["style", style]);
        }
        self.tag(name, content, &attrs)
    }
}
