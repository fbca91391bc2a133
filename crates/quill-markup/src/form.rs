//! Form controls.
//!
//! Each control exists as a [`Document`] method and as a free function
//! returning the tag string, for embedding in table cells or other content.

use crate::attrs::{as_strs, optional_attributes};
use crate::document::Document;
use crate::error::MarkupError;
use crate::table::{CompareFn, Value};
use crate::tag::render_tag;

fn hidden_field_attrs(name: &str, value: &str, attrs: &[&str]) -> Vec<String> {
    let mut all: Vec<String> = ["type", "hidden", "name", name, "value", value]
        .into_iter()
        .map(str::to_owned)
        .collect();
    all.extend(attrs.iter().map(|token| (*token).to_owned()));
    all
}

fn text_field_attrs(name: &str, size: &str, max_length: &str, value: &str, attrs: &[&str]) -> Vec<String> {
    optional_attributes(
        &[
            ("type", "text"),
            ("name", name),
            ("size", size),
            ("maxlength", max_length),
            ("value", value),
        ],
        attrs,
    )
}

fn bool_field_attrs(name: &str, checked: bool, attrs: &[&str]) -> Vec<String> {
    let checked = if checked { "checked" } else { "" };
    optional_attributes(
        &[("type", "checkbox"), ("name", name), ("checked", checked)],
        attrs,
    )
}

fn submit_button_attrs(name: &str, value: &str, attrs: &[&str]) -> Vec<String> {
    optional_attributes(&[("type", "submit"), ("name", name), ("value", value)], attrs)
}

/// `<input type="hidden" ... />`
#[must_use]
pub fn hidden_field(name: &str, value: &str, attrs: &[&str]) -> String {
    render_tag("input", "", &as_strs(&hidden_field_attrs(name, value, attrs)))
}

/// `<input type="text" ... />`; empty `size`, `max_length` and `value` are omitted.
#[must_use]
pub fn text_field(name: &str, size: &str, max_length: &str, value: &str, attrs: &[&str]) -> String {
    let attrs = text_field_attrs(name, size, max_length, value, attrs);
    render_tag("input", "", &as_strs(&attrs))
}

/// `<input type="checkbox" ... />`
#[must_use]
pub fn bool_field(name: &str, checked: bool, attrs: &[&str]) -> String {
    render_tag("input", "", &as_strs(&bool_field_attrs(name, checked, attrs)))
}

/// `<button type="submit" ...>label</button>`
#[must_use]
pub fn submit_button(name: &str, label: &str, value: &str, attrs: &[&str]) -> String {
    render_tag("button", label, &as_strs(&submit_button_attrs(name, value, attrs)))
}

impl Document {
    /// Open `<form>`; empty `action` or `method` are omitted.
    pub fn form_open(&mut self, action: &str, method: &str, attrs: &[&str]) -> &mut Self {
        let attrs = optional_attributes(&[("action", action), ("method", method)], attrs);
        self.open("form", &as_strs(&attrs))
    }

    pub fn hidden_field(&mut self, name: &str, value: &str, attrs: &[&str]) -> &mut Self {
        self.tag("input", "", &as_strs(&hidden_field_attrs(name, value, attrs)))
    }

    pub fn text_field(
        &mut self,
        name: &str,
        size: &str,
        max_length: &str,
        value: &str,
        attrs: &[&str],
    ) -> &mut Self {
        let attrs = text_field_attrs(name, size, max_length, value, attrs);
        self.tag("input", "", &as_strs(&attrs))
    }

    pub fn bool_field(&mut self, name: &str, checked: bool, attrs: &[&str]) -> &mut Self {
        self.tag("input", "", &as_strs(&bool_field_attrs(name, checked, attrs)))
    }

    pub fn submit_button(&mut self, name: &str, label: &str, value: &str, attrs: &[&str]) -> &mut Self {
        self.tag("button", label, &as_strs(&submit_button_attrs(name, value, attrs)))
    }

    /// Drop-down menu built from a mapping of labels to values.
    ///
    /// Each entry becomes `<option value="value">label</option>`; the entry
    /// whose value equals `default_value` is marked `selected`. Labels are
    /// ordered by `compare` when given.
    ///
    /// ```
    /// use quill_markup::{Document, Mapping, NewlineMode, cmp_asc};
    ///
    /// # fn main() -> Result<(), quill_markup::MarkupError> {
    /// let sizes: Mapping = [("Small", "s"), ("Large", "l")].into_iter().collect();
    /// let mut doc = Document::new("", NewlineMode::NONE);
    /// doc.select_menu("size", "", "", "s", Some(cmp_asc), &sizes.into())?;
    /// assert_eq!(
    ///     doc.as_str(),
    ///     r#"<select name="size"><option value="l">Large</option><option value="s" selected>Small</option></select>"#
    /// );
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::NotAMapping`] if `items` is not a mapping.
    pub fn select_menu(
        &mut self,
        field_name: &str,
        menu_class: &str,
        item_class: &str,
        default_value: &str,
        compare: Option<CompareFn>,
        items: &Value,
    ) -> Result<&mut Self, MarkupError> {
        let Value::Map(map) = items else {
            return Err(MarkupError::NotAMapping {
                generator: "select_menu",
                found: items.kind(),
            });
        };
        let mut entries: Vec<(&Value, &Value)> = map.iter().collect();
        if let Some(compare) = compare {
            entries.sort_by(|(a, _), (b, _)| compare(a, b));
        }

        let attrs = optional_attributes(&[("class", menu_class), ("name", field_name)], &[]);
        self.open("select", &as_strs(&attrs));
        for (label, value) in entries {
            let value = value.to_string();
            let mut attrs = optional_attributes(&[("value", value.as_str()), ("class", item_class)], &[]);
            if value == default_value {
                attrs.push("selected".to_owned());
            }
            self.tag("option", &label.to_string(), &as_strs(&attrs));
        }
        Ok(self.close_top())
    }
}
