//! Per-field rendering directives.
//!
//! A directive is either built declaratively:
//!
//! ```
//! use quill_markup::FieldDirective;
//!
//! let directive = FieldDirective::default()
//!     .with_header("Order No.")
//!     .with_data_class("num");
//! assert_eq!(directive.header.as_deref(), Some("Order No."));
//! ```
//!
//! or parsed once from an annotation string:
//!
//! ```
//! use quill_markup::FieldDirective;
//!
//! let directive = FieldDirective::parse("ColHeader='Order No.' DataClass='num'");
//! assert_eq!(directive.data_class.as_deref(), Some("num"));
//! ```

use std::sync::LazyLock;

use regex::Regex;

static SKIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bskip\b").unwrap());
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bColHeader\s*=\s*'(.*?)'").unwrap());
static HEADER_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bHeaderClass\s*=\s*'(.*?)'").unwrap());
static DATA_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bDataClass\s*=\s*'(.*?)'").unwrap());
static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bStyle\s*=\s*'(.*?)'").unwrap());

/// How a record field is rendered in header and data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDirective {
    /// Header text replacing the field name.
    pub header: Option<String>,
    /// CSS class of the header cell.
    pub header_class: Option<String>,
    /// CSS class of data cells.
    pub data_class: Option<String>,
    /// Inline style of data cells.
    pub style: Option<String>,
    /// Omit the field entirely.
    pub skip: bool,
}

impl FieldDirective {
    /// Parse an annotation such as `ColHeader='Name' HeaderClass='h' DataClass='d' Style='color:red'`.
    ///
    /// Keywords are case-insensitive and may appear in any order; the first
    /// occurrence of each wins and unknown keywords are ignored. A `Skip`
    /// keyword overrides everything else.
    #[must_use]
    pub fn parse(annotation: &str) -> Self {
        if SKIP_RE.is_match(annotation) {
            return Self::skipped();
        }
        Self {
            header: capture(&HEADER_RE, annotation),
            header_class: capture(&HEADER_CLASS_RE, annotation),
            data_class: capture(&DATA_CLASS_RE, annotation),
            style: capture(&STYLE_RE, annotation),
            skip: false,
        }
    }

    /// Directive that omits the field.
    #[must_use]
    pub fn skipped() -> Self {
        Self {
            skip: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    #[must_use]
    pub fn with_header_class(mut self, class: impl Into<String>) -> Self {
        self.header_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn with_data_class(mut self, class: impl Into<String>) -> Self {
        self.data_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}
