//! Dynamic values accepted by the row generators.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use super::directive::FieldDirective;

/// A cell value or a whole row source.
///
/// Generators inspect the variant once at entry and dispatch on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Missing value; rendered as `&nbsp;`.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Seq(Vec<Value>),
    Record(Record),
    Map(Mapping),
}

impl Value {
    /// Human-readable name of the variant, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "integer",
            Self::UInt(_) => "unsigned integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Seq(_) => "sequence",
            Self::Record(_) => "record",
            Self::Map(_) => "mapping",
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Self::Seq(values) => Some(values),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&Mapping> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Seq(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
            Self::Record(record) => write!(f, "{record}"),
            Self::Map(map) => write!(f, "{map}"),
        }
    }
}

/// Schema of a record type: its name and fields in declaration order.
///
/// ```
/// use quill_markup::{FieldDirective, RecordSchema};
///
/// let schema = RecordSchema::new("Order")
///     .field("Id", FieldDirective::default().with_header("No."))
///     .annotated("Total", "DataClass='num'")
///     .plain("internal_note");
/// assert_eq!(schema.fields().len(), 3);
/// assert!(!schema.fields()[2].is_exported());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSchema {
    name: String,
    fields: Vec<FieldDef>,
}

impl RecordSchema {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field with an explicit directive.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, directive: FieldDirective) -> Self {
        self.fields.push(FieldDef {
            name: name.into(),
            directive,
        });
        self
    }

    /// Add a field whose directive is parsed from an annotation string.
    #[must_use]
    pub fn annotated(self, name: impl Into<String>, annotation: &str) -> Self {
        self.field(name, FieldDirective::parse(annotation))
    }

    /// Add a field without directives.
    #[must_use]
    pub fn plain(self, name: impl Into<String>) -> Self {
        self.field(name, FieldDirective::default())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Fields that appear in rendered rows, with their positions.
    pub(crate) fn rendered_fields(&self) -> impl Iterator<Item = (usize, &FieldDef)> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.is_rendered())
    }
}

/// A declared record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    name: String,
    directive: FieldDirective,
}

impl FieldDef {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn directive(&self) -> &FieldDirective {
        &self.directive
    }

    /// Whether the name starts with an upper-case ASCII letter.
    ///
    /// Only exported fields are rendered.
    #[must_use]
    pub fn is_exported(&self) -> bool {
        self.name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_uppercase())
    }

    /// Whether the field shows up in header and data rows.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.is_exported() && !self.directive.skip
    }

    /// Header cell text: the directive override or the field name.
    #[must_use]
    pub fn header_text(&self) -> &str {
        self.directive.header.as_deref().unwrap_or(&self.name)
    }
}

/// A record value: a schema plus one value per field.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: Arc<RecordSchema>,
    values: Vec<Value>,
}

impl Record {
    /// Create a record. Missing trailing values are filled with
    /// [`Value::Null`]; surplus values are dropped.
    #[must_use]
    pub fn new(schema: Arc<RecordSchema>, mut values: Vec<Value>) -> Self {
        values.resize(schema.fields.len(), Value::Null);
        Self { schema, values }
    }

    #[must_use]
    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Value of the field called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schema
            .fields
            .iter()
            .position(|field| field.name == name)
            .map(|index| &self.values[index])
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (field, value)) in self.schema.fields.iter().zip(&self.values).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {value}", field.name)?;
        }
        f.write_str("}")
    }
}

/// Insertion-ordered mapping with [`Value`] keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    entries: Vec<(Value, Value)>,
}

impl Mapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the value under `key`.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// A Rust type that renders as a record.
///
/// ```
/// use std::sync::{Arc, LazyLock};
///
/// use quill_markup::{RecordSchema, Tabular, Value};
///
/// struct City {
///     name: String,
///     population: u64,
/// }
///
/// static CITY: LazyLock<Arc<RecordSchema>> = LazyLock::new(|| {
///     Arc::new(
///         RecordSchema::new("City")
///             .plain("Name")
///             .annotated("Population", "DataClass='num'"),
///     )
/// });
///
/// impl Tabular for City {
///     fn schema() -> Arc<RecordSchema> {
///         Arc::clone(&CITY)
///     }
///
///     fn values(&self) -> Vec<Value> {
///         vec![self.name.as_str().into(), self.population.into()]
///     }
/// }
///
/// let city = City { name: "Oslo".to_owned(), population: 709_000 };
/// assert_eq!(city.to_record().get("Name"), Some(&Value::from("Oslo")));
/// ```
pub trait Tabular {
    /// Schema shared by all values of this type.
    fn schema() -> Arc<RecordSchema>;

    /// Field values in schema order.
    fn values(&self) -> Vec<Value>;

    #[must_use]
    fn to_record(&self) -> Record {
        Record::new(Self::schema(), self.values())
    }

    #[must_use]
    fn to_value(&self) -> Value {
        Value::Record(self.to_record())
    }
}

/// Collect [`Tabular`] items into a sequence of records.
#[must_use]
pub fn records<'a, T: Tabular + 'a>(items: impl IntoIterator<Item = &'a T>) -> Value {
    Value::Seq(items.into_iter().map(Tabular::to_value).collect())
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Self::Int(i64::from(v))
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Self::UInt(u64::from(v))
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Self::Int(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::UInt(v as u64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Self::Record(v)
    }
}

impl From<Mapping> for Value {
    fn from(v: Mapping) -> Self {
        Self::Map(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(v: HashMap<K, V, S>) -> Self {
        Self::Map(v.into_iter().collect())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(v: BTreeMap<K, V>) -> Self {
        Self::Map(v.into_iter().collect())
    }
}
