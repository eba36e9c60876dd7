use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Runtime type tag of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Null,
    Bool,
    Int32,
    Int64,
    Float64,
    String,
    Timestamp,
}

impl ElementType {
    /// The BSON type id for this element type.
    ///
    /// Included in error messages so failures can be matched up against what
    /// the server reports.
    pub const fn type_id(&self) -> u8 {
        match self {
            Self::Float64 => 0x01,
            Self::String => 0x02,
            Self::Bool => 0x08,
            Self::Timestamp => 0x09,
            Self::Null => 0x0A,
            Self::Int32 => 0x10,
            Self::Int64 => 0x12,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "Null",
            Self::Bool => "Bool",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Float64 => "Float64",
            Self::String => "String",
            Self::Timestamp => "Timestamp",
        };
        write!(f, "{name} (type id = {})", self.type_id())
    }
}

/// A single value read from a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Null,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    String(String),
    /// A UTC instant.
    Timestamp(DateTime<Utc>),
}

impl Element {
    pub const fn element_type(&self) -> ElementType {
        match self {
            Self::Null => ElementType::Null,
            Self::Bool(_) => ElementType::Bool,
            Self::Int32(_) => ElementType::Int32,
            Self::Int64(_) => ElementType::Int64,
            Self::Float64(_) => ElementType::Float64,
            Self::String(_) => ElementType::String,
            Self::Timestamp(_) => ElementType::Timestamp,
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Element::Bool(value)
    }
}

impl From<i32> for Element {
    fn from(value: i32) -> Self {
        Element::Int32(value)
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Int64(value)
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Element::Float64(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::String(value.to_string())
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::String(value)
    }
}

impl From<DateTime<Utc>> for Element {
    fn from(value: DateTime<Utc>) -> Self {
        Element::Timestamp(value)
    }
}

/// A single record from the source.
///
/// Fields keep the order they were inserted in. A field that's missing is
/// distinct from a field that's present with a `Null` element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    fields: IndexMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder style insert.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Element>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a field, returning the previous element for that name if there
    /// was one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Element>) -> Option<Element> {
        self.fields.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Element> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, Element)> for Document {
    fn from_iter<T: IntoIterator<Item = (K, Element)>>(iter: T) -> Self {
        Document {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_vs_null() {
        let doc = Document::new()
            .with_field("a", Element::Null)
            .with_field("b", 4);

        assert_eq!(Some(&Element::Null), doc.get("a"));
        assert_eq!(Some(&Element::Int32(4)), doc.get("b"));
        assert_eq!(None, doc.get("c"));
    }

    #[test]
    fn insertion_order_kept() {
        let doc: Document = [("z", Element::from(1)), ("a", Element::from("x"))]
            .into_iter()
            .collect();

        let names: Vec<_> = doc.iter().map(|(name, _)| name).collect();
        assert_eq!(vec!["z", "a"], names);
    }

    #[test]
    fn insert_replaces() {
        let mut doc = Document::new();
        assert_eq!(None, doc.insert("a", 1));
        assert_eq!(Some(Element::Int32(1)), doc.insert("a", 2i64));
        assert_eq!(1, doc.len());
    }

    #[test]
    fn element_type_display() {
        assert_eq!(ElementType::Int32, Element::Int32(3).element_type());
        assert_eq!("Int32 (type id = 16)", ElementType::Int32.to_string());
        assert!(Element::Null.is_null());
    }
}
