//! Core field types for the registry.
//!
//! All types serialize to/from JSON via serde using the key names of the
//! exported document config: a field definition is `{ "type", "label",
//! "fields"? }` and kinds use their wire names (`string`, `wysiwyg`, ...).

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::FieldsError;

/// Identifier of a field, unique within a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FieldId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FieldId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for FieldId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FieldId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The type of a field. Determines how its value is edited and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    String,
    Text,
    #[serde(rename = "wysiwyg")]
    RichText,
    Url,
    Image,
    /// An ordered collection of nested fields.
    List,
}

impl FieldKind {
    /// Every kind, in the order a field palette offers them.
    pub const ALL: [FieldKind; 6] = [
        FieldKind::String,
        FieldKind::Text,
        FieldKind::RichText,
        FieldKind::Url,
        FieldKind::Image,
        FieldKind::List,
    ];

    /// Name used on the wire and as the prefix of minted identifiers.
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Text => "text",
            FieldKind::RichText => "wysiwyg",
            FieldKind::Url => "url",
            FieldKind::Image => "image",
            FieldKind::List => "list",
        }
    }

    pub const fn is_list(self) -> bool {
        matches!(self, FieldKind::List)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = FieldsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" => Ok(FieldKind::String),
            "text" => Ok(FieldKind::Text),
            "wysiwyg" | "rich-text" | "richtext" | "rich_text" => Ok(FieldKind::RichText),
            "url" => Ok(FieldKind::Url),
            "image" => Ok(FieldKind::Image),
            "list" => Ok(FieldKind::List),
            _ => Err(FieldsError::UnknownKind {
                name: s.to_string(),
            }),
        }
    }
}

/// Label text per locale code, in insertion order.
pub type Labels = IndexMap<String, String>;

/// A field definition: the configuration stored under a field's identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDefinition {
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub label: Labels,
    /// Nested definitions; present (possibly empty) only for list fields.
    #[serde(
        rename = "fields",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_fields: Option<IndexMap<FieldId, FieldDefinition>>,
}

impl FieldDefinition {
    /// A fresh definition with an empty label under `locale`.
    pub fn new(kind: FieldKind, locale: &str) -> Self {
        let mut label = Labels::new();
        label.insert(locale.to_string(), String::new());
        Self {
            kind,
            label,
            sub_fields: kind.is_list().then(IndexMap::new),
        }
    }
}

/// A position in the Order Sequence.
///
/// List fields carry their tag inline so the sequence can be reordered
/// without consulting the field map.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderEntry {
    Field(FieldId),
    List(FieldId),
}

impl OrderEntry {
    /// Entry for a field of `kind`, list-tagged when the kind is a list.
    pub fn for_kind(kind: FieldKind, id: FieldId) -> Self {
        if kind.is_list() {
            OrderEntry::List(id)
        } else {
            OrderEntry::Field(id)
        }
    }

    pub fn id(&self) -> &FieldId {
        match self {
            OrderEntry::Field(id) | OrderEntry::List(id) => id,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, OrderEntry::List(_))
    }

    /// Same tag, different identifier.
    pub fn with_id(&self, id: FieldId) -> Self {
        match self {
            OrderEntry::Field(_) => OrderEntry::Field(id),
            OrderEntry::List(_) => OrderEntry::List(id),
        }
    }
}

/// Nested entries of one list field. Always empty on creation.
pub type ListItems = Vec<OrderEntry>;
