//! Serialized document config.
//!
//! The exported shape is
//!
//! ```text
//! { "type", "slug", "name", "path", "config": { "fields": { <id>: <definition>, ... } } }
//! ```
//!
//! where the key order of `config.fields` is the Order Sequence. `IndexMap`
//! preserves that order through serde in both directions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::document::{Document, DocumentMeta};
use crate::error::{FieldsError, Result};
use crate::invariants::verify;
use crate::types::{FieldDefinition, FieldId, ListItems, OrderEntry};

/// Ordered projection of a document, ready for encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedDocument {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub config: SerializedConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SerializedConfig {
    #[serde(default)]
    pub fields: IndexMap<FieldId, FieldDefinition>,
}

/// Project `doc` into its exported form.
pub fn serialize(doc: &Document) -> SerializedDocument {
    SerializedDocument {
        meta: doc.meta.clone(),
        config: SerializedConfig {
            fields: doc
                .order
                .iter()
                .filter_map(|entry| {
                    doc.fields
                        .get(entry.id())
                        .map(|def| (entry.id().clone(), def.clone()))
                })
                .collect(),
        },
    }
}

/// Two-space indented JSON of the exported form.
pub fn to_json_pretty(doc: &Document) -> Result<String> {
    Ok(serde_json::to_string_pretty(&serialize(doc))?)
}

/// Single-line JSON of the exported form.
pub fn to_json(doc: &Document) -> Result<String> {
    Ok(serde_json::to_string(&serialize(doc))?)
}

/// Rebuild a document from its exported form.
///
/// The Order Sequence follows the key order of `config.fields`; list fields
/// get an empty sub-registry entry.
pub fn parse(serialized: SerializedDocument) -> Result<Document> {
    let mut doc = Document::new(serialized.meta);

    for (id, mut def) in serialized.config.fields {
        if id.is_empty() {
            return Err(FieldsError::invalid_document("field identifier is empty"));
        }
        if def.kind.is_list() {
            def.sub_fields.get_or_insert_with(IndexMap::new);
            doc.list_registry.insert(id.clone(), ListItems::new());
        } else if def.sub_fields.is_some() {
            return Err(FieldsError::invalid_document(format!(
                "field '{id}' of type {} cannot have nested fields",
                def.kind
            )));
        }
        doc.order.push(OrderEntry::for_kind(def.kind, id.clone()));
        doc.fields.insert(id, def);
    }

    verify(&doc)?;
    Ok(doc)
}

/// Parse a JSON document config.
pub fn from_json(json: &str) -> Result<Document> {
    parse(serde_json::from_str(json)?)
}
