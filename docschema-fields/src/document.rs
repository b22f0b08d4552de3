//! The document value the registry operations transform.
//!
//! A `Document` keeps three structures in lockstep: the Order Sequence
//! (visual order), the Field Map (identifier → definition, iterated in the
//! same order) and the List Sub-Registry (list identifier → nested entries).
//! Everything outside this crate reads it; only operations mutate it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{FieldDefinition, FieldId, ListItems, OrderEntry};

/// Descriptive header of a document config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    #[serde(rename = "type", default)]
    pub document_type: String,
    #[serde(default)]
    pub slug: String,
    #[serde(rename = "name", alias = "title", default)]
    pub title: String,
    #[serde(default)]
    pub path: String,
}

impl DocumentMeta {
    pub fn new(document_type: impl Into<String>) -> Self {
        Self {
            document_type: document_type.into(),
            ..Self::default()
        }
    }
}

/// A document schema under construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub(crate) meta: DocumentMeta,
    pub(crate) fields: IndexMap<FieldId, FieldDefinition>,
    pub(crate) order: Vec<OrderEntry>,
    pub(crate) list_registry: IndexMap<FieldId, ListItems>,
}

impl Document {
    /// An empty document with the given header.
    pub fn new(meta: DocumentMeta) -> Self {
        Self {
            meta,
            ..Self::default()
        }
    }

    pub fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    /// Field map in Order Sequence order.
    pub fn fields(&self) -> &IndexMap<FieldId, FieldDefinition> {
        &self.fields
    }

    pub fn order(&self) -> &[OrderEntry] {
        &self.order
    }

    pub fn list_registry(&self) -> &IndexMap<FieldId, ListItems> {
        &self.list_registry
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The entry at `index` in the Order Sequence.
    pub fn entry(&self, index: usize) -> Option<&OrderEntry> {
        self.order.get(index)
    }

    pub fn definition(&self, id: &str) -> Option<&FieldDefinition> {
        self.fields.get(id)
    }

    /// Position of `id` in the Order Sequence.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.order.iter().position(|entry| entry.id() == id)
    }

    /// Identifiers in Order Sequence order.
    pub fn ids(&self) -> impl Iterator<Item = &FieldId> + '_ {
        self.order.iter().map(OrderEntry::id)
    }

    /// Whether `id` is already used by an entry or a list sub-registry key.
    pub fn is_taken(&self, id: &str) -> bool {
        self.ids().any(|existing| existing == id) || self.list_registry.contains_key(id)
    }

    /// Like [`Document::is_taken`], ignoring the entry at `index` and its own
    /// sub-registry key.
    pub fn is_taken_except(&self, id: &str, index: usize) -> bool {
        let own = self.order.get(index).map(OrderEntry::id);
        if own.is_some_and(|own| own == id) {
            return false;
        }
        self.order
            .iter()
            .enumerate()
            .any(|(i, entry)| i != index && entry.id() == id)
            || self.list_registry.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldKind;

    fn sample() -> Document {
        let mut doc = Document::new(DocumentMeta::new("page"));
        for (id, kind) in [
            ("title", FieldKind::String),
            ("gallery", FieldKind::List),
            ("body", FieldKind::RichText),
        ] {
            let id = FieldId::from(id);
            doc.order.push(OrderEntry::for_kind(kind, id.clone()));
            doc.fields
                .insert(id.clone(), FieldDefinition::new(kind, "en"));
            if kind.is_list() {
                doc.list_registry.insert(id, ListItems::new());
            }
        }
        doc
    }

    #[test]
    fn lookups_follow_order() {
        let doc = sample();
        assert_eq!(doc.len(), 3);
        assert!(!doc.is_empty());
        assert_eq!(doc.position("body"), Some(2));
        assert_eq!(doc.position("missing"), None);
        assert!(doc.entry(1).unwrap().is_list());
        assert_eq!(
            doc.ids().map(FieldId::as_str).collect::<Vec<_>>(),
            vec!["title", "gallery", "body"]
        );
        assert_eq!(doc.definition("body").unwrap().kind, FieldKind::RichText);
    }

    #[test]
    fn is_taken_checks_entries_and_list_keys() {
        let mut doc = sample();
        assert!(doc.is_taken("title"));
        assert!(doc.is_taken("gallery"));
        assert!(!doc.is_taken("summary"));

        // A stray sub-registry key still blocks the identifier.
        doc.list_registry.insert("orphan".into(), ListItems::new());
        assert!(doc.is_taken("orphan"));
    }

    #[test]
    fn is_taken_except_skips_own_entry() {
        let doc = sample();
        assert!(!doc.is_taken_except("title", 0));
        assert!(doc.is_taken_except("title", 2));
        assert!(!doc.is_taken_except("gallery", 1));
        assert!(doc.is_taken_except("gallery", 0));
    }

    #[test]
    fn meta_accepts_title_alias() {
        let meta: DocumentMeta =
            serde_json::from_str(r#"{"type":"page","title":"Home","path":"/"}"#).unwrap();
        assert_eq!(meta.title, "Home");
        assert_eq!(meta.slug, "");
        assert_eq!(
            serde_json::to_string(&meta).unwrap(),
            r#"{"type":"page","slug":"","name":"Home","path":"/"}"#
        );
    }
}
