//! Structural checks run after every operation.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::document::Document;
use crate::error::{FieldsError, Result};
use crate::types::FieldKind;

/// The property a document failed to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Invariant {
    /// Order Sequence identifiers and Field Map keys are the same set.
    Bijection,
    /// Field Map iteration order equals the Order Sequence.
    OrderFidelity,
    /// No identifier appears twice.
    Uniqueness,
    /// List entries and List Sub-Registry keys correspond one to one.
    ListLinkage,
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Invariant::Bijection => "bijection",
            Invariant::OrderFidelity => "order fidelity",
            Invariant::Uniqueness => "uniqueness",
            Invariant::ListLinkage => "list linkage",
        })
    }
}

/// Check every structural invariant of `doc`.
pub fn verify(doc: &Document) -> Result<()> {
    check_uniqueness(doc)?;
    check_bijection(doc)?;
    check_order_fidelity(doc)?;
    check_list_linkage(doc)
}

fn check_uniqueness(doc: &Document) -> Result<()> {
    let mut seen = HashSet::with_capacity(doc.order.len());
    for entry in &doc.order {
        let id = entry.id();
        if !seen.insert(id) {
            return Err(FieldsError::consistency(
                Invariant::Uniqueness,
                format!("identifier '{id}' appears more than once"),
            ));
        }
        if !entry.is_list() && doc.list_registry.contains_key(id) {
            return Err(FieldsError::consistency(
                Invariant::Uniqueness,
                format!("identifier '{id}' collides with a list sub-registry key"),
            ));
        }
    }
    Ok(())
}

fn check_bijection(doc: &Document) -> Result<()> {
    if let Some(missing) = doc.ids().find(|id| !doc.fields.contains_key(*id)) {
        return Err(FieldsError::consistency(
            Invariant::Bijection,
            format!("'{missing}' is ordered but has no definition"),
        ));
    }
    if doc.fields.len() != doc.order.len() {
        let ordered: HashSet<_> = doc.ids().collect();
        let extra = doc
            .fields
            .keys()
            .find(|id| !ordered.contains(id))
            .map_or_else(|| "?".to_string(), ToString::to_string);
        return Err(FieldsError::consistency(
            Invariant::Bijection,
            format!("'{extra}' has a definition but no position"),
        ));
    }
    Ok(())
}

fn check_order_fidelity(doc: &Document) -> Result<()> {
    for (position, (ordered, mapped)) in doc.ids().zip(doc.fields.keys()).enumerate() {
        if ordered != mapped {
            return Err(FieldsError::consistency(
                Invariant::OrderFidelity,
                format!("position {position}: order has '{ordered}', field map has '{mapped}'"),
            ));
        }
    }
    Ok(())
}

fn check_list_linkage(doc: &Document) -> Result<()> {
    for entry in &doc.order {
        let id = entry.id();
        let kind = doc.fields.get(id).map(|def| def.kind);
        if entry.is_list() != (kind == Some(FieldKind::List)) {
            return Err(FieldsError::consistency(
                Invariant::ListLinkage,
                format!("entry '{id}' tag disagrees with its definition kind"),
            ));
        }
        if entry.is_list() && !doc.list_registry.contains_key(id) {
            return Err(FieldsError::consistency(
                Invariant::ListLinkage,
                format!("list '{id}' has no sub-registry entry"),
            ));
        }
    }
    for key in doc.list_registry.keys() {
        let linked = doc
            .order
            .iter()
            .any(|entry| entry.is_list() && entry.id() == key);
        if !linked {
            return Err(FieldsError::consistency(
                Invariant::ListLinkage,
                format!("sub-registry key '{key}' has no list entry"),
            ));
        }
    }
    for (id, def) in &doc.fields {
        if def.kind.is_list() != def.sub_fields.is_some() {
            return Err(FieldsError::consistency(
                Invariant::ListLinkage,
                format!("definition '{id}' carries sub-fields that do not match its kind"),
            ));
        }
    }
    Ok(())
}
