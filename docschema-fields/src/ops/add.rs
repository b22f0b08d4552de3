//! AddField command

use serde::{Deserialize, Serialize};

use crate::context::EditContext;
use crate::document::Document;
use crate::error::Result;
use crate::mint::mint;
use crate::ops::{Operation, Outcome};
use crate::types::{FieldDefinition, FieldKind, ListItems, OrderEntry};

/// Append a new field of the given kind
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AddField {
    /// Kind of the new field
    pub kind: FieldKind,
}

impl AddField {
    pub fn new(kind: FieldKind) -> Self {
        Self { kind }
    }
}

impl Operation for AddField {
    fn op_string(&self) -> &'static str {
        "add field"
    }

    fn apply(&self, doc: &mut Document, ctx: &EditContext) -> Result<Outcome> {
        let id = mint(self.kind, doc, ctx.clock());

        doc.order
            .push(OrderEntry::for_kind(self.kind, id.clone()));
        doc.fields.insert(
            id.clone(),
            FieldDefinition::new(self.kind, ctx.default_locale()),
        );
        if self.kind.is_list() {
            doc.list_registry.insert(id.clone(), ListItems::new());
        }

        Ok(Outcome::Added {
            index: doc.order.len() - 1,
            id,
        })
    }
}
