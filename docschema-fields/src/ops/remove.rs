//! RemoveField command

use serde::{Deserialize, Serialize};

use crate::context::EditContext;
use crate::document::Document;
use crate::error::{FieldsError, Result};
use crate::invariants::Invariant;
use crate::ops::{Operation, Outcome};

/// Delete the field at `index` together with its definition and, for list
/// fields, its sub-registry entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RemoveField {
    pub index: usize,
}

impl RemoveField {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl Operation for RemoveField {
    fn op_string(&self) -> &'static str {
        "remove field"
    }

    fn apply(&self, doc: &mut Document, _ctx: &EditContext) -> Result<Outcome> {
        if self.index >= doc.len() {
            return Err(FieldsError::out_of_range(
                self.op_string(),
                self.index,
                doc.len(),
            ));
        }

        let entry = doc.order.remove(self.index);
        let id = entry.id().clone();
        let definition = doc.fields.shift_remove(&id).ok_or_else(|| {
            FieldsError::consistency(
                Invariant::Bijection,
                format!("'{id}' is ordered but has no definition"),
            )
        })?;
        if entry.is_list() {
            doc.list_registry.shift_remove(&id);
        }

        Ok(Outcome::Removed {
            index: self.index,
            id,
            definition,
        })
    }
}
