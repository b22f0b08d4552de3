//! ReorderFields command

use serde::{Deserialize, Serialize};

use crate::context::EditContext;
use crate::document::Document;
use crate::error::{FieldsError, Result};
use crate::ops::{Operation, Outcome};

/// Move the field at `from` to position `to`, shifting the fields in between
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReorderFields {
    pub from: usize,
    pub to: usize,
}

impl ReorderFields {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

impl Operation for ReorderFields {
    fn op_string(&self) -> &'static str {
        "reorder fields"
    }

    fn apply(&self, doc: &mut Document, _ctx: &EditContext) -> Result<Outcome> {
        let len = doc.len();
        for index in [self.from, self.to] {
            if index >= len {
                return Err(FieldsError::out_of_range(self.op_string(), index, len));
            }
        }

        let id = doc.order[self.from].id().clone();
        if self.from == self.to {
            return Ok(Outcome::Unchanged {
                index: self.from,
                id,
            });
        }

        let entry = doc.order.remove(self.from);
        doc.order.insert(self.to, entry);
        // The field map shares the order's indices, so the same shift keeps
        // its iteration order in step.
        doc.fields.move_index(self.from, self.to);

        Ok(Outcome::Moved {
            from: self.from,
            to: self.to,
            id,
        })
    }
}
