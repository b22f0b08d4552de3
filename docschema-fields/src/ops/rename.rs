//! RenameField command
//!
//! Renaming re-keys one field in all three structures at once. The typed
//! text is never rejected: whitespace becomes `_`, empty text falls back to
//! a minted identifier and text already in use gets a timestamp suffix.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::context::EditContext;
use crate::document::Document;
use crate::error::{FieldsError, Result};
use crate::invariants::Invariant;
use crate::mint::{mint, unique_suffix};
use crate::ops::{Operation, Outcome, RenameAdjustment};
use crate::types::FieldId;

/// Change the identifier of the field at `index`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenameField {
    /// Position in the Order Sequence
    pub index: usize,
    /// Text as the user typed it
    #[serde(alias = "raw_text", alias = "value")]
    pub text: String,
}

impl RenameField {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// Replace every whitespace character, including the byte order mark, with
/// `_`.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| if is_space(c) { '_' } else { c })
        .collect()
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

impl Operation for RenameField {
    fn op_string(&self) -> &'static str {
        "rename field"
    }

    fn apply(&self, doc: &mut Document, ctx: &EditContext) -> Result<Outcome> {
        let index = self.index;
        let entry = doc
            .order
            .get(index)
            .cloned()
            .ok_or_else(|| FieldsError::out_of_range(self.op_string(), index, doc.len()))?;
        let old = entry.id().clone();
        let kind = doc
            .definition(old.as_str())
            .map(|def| def.kind)
            .ok_or_else(|| {
                FieldsError::consistency(
                    Invariant::Bijection,
                    format!("'{old}' is ordered but has no definition"),
                )
            })?;

        let candidate = normalize(&self.text);
        let (new_id, adjustment) = if candidate.is_empty() {
            (mint(kind, doc, ctx.clock()), Some(RenameAdjustment::Minted))
        } else if old == candidate.as_str() {
            return Ok(Outcome::Unchanged { index, id: old });
        } else if doc.is_taken_except(&candidate, index) {
            (
                unique_suffix(&candidate, doc, index, ctx.clock()),
                Some(RenameAdjustment::Suffixed {
                    requested: candidate,
                }),
            )
        } else {
            (FieldId::from(candidate), None)
        };

        // A suffix may land back on the entry's own identifier.
        if new_id == old {
            return Ok(Outcome::Unchanged { index, id: old });
        }

        if let Some(adjustment) = &adjustment {
            info!(%old, new = %new_id, ?adjustment, "rename input adjusted");
        }

        rekey(doc, index, &old, &new_id);

        Ok(Outcome::Renamed {
            index,
            from: old,
            to: new_id,
            adjustment,
        })
    }
}

/// Move the field at `index` from `old` to `new` without changing its
/// position or definition.
fn rekey(doc: &mut Document, index: usize, old: &FieldId, new: &FieldId) {
    // Rebuilt by iteration: remove + insert would move the key to the end.
    doc.fields = std::mem::take(&mut doc.fields)
        .into_iter()
        .map(|(key, def)| if key == *old { (new.clone(), def) } else { (key, def) })
        .collect();

    let entry = doc.order[index].with_id(new.clone());
    let is_list = entry.is_list();
    doc.order[index] = entry;

    if is_list {
        doc.list_registry = std::mem::take(&mut doc.list_registry)
            .into_iter()
            .map(|(key, items)| if key == *old { (new.clone(), items) } else { (key, items) })
            .collect();
    }
}
