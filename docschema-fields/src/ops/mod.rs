//! Registry operations.
//!
//! Each operation is a struct whose fields are its parameters. Operations
//! are the only code that mutates a [`Document`]; [`execute`] runs one
//! against a copy and only hands the result back once every structural
//! invariant still holds.

mod add;
mod metadata;
mod outcome;
mod remove;
mod rename;
mod reorder;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::EditContext;
use crate::document::Document;
use crate::error::Result;
use crate::invariants::verify;

pub use add::AddField;
pub use metadata::SetMetadata;
pub use outcome::{Outcome, RenameAdjustment};
pub use remove::RemoveField;
pub use rename::{normalize, RenameField};
pub use reorder::ReorderFields;

/// A single transformation of a document.
pub trait Operation: fmt::Debug {
    /// Canonical op string (e.g. "add field", "rename field")
    fn op_string(&self) -> &'static str;

    /// Apply the operation in place.
    ///
    /// Implementations validate their arguments before touching `doc`; a
    /// returned error may still leave `doc` half-updated, which is why
    /// callers go through [`execute`].
    fn apply(&self, doc: &mut Document, ctx: &EditContext) -> Result<Outcome>;
}

/// Apply `op` to a copy of `doc` and return the new document.
///
/// `doc` is never modified; on error the caller keeps its current state.
pub fn execute(
    doc: &Document,
    op: &dyn Operation,
    ctx: &EditContext,
) -> Result<(Document, Outcome)> {
    let mut next = doc.clone();
    let outcome = op.apply(&mut next, ctx)?;
    verify(&next)?;

    debug!(
        op = op.op_string(),
        id = outcome.id().map(|id| id.as_str()),
        fields = next.len(),
        "operation applied"
    );
    Ok((next, outcome))
}

/// Any operation, tagged by name for scripts and message passing.
///
/// ```rust
/// use docschema_fields::ops::{Command, ReorderFields};
///
/// let command: Command = serde_json::from_str(r#"{"op":"reorder","from":0,"to":2}"#).unwrap();
/// assert_eq!(command, Command::Reorder(ReorderFields::new(0, 2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Add(AddField),
    Rename(RenameField),
    Reorder(ReorderFields),
    Remove(RemoveField),
    SetMetadata(SetMetadata),
}

impl Command {
    fn as_operation(&self) -> &dyn Operation {
        match self {
            Command::Add(op) => op,
            Command::Rename(op) => op,
            Command::Reorder(op) => op,
            Command::Remove(op) => op,
            Command::SetMetadata(op) => op,
        }
    }
}

impl Operation for Command {
    fn op_string(&self) -> &'static str {
        self.as_operation().op_string()
    }

    fn apply(&self, doc: &mut Document, ctx: &EditContext) -> Result<Outcome> {
        self.as_operation().apply(doc, ctx)
    }
}

impl From<AddField> for Command {
    fn from(op: AddField) -> Self {
        Command::Add(op)
    }
}

impl From<RenameField> for Command {
    fn from(op: RenameField) -> Self {
        Command::Rename(op)
    }
}

impl From<ReorderFields> for Command {
    fn from(op: ReorderFields) -> Self {
        Command::Reorder(op)
    }
}

impl From<RemoveField> for Command {
    fn from(op: RemoveField) -> Self {
        Command::Remove(op)
    }
}

impl From<SetMetadata> for Command {
    fn from(op: SetMetadata) -> Self {
        Command::SetMetadata(op)
    }
}
