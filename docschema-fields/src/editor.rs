//! SchemaEditor: main API surface for a presentation layer.
//!
//! The editor owns the one `Document` being built and is its only mutator.
//! A UI renders from [`SchemaEditor::document`] and reports user intents
//! through the `on_*` methods (or [`SchemaEditor::dispatch`] for any
//! operation). Intents are applied in the order they arrive.

use tracing::debug;

use crate::context::EditContext;
use crate::document::{Document, DocumentMeta};
use crate::error::{FieldsError, Result};
use crate::export::{self, SerializedDocument};
use crate::ops::{
    execute, AddField, Operation, Outcome, RemoveField, RenameField, ReorderFields,
};
use crate::types::{FieldDefinition, FieldId, FieldKind};

/// Owns a document and applies operations to it atomically.
#[derive(Debug)]
pub struct SchemaEditor {
    document: Document,
    ctx: EditContext,
}

impl SchemaEditor {
    /// Editor for an empty document.
    pub fn new(meta: DocumentMeta, ctx: EditContext) -> Self {
        Self::with_document(Document::new(meta), ctx)
    }

    /// Editor continuing from an existing document.
    pub fn with_document(document: Document, ctx: EditContext) -> Self {
        Self { document, ctx }
    }

    /// Current committed state.
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn context(&self) -> &EditContext {
        &self.ctx
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Apply `op`. The document only changes when the operation succeeds
    /// and the result is consistent.
    pub fn dispatch(&mut self, op: &dyn Operation) -> Result<Outcome> {
        let (next, outcome) = execute(&self.document, op, &self.ctx)?;
        if outcome.changed() {
            self.document = next;
        } else {
            debug!(op = op.op_string(), "nothing to commit");
        }
        Ok(outcome)
    }

    /// A field-kind button was pressed. Returns the new field's identifier.
    pub fn on_add(&mut self, kind: FieldKind) -> Result<FieldId> {
        let op = AddField::new(kind);
        match self.dispatch(&op)? {
            Outcome::Added { id, .. } => Ok(id),
            other => Err(unexpected(&op, &other)),
        }
    }

    /// The identifier input of entry `index` was committed with `raw_text`.
    ///
    /// The returned outcome carries the identifier the input must now show.
    pub fn on_rename_commit(&mut self, index: usize, raw_text: &str) -> Result<Outcome> {
        self.dispatch(&RenameField::new(index, raw_text))
    }

    /// A drag from position `from` was released over position `to`.
    pub fn on_reorder(&mut self, from: usize, to: usize) -> Result<()> {
        self.dispatch(&ReorderFields::new(from, to)).map(|_| ())
    }

    /// Entry `index` was deleted. Returns its definition.
    pub fn on_remove(&mut self, index: usize) -> Result<FieldDefinition> {
        let op = RemoveField::new(index);
        match self.dispatch(&op)? {
            Outcome::Removed { definition, .. } => Ok(definition),
            other => Err(unexpected(&op, &other)),
        }
    }

    /// Exported form of the current document.
    pub fn serialize(&self) -> SerializedDocument {
        export::serialize(&self.document)
    }
}

/// Add always reports `Added` and remove always reports `Removed`, so this
/// is unreachable unless an operation breaks that contract.
fn unexpected(op: &dyn Operation, outcome: &Outcome) -> FieldsError {
    FieldsError::UnexpectedOutcome {
        operation: op.op_string(),
        outcome: format!("{outcome:?}"),
    }
}
