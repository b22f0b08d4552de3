//! What an operation did to the document.

use serde::Serialize;

use crate::document::DocumentMeta;
use crate::types::{FieldDefinition, FieldId};

/// Result of applying one operation.
///
/// Collaborators use it to re-bind whatever they render for the touched
/// entry; nothing in it is needed to keep the document consistent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// A field was appended.
    Added { index: usize, id: FieldId },
    /// A field's identifier changed.
    Renamed {
        index: usize,
        from: FieldId,
        to: FieldId,
        /// Set when the committed identifier differs from the typed text.
        #[serde(skip_serializing_if = "Option::is_none")]
        adjustment: Option<RenameAdjustment>,
    },
    /// A field changed position.
    Moved { from: usize, to: usize, id: FieldId },
    /// A field was deleted.
    Removed {
        index: usize,
        id: FieldId,
        definition: FieldDefinition,
    },
    /// The document header changed.
    MetadataUpdated { meta: DocumentMeta },
    /// The operation had nothing to do.
    Unchanged { index: usize, id: FieldId },
}

impl Outcome {
    /// Identifier of the entry the operation touched, as it is now.
    pub fn id(&self) -> Option<&FieldId> {
        match self {
            Self::Added { id, .. }
            | Self::Moved { id, .. }
            | Self::Removed { id, .. }
            | Self::Unchanged { id, .. } => Some(id),
            Self::Renamed { to, .. } => Some(to),
            Self::MetadataUpdated { .. } => None,
        }
    }

    /// Whether the document differs from before the operation.
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Unchanged { .. })
    }
}

/// How rename input was altered before being committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenameAdjustment {
    /// The text was empty; a fresh identifier was minted instead.
    Minted,
    /// The text was already in use; a timestamp suffix was appended.
    Suffixed { requested: String },
}
