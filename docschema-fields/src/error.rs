//! Error types for the field registry

use thiserror::Error;

use crate::invariants::Invariant;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur in field registry operations
#[derive(Debug, Error)]
pub enum FieldsError {
    /// An index handed in by the caller does not address an Order Sequence entry.
    #[error("{operation}: index {index} out of range for {len} fields")]
    InvalidArgument {
        operation: &'static str,
        index: usize,
        len: usize,
    },

    /// The document no longer satisfies one of its structural invariants.
    #[error("consistency violated ({invariant}): {detail}")]
    Consistency { invariant: Invariant, detail: String },

    /// Field kind name not recognised
    #[error("unknown field kind: {name}")]
    UnknownKind { name: String },

    /// A serialized document could not be turned back into a registry
    #[error("invalid document: {message}")]
    InvalidDocument { message: String },

    /// An operation reported a different kind of outcome than its caller
    /// expects from it.
    #[error("{operation}: unexpected outcome {outcome}")]
    UnexpectedOutcome {
        operation: &'static str,
        outcome: String,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FieldsError {
    /// Create an out-of-range index error
    pub fn out_of_range(operation: &'static str, index: usize, len: usize) -> Self {
        Self::InvalidArgument {
            operation,
            index,
            len,
        }
    }

    /// Create a consistency error
    pub fn consistency(invariant: Invariant, detail: impl Into<String>) -> Self {
        Self::Consistency {
            invariant,
            detail: detail.into(),
        }
    }

    /// Create an invalid document error
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }

    /// True when the error points at a bug in the calling code rather than
    /// at user input.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. }
                | Self::Consistency { .. }
                | Self::UnexpectedOutcome { .. }
        )
    }
}
