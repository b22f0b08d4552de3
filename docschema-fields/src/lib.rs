//! Field registry and ordering engine
//!
//! `docschema-fields` builds the `config.fields` section of a document
//! config: an ordered set of named, typed fields (string, text, rich text,
//! url, image, list). It knows nothing about rendering; a UI or CLI owns a
//! [`SchemaEditor`] and feeds it intents.
//!
//! # Architecture
//!
//! - **One owned value**: a [`Document`] holds the Order Sequence, the Field
//!   Map and the List Sub-Registry; only operations mutate it
//! - **Operations as values**: [`ops`] structs carry their parameters and
//!   apply atomically through [`ops::execute`]
//! - **Checked**: every committed state passes [`invariants::verify`]
//! - **Ordered export**: [`export`] emits fields in visual order and parses
//!   them back without losing it

pub mod context;
pub mod document;
pub mod editor;
pub mod error;
pub mod export;
pub mod invariants;
pub mod mint;
pub mod ops;
pub mod types;

pub use context::{EditContext, EditContextBuilder, DEFAULT_LOCALE};
pub use document::{Document, DocumentMeta};
pub use editor::SchemaEditor;
pub use error::{FieldsError, Result};
pub use export::{SerializedConfig, SerializedDocument};
pub use invariants::Invariant;
pub use mint::{Clock, FixedClock, SteppingClock, SystemClock};
pub use ops::{Command, Operation, Outcome, RenameAdjustment};
pub use types::{FieldDefinition, FieldId, FieldKind, Labels, ListItems, OrderEntry};
