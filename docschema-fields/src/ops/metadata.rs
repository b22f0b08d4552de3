//! SetMetadata command

use serde::{Deserialize, Serialize};

use crate::context::EditContext;
use crate::document::Document;
use crate::error::Result;
use crate::ops::{Operation, Outcome};

/// Update the document header. Unset values are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SetMetadata {
    /// Document type, e.g. `page`
    #[serde(
        rename = "type",
        alias = "document_type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub document_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(
        rename = "name",
        alias = "title",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl SetMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document_type(mut self, document_type: impl Into<String>) -> Self {
        self.document_type = Some(document_type.into());
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Whether no value is set.
    pub fn is_empty(&self) -> bool {
        self.document_type.is_none()
            && self.slug.is_none()
            && self.title.is_none()
            && self.path.is_none()
    }
}

impl Operation for SetMetadata {
    fn op_string(&self) -> &'static str {
        "set metadata"
    }

    fn apply(&self, doc: &mut Document, _ctx: &EditContext) -> Result<Outcome> {
        let meta = &mut doc.meta;
        if let Some(document_type) = &self.document_type {
            meta.document_type.clone_from(document_type);
        }
        if let Some(slug) = &self.slug {
            meta.slug.clone_from(slug);
        }
        if let Some(title) = &self.title {
            meta.title.clone_from(title);
        }
        if let Some(path) = &self.path {
            meta.path.clone_from(path);
        }

        Ok(Outcome::MetadataUpdated { meta: meta.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentMeta;
    use crate::ops::execute;

    #[test]
    fn test_set_all_metadata() {
        let op = SetMetadata::new()
            .with_document_type("page")
            .with_slug("about-us")
            .with_title("About us")
            .with_path("/about");
        let (doc, _) = execute(&Document::default(), &op, &EditContext::new()).unwrap();

        assert_eq!(
            doc.meta(),
            &DocumentMeta {
                document_type: "page".into(),
                slug: "about-us".into(),
                title: "About us".into(),
                path: "/about".into(),
            }
        );
    }

    #[test]
    fn test_partial_update_keeps_other_values() {
        let doc = Document::new(DocumentMeta::new("page"));
        let (doc, outcome) =
            execute(&doc, &SetMetadata::new().with_slug("home"), &EditContext::new()).unwrap();

        assert_eq!(doc.meta().document_type, "page");
        assert_eq!(doc.meta().slug, "home");
        assert!(matches!(outcome, Outcome::MetadataUpdated { .. }));
    }

    #[test]
    fn test_deserialize_wire_names() {
        let op: SetMetadata =
            serde_json::from_str(r#"{"type":"page","name":"Home","path":"/"}"#).unwrap();
        assert_eq!(op.document_type.as_deref(), Some("page"));
        assert_eq!(op.title.as_deref(), Some("Home"));
        assert!(op.slug.is_none());
        assert!(!op.is_empty());
        assert!(SetMetadata::new().is_empty());
    }
}
