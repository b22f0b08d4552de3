//! `docschema check` - verify an exported document

use std::path::Path;

use docschema_fields::Document;

use crate::apply::load_document;
use crate::error::Result;

/// Parse and verify the document at `path` and describe it in one line.
pub fn run_check(path: &Path) -> Result<String> {
    let document = load_document(path)?;
    Ok(format!("{}: ok, {}", path.display(), summarize(&document)))
}

fn summarize(document: &Document) -> String {
    let lists = document.order().iter().filter(|e| e.is_list()).count();
    let meta = document.meta();
    let kind = if meta.document_type.is_empty() {
        "untyped document".to_string()
    } else {
        format!("{} document", meta.document_type)
    };
    format!(
        "{kind} with {} field{} ({lists} list{})",
        document.len(),
        plural(document.len()),
        plural(lists)
    )
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use docschema_fields::FieldsError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_check_summarizes_valid_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(
            &path,
            r#"{"type":"page","config":{"fields":{
                "title":{"type":"string","label":{"en":""}},
                "gallery":{"type":"list","label":{"en":""},"fields":{}}
            }}}"#,
        )
        .unwrap();

        let summary = run_check(&path).unwrap();
        assert!(summary.ends_with(": ok, page document with 2 fields (1 list)"));
    }

    #[test]
    fn test_check_rejects_malformed_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(
            &path,
            r#"{"config":{"fields":{"a":{"type":"url","label":{},"fields":{}}}}}"#,
        )
        .unwrap();

        let err = run_check(&path).unwrap_err();
        assert!(matches!(
            err,
            CliError::Fields(FieldsError::InvalidDocument { .. })
        ));
    }

    #[test]
    fn test_summary_of_empty_document() {
        assert_eq!(
            summarize(&Document::default()),
            "untyped document with 0 fields (0 lists)"
        );
    }
}
