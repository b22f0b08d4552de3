//! `docschema kinds` - list the field kinds

use docschema_fields::FieldKind;
use serde_json::json;

use crate::error::Result;

fn describe(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::String => "Single-line text",
        FieldKind::Text => "Multi-line plain text",
        FieldKind::RichText => "Formatted text edited in a WYSIWYG editor",
        FieldKind::Url => "Link",
        FieldKind::Image => "Image reference",
        FieldKind::List => "Repeating group of nested fields",
    }
}

/// Render the kinds table, or a JSON array when `json` is set.
pub fn run_kinds(json: bool) -> Result<String> {
    if json {
        let kinds: Vec<_> = FieldKind::ALL
            .iter()
            .map(|kind| json!({ "type": kind.as_str(), "description": describe(*kind) }))
            .collect();
        return Ok(serde_json::to_string_pretty(&kinds)?);
    }

    let width = FieldKind::ALL
        .iter()
        .map(|kind| kind.as_str().len())
        .max()
        .unwrap_or(0);
    Ok(FieldKind::ALL
        .iter()
        .map(|kind| format!("{:<width$}  {}", kind.as_str(), describe(*kind)))
        .collect::<Vec<_>>()
        .join("\n"))
}
