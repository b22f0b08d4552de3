//! Edit scripts
//!
//! A script is an optional document header followed by registry commands,
//! written in YAML or JSON:
//!
//! ```yaml
//! document:
//!   type: page
//!   slug: home
//! commands:
//!   - op: add
//!     kind: string
//!   - op: rename
//!     index: 0
//!     text: title
//! ```

use std::path::Path;

use docschema_fields::ops::SetMetadata;
use docschema_fields::Command;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// Commands to run against a document, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Header values applied before any command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<SetMetadata>,
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Script {
    /// Read a script, choosing the decoder from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CliError::read(path, e))?;
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("yaml") | Some("yml") => {
                Self::from_yaml_str(&text).map_err(|e| CliError::script(path, e))
            }
            Some("json") => Self::from_json_str(&text).map_err(|e| CliError::script(path, e)),
            _ => Err(CliError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn from_yaml_str(text: &str) -> std::result::Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(text)
    }

    pub fn from_json_str(text: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Number of steps the script will dispatch
    pub fn len(&self) -> usize {
        self.commands.len() + usize::from(self.document.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docschema_fields::ops::{AddField, RenameField, ReorderFields};
    use docschema_fields::FieldKind;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_yaml_script() {
        let script = Script::from_yaml_str(
            r#"
document:
  type: page
  name: Home
commands:
  - op: add
    kind: list
  - op: rename
    index: 0
    text: gallery
  - op: reorder
    from: 0
    to: 0
"#,
        )
        .unwrap();

        assert_eq!(
            script.document,
            Some(SetMetadata::new().with_document_type("page").with_title("Home"))
        );
        assert_eq!(
            script.commands,
            vec![
                Command::from(AddField::new(FieldKind::List)),
                RenameField::new(0, "gallery").into(),
                ReorderFields::new(0, 0).into(),
            ]
        );
        assert_eq!(script.len(), 4);
    }

    #[test]
    fn test_json_script_without_header() {
        let script =
            Script::from_json_str(r#"{"commands":[{"op":"remove","index":2}]}"#).unwrap();
        assert!(script.document.is_none());
        assert_eq!(script.len(), 1);
        assert!(Script::from_json_str("{}").unwrap().is_empty());
    }

    #[test]
    fn test_from_path_picks_decoder_by_extension() {
        let dir = TempDir::new().unwrap();
        let yaml = dir.path().join("edits.yml");
        fs::write(&yaml, "commands:\n  - op: add\n    kind: url\n").unwrap();
        let json = dir.path().join("edits.json");
        fs::write(&json, r#"{"commands":[{"op":"add","kind":"url"}]}"#).unwrap();

        assert_eq!(
            Script::from_path(&yaml).unwrap(),
            Script::from_path(&json).unwrap()
        );
    }

    #[rstest]
    #[case::unknown_op("edits.json", Some(r#"{"commands":[{"op":"explode"}]}"#), "script")]
    #[case::bad_yaml("edits.yaml", Some("commands: [op: add"), "script")]
    #[case::unknown_extension("edits.txt", Some(""), "unsupported")]
    #[case::missing_file("missing.yaml", None, "read")]
    fn test_from_path_errors(
        #[case] name: &str,
        #[case] contents: Option<&str>,
        #[case] expected: &str,
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(name);
        if let Some(contents) = contents {
            fs::write(&path, contents).unwrap();
        }

        let err = Script::from_path(&path).unwrap_err();
        let kind = match err {
            CliError::Script { .. } => "script",
            CliError::UnsupportedFormat { .. } => "unsupported",
            CliError::Read { .. } => "read",
            other => panic!("unexpected error: {other:?}"),
        };
        assert_eq!(kind, expected);
    }
}
