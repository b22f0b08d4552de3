//! `docschema apply` - run an edit script against a document

use std::path::{Path, PathBuf};

use docschema_fields::export::{from_json, to_json, to_json_pretty};
use docschema_fields::{Document, EditContext, Operation, Outcome, SchemaEditor};
use tracing::{debug, info};

use crate::config::DocschemaConfig;
use crate::error::{CliError, Result};
use crate::script::Script;

/// Arguments of one `apply` invocation.
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    pub script: PathBuf,
    pub from: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub compact: bool,
}

/// Run `apply` and return the rendered document, or `None` when it was
/// written to `--output`.
pub fn run_apply(options: &ApplyOptions, config: &DocschemaConfig) -> Result<Option<String>> {
    let script = Script::from_path(&options.script)?;
    let start = match &options.from {
        Some(path) => load_document(path)?,
        None => Document::new(config.document_meta()),
    };

    let (document, outcomes) = apply_script(&script, start, config.edit_context())?;
    info!(
        steps = outcomes.len(),
        fields = document.len(),
        "script applied"
    );

    let mut rendered = if options.compact || config.compact {
        to_json(&document)?
    } else {
        to_json_pretty(&document)?
    };

    match &options.output {
        Some(path) => {
            rendered.push('\n');
            std::fs::write(path, rendered).map_err(|e| CliError::write(path, e))?;
            debug!(path = %path.display(), "document written");
            Ok(None)
        }
        None => Ok(Some(rendered)),
    }
}

/// Dispatch every step of `script` in order.
///
/// Stops at the first rejected command; the error names its position.
pub fn apply_script(
    script: &Script,
    start: Document,
    ctx: EditContext,
) -> Result<(Document, Vec<Outcome>)> {
    let mut editor = SchemaEditor::with_document(start, ctx);
    let mut outcomes = Vec::with_capacity(script.len());

    if let Some(meta) = &script.document {
        outcomes.push(editor.dispatch(meta)?);
    }
    for (index, command) in script.commands.iter().enumerate() {
        let outcome = editor
            .dispatch(command)
            .map_err(|source| CliError::Command {
                index,
                op: command.op_string(),
                source,
            })?;
        outcomes.push(outcome);
    }

    Ok((editor.into_document(), outcomes))
}

/// Read an exported document.
pub fn load_document(path: &Path) -> Result<Document> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::read(path, e))?;
    Ok(from_json(&text)?)
}
