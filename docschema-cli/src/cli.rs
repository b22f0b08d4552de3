//! CLI definition for the docschema command-line interface.
//!
//! This module only depends on `clap` and `std`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// docschema - build ordered document field configs.
///
/// Field registry operations are read from an edit script and applied in
/// order; the resulting document config is printed as JSON.
#[derive(Parser, Debug)]
#[command(name = "docschema")]
#[command(version)]
#[command(about = "Build ordered document field configs from edit scripts")]
#[command(
    long_about = "docschema applies field registry operations (add, rename, reorder, remove, \
    set_metadata) from a YAML or JSON edit script and prints the resulting document config.\n\n\
    Configuration is read from docschema.toml, docschema.yaml or docschema.json in the working \
    directory (or --config), then from the environment:\n  \
    DOCSCHEMA_DEFAULT_LOCALE  Locale key for new field labels (default: en)\n  \
    DOCSCHEMA_DOCUMENT_TYPE   Document type for new documents (default: page)\n  \
    DOCSCHEMA_COMPACT         Print single-line JSON (default: false)\n  \
    DOCSCHEMA_MINT_STAMP      Fixed timestamp for minted identifiers"
)]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Configuration file to use instead of the one in the working directory
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply an edit script and print the resulting document
    Apply {
        /// Edit script (.yaml, .yml or .json)
        script: PathBuf,
        /// Start from an exported document instead of an empty one
        #[arg(long, value_name = "DOC")]
        from: Option<PathBuf>,
        /// Write the document to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Verify an exported document and print a summary
    Check {
        /// Exported document (.json)
        document: PathBuf,
    },

    /// List the available field kinds
    Kinds {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
