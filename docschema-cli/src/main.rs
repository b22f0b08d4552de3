//! docschema CLI - build ordered document field configs.
//!
//! Commands:
//! - `docschema apply <script>`: Apply an edit script and print the document
//! - `docschema check <document>`: Verify an exported document
//! - `docschema kinds`: List the field kinds
//!
//! Environment variables:
//! - DOCSCHEMA_DEFAULT_LOCALE: Locale key for new field labels
//! - DOCSCHEMA_DOCUMENT_TYPE: Document type for new documents
//! - DOCSCHEMA_COMPACT: Print single-line JSON
//! - DOCSCHEMA_MINT_STAMP: Fixed timestamp for minted identifiers
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use docschema::apply::{run_apply, ApplyOptions};
use docschema::check::run_check;
use docschema::kinds::run_kinds;
use docschema::{Cli, Commands, DocschemaConfig};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("docschema=debug,docschema_fields=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = DocschemaConfig::load(cli.config.as_deref())?;

    let output = match cli.command {
        Commands::Apply {
            script,
            from,
            output,
            compact,
        } => {
            let options = ApplyOptions {
                script,
                from,
                output,
                compact,
            };
            run_apply(&options, &config)
                .with_context(|| format!("applying {}", options.script.display()))?
        }
        Commands::Check { document } => Some(run_check(&document)?),
        Commands::Kinds { json } => Some(run_kinds(json)?),
    };

    if let Some(text) = output {
        println!("{text}");
    }
    Ok(())
}
