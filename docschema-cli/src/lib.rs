//! docschema CLI library
//!
//! Command implementations behind the `docschema` binary. Each command
//! returns the text to print so it can be driven from tests.

pub mod apply;
pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod kinds;
pub mod script;

pub use cli::{Cli, Commands};
pub use config::DocschemaConfig;
pub use error::{CliError, Result};
pub use script::Script;
