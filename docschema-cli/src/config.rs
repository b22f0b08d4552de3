//! Configuration loading using Figment
//!
//! Sources, later ones overriding earlier ones:
//! 1. Default values
//! 2. `--config FILE`, or the first of `docschema.toml`, `docschema.yaml`,
//!    `docschema.yml`, `docschema.json` found in the working directory
//! 3. Environment variables prefixed `DOCSCHEMA_`

use std::path::{Path, PathBuf};

use docschema_fields::{DocumentMeta, EditContext, FixedClock, DEFAULT_LOCALE};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{CliError, Result};

/// Environment variable prefix for configuration values
pub const ENV_PREFIX: &str = "DOCSCHEMA_";

/// File stem searched for in the working directory
pub const CONFIG_FILE_STEM: &str = "docschema";

/// Settings for the docschema CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocschemaConfig {
    /// Locale key for the empty label of new fields
    pub default_locale: String,
    /// Document type used when a script starts from an empty document
    pub document_type: String,
    /// Print single-line JSON
    pub compact: bool,
    /// Fixed timestamp for minted identifiers; the wall clock when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mint_stamp: Option<i64>,
}

impl Default for DocschemaConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            document_type: "page".to_string(),
            compact: false,
            mint_stamp: None,
        }
    }
}

impl DocschemaConfig {
    /// Load configuration for the current working directory
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| CliError::read(".", e))?;
        Self::load_from(explicit, &cwd)
    }

    /// Load configuration, discovering the config file in `dir`
    pub fn load_from(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let file = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::read(
                        path,
                        std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
                    ));
                }
                Some(path.to_path_buf())
            }
            None => discover(dir),
        };
        if let Some(path) = file {
            debug!(path = %path.display(), "loading configuration file");
            figment = figment.merge(file_provider(&path)?);
        }

        figment = figment
            .merge(Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().into()));

        let config: Self = figment.extract()?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Edit context for registry operations
    pub fn edit_context(&self) -> EditContext {
        let builder = EditContext::builder().with_default_locale(&self.default_locale);
        match self.mint_stamp {
            Some(stamp) => builder.with_clock(FixedClock(stamp)).build(),
            None => builder.build(),
        }
    }

    /// Header for a new, empty document
    pub fn document_meta(&self) -> DocumentMeta {
        DocumentMeta::new(&self.document_type)
    }
}

fn discover(dir: &Path) -> Option<PathBuf> {
    ["toml", "yaml", "yml", "json"]
        .iter()
        .map(|ext| dir.join(format!("{CONFIG_FILE_STEM}.{ext}")))
        .inspect(|path| trace!(path = %path.display(), "probing for configuration file"))
        .find(|path| path.is_file())
}

fn file_provider(path: &Path) -> Result<Figment> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);

    match ext.as_deref() {
        Some("toml") => Ok(Figment::from(Toml::file(path))),
        Some("yaml") | Some("yml") => Ok(Figment::from(Yaml::file(path))),
        Some("json") => Ok(Figment::from(Json::file(path))),
        _ => Err(CliError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
