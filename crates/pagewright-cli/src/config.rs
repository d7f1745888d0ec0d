//! RON configuration.
//!
//! ```ron
//! (
//!     containers: ["work-area-1", "work-area-2"],
//!     catalog: [header, footer, banner, section],
//!     out_dir: "dist",
//!     export: (title: "Landing", document: true, stylesheet: true, script: false),
//! )
//! ```
//!
//! Every field is optional; missing ones take their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use pagewright_export::ExportConfig;
use pagewright_tree::{BlockCatalog, BlockKind, Forest, PageBuilder, TreeError};

/// Error type for config and input loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid forest snapshot: {0}")]
    Invalid(#[from] TreeError),
}

impl ConfigError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Work areas seeded empty, in order.
    pub containers: Vec<String>,
    /// Blocks offered for dragging, in palette order.
    pub catalog: Vec<BlockKind>,
    /// Where exports are written unless `--out` says otherwise.
    pub out_dir: PathBuf,
    pub export: ExportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            containers: vec!["work-area-1".to_string(), "work-area-2".to_string()],
            catalog: BlockKind::ALL.to_vec(),
            out_dir: PathBuf::from("dist"),
            export: ExportConfig::default(),
        }
    }
}

impl Config {
    /// `$XDG_CONFIG_HOME/pagewright/config.ron` (or the platform equivalent).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("pagewright").join("config.ron"))
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::parse(&text)
    }

    /// An explicit path must exist; the default path is used only if present.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn block_catalog(&self) -> BlockCatalog {
        BlockCatalog::with_kinds(self.catalog.iter().copied())
    }

    /// Builder over `base` (or an empty forest) with the configured containers seeded.
    pub fn page_builder(&self, base: Option<Forest>) -> PageBuilder {
        let mut forest = base.unwrap_or_default();
        for name in &self.containers {
            forest.add_container(name.as_str());
        }
        PageBuilder::new(forest, self.block_catalog())
    }
}
