//! Export coordinator and delivery collaborators.

use std::convert::Infallible;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use pagewright_tree::Forest;

use crate::markup::{document, script, serialize, stylesheet};

pub const INDEX_FILE: &str = "index.html";
pub const STYLESHEET_FILE: &str = "styles.css";
pub const SCRIPT_FILE: &str = "script.js";

const HTML_MIME: &str = "text/html";
const CSS_MIME: &str = "text/css";
const JS_MIME: &str = "text/javascript";

/// What gets exported besides the markup itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Document title, used when `document` is set.
    pub title: String,
    /// Wrap the fragments in a full HTML document.
    pub document: bool,
    /// Also export `styles.css`.
    pub stylesheet: bool,
    /// Also export `script.js`.
    pub script: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            title: "Pagewright export".to_string(),
            document: false,
            stylesheet: false,
            script: false,
        }
    }
}

/// One file handed to a delivery collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub content: String,
    pub mime_type: String,
}

impl Artifact {
    pub fn new(
        file_name: impl Into<String>,
        content: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// Presents exported artifacts to the user.
///
/// Errors come back to the caller of [`export_forest`] as they are.
pub trait Delivery {
    type Error;

    fn deliver(&mut self, artifact: &Artifact) -> Result<(), Self::Error>;
}

/// Writes artifacts as files under a directory, creating it if needed.
#[derive(Clone, Debug)]
pub struct DirectoryDelivery {
    root: PathBuf,
}

impl DirectoryDelivery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Delivery for DirectoryDelivery {
    type Error = io::Error;

    fn deliver(&mut self, artifact: &Artifact) -> io::Result<()> {
        std::fs::create_dir_all(&self.root)?;
        let path = self.root.join(&artifact.file_name);
        std::fs::write(&path, &artifact.content)?;
        tracing::info!(path = %path.display(), mime = %artifact.mime_type, "artifact written");
        Ok(())
    }
}

/// Keeps artifacts in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryDelivery {
    pub artifacts: Vec<Artifact>,
}

impl MemoryDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, file_name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.file_name == file_name)
    }
}

impl Delivery for MemoryDelivery {
    type Error = Infallible;

    fn deliver(&mut self, artifact: &Artifact) -> Result<(), Infallible> {
        self.artifacts.push(artifact.clone());
        Ok(())
    }
}

/// Build the artifacts for a forest: markup first, then the optional extras.
pub fn artifacts(forest: &Forest, config: &ExportConfig) -> Vec<Artifact> {
    let markup = if config.document {
        document(forest, config)
    } else {
        serialize(forest)
    };

    let mut out = vec![Artifact::new(INDEX_FILE, markup, HTML_MIME)];
    if config.stylesheet {
        out.push(Artifact::new(STYLESHEET_FILE, stylesheet(), CSS_MIME));
    }
    if config.script {
        out.push(Artifact::new(SCRIPT_FILE, script(), JS_MIME));
    }
    out
}

/// Serialize `forest` and hand each artifact to `delivery`, in order.
///
/// Stops at the first delivery error and returns it unchanged; no retry.
/// On success returns the delivered file names.
pub fn export_forest<D: Delivery>(
    forest: &Forest,
    config: &ExportConfig,
    delivery: &mut D,
) -> Result<Vec<String>, D::Error> {
    let artifacts = artifacts(forest, config);
    let mut delivered = Vec::with_capacity(artifacts.len());
    for artifact in &artifacts {
        delivery.deliver(artifact)?;
        delivered.push(artifact.file_name.clone());
    }
    tracing::info!(nodes = forest.node_count(), files = ?delivered, "forest exported");
    Ok(delivered)
}
