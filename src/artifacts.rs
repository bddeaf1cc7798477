//! Artifact resolution and loading.
//!
//! All configuration lives under one artifacts directory. The store is
//! an explicit context value passed to whatever needs file resolution
//! (the assembler, embedded includes), never ambient process state, so
//! the content model stays testable against a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::DocumentConfig;
use crate::content::ContentFile;
use crate::error::Error;

/// Resolves and loads YAML artifacts relative to a root directory.
///
/// Embedded includes resolve through the same store, recursively. A
/// cyclic include chain is not detected; configuration is trusted.
///
/// # Example
///
/// ```ignore
/// use texsmith::ArtifactStore;
///
/// let store = ArtifactStore::new("docs/artifacts");
/// let config = store.load_config("doc.yaml")?;
/// let intro = store.load_content("intro.yaml")?;
/// ```
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The artifacts root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve an artifact name against the root.
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Load a document configuration.
    ///
    /// Fails fast on malformed YAML or missing required fields; no
    /// partial document is ever produced from a bad config.
    pub fn load_config(&self, name: &str) -> Result<DocumentConfig, Error> {
        let path = self.resolve(name);
        let text = self.read(&path)?;
        log::debug!("loaded document config {}", path.display());
        DocumentConfig::from_yaml(&text).map_err(|source| Error::yaml(path, source))
    }

    /// Load a content file.
    pub fn load_content(&self, name: &str) -> Result<ContentFile, Error> {
        let path = self.resolve(name);
        let text = self.read(&path)?;
        log::debug!("loaded content file {}", path.display());
        ContentFile::from_yaml(&text).map_err(|source| Error::yaml(path, source))
    }

    fn read(&self, path: &Path) -> Result<String, Error> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(Error::missing(path)),
            Err(err) => Err(err.into()),
        }
    }
}
