//! In-place inclusion of other content files.

use serde::Deserialize;

use crate::artifacts::ArtifactStore;
use crate::error::Error;
use crate::sink::DocumentSink;

/// An embed record (`type: embed`).
///
/// Resolves another content file by name relative to the artifact root
/// and renders it in place. Inclusion is recursive; configuration is
/// trusted and cycles are not detected.
#[derive(Debug, Clone, Deserialize)]
pub struct IncludeRef {
    /// Content file name, resolved by the [`ArtifactStore`].
    pub src: String,
}

impl IncludeRef {
    /// Load and render the referenced content file.
    pub fn render(&self, sink: &mut dyn DocumentSink, store: &ArtifactStore) -> Result<(), Error> {
        log::debug!("embedding content file {}", self.src);
        let file = store.load_content(&self.src)?;
        file.render(sink, store)
    }
}
