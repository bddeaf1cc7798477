//! # texsmith
//!
//! A YAML → LaTeX → PDF document assembly library.
//!
//! Structured configuration (document metadata plus an ordered list of
//! content blocks) is turned into a complete LaTeX document and handed
//! to `latexmk` for rendering. The interesting work is in two places:
//!
//! - **Normalization**: configuration text carries a restricted inline
//!   syntax (bold/italic/code spans, links, raw LaTeX passthrough) that
//!   is translated into escaped, safe LaTeX markup.
//! - **Content model**: typed content records (paragraphs, lists,
//!   images, verbatim blocks, nested includes) that each know how to
//!   render themselves through an append-only document sink.
//!
//! Everything else — the title block, revision-history table, toolchain
//! invocation — is assembly glue around those two layers.
//!
//! ## Quick Start
//!
//! ```ignore
//! use texsmith::{ArtifactStore, Assembler, Renderer};
//! use std::path::Path;
//!
//! let store = ArtifactStore::new("docs/artifacts");
//! let config = store.load_config("doc.yaml")?;
//!
//! let doc = Assembler::new(&config, &store).assemble()?;
//! let pdf = Renderer::new().render(&doc, Path::new(&config.output_file))?;
//! println!("rendered {}", pdf.display());
//! ```
//!
//! ## Modules
//!
//! - [`normalize`]: markdown-flavored text normalization
//! - [`content`]: the typed content model and YAML loader
//! - [`sink`]: the document sink abstraction
//! - [`latex`]: the in-memory LaTeX document
//! - [`config`]: the top-level document configuration schema
//! - [`artifacts`]: artifact resolution and loading
//! - [`assemble`]: document assembly
//! - [`render`]: PDF rendering via latexmk
//! - [`barcode`]: QR code generation for the title block (feature
//!   `barcode`)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod artifacts;
pub mod assemble;
#[cfg(feature = "barcode")]
pub mod barcode;
pub mod config;
pub mod content;
pub mod error;
pub mod latex;
pub mod normalize;
pub mod render;
pub mod sink;

// =============================================================================
// Prelude - import commonly used items with a single `use`
// =============================================================================

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
///
/// ```ignore
/// use texsmith::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        normalize, ArtifactStore, Assembler, ContentFile, ContentNode, DocumentConfig,
        DocumentSink, Error, HeadingLevel, LatexDocument, Renderer,
    };
}

// =============================================================================
// High-Level API
// =============================================================================

pub use artifacts::ArtifactStore;
pub use assemble::Assembler;
pub use config::{Author, DocumentConfig, GeometryOptions, RevisionEntry, DEFAULT_VERSION};
pub use content::{
    ContentFile, ContentNode, ImageBlock, IncludeRef, ItemPart, ListBlock, ListItem, TextBlock,
    VerbatimBlock,
};
pub use error::Error;
pub use latex::LatexDocument;
pub use normalize::{normalize, split_segments, Segment};
pub use render::Renderer;
pub use sink::{DocumentSink, HeadingLevel};
