//! The content model.
//!
//! A content file is an ordered list of records, each tagged with a
//! `type` discriminator naming one of the five content kinds:
//!
//! | Discriminator | Variant | Module |
//! |---|---|---|
//! | `paragraph` | [`TextBlock`] | [`text`] |
//! | `code` | [`VerbatimBlock`] | [`verbatim`] |
//! | `itemize` | [`ListBlock`] | [`list`] |
//! | `image` | [`ImageBlock`] | [`image`] |
//! | `embed` | [`IncludeRef`] | [`embed`] |
//!
//! Nodes are built once at load time, immutable, and consumed in a
//! single rendering pass over a [`DocumentSink`]. Records with an
//! unrecognized discriminator are skipped with a warning; a record
//! missing the discriminator entirely is a schema error.

pub mod embed;
pub mod image;
pub mod list;
pub mod text;
pub mod verbatim;

pub use embed::IncludeRef;
pub use image::ImageBlock;
pub use list::{ItemPart, ListBlock, ListItem};
pub use text::TextBlock;
pub use verbatim::VerbatimBlock;

use serde::Deserialize;
use serde::de::Error as _;

use crate::artifacts::ArtifactStore;
use crate::error::Error;
use crate::normalize::normalize;
use crate::sink::{DocumentSink, HeadingLevel};

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_font_size() -> String {
    "small".to_string()
}

/// One typed content record.
#[derive(Debug, Clone)]
pub enum ContentNode {
    /// Prose paragraph, optionally with heading and anchor.
    Text(TextBlock),
    /// Unprocessed fixed-width block.
    Verbatim(VerbatimBlock),
    /// Unordered list.
    Itemize(ListBlock),
    /// Floating figure.
    Image(ImageBlock),
    /// In-place inclusion of another content file.
    Embed(IncludeRef),
}

impl ContentNode {
    /// Render this node into the sink. Embedded includes resolve their
    /// target through the store.
    pub fn render(&self, sink: &mut dyn DocumentSink, store: &ArtifactStore) -> Result<(), Error> {
        match self {
            Self::Text(block) => block.render(sink),
            Self::Verbatim(block) => block.render(sink),
            Self::Itemize(block) => block.render(sink),
            Self::Image(block) => block.render(sink),
            Self::Embed(include) => include.render(sink, store)?,
        }
        Ok(())
    }
}

/// A parsed content file: optional title and anchor, plus the node list.
#[derive(Debug, Clone)]
pub struct ContentFile {
    /// Optional section title for the whole file.
    pub title: Option<String>,
    /// Optional anchor label for the whole file.
    pub label: Option<String>,
    /// Content records in document order.
    pub nodes: Vec<ContentNode>,
}

#[derive(Deserialize)]
struct RawContentFile {
    title: Option<String>,
    label: Option<String>,
    #[serde(default)]
    content: Vec<serde_yaml::Value>,
}

impl ContentFile {
    /// Parse a content file from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        let raw: RawContentFile = serde_yaml::from_str(text)?;
        let mut nodes = Vec::with_capacity(raw.content.len());
        for record in raw.content {
            if let Some(node) = node_from_record(record)? {
                nodes.push(node);
            }
        }
        Ok(Self {
            title: raw.title,
            label: raw.label,
            nodes,
        })
    }

    /// Render the file: title heading, anchor, then every node in order.
    pub fn render(&self, sink: &mut dyn DocumentSink, store: &ArtifactStore) -> Result<(), Error> {
        if let Some(title) = &self.title {
            sink.append_heading(HeadingLevel::Section, &normalize(title));
        }
        if let Some(label) = &self.label {
            sink.append_label(label);
        }
        for node in &self.nodes {
            node.render(sink, store)?;
        }
        Ok(())
    }
}

/// Dispatch one YAML record on its `type` discriminator.
///
/// Returns `Ok(None)` for unrecognized discriminators, which are logged
/// and dropped rather than failing the whole document.
fn node_from_record(record: serde_yaml::Value) -> Result<Option<ContentNode>, serde_yaml::Error> {
    let Some(tag) = record.get("type").and_then(serde_yaml::Value::as_str) else {
        return Err(serde_yaml::Error::custom(
            "content record is missing the `type` discriminator",
        ));
    };
    let node = match tag {
        "embed" => ContentNode::Embed(serde_yaml::from_value(record)?),
        "paragraph" => ContentNode::Text(serde_yaml::from_value(record)?),
        "itemize" => ContentNode::Itemize(serde_yaml::from_value(record)?),
        "image" => ContentNode::Image(serde_yaml::from_value(record)?),
        "code" => ContentNode::Verbatim(serde_yaml::from_value(record)?),
        other => {
            log::warn!("skipping content record with unknown type {other:?}");
            return Ok(None);
        }
    };
    Ok(Some(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::recording::{Op, RecordingSink};

    fn store() -> ArtifactStore {
        ArtifactStore::new("/nonexistent")
    }

    #[test]
    fn test_parse_all_kinds() {
        let file = ContentFile::from_yaml(
            r#"
title: Overview
label: sec:overview
content:
  - { type: paragraph, text: hello }
  - { type: code, text: "x = 1" }
  - { type: itemize, items: [one, two] }
  - { type: image, src: images/a.png, caption: A }
  - { type: embed, src: other.yaml }
"#,
        )
        .unwrap();
        assert_eq!(file.nodes.len(), 5);
        assert!(matches!(file.nodes[0], ContentNode::Text(_)));
        assert!(matches!(file.nodes[4], ContentNode::Embed(_)));
    }

    #[test]
    fn test_unknown_discriminator_skipped() {
        let file = ContentFile::from_yaml(
            r#"
content:
  - { type: hologram, text: ignored }
  - { type: paragraph, text: kept }
"#,
        )
        .unwrap();
        assert_eq!(file.nodes.len(), 1);
    }

    #[test]
    fn test_missing_discriminator_fails() {
        let result = ContentFile::from_yaml("content:\n  - { text: no tag }\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_render_order() {
        let file = ContentFile::from_yaml(
            r#"
title: Overview
label: sec:overview
content:
  - { type: paragraph, text: body, newline: false }
"#,
        )
        .unwrap();
        let mut sink = RecordingSink::new();
        file.render(&mut sink, &store()).unwrap();
        assert_eq!(
            sink.ops,
            vec![
                Op::Heading(HeadingLevel::Section, "Overview".into()),
                Op::Label("sec:overview".into()),
                Op::Text("body".into()),
            ]
        );
    }
}
