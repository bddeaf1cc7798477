//! Prose paragraphs with optional headings and anchors.

use serde::Deserialize;

use super::default_true;
use crate::normalize::normalize;
use crate::sink::{DocumentSink, HeadingLevel};

/// A paragraph record (`type: paragraph`).
///
/// Heading fields are independent: each one set emits its heading, in
/// section → subsection → subsubsection order, before the body text.
/// Heading text is normalized; the anchor label is a typesetting
/// identifier and inserted verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct TextBlock {
    /// Body text, normalized on render.
    #[serde(default)]
    pub text: String,
    /// Optional section heading.
    pub section: Option<String>,
    /// Optional subsection heading.
    pub subsection: Option<String>,
    /// Optional subsubsection heading.
    pub subsubsection: Option<String>,
    /// Optional anchor label.
    pub label: Option<String>,
    /// Whether a paragraph break follows the body.
    #[serde(default = "default_true")]
    pub newline: bool,
}

impl TextBlock {
    /// Render headings, anchor, body and trailing break.
    pub fn render(&self, sink: &mut dyn DocumentSink) {
        if let Some(section) = &self.section {
            sink.append_heading(HeadingLevel::Section, &normalize(section));
        }
        if let Some(subsection) = &self.subsection {
            sink.append_heading(HeadingLevel::Subsection, &normalize(subsection));
        }
        if let Some(subsubsection) = &self.subsubsection {
            sink.append_heading(HeadingLevel::Subsubsection, &normalize(subsubsection));
        }
        if let Some(label) = &self.label {
            sink.append_label(label);
        }
        sink.append_text(&normalize(&self.text));
        if self.newline {
            sink.append_paragraph_break();
        }
    }
}
