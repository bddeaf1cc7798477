//! Floating figures.

use serde::Deserialize;

use crate::normalize::normalize;
use crate::sink::DocumentSink;

fn default_width() -> String {
    "0.8\\textwidth".to_string()
}

fn default_placement() -> String {
    // h=here, t=top, b=bottom, p=page; use "H" for exact placement.
    "htbp".to_string()
}

/// An image record (`type: image`).
#[derive(Debug, Clone, Deserialize)]
pub struct ImageBlock {
    /// Image path as referenced from the document.
    pub src: String,
    /// Caption text, normalized on render.
    pub caption: String,
    /// Optional anchor label.
    pub label: Option<String>,
    /// Image width, e.g. `0.8\textwidth`.
    #[serde(default = "default_width")]
    pub width: String,
    /// Float placement hint.
    #[serde(default = "default_placement")]
    pub placement: String,
}

impl ImageBlock {
    /// Render the figure: image, caption, optional anchor, trailing
    /// space.
    pub fn render(&self, sink: &mut dyn DocumentSink) {
        sink.begin_figure(&self.placement);
        sink.set_image(&self.src, &self.width);
        sink.append_caption(&normalize(&self.caption));
        if let Some(label) = &self.label {
            sink.append_label(label);
        }
        sink.end_figure();
        sink.append_raw("\\vspace{\\baselineskip}");
    }
}
