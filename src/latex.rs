//! In-memory LaTeX document.
//!
//! [`LatexDocument`] is the production [`DocumentSink`]: an append-only
//! buffer of preamble and body fragments that renders to complete `.tex`
//! source via [`source`](LatexDocument::source). It carries the package
//! set the emitted markup relies on (geometry, hyperlinks, figures,
//! verbatim blocks, list spacing, running headers), so a document is
//! compilable without any caller-supplied preamble.

use crate::config::GeometryOptions;
use crate::sink::{DocumentSink, HeadingLevel};

/// Default document class.
const DEFAULT_CLASS: &str = "extarticle";

/// Default document class options.
const DEFAULT_CLASS_OPTIONS: &[&str] = &["9pt"];

/// Packages required by the markup this crate emits.
const DEFAULT_PACKAGES: &[&str] = &[
    "graphicx", "hyperref", "fancyvrb", "enumitem", "fancyhdr", "float",
];

/// An append-only LaTeX document buffer.
///
/// # Example
///
/// ```ignore
/// use texsmith::{DocumentSink, LatexDocument};
///
/// let mut doc = LatexDocument::new();
/// doc.push_preamble("\\setlength{\\parindent}{0pt}");
/// doc.append_text("Hello.");
/// let tex = doc.source();
/// ```
#[derive(Debug, Clone)]
pub struct LatexDocument {
    class: String,
    class_options: Vec<String>,
    packages: Vec<String>,
    geometry: Option<GeometryOptions>,
    preamble: Vec<String>,
    body: Vec<String>,
}

impl Default for LatexDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl LatexDocument {
    /// Create a document with the default class, options and packages.
    pub fn new() -> Self {
        Self {
            class: DEFAULT_CLASS.to_string(),
            class_options: DEFAULT_CLASS_OPTIONS.iter().map(|s| s.to_string()).collect(),
            packages: DEFAULT_PACKAGES.iter().map(|s| s.to_string()).collect(),
            geometry: None,
            preamble: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Override the document class.
    pub fn with_class(mut self, class: impl Into<String>, options: &[&str]) -> Self {
        self.class = class.into();
        self.class_options = options.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Register page geometry. Emitted as options to the geometry package.
    pub fn set_geometry(&mut self, geometry: &GeometryOptions) {
        self.geometry = Some(geometry.clone());
    }

    /// Append a raw preamble line verbatim. Caller-supplied preamble is
    /// trusted and never escaped.
    pub fn push_preamble(&mut self, line: impl Into<String>) {
        self.preamble.push(line.into());
    }

    /// Body fragments appended so far.
    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// Render the complete `.tex` source.
    pub fn source(&self) -> String {
        let mut out = String::new();
        if self.class_options.is_empty() {
            out.push_str(&format!("\\documentclass{{{}}}\n", self.class));
        } else {
            out.push_str(&format!(
                "\\documentclass[{}]{{{}}}\n",
                self.class_options.join(","),
                self.class
            ));
        }
        if let Some(geometry) = &self.geometry {
            out.push_str(&format!(
                "\\usepackage[top={},bottom={},left={},right={}]{{geometry}}\n",
                geometry.top, geometry.bottom, geometry.left, geometry.right
            ));
        }
        for package in &self.packages {
            out.push_str(&format!("\\usepackage{{{package}}}\n"));
        }
        for line in &self.preamble {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("\\begin{document}\n");
        for fragment in &self.body {
            out.push_str(fragment);
            out.push('\n');
        }
        out.push_str("\\end{document}\n");
        out
    }
}

impl DocumentSink for LatexDocument {
    fn append_heading(&mut self, level: HeadingLevel, text: &str) {
        self.body.push(format!("\\{}{{{text}}}", level.command()));
    }

    fn append_label(&mut self, name: &str) {
        self.body.push(format!("\\label{{{name}}}"));
    }

    fn append_text(&mut self, text: &str) {
        self.body.push(text.to_string());
    }

    fn append_raw(&mut self, markup: &str) {
        self.body.push(markup.to_string());
    }

    fn append_paragraph_break(&mut self) {
        self.body.push("\\par\\vspace{\\baselineskip}".to_string());
    }

    fn begin_list(&mut self) {
        self.body.push("\\begin{itemize}[topsep=0pt]".to_string());
    }

    fn end_list(&mut self) {
        self.body.push("\\end{itemize}".to_string());
    }

    fn append_list_item(&mut self, marker_text: &str) {
        self.body.push(format!("\\item {marker_text}"));
    }

    fn begin_figure(&mut self, placement: &str) {
        self.body.push(format!("\\begin{{figure}}[{placement}]"));
        self.body.push("\\centering".to_string());
    }

    fn end_figure(&mut self) {
        self.body.push("\\end{figure}".to_string());
    }

    fn set_image(&mut self, path: &str, width: &str) {
        self.body
            .push(format!("\\includegraphics[width={width}]{{{path}}}"));
    }

    fn append_caption(&mut self, text: &str) {
        self.body.push(format!("\\caption{{{text}}}"));
    }
}
