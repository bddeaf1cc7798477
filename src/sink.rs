//! The document sink abstraction.
//!
//! Content blocks never format final typesetting syntax themselves beyond
//! small raw fragments; they describe the document as an ordered sequence
//! of append operations against a [`DocumentSink`]. The production sink is
//! [`LatexDocument`](crate::LatexDocument); tests substitute a recording
//! sink to assert on operation order without parsing LaTeX.

/// Section heading depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// Top-level section.
    Section,
    /// Second-level section.
    Subsection,
    /// Third-level section.
    Subsubsection,
}

impl HeadingLevel {
    /// The LaTeX sectioning command for this level, without backslash.
    pub fn command(self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Subsection => "subsection",
            Self::Subsubsection => "subsubsection",
        }
    }
}

/// Ordered, append-only destination for document content.
///
/// `text` arguments to [`append_heading`](Self::append_heading),
/// [`append_text`](Self::append_text),
/// [`append_list_item`](Self::append_list_item) and
/// [`append_caption`](Self::append_caption) are expected to be already
/// normalized ([`normalize`](crate::normalize)). Labels are typesetting
/// identifiers and are inserted verbatim. Raw markup goes through
/// [`append_raw`](Self::append_raw) unmodified.
pub trait DocumentSink {
    /// Emit a section heading at the given level.
    fn append_heading(&mut self, level: HeadingLevel, text: &str);

    /// Emit a cross-reference anchor. The name is not normalized.
    fn append_label(&mut self, name: &str);

    /// Emit normalized body text.
    fn append_text(&mut self, text: &str);

    /// Emit a raw markup fragment verbatim.
    fn append_raw(&mut self, markup: &str);

    /// Emit a paragraph break with trailing vertical space.
    fn append_paragraph_break(&mut self);

    /// Open an unordered list.
    fn begin_list(&mut self);

    /// Close the current unordered list.
    fn end_list(&mut self);

    /// Emit a list marker followed by the (normalized) marker text.
    fn append_list_item(&mut self, marker_text: &str);

    /// Open a floating figure with the given placement hint.
    fn begin_figure(&mut self, placement: &str);

    /// Close the current figure.
    fn end_figure(&mut self);

    /// Emit the image reference of the current figure.
    fn set_image(&mut self, path: &str, width: &str);

    /// Emit the caption of the current figure.
    fn append_caption(&mut self, text: &str);
}

#[cfg(test)]
pub(crate) mod recording {
    //! A sink that records operations for assertions.

    use super::{DocumentSink, HeadingLevel};

    /// One recorded sink operation.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Op {
        Heading(HeadingLevel, String),
        Label(String),
        Text(String),
        Raw(String),
        ParagraphBreak,
        BeginList,
        EndList,
        ListItem(String),
        BeginFigure(String),
        EndFigure,
        Image(String, String),
        Caption(String),
    }

    #[derive(Debug, Default)]
    pub struct RecordingSink {
        pub ops: Vec<Op>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl DocumentSink for RecordingSink {
        fn append_heading(&mut self, level: HeadingLevel, text: &str) {
            self.ops.push(Op::Heading(level, text.to_string()));
        }

        fn append_label(&mut self, name: &str) {
            self.ops.push(Op::Label(name.to_string()));
        }

        fn append_text(&mut self, text: &str) {
            self.ops.push(Op::Text(text.to_string()));
        }

        fn append_raw(&mut self, markup: &str) {
            self.ops.push(Op::Raw(markup.to_string()));
        }

        fn append_paragraph_break(&mut self) {
            self.ops.push(Op::ParagraphBreak);
        }

        fn begin_list(&mut self) {
            self.ops.push(Op::BeginList);
        }

        fn end_list(&mut self) {
            self.ops.push(Op::EndList);
        }

        fn append_list_item(&mut self, marker_text: &str) {
            self.ops.push(Op::ListItem(marker_text.to_string()));
        }

        fn begin_figure(&mut self, placement: &str) {
            self.ops.push(Op::BeginFigure(placement.to_string()));
        }

        fn end_figure(&mut self) {
            self.ops.push(Op::EndFigure);
        }

        fn set_image(&mut self, path: &str, width: &str) {
            self.ops.push(Op::Image(path.to_string(), width.to_string()));
        }

        fn append_caption(&mut self, text: &str) {
            self.ops.push(Op::Caption(text.to_string()));
        }
    }
}
