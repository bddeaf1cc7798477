//! Unprocessed fixed-width blocks.

use serde::Deserialize;

use super::{default_font_size, default_true};
use crate::sink::DocumentSink;

/// A verbatim record (`type: code`).
///
/// The body is emitted with no normalization at all, wrapped in a
/// verbatim environment at the configured font size.
#[derive(Debug, Clone, Deserialize)]
pub struct VerbatimBlock {
    /// Block body, reproduced exactly.
    pub text: String,
    /// Whether vertical space follows the block.
    #[serde(default = "default_true")]
    pub newline: bool,
    /// LaTeX font size name, e.g. `small` or `footnotesize`.
    #[serde(default = "default_font_size")]
    pub font_size: String,
}

impl VerbatimBlock {
    /// Render the block and optional trailing space.
    pub fn render(&self, sink: &mut dyn DocumentSink) {
        sink.append_raw(&format!(
            "{{\\{}\n\\begin{{verbatim}}\n{}\n\\end{{verbatim}}}}",
            self.font_size, self.text
        ));
        if self.newline {
            sink.append_raw("\\vspace{\\baselineskip}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::recording::{Op, RecordingSink};

    #[test]
    fn test_body_untouched() {
        let block: VerbatimBlock =
            serde_yaml::from_str("{ text: \"x_1 = 50% # raw\" }").unwrap();
        let mut sink = RecordingSink::new();
        block.render(&mut sink);
        match &sink.ops[0] {
            Op::Raw(markup) => {
                assert!(markup.contains("x_1 = 50% # raw"));
                assert!(markup.starts_with("{\\small\n\\begin{verbatim}"));
                assert!(markup.ends_with("\\end{verbatim}}"));
            }
            other => panic!("expected raw markup, got {other:?}"),
        }
        assert_eq!(sink.ops[1], Op::Raw("\\vspace{\\baselineskip}".into()));
    }

    #[test]
    fn test_font_size_override() {
        let block: VerbatimBlock =
            serde_yaml::from_str("{ text: x, font_size: footnotesize, newline: false }").unwrap();
        let mut sink = RecordingSink::new();
        block.render(&mut sink);
        assert_eq!(sink.ops.len(), 1);
        match &sink.ops[0] {
            Op::Raw(markup) => assert!(markup.starts_with("{\\footnotesize\n")),
            other => panic!("expected raw markup, got {other:?}"),
        }
    }
}
