//! Unordered lists.

use serde::Deserialize;

use super::{default_font_size, default_true};
use crate::normalize::normalize;
use crate::sink::DocumentSink;

/// A list record (`type: itemize`).
#[derive(Debug, Clone, Deserialize)]
pub struct ListBlock {
    /// List items in order.
    pub items: Vec<ListItem>,
    /// Whether vertical space follows the list.
    #[serde(default = "default_true")]
    pub newline: bool,
}

/// One list item: a plain string, or a structured item mixing text and
/// code parts.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListItem {
    /// A plain text item, normalized on render.
    Plain(String),
    /// A structured item.
    Structured(StructuredItem),
}

/// A structured list item.
///
/// The modern form carries ordered [`parts`](Self::parts); the first
/// part introduces the list marker. The legacy form has top-level
/// `text`/`code` fields instead and is used when `parts` is absent.
#[derive(Debug, Clone, Deserialize)]
pub struct StructuredItem {
    /// Ordered parts; the first anchors the list marker.
    #[serde(default)]
    pub parts: Vec<ItemPart>,
    /// Font size for code parts of this item.
    #[serde(default = "default_font_size")]
    pub font_size: String,
    /// Legacy: marker text when `parts` is absent.
    #[serde(default)]
    pub text: String,
    /// Legacy: code block following the marker text when `parts` is
    /// absent.
    #[serde(default)]
    pub code: String,
}

/// One part of a structured item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemPart {
    /// A text span, normalized on render.
    Text(String),
    /// A code span, emitted unprocessed in a fixed-width block.
    Code(String),
}

impl ListBlock {
    /// Render the list and optional trailing space.
    pub fn render(&self, sink: &mut dyn DocumentSink) {
        sink.begin_list();
        for item in &self.items {
            match item {
                ListItem::Plain(text) => sink.append_list_item(&normalize(text)),
                ListItem::Structured(item) => item.render(sink),
            }
        }
        sink.end_list();
        if self.newline {
            sink.append_raw("\\vspace{\\baselineskip}");
        }
    }
}

impl StructuredItem {
    fn render(&self, sink: &mut dyn DocumentSink) {
        if self.parts.is_empty() {
            self.render_legacy(sink);
            return;
        }
        for (index, part) in self.parts.iter().enumerate() {
            let first = index == 0;
            match part {
                ItemPart::Text(text) => {
                    if first {
                        sink.append_list_item(&normalize(text));
                    } else {
                        sink.append_text(&normalize(text));
                    }
                }
                ItemPart::Code(code) => {
                    if first {
                        sink.append_list_item("");
                    }
                    self.append_code(sink, code);
                }
            }
        }
    }

    fn render_legacy(&self, sink: &mut dyn DocumentSink) {
        sink.append_list_item(&normalize(&self.text));
        if !self.code.is_empty() {
            self.append_code(sink, &self.code);
        }
    }

    fn append_code(&self, sink: &mut dyn DocumentSink, code: &str) {
        sink.append_raw(&format!(
            "\\begin{{Verbatim}}[fontsize=\\{}]\n{}\n\\end{{Verbatim}}\n",
            self.font_size,
            code.trim_end()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::recording::{Op, RecordingSink};

    fn render(yaml: &str) -> Vec<Op> {
        let block: ListBlock = serde_yaml::from_str(yaml).unwrap();
        let mut sink = RecordingSink::new();
        block.render(&mut sink);
        sink.ops
    }

    #[test]
    fn test_plain_items() {
        let ops = render("{ items: [\"first\", \"50% second\"], newline: false }");
        assert_eq!(
            ops,
            vec![
                Op::BeginList,
                Op::ListItem("first".into()),
                Op::ListItem("50\\% second".into()),
                Op::EndList,
            ]
        );
    }

    #[test]
    fn test_structured_parts() {
        let ops = render(
            r#"
items:
  - parts:
      - text: "run the tool:"
      - code: "tool --flag"
      - text: "then inspect"
    font_size: footnotesize
newline: false
"#,
        );
        assert_eq!(ops[0], Op::BeginList);
        assert_eq!(ops[1], Op::ListItem("run the tool:".into()));
        match &ops[2] {
            Op::Raw(markup) => {
                assert!(markup.contains("fontsize=\\footnotesize"));
                assert!(markup.contains("tool --flag"));
            }
            other => panic!("expected raw code block, got {other:?}"),
        }
        assert_eq!(ops[3], Op::Text("then inspect".into()));
        assert_eq!(ops[4], Op::EndList);
    }

    #[test]
    fn test_code_first_part_still_gets_marker() {
        let ops = render("{ items: [{ parts: [{ code: \"x\" }] }], newline: false }");
        assert_eq!(ops[1], Op::ListItem(String::new()));
        assert!(matches!(&ops[2], Op::Raw(markup) if markup.contains("\\begin{Verbatim}")));
    }

    #[test]
    fn test_legacy_item() {
        let ops = render("{ items: [{ text: label, code: \"cmd --run\" }], newline: false }");
        assert_eq!(ops[1], Op::ListItem("label".into()));
        assert!(matches!(&ops[2], Op::Raw(markup) if markup.contains("cmd --run")));
    }

    #[test]
    fn test_trailing_space() {
        let ops = render("{ items: [a] }");
        assert_eq!(*ops.last().unwrap(), Op::Raw("\\vspace{\\baselineskip}".into()));
    }
}
