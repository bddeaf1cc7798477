//! Markdown-flavored text normalization for LaTeX output.
//!
//! Configuration text is prose with a restricted inline syntax: backtick
//! code spans, `**bold**`, `*italic*`, `[display](url)` links, and raw
//! LaTeX commands such as `\ref{fig:one}` that must survive untouched.
//! [`normalize`] turns such a string into LaTeX-safe markup.
//!
//! # Pipeline
//!
//! ```text
//! raw text
//!    │
//!    ▼
//! split_segments          links and raw commands become typed segments,
//!    │                    everything else stays literal
//!    ▼
//! escape + format         literals only: reserved characters escaped,
//!    │                    inline markers rewritten to LaTeX macros
//!    ▼
//! reassembly              commands verbatim, links as \href{url}{display}
//! ```
//!
//! Extracting links and commands *before* escaping keeps URLs and
//! hand-authored markup intact (a URL like `https://example.com/a_b` must
//! not have its underscore escaped). Segments are a typed representation,
//! so no in-band placeholder token can ever collide with document text.
//!
//! Normalization is a single-pass transformation. Feeding its output back
//! in is unsafe: the backslashes introduced by escaping would themselves
//! be candidates for escaping on a second pass.

use std::sync::LazyLock;

use regex::Regex;

/// Markdown-style link: `[display](url)`.
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Raw LaTeX command with a braced argument: `\ref{...}`, `\label{...}`.
static COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+\{[^}]*\}").unwrap());

/// Backtick code span.
static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.+?)`").unwrap());

/// Double-asterisk bold span. Must be applied before [`ITALIC`] so that
/// `**x**` is not read as two empty italic markers.
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// Single-asterisk italic span.
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());

/// A piece of raw input classified by the extraction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain prose, still subject to escaping and inline formatting.
    Literal(String),
    /// A raw LaTeX command, reproduced verbatim.
    Command(String),
    /// A markdown link. The URL is reproduced verbatim, the display text
    /// is escaped and formatted independently.
    Link {
        /// Link text shown to the reader.
        display: String,
        /// Link target, kept exactly as written.
        url: String,
    },
}

/// Split raw text into typed segments.
///
/// Links are extracted first, then raw commands within the remaining
/// literal stretches. Malformed syntax simply never matches and falls
/// through as literal text. The pass runs once: link display text and
/// command arguments are not re-scanned.
pub fn split_segments(raw: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;
    for caps in LINK.captures_iter(raw) {
        let whole = caps.get(0).expect("match has a whole capture");
        if whole.start() > last {
            split_commands(&raw[last..whole.start()], &mut segments);
        }
        segments.push(Segment::Link {
            display: caps[1].to_string(),
            url: caps[2].to_string(),
        });
        last = whole.end();
    }
    if last < raw.len() {
        split_commands(&raw[last..], &mut segments);
    }
    segments
}

/// Split a literal stretch further into command and literal segments.
fn split_commands(text: &str, segments: &mut Vec<Segment>) {
    let mut last = 0;
    for found in COMMAND.find_iter(text) {
        if found.start() > last {
            segments.push(Segment::Literal(text[last..found.start()].to_string()));
        }
        segments.push(Segment::Command(found.as_str().to_string()));
        last = found.end();
    }
    if last < text.len() {
        segments.push(Segment::Literal(text[last..].to_string()));
    }
}

/// Escape LaTeX-reserved characters in prose.
///
/// The replacement order is fixed; none of the later replacements touch
/// the backslashes introduced by an earlier one.
fn escape_reserved(text: &str) -> String {
    text.replace('#', "\\#")
        .replace('$', "\\$")
        .replace('_', "\\_")
        .replace('&', "\\&")
        .replace('%', "\\%")
}

/// Rewrite inline markers to LaTeX font macros.
///
/// Code spans first, then bold, then italic.
fn apply_formatting(text: &str) -> String {
    let text = CODE.replace_all(text, "\\texttt{${1}}");
    let text = BOLD.replace_all(&text, "\\textbf{${1}}");
    ITALIC.replace_all(&text, "\\textit{${1}}").into_owned()
}

/// Normalize raw configuration text into LaTeX-safe markup.
///
/// # Example
///
/// ```ignore
/// use texsmith::normalize;
///
/// assert_eq!(normalize("50% done"), "50\\% done");
/// assert_eq!(normalize("*nice*"), "\\textit{nice}");
/// assert_eq!(normalize("\\ref{fig:one}"), "\\ref{fig:one}");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for segment in split_segments(raw) {
        match segment {
            Segment::Literal(text) => {
                out.push_str(&apply_formatting(&escape_reserved(&text)));
            }
            Segment::Command(command) => out.push_str(&command),
            Segment::Link { display, url } => {
                let display = apply_formatting(&escape_reserved(&display));
                out.push_str(&format!("\\href{{{url}}}{{{display}}}"));
            }
        }
    }
    out
}
