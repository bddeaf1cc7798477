//! PDF rendering via the external LaTeX toolchain.
//!
//! The renderer writes the assembled `.tex` source next to the output
//! path and hands compilation to `latexmk`. Toolchain failures are not
//! interpreted; the exit status and the tail of the captured output are
//! surfaced in [`Error::Render`].
//!
//! latexmk keeps a build-state file (`<output>.fdb_latexmk`) between
//! runs and refuses to proceed after a previously failed invocation, so
//! any stale state file is removed before compiling.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::Error;
use crate::latex::LatexDocument;

/// How many trailing output lines a render failure carries.
const LOG_TAIL_LINES: usize = 40;

/// Builder for PDF rendering.
///
/// # Example
///
/// ```ignore
/// use texsmith::Renderer;
/// use std::path::Path;
///
/// let pdf = Renderer::new().render(&doc, Path::new("out/report"))?;
/// ```
#[derive(Debug, Clone)]
pub struct Renderer {
    program: String,
    keep_tex: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Create a renderer invoking `latexmk`.
    pub fn new() -> Self {
        Self {
            program: "latexmk".to_string(),
            keep_tex: true,
        }
    }

    /// Override the toolchain program.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Remove the generated `.tex` source after a successful render.
    /// The source is kept by default.
    pub fn with_keep_tex(mut self, keep: bool) -> Self {
        self.keep_tex = keep;
        self
    }

    /// Write the `.tex` source for the document without compiling.
    ///
    /// Returns the path of the written source. The parent directory is
    /// created if needed.
    pub fn write_source(&self, doc: &LatexDocument, output: &Path) -> Result<PathBuf, Error> {
        let tex_path = output.with_extension("tex");
        if let Some(parent) = parent_dir(output) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tex_path, doc.source())?;
        Ok(tex_path)
    }

    /// Render the document to `<output>.pdf`.
    ///
    /// Writes the source, clears stale latexmk state, and invokes the
    /// toolchain in the output directory. Returns the PDF path.
    pub fn render(&self, doc: &LatexDocument, output: &Path) -> Result<PathBuf, Error> {
        let tex_path = self.write_source(doc, output)?;

        let state_file = output.with_extension("fdb_latexmk");
        if state_file.exists() {
            log::debug!("removing stale build state {}", state_file.display());
            fs::remove_file(&state_file)?;
        }

        let tex_name = tex_path
            .file_name()
            .map(OsStr::to_os_string)
            .unwrap_or_else(|| tex_path.as_os_str().to_os_string());
        log::info!("running {} on {}", self.program, tex_path.display());

        let mut command = Command::new(&self.program);
        command.args(["-pdf", "-interaction=nonstopmode"]).arg(tex_name);
        if let Some(dir) = parent_dir(output) {
            command.current_dir(dir);
        }
        let captured = command.output()?;

        if !captured.status.success() {
            return Err(Error::Render {
                status: captured.status,
                log: log_tail(&captured.stdout, &captured.stderr),
            });
        }

        if !self.keep_tex {
            fs::remove_file(&tex_path)?;
        }
        Ok(output.with_extension("pdf"))
    }
}

/// The parent directory of an output path, if it names one.
fn parent_dir(output: &Path) -> Option<&Path> {
    output.parent().filter(|dir| !dir.as_os_str().is_empty())
}

/// The last [`LOG_TAIL_LINES`] lines of the combined toolchain output.
fn log_tail(stdout: &[u8], stderr: &[u8]) -> String {
    let combined = format!(
        "{}{}",
        String::from_utf8_lossy(stdout),
        String::from_utf8_lossy(stderr)
    );
    let lines: Vec<&str> = combined.lines().collect();
    let start = lines.len().saturating_sub(LOG_TAIL_LINES);
    lines[start..].join("\n")
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn doc() -> LatexDocument {
        use crate::sink::DocumentSink;

        let mut doc = LatexDocument::new();
        doc.append_text("body");
        doc
    }

    #[test]
    fn test_write_source() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("nested/report");
        let tex = Renderer::new().write_source(&doc(), &output).unwrap();
        assert_eq!(tex, dir.path().join("nested/report.tex"));
        let text = fs::read_to_string(tex).unwrap();
        assert!(text.contains("\\begin{document}"));
    }

    #[test]
    fn test_failure_carries_status_and_log() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("report");
        // `false` exits non-zero without reading its arguments.
        let err = Renderer::new()
            .with_program("false")
            .render(&doc(), &output)
            .unwrap_err();
        assert!(matches!(err, Error::Render { .. }));
    }

    #[test]
    fn test_stale_state_removed() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("report");
        let state = dir.path().join("report.fdb_latexmk");
        fs::write(&state, "stale").unwrap();
        // `true` exits zero; render succeeds without a real toolchain.
        Renderer::new()
            .with_program("true")
            .render(&doc(), &output)
            .unwrap();
        assert!(!state.exists());
    }

    #[test]
    fn test_missing_program_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = Renderer::new()
            .with_program("definitely-not-a-real-latexmk")
            .render(&doc(), &dir.path().join("report"))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_log_tail_truncates() {
        let many: String = (0..100).map(|i| format!("line {i}\n")).collect();
        let tail = log_tail(many.as_bytes(), b"");
        assert!(tail.starts_with("line 60"));
        assert!(tail.ends_with("line 99"));
    }
}
