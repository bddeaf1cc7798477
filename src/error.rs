//! Error type for document assembly and rendering.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Error type for texsmith failures.
///
/// This provides structured access to failures for programmatic handling,
/// while also implementing `Display` for human-readable output.
///
/// # Example
///
/// ```ignore
/// match renderer.render(&doc, &output) {
///     Ok(pdf) => { /* success */ }
///     Err(Error::Render { status, log }) => {
///         eprintln!("latexmk failed ({status}):\n{log}");
///     }
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML artifact failed to parse or validate.
    #[error("failed to load {}: {source}", path.display())]
    Yaml {
        /// Path of the offending artifact.
        path: PathBuf,
        /// The underlying deserialization error.
        source: serde_yaml::Error,
    },

    /// A referenced artifact file does not exist.
    #[error("artifact not found: {}", path.display())]
    MissingArtifact {
        /// The resolved path that was looked up.
        path: PathBuf,
    },

    /// A revision date did not match the expected `YYYY-MM-DD` form.
    #[error("invalid revision date {date:?}: expected YYYY-MM-DD")]
    Date {
        /// The raw date string from configuration.
        date: String,
    },

    /// The external LaTeX toolchain exited with a failure status.
    #[error("latexmk failed ({status})")]
    Render {
        /// Exit status of the toolchain process.
        status: ExitStatus,
        /// Tail of the captured toolchain output.
        log: String,
    },

    /// Barcode image generation failed.
    #[cfg(feature = "barcode")]
    #[error("barcode generation failed: {message}")]
    Barcode {
        /// Error message from the QR encoder or image writer.
        message: String,
    },
}

impl Error {
    /// Create a YAML loading error for the given artifact path.
    pub fn yaml(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::Yaml {
            path: path.into(),
            source,
        }
    }

    /// Create a missing-artifact error.
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        Self::MissingArtifact { path: path.into() }
    }

    /// Format this error for terminal display.
    ///
    /// Render failures include the captured toolchain log below the summary
    /// line. With the `colored-diagnostics` feature the summary is colorized.
    pub fn report(&self) -> String {
        match self {
            Self::Render { status, log } => {
                let summary = paint_error(&format!("latexmk failed ({status})"));
                if log.is_empty() {
                    summary
                } else {
                    format!("{summary}\n{log}")
                }
            }
            other => paint_error(&other.to_string()),
        }
    }
}

#[cfg(feature = "colored-diagnostics")]
fn paint_error(text: &str) -> String {
    use owo_colors::OwoColorize;
    text.red().to_string()
}

#[cfg(not(feature = "colored-diagnostics"))]
fn paint_error(text: &str) -> String {
    text.to_owned()
}
