//! Document assembly.
//!
//! [`Assembler`] turns a [`DocumentConfig`] plus its content files into
//! a complete [`LatexDocument`]: geometry, caller preamble, running
//! header, the two-column title block (title, authors, affiliation,
//! date and version on the left, the barcode image on the right), the
//! abstract, the revision-history table, the table of contents, and
//! finally every content file in configured order.

use crate::artifacts::ArtifactStore;
use crate::config::DocumentConfig;
use crate::error::Error;
use crate::latex::LatexDocument;
use crate::normalize::normalize;
use crate::sink::DocumentSink;

/// Path of the title-block barcode image, relative to the render
/// working directory. Written by the `texsmith-barcode` utility.
pub const BARCODE_IMAGE: &str = "docs/images/barcode.png";

/// Builds a [`LatexDocument`] from configuration.
///
/// # Example
///
/// ```ignore
/// use texsmith::{ArtifactStore, Assembler};
///
/// let store = ArtifactStore::new("docs/artifacts");
/// let config = store.load_config("doc.yaml")?;
/// let doc = Assembler::new(&config, &store).assemble()?;
/// std::fs::write("out.tex", doc.source())?;
/// ```
pub struct Assembler<'a> {
    config: &'a DocumentConfig,
    store: &'a ArtifactStore,
}

impl<'a> Assembler<'a> {
    /// Create an assembler over a configuration and its artifact store.
    pub fn new(config: &'a DocumentConfig, store: &'a ArtifactStore) -> Self {
        Self { config, store }
    }

    /// Assemble the full document.
    pub fn assemble(&self) -> Result<LatexDocument, Error> {
        log::info!("assembling {:?}", self.config.title);
        let mut doc = LatexDocument::new();
        doc.set_geometry(&self.config.geometry_options);

        for line in &self.config.preamble {
            doc.push_preamble(line.clone());
        }
        doc.push_preamble("\\pagestyle{fancy}");
        doc.push_preamble(format!(
            "\\fancyhead[L]{{\\small \\textit{{{}}}}}",
            self.config.title
        ));

        self.push_title_block(&mut doc)?;
        doc.append_raw("\\maketitle");
        doc.append_raw("\\thispagestyle{empty}");

        doc.append_raw("\\begin{abstract}\\itshape");
        doc.append_text(&normalize(self.config.abstract_text.trim()));
        doc.append_raw("\\end{abstract}");

        self.push_revision_history(&mut doc);

        doc.append_raw("\\newpage");
        doc.append_raw("\\tableofcontents");
        doc.append_raw("\\newpage");

        for name in &self.config.content {
            log::info!("rendering content file {name}");
            let file = self.store.load_content(name)?;
            file.render(&mut doc, self.store)?;
        }
        Ok(doc)
    }

    /// Title-block preamble: a left-aligned maketitle with the barcode
    /// image in a right-hand column, plus title, author and date fields.
    fn push_title_block(&self, doc: &mut LatexDocument) -> Result<(), Error> {
        let barcode_line =
            format!("    \\includegraphics[width=0.75\\textwidth]{{{BARCODE_IMAGE}}}");
        doc.push_preamble(
            [
                "\\makeatletter",
                "\\renewcommand{\\maketitle}{%",
                "  \\bgroup\\setlength{\\parindent}{0pt}%",
                "  \\noindent",
                "  \\begin{minipage}[t]{0.7\\textwidth}",
                "    \\vspace{0pt}%",
                "    \\raggedright",
                "    {\\Large \\@title}\\\\[1em]",
                "    \\@author\\\\[1em]",
                "    \\@date",
                "  \\end{minipage}%",
                "  \\hfill",
                "  \\begin{minipage}[t]{0.25\\textwidth}",
                "    \\vspace{0pt}%",
                "    \\raggedleft",
                barcode_line.as_str(),
                "  \\end{minipage}",
                "  \\egroup",
                "  \\vspace{2em}",
                "}",
                "\\makeatother",
            ]
            .join("\n"),
        );

        doc.push_preamble(format!("\\title{{{}}}", normalize(&self.config.title)));

        let domain = self.config.email_domain.as_deref();
        let authors = self
            .config
            .authors()
            .iter()
            .map(|author| author.format(domain))
            .collect::<Vec<_>>()
            .join(" \\\\ ");
        doc.push_preamble(format!("\\author{{{authors}}}"));

        doc.push_preamble(format!(
            "\\date{{{{\\large \\textit{{{}}}}}\\\\[2em]\\textit{{{}}}\\\\[0.5em]\\textit{{Version {}}}}}",
            self.config.affiliation,
            self.config.latest_date()?,
            self.config.version()
        ));
        Ok(())
    }

    /// Conditional revision-history table. Entries with several
    /// description lines render the first in the main row and the rest
    /// as continuation rows with blank version and date cells.
    fn push_revision_history(&self, doc: &mut LatexDocument) {
        let revisions = &self.config.revision_history;
        if revisions.is_empty() {
            return;
        }
        doc.append_raw("\\vspace{1em}");
        doc.append_raw("\\begin{center}\\textit{Revision History}\\end{center}");
        doc.append_raw("\\begin{center}");
        doc.append_raw("\\small");
        doc.append_raw("\\renewcommand{\\arraystretch}{1.75}");
        doc.append_raw("\\begin{tabular}{@{}rll@{}}");
        doc.append_raw("\\textit{Version} & \\textit{Date} & \\textit{Description} \\\\");
        doc.append_raw("\\hline");
        for rev in revisions {
            let first = rev.description.first().map(String::as_str).unwrap_or("");
            doc.append_raw(&format!(
                "{} & {} & {} \\\\",
                rev.version,
                rev.date,
                normalize(first)
            ));
            for line in rev.description.iter().skip(1) {
                doc.append_raw(&format!("& & {} \\\\", normalize(line)));
            }
        }
        doc.append_raw("\\end{tabular}");
        doc.append_raw("\\end{center}");
        doc.append_raw("\\newpage");
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::config::DocumentConfig;

    fn test_config(revision_history: &str) -> DocumentConfig {
        let yaml = format!(
            r#"
title: Report
author: ["Ada Lovelace|ada", "Charles Babbage"]
affiliation: Analytical Engines Ltd
email_domain: example.org
output_file: out/report
geometry_options: {{ top: 2cm, bottom: 2cm, left: 2.5cm, right: 2.5cm }}
preamble: ['\setlength{{\parindent}}{{0pt}}']
content: [intro.yaml]
abstract: An abstract at 50% length.
{revision_history}
"#
        );
        DocumentConfig::from_yaml(&yaml).unwrap()
    }

    fn assemble(config: &DocumentConfig) -> LatexDocument {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("intro.yaml"),
            "content:\n  - { type: paragraph, text: body }\n",
        )
        .unwrap();
        let store = ArtifactStore::new(dir.path());
        Assembler::new(config, &store).assemble().unwrap()
    }

    #[test]
    fn test_title_block() {
        let config = test_config("");
        let tex = assemble(&config).source();

        assert!(tex.contains("\\title{Report}"));
        assert!(tex.contains(
            "\\author{\\textit{Ada Lovelace} (ada@example.org) \\\\ \\textit{Charles Babbage}}"
        ));
        assert!(tex.contains("\\textit{Version 0.1.0}"));
        assert!(tex.contains("\\textit{\\today}"));
        assert!(tex.contains(BARCODE_IMAGE));
        assert!(tex.contains("\\fancyhead[L]{\\small \\textit{Report}}"));
    }

    #[test]
    fn test_abstract_normalized_in_italics() {
        let config = test_config("");
        let tex = assemble(&config).source();
        assert!(tex.contains("\\begin{abstract}\\itshape"));
        assert!(tex.contains("An abstract at 50\\% length."));
    }

    #[test]
    fn test_revision_table_rows() {
        let config = test_config(
            r#"revision_history:
  - { version: "1.0", date: "2024-01-01", description: [init] }
  - { version: "1.1", date: "2024-02-01", description: [fix a, fix b] }"#,
        );
        let doc = assemble(&config);
        let rows: Vec<&String> = doc
            .body()
            .iter()
            .filter(|line| line.ends_with("\\\\") && !line.contains("\\textit"))
            .collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].as_str(), "1.0 & 2024-01-01 & init \\\\");
        assert_eq!(rows[1].as_str(), "1.1 & 2024-02-01 & fix a \\\\");
        assert_eq!(rows[2].as_str(), "& & fix b \\\\");

        let tex = doc.source();
        assert!(tex.contains("\\textit{Version 1.1}"));
        assert!(tex.contains("\\textit{February 01, 2024}"));
    }

    #[test]
    fn test_no_revision_table_when_empty() {
        let config = test_config("");
        let tex = assemble(&config).source();
        assert!(!tex.contains("Revision History"));
    }

    #[test]
    fn test_content_rendered_after_toc() {
        let config = test_config("");
        let tex = assemble(&config).source();
        let toc = tex.find("\\tableofcontents").unwrap();
        let body = tex.find("body").unwrap();
        assert!(toc < body);
    }
}
