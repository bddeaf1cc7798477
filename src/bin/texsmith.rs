//! texsmith - assemble and render a LaTeX document from YAML configuration.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use texsmith::{ArtifactStore, Assembler, Error, Renderer};

#[derive(Parser)]
#[command(name = "texsmith")]
#[command(version, about = "Assemble and render a LaTeX document from YAML", long_about = None)]
#[command(after_help = "EXAMPLES:
    texsmith docs/artifacts             Render docs/artifacts/doc.yaml
    texsmith docs/artifacts --no-render Write the .tex source only")]
struct Cli {
    /// Directory containing the document config and content files
    #[arg(value_name = "ARTIFACTS", default_value = "docs/artifacts")]
    artifacts: PathBuf,

    /// Document configuration file name within the artifacts directory
    #[arg(short, long, default_value = "doc.yaml")]
    config: String,

    /// Write the .tex source without invoking latexmk
    #[arg(long)]
    no_render: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(path) => {
            println!("wrote {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err.report());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf, Error> {
    let store = ArtifactStore::new(&cli.artifacts);
    let config = store.load_config(&cli.config)?;
    let doc = Assembler::new(&config, &store).assemble()?;

    let output = PathBuf::from(&config.output_file);
    let renderer = Renderer::new();
    if cli.no_render {
        renderer.write_source(&doc, &output)
    } else {
        renderer.render(&doc, &output)
    }
}
