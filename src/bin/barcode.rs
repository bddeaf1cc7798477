//! texsmith-barcode - encode a URL into the title-block QR image.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use texsmith::assemble::BARCODE_IMAGE;
use texsmith::barcode;

#[derive(Parser)]
#[command(name = "texsmith-barcode")]
#[command(version, about = "Generate the title-block QR code image", long_about = None)]
struct Cli {
    /// Data to encode, typically the project URL
    #[arg(value_name = "URL")]
    url: String,

    /// Output image path
    #[arg(short, long, default_value = BARCODE_IMAGE)]
    out: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match barcode::write_png(&cli.url, &cli.out) {
        Ok(()) => {
            println!("wrote {}", cli.out.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err.report());
            ExitCode::FAILURE
        }
    }
}
