use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

use qadoc::{
    convert_file, document::load_document, export::export_records, ConvertOptions,
    DocumentError, ExportFormat, Variant,
};

#[derive(Parser)]
#[command(name = "qadoc")]
#[command(about = "Convert Q:/A: formatted documents into CSV and JSON")]
#[command(version)]
struct Cli {
    /// Input document (.pdf, or .doc/.docx holding plain text)
    input: PathBuf,

    /// Converter variant: accepted inputs and output file suffix
    #[arg(long, value_enum, default_value_t = Variant::PdfAndWord)]
    variant: Variant,

    /// Print one format to stdout instead of writing files
    #[arg(long, value_enum)]
    export: Option<ExportFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => Ok(()),
        Err(err) => match err.downcast_ref::<DocumentError>() {
            Some(DocumentError::UnsupportedFormat { extension, variant }) => {
                tracing::debug!("Rejected extension {:?} for variant {}", extension, variant);
                println!("{}", variant.unsupported_message());
                std::process::exit(1);
            }
            _ => Err(err),
        },
    }
}

fn run(cli: &Cli) -> Result<()> {
    if let Some(format) = cli.export {
        let document = load_document(&cli.input, cli.variant)?;
        let output = export_records(&document.records, format)?;
        if output.ends_with('\n') {
            print!("{output}");
        } else {
            println!("{output}");
        }
        return Ok(());
    }

    let options = ConvertOptions {
        variant: cli.variant,
    };
    let summary = convert_file(&cli.input, &options)?;
    println!("{}", summary.confirmation());
    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
