//! CLI tool to turn a rows file into a label PDF.
//!
//! Each line of the rows file is `barcode<TAB>description<TAB>extra_id`;
//! only the barcode is required. Lines starting with `#` are ignored.

use clap::{Parser, ValueEnum};
use labels_rs::{GeneratedPdf, LabelError, LabelVariant, generate_pdf, parse_rows};
use std::fs;
use std::path::PathBuf;
use std::process;

/// Generate 4"x2" Code128 label PDFs, one label per page.
#[derive(Parser)]
#[command(name = "label-gen")]
struct Cli {
    /// Rows file (one label per line, or /dev/stdin)
    rows: PathBuf,

    /// Write the PDF here instead of the variant's default filename
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Label layout
    #[arg(long, value_enum, default_value_t = VariantArg::ExtraId)]
    variant: VariantArg,

    /// Field separator within a line
    #[arg(short, long, default_value_t = '\t')]
    delimiter: char,

    /// Show paths, variant, and debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Compact,
    Wide,
    ExtraId,
}

impl From<VariantArg> for LabelVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Compact => LabelVariant::Compact,
            VariantArg::Wide => LabelVariant::Wide,
            VariantArg::ExtraId => LabelVariant::WideWithExtraId,
        }
    }
}

/// Read rows, render, and write the PDF. Returns the generated document
/// and where it was written.
fn run(cli: &Cli) -> Result<(GeneratedPdf, PathBuf), LabelError> {
    let text = fs::read_to_string(&cli.rows)?;
    let rows = parse_rows(&text, cli.delimiter);
    log::debug!("Read {} rows from {}", rows.len(), cli.rows.display());

    let pdf = generate_pdf(&rows, cli.variant.into())?;

    let out_path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(pdf.filename));
    if let Some(parent) = out_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(&out_path, &pdf.bytes)?;

    Ok((pdf, out_path))
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let variant: LabelVariant = cli.variant.into();
    if cli.verbose {
        eprintln!("Rows:    {}", cli.rows.display());
        eprintln!("Variant: {} ({})", variant.key(), variant.title());
    }

    match run(&cli) {
        Ok((pdf, out_path)) => {
            eprintln!(
                "Generated {} labels, output: {}",
                pdf.page_count,
                out_path.display()
            );
        }
        Err(LabelError::NoValidRows) => {
            eprintln!("Warning: {}", LabelError::NoValidRows);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
