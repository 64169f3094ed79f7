extern crate rsq;

use anyhow::bail;
use clap::{Args, Parser};
use rsq::catalog::PriceCatalog;
use rsq::output::FileOutput;
use rsq::report::render_quotation_text;
use rsq::run_project;
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct QuoteArgs {
    /// Path to the quotation request JSON file.
    input_file: String,
    #[command(flatten)]
    catalog_files: CatalogFiles,
    /// Derive the quotation and print the summary without writing report files.
    #[arg(long, short, default_value_t = false)]
    no_export: bool,
}

/// Price catalog CSVs; provide all three or none (the built-in tables are
/// used when none are given).
#[derive(Args, Clone, Default, Debug)]
struct CatalogFiles {
    /// CSV with columns Brand,PricePerW.
    #[arg(long)]
    panel_prices: Option<String>,
    /// CSV with columns Brand,Price.
    #[arg(long)]
    inverter_prices: Option<String>,
    /// CSV with columns Brand,PricePerkWh.
    #[arg(long)]
    battery_prices: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = QuoteArgs::parse();

    let catalog = match args.catalog_files {
        CatalogFiles {
            panel_prices: Some(panel),
            inverter_prices: Some(inverter),
            battery_prices: Some(battery),
        } => PriceCatalog::from_csv(
            BufReader::new(File::open(panel)?),
            BufReader::new(File::open(inverter)?),
            BufReader::new(File::open(battery)?),
        )?,
        CatalogFiles {
            panel_prices: None,
            inverter_prices: None,
            battery_prices: None,
        } => PriceCatalog::default(),
        _ => bail!(
            "Provide all three catalog files (--panel-prices, --inverter-prices, \
            --battery-prices) or none to use the built-in tables"
        ),
    };

    let input_path = Path::new(&args.input_file);
    let input_file_stem = input_path
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("quotation");
    let output_directory = match input_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // writes e.g. {stem}_breakdown.csv and {stem}_quotation.txt next to the input
    let output = FileOutput::new(
        output_directory.to_path_buf(),
        format!("{input_file_stem}_{{}}"),
    );

    let input = BufReader::new(File::open(input_path)?);
    let document = if args.no_export {
        run_project(input, &catalog, rsq::output::SinkOutput)?
    } else {
        run_project(input, &catalog, output)?
    };

    print!("{}", render_quotation_text(&document));

    Ok(())
}
