use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use terrace_rolls::io::{read_config, to_json_string, write_result};
use terrace_rolls::{BillOfMaterials, FormulaSheet, RawInput, RollConfig, compute_with};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Waterproofing roll quantities for a flat roof terrace.
#[derive(Parser, Debug)]
#[command(name = "terrace-rolls", version)]
struct Args {
    /// Terrace length in m
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    length: String,

    /// Terrace width in m
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    width: String,

    /// Number of skylights
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    skylights: String,

    /// Skylight length in m
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    skylight_length: String,

    /// Skylight width in m
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    skylight_width: String,

    /// Count a fixed perimeter per skylight instead of its measured sides
    #[arg(long)]
    fixed_skylight_perimeter: bool,

    /// Thermally insulated support (double corner strip)
    #[arg(long)]
    isolated: bool,

    /// JSON file overriding roll sizes and loss factors
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also write the quantities as JSON to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the constants and formulas, then exit
    #[arg(long)]
    formulas: bool,
}

impl Args {
    /// Form fields as typed, before normalisation.
    fn raw_input(&self) -> RawInput {
        RawInput {
            length: self.length.clone(),
            width: self.width.clone(),
            skylight_count: self.skylights.clone(),
            skylight_length: self.skylight_length.clone(),
            skylight_width: self.skylight_width.clone(),
            isolated: self.isolated,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("terrace_rolls=info")),
        )
        .init();

    let args = Args::parse();
    debug!(?args, "Parsed arguments");

    let config = match &args.config {
        Some(path) => read_config(path)?,
        None => RollConfig::new(),
    };

    if args.formulas {
        let sheet = FormulaSheet::from_config(&config);
        match args.format {
            Format::Text => print!("{sheet}"),
            Format::Json => println!("{}", serde_json::to_string_pretty(&sheet)?),
        }
        return Ok(());
    }

    let input = args.raw_input().normalize(args.fixed_skylight_perimeter);

    let Some(result) = compute_with(&config, &input) else {
        info!("No result for the given dimensions");
        println!("Enter the terrace length and width (positive numbers) to calculate.");
        return Ok(());
    };

    match args.format {
        Format::Text => println!("{}", BillOfMaterials::with_config(&result, &config)),
        Format::Json => println!("{}", to_json_string(&result)?),
    }

    if let Some(path) = &args.output {
        write_result(path, &result)?;
    }

    Ok(())
}
