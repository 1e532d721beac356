//! JSON I/O for roll configurations and computed quantities.

use crate::calc::config::RollConfig;
use crate::calc::result::QuantityResult;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::info;

/// Reads a roll configuration from a JSON file and validates it.
///
/// Fields missing from the file keep their default value.
///
/// # Example
/// ```no_run
/// use terrace_rolls::io::read_config;
/// use std::path::Path;
///
/// let config = read_config(Path::new("rolls.json")).unwrap();
/// println!("Membrane roll: {} m²", config.surface_roll_area);
/// ```
pub fn read_config(path: &Path) -> Result<RollConfig> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let config: RollConfig = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to deserialize roll config from: {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid roll config in: {}", path.display()))?;

    info!(path = %path.display(), "Loaded roll configuration");
    Ok(config)
}

/// Writes a roll configuration to a JSON file.
pub fn write_config(path: &Path, config: &RollConfig) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, config)
        .with_context(|| format!("Failed to serialize roll config to: {}", path.display()))?;

    Ok(())
}

/// Writes computed quantities to a JSON file.
pub fn write_result(path: &Path, result: &QuantityResult) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, result)
        .with_context(|| format!("Failed to serialize quantities to: {}", path.display()))?;

    info!(path = %path.display(), "Wrote quantities");
    Ok(())
}

/// Reads computed quantities from a JSON file.
pub fn read_result(path: &Path) -> Result<QuantityResult> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let result: QuantityResult = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to deserialize quantities from: {}", path.display()))?;

    Ok(result)
}

/// Serializes quantities to a JSON string.
pub fn to_json_string(result: &QuantityResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize quantities to string")
}

/// Deserializes quantities from a JSON string.
pub fn from_json_string(json: &str) -> Result<QuantityResult> {
    serde_json::from_str(json).context("Failed to deserialize quantities from string")
}
