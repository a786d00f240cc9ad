//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, path input and output formatting.

use crate::error::CliError;
use pathmap::config::OutputFormat;
use pathmap::{Config, ConfigBuilder, RootTable};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // `verbose` only feeds the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Additional configuration file, highest file precedence.
    pub config: Option<PathBuf>,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. `--config` file
/// 3. Project `pathmap.local.yaml` and `pathmap.yaml`
/// 4. User `config.yaml` in the data directory (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }
    if let Some(ref config) = global.config {
        builder = builder.with_config_file(config);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Use the paths given on the command line, or read them from stdin, one
/// per line, when there are none.
pub fn collect_paths(args: Vec<String>) -> Result<Vec<String>, CliError> {
    if !args.is_empty() {
        return Ok(args);
    }
    read_paths(io::stdin().lock())
}

/// Read one path per line, skipping blank lines.
pub fn read_paths(reader: impl BufRead) -> Result<Vec<String>, CliError> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            paths.push(line.to_string());
        }
    }
    Ok(paths)
}

/// Parse `--root SRC=DST` arguments into a table, in the order given.
pub fn parse_root_args(args: &[String]) -> Result<RootTable, CliError> {
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .filter(|(src, dst)| !src.is_empty() && !dst.is_empty())
                .map(|(src, dst)| (src.to_string(), dst.to_string()))
                .ok_or_else(|| {
                    CliError::InvalidArguments(format!(
                        "root '{arg}' should have the form SOURCE=DESTINATION"
                    ))
                })
        })
        .collect()
}

/// Write `(input, value)` records in the requested format.
///
/// `column` names the value column in structured formats. Plain output
/// prints only the values, one per line, so it can feed other tools.
pub fn write_records(
    out: &mut impl Write,
    format: OutputFormat,
    column: &str,
    records: &[(String, String)],
) -> Result<(), CliError> {
    match format {
        OutputFormat::Plain => {
            for (_, value) in records {
                writeln!(out, "{value}")?;
            }
        }
        OutputFormat::Json => {
            let json_data: Vec<serde_json::Value> = records
                .iter()
                .map(|(input, value)| {
                    let mut object = serde_json::Map::new();
                    object.insert("input".into(), input.clone().into());
                    object.insert(column.into(), value.clone().into());
                    serde_json::Value::Object(object)
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &json_data)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_delimited(out, b',', column, records)?,
        OutputFormat::Tsv => write_delimited(out, b'\t', column, records)?,
    }
    Ok(())
}

fn write_delimited(
    out: &mut impl Write,
    delimiter: u8,
    column: &str,
    records: &[(String, String)],
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    writer.write_record(["input", column])?;
    for (input, value) in records {
        writer.write_record([input, value])?;
    }
    writer.flush()?;

    Ok(())
}

/// Write records to stdout.
pub fn print_records(
    format: OutputFormat,
    column: &str,
    records: &[(String, String)],
) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_records(&mut handle, format, column, records)
}
