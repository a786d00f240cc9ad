//! Command to print normalized paths.

use crate::error::CliError;
use crate::utils::{collect_paths, load_configuration, print_records, GlobalOptions};
use clap::Args;
use pathmap::config::OutputFormat;
use pathmap::normalize;

/// Print paths with repeated separators and back-references collapsed.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Paths to normalize (read from stdin, one per line, when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Output format (defaults to the configured `output_format`, then plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let format = match self.format {
            Some(format) => format,
            None => load_configuration(global)?.output_format.unwrap_or_default(),
        };

        let records: Vec<(String, String)> = collect_paths(self.paths)?
            .into_iter()
            .map(|path| {
                let normalized = normalize(&path);
                (path, normalized)
            })
            .collect();

        print_records(format, "normalized", &records)
    }
}
