//! Command to print the detected style of each path.

use crate::error::CliError;
use crate::utils::{collect_paths, load_configuration, print_records, GlobalOptions};
use clap::Args;
use pathmap::config::OutputFormat;
use pathmap::detect_style;

/// Print `windows` for paths starting with a drive and `posix` otherwise.
#[derive(Args)]
pub struct DetectCommand {
    /// Paths to inspect (read from stdin, one per line, when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Output format (defaults to the configured `output_format`, then plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl DetectCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let format = match self.format {
            Some(format) => format,
            None => load_configuration(global)?.output_format.unwrap_or_default(),
        };

        let records: Vec<(String, String)> = collect_paths(self.paths)?
            .into_iter()
            .map(|path| {
                let style = detect_style(&path).to_string();
                (path, style)
            })
            .collect();

        print_records(format, "style", &records)
    }
}
