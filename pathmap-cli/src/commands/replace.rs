//! Replace command implementation.
//!
//! This module implements the `replace` command, which swaps source roots
//! for destination roots using an ordered root table. Roots given with
//! `--root` are tried before the configured `roots` table.

use crate::error::CliError;
use crate::utils::{
    collect_paths, load_configuration, parse_root_args, print_records, GlobalOptions,
};
use clap::Args;
use log::debug;
use pathmap::config::OutputFormat;
use pathmap::{Platform, UniformRemapper};

/// Replace source roots with destination roots.
#[derive(Args)]
pub struct ReplaceCommand {
    /// Paths to remap (read from stdin, one per line, when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Interpret paths and roots under this platform's conventions instead
    /// of detecting each path's style
    #[arg(long, value_name = "PLATFORM")]
    pub platform: Option<String>,

    /// Extra root replacement, tried before configured roots (repeatable)
    #[arg(long = "root", value_name = "SOURCE=DESTINATION")]
    pub roots: Vec<String>,

    /// Output format
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl ReplaceCommand {
    /// Execute the replace command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Resolve the platform, if any, before reading input
        let platform = match self.platform {
            Some(ref name) => Some(name.parse::<Platform>()?),
            None => config.platform,
        };

        // 3. Command-line roots first, then configured roots
        let mut table = parse_root_args(&self.roots)?;
        if let Some(configured) = config.root_table()? {
            for (source, destination) in configured.iter() {
                table.push(source, destination);
            }
        }
        let remapper = UniformRemapper::new(table);

        // 4. Remap
        let paths = collect_paths(self.paths)?;
        let remapped = match platform {
            Some(platform) => {
                debug!("replacing roots in {} path(s) as {platform}", paths.len());
                remapper.remap_as(&paths, platform)
            }
            None => {
                debug!("replacing roots in {} path(s) by detected style", paths.len());
                remapper.remap(&paths)
            }
        };

        // 5. Format and output to stdout
        let format = self.format.or(config.output_format).unwrap_or_default();
        let records: Vec<(String, String)> = paths.into_iter().zip(remapped).collect();
        print_records(format, "output", &records)
    }
}
