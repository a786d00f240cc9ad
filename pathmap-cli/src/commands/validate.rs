//! Command to validate a pathmap configuration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathmap::config::{ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate a pathmap configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Check file exists
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        // 2. Parse the file
        let config = match ConfigLoader::load_file(&self.config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        // 3. Validate; warnings are logged by the validator
        if let Err(e) = ConfigValidator::validate(&config) {
            eprintln!("Validation error: {e}");
            return Err(CliError::SemanticFailure(
                "Configuration validation failed".to_string(),
            ));
        }

        match ConfigValidator::warnings(&config).len() {
            0 => println!("Configuration is valid"),
            1 => println!("Configuration is valid (1 warning)"),
            n => println!("Configuration is valid ({n} warnings)"),
        }
        Ok(())
    }
}
