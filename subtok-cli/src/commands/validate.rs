//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use subtok_core::language::DepthConfig;
use subtok_core::TokenizerConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match Self::check(&self.config) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                print!("{}", describe(&config));
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }

    /// Load the file and build the registry, which resolves every script name
    fn check(path: &Path) -> subtok_core::Result<TokenizerConfig> {
        let config = TokenizerConfig::from_file(path)?;
        config.to_config()?;
        Ok(config)
    }
}

/// Summary of a valid configuration
fn describe(config: &TokenizerConfig) -> String {
    let mut summary = String::new();

    let scripts: Vec<_> = config
        .scripts
        .iter()
        .enumerate()
        .map(|(index, script)| format!("{} ({index})", script.name))
        .collect();
    if scripts.is_empty() {
        summary.push_str("  Scripts: none\n");
    } else {
        summary.push_str(&format!("  Scripts: {}\n", scripts.join(", ")));
    }

    let policy = match config.depth {
        DepthConfig::Interpolated {
            max_length,
            max_depth,
            min_length,
            min_depth,
        } => format!("interpolated ({max_length}, {max_depth}) to ({min_length}, {min_depth})"),
        DepthConfig::Unbounded => "unbounded".to_string(),
        DepthConfig::Fixed { depth } => format!("fixed ({depth})"),
    };
    summary.push_str(&format!("  Depth policy: {policy}\n"));
    summary.push_str(&format!(
        "  Annotation: {:?}\n",
        config.output.annotation
    ));
    summary
}
