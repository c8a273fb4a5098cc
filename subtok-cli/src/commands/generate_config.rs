//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the scripts and depth policy");
        println!("2. Validate your configuration:");
        println!("   subtok validate --config {}", self.output.display());
        println!("3. Use it for tokenizing:");
        println!(
            "   subtok tokenize -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Commented configuration template
pub const TEMPLATE: &str = r#"# subtok tokenizer configuration

# How deep the subtoken window reaches, by word length in characters.
[depth]
# "interpolated", "unbounded" or "fixed"
policy = "interpolated"
# Words up to max_length characters get max_depth
max_length = 10
max_depth = 10
# Words of min_length characters or more get min_depth
min_length = 18
min_depth = 2
# Only used by policy = "fixed":
# depth = 4

[output]
# "language" (dominant language and base span) or "depth"
annotation = "language"

# Registered scripts. A letter's language is the index of the first script
# that contains it, so order matters.
[[scripts]]
name = "Latin"

[[scripts]]
name = "Cyrillic"

# A custom table: inclusive code point ranges, the name is only a label.
# [[scripts]]
# name = "ascii-vowels"
# ranges = [[0x61, 0x61], [0x65, 0x65], [0x69, 0x69], [0x6F, 0x6F], [0x75, 0x75]]
"#;
