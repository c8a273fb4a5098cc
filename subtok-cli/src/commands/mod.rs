//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use subtok_core::COMMON_SCRIPTS;

pub mod generate_config;
pub mod tokenize;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract subtokens from text, files, or stdin
    Tokenize(tokenize::TokenizeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a tokenizer configuration file
    Validate(validate::ValidateArgs),

    /// Generate a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List commonly used Unicode scripts
    Scripts,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Tokenize(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Listing text, one entry per line
    pub fn render(&self) -> String {
        let mut listing = String::new();
        match self {
            ListCommands::Scripts => {
                listing.push_str("Common scripts (any Unicode script name is accepted):\n");
                for name in COMMON_SCRIPTS {
                    listing.push_str(&format!("  {name}\n"));
                }
                listing.push_str("Default registry: Latin (0), Cyrillic (1)\n");
            }
            ListCommands::Formats => {
                listing.push_str("Available output formats:\n");
                listing.push_str("  text      subtoken, language and base span per line\n");
                listing.push_str("  json      array of subtoken objects\n");
                listing.push_str("  markdown  numbered list with a total\n");
            }
        }
        listing
    }
}
