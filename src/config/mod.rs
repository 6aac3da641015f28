pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;
use std::path::PathBuf;
use toml_config::FileConfig;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "age-gate")]
#[command(about = "Reads an age from stdin and reports whether it is accepted")]
pub struct CliConfig {
    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the prompt text
    #[arg(long)]
    pub prompt: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective settings after merging the config file with command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub prompt: String,
    pub log_level: Option<String>,
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file if one was given; flags take precedence over it.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        file.validate()?;
        self.validate()?;

        Ok(Settings {
            prompt: self.prompt.clone().unwrap_or(file.prompt.text),
            log_level: file.logging.level.map(|level| level.to_ascii_lowercase()),
            verbose: self.verbose,
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(prompt) = &self.prompt {
            validate_non_empty_string("--prompt", prompt)?;
        }
        Ok(())
    }
}
