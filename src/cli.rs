//! Command line interface.
//!
//! `-h` is taken by `--host`, so help is only reachable as `--help`.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::{load_config, validate_config, ConfigError, ServiceConfig};

#[derive(Debug, Parser)]
#[command(name = "bank-registry")]
#[command(version, about = "Serve a JSON bank registry as XML over HTTP", long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Path to the JSON file with bank records
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Address to bind the HTTP listener to
    #[arg(short = 'h', long, value_name = "ADDRESS")]
    pub host: String,

    /// Port to bind the HTTP listener to
    #[arg(short, long, value_name = "NUMBER")]
    pub port: u16,

    /// Optional TOML file with logging and rendering settings
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

impl Cli {
    /// Build the effective configuration: defaults, then the config file,
    /// then the command line flags.
    pub fn into_config(self) -> Result<ServiceConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ServiceConfig::default(),
        };

        config.listener.host = self.host;
        config.listener.port = self.port;
        config.data.input = self.input;

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}
