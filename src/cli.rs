//! # Command Line Interface
//!
//! Serves the parameter endpoint, or validates a single parameter set offline.

use clap::{Parser, Subcommand};
use tracing::info;

use crate::api::{start_api_server, ApiState};
use crate::config::Config;
use crate::observability::{init_logging, log_config_info};
use crate::validation::{RawInput, RenderParameters};
use crate::{APP_NAME, VERSION};

#[derive(Parser, Debug)]
#[command(name = "typing-svg")]
#[command(about = "Typing SVG request parameter service")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Bind address override
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Port override
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Validate one parameter set and print the result as JSON
    Validate {
        /// Parameters as key=value, e.g. lines="Hello;World" size=24
        #[arg(value_parser = parse_key_value)]
        params: Vec<(String, String)>,
    },
}

impl Cli {
    /// Apply command line overrides on top of the environment configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
        if self.verbose {
            config.observability.log_level = "debug".to_string();
        }
        if self.json_logs {
            config.observability.json_logging = true;
        }
    }
}

fn parse_key_value(input: &str) -> Result<(String, String), String> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", input))?;
    if key.is_empty() {
        return Err(format!("missing parameter name in '{}'", input));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Run CLI commands
pub async fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    cli.apply(&mut config);
    config.validate()?;

    init_logging(&config.observability)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            log_config_info(&config);
            info!(app_name = APP_NAME, version = VERSION, "Starting typing-svg parameter service");
            start_api_server(&config.server, ApiState::default()).await?;
        }
        Commands::Validate { params } => {
            let raw: RawInput = params.into_iter().collect();
            let params = RenderParameters::from_raw(&raw)?;
            println!("{}", serde_json::to_string_pretty(&params)?);
        }
    }

    Ok(())
}
