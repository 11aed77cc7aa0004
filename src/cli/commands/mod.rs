//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod extract;
mod models;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "lensocr")]
#[command(about = "Extract text and entities from images with a local vision model")]
#[command(version)]
pub struct Cli {
    /// Config file path (defaults to $CONFIG_DIR/lensocr/config.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web interface
    Serve {
        /// Bind address: port, host, or host:port (overrides config)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Extract text from a single image file
    Extract {
        /// Image to process (png, jpg, jpeg, bmp, gif)
        image: PathBuf,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List models available on the Ollama server
    Models,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| settings.server.bind.clone());
            serve::cmd_serve(&settings, &bind).await
        }
        Commands::Extract { image, json } => extract::cmd_extract(&settings, &image, json).await,
        Commands::Models => models::cmd_models(&settings).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extract() {
        let cli = Cli::try_parse_from(["lensocr", "extract", "card.png", "--json", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Extract { image, json } => {
                assert_eq!(image, PathBuf::from("card.png"));
                assert!(json);
            }
            _ => panic!("expected extract"),
        }
    }

    #[test]
    fn test_parse_serve_with_config() {
        let cli =
            Cli::try_parse_from(["lensocr", "--config", "lens.toml", "serve", "-b", "9000"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("lens.toml")));
        assert!(matches!(cli.command, Commands::Serve { bind: Some(ref b) } if b == "9000"));
    }

    #[test]
    fn test_extract_requires_image() {
        assert!(Cli::try_parse_from(["lensocr", "extract"]).is_err());
    }
}
