use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{sample, serve};

#[derive(Parser)]
#[command(name = "shrimplab")]
#[command(about = "Shrimp larvae production lab dashboard server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080).
        /// Overrides `bind_address` from shrimplab.toml or SHRIMPLAB_BIND_ADDRESS.
        #[arg(short, long, env = "BIND_ADDRESS")]
        bind_address: Option<String>,
    },
    /// Print a generated production table as CSV
    ///
    /// The output has the column layout accepted by the upload endpoint.
    Sample {
        /// Seed for a reproducible table
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address } => {
                serve(bind_address).await?;
            }
            Commands::Sample { seed } => {
                sample(seed)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample_with_seed() {
        let cli = Cli::try_parse_from(["shrimplab", "sample", "--seed", "7"]).unwrap();
        assert!(matches!(cli.command, Commands::Sample { seed: Some(7) }));
    }

    #[test]
    fn test_parse_serve_with_bind_address() {
        let cli =
            Cli::try_parse_from(["shrimplab", "serve", "--bind-address", "127.0.0.1:8080"]).unwrap();
        match cli.command {
            Commands::Serve { bind_address } => {
                assert_eq!(bind_address.as_deref(), Some("127.0.0.1:8080"))
            }
            _ => panic!("expected serve"),
        }
    }
}
