#![deny(missing_docs)]

//! # OAS CRUD CLI
//!
//! Command Line Interface for generating CRUD OpenAPI documentation.
//!
//! Supported Commands:
//! - `generate`: Entity manifest -> OpenAPI schemas, request bodies and paths.

use clap::{Parser, Subcommand};
use oas_crud_core::AppResult;

mod generate;
mod logging;

#[derive(Parser, Debug)]
#[clap(author, version, about = "CRUD OpenAPI generator")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv).
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate schemas and paths for every entity in a manifest.
    Generate(generate::GenerateArgs),
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match &cli.command {
        Commands::Generate(args) => generate::execute(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "oas-crud",
            "-vv",
            "generate",
            "--manifest",
            "models.yaml",
            "--output",
            "openapi.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Generate(args) = cli.command;
        assert_eq!(args.manifest.to_str(), Some("models.yaml"));
        assert!(args.base.is_none());
    }
}
