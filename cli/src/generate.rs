#![deny(missing_docs)]

//! # Generate Command
//!
//! Loads an entity manifest, prepares the OpenAPI container and fills it with
//! CRUD schemas and paths.

use oas_crud_core::error::AppResult;
use oas_crud_core::{
    generate_document, load_document, load_manifest, render_document, skeleton, write_document,
    DocumentInfo,
};
use std::path::PathBuf;

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Entity manifest (.json, .yaml or .yml).
    #[clap(long)]
    pub manifest: PathBuf,

    /// Existing OpenAPI document to extend.
    /// It must already contain `paths`, `components.schemas` and
    /// `components.requestBodies`.
    #[clap(long)]
    pub base: Option<PathBuf>,

    /// Output path. Supports .json and .yaml/.yml extensions.
    /// If not provided, prints JSON to stdout.
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// API title for a new document.
    #[clap(long, env = "OAS_CRUD_TITLE", default_value = "API")]
    pub title: String,

    /// API version for a new document.
    #[clap(long, env = "OAS_CRUD_VERSION", default_value = "1.0.0")]
    pub api_version: String,
}

/// Executes document generation.
pub fn execute(args: &GenerateArgs) -> AppResult<()> {
    let entities = load_manifest(&args.manifest)?;

    let mut doc = match &args.base {
        Some(base) => load_document(base)?,
        None => skeleton(&DocumentInfo::new(&args.title, &args.api_version)),
    };

    generate_document(&mut doc, &entities)?;

    if let Some(out_path) = &args.output {
        write_document(&doc, out_path)?;
        tracing::info!(path = %out_path.display(), "document written");
    } else {
        println!("{}", render_document(&doc, None)?);
    }

    Ok(())
}
