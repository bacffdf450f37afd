//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use crate::document::Section;
use derive_more::{Display, From};

/// The Global Error Enum.
///
/// The generators themselves only ever fail with `NotInitialized`; the
/// remaining variants come from manifest and document I/O.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// The OpenAPI container is missing a section the generator writes to.
    #[from(ignore)]
    #[display("Container not initialized: missing '{_0}'")]
    NotInitialized(Section),

    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// JSON (de)serialization failure.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// YAML (de)serialization failure.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
