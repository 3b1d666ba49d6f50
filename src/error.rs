#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the crate.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// A route description is missing a required field.
    /// We ignore this for `From<String>` to avoid conflict with General.
    #[from(ignore)]
    #[display("Missing Field: {_0}")]
    MissingField(String),

    /// A schema without named fields was supplied where an object shape is required.
    #[from(ignore)]
    #[display("Invalid Schema Shape: {_0}")]
    InvalidSchemaShape(String),

    /// The schema conversion collaborator failed.
    #[from(ignore)]
    #[display("Schema Conversion Error: {_0}")]
    Conversion(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
