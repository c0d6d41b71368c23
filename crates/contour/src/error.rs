//! Error types for Contour operations.
//!
//! This module provides the main error type [`ContourError`] which wraps the
//! failures that can occur while loading, fitting and exporting a diagram.

use std::io;

use thiserror::Error;

use contour_core::semantic::InputError;

use crate::transform::FitError;

/// The main error type for Contour operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the TOML error so that
/// callers can point at the offending span.
#[derive(Debug, Error)]
pub enum ContourError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{}", .err.message())]
    Parse { err: toml::de::Error, src: String },

    #[error("Invalid diagram: {0}")]
    Input(#[from] InputError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Geometry error: {0}")]
    Geometry(#[from] FitError),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}

impl ContourError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
