//! Scene exporters and their error type.

pub mod svg;

use std::io;

use thiserror::Error;

use crate::scene::Scene;

/// Writes a rendered scene to some destination.
pub trait Exporter {
    fn export_scene(&self, scene: &Scene<'_>) -> Result<(), Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
