//! CLI logic for the Contour schematic renderer.
//!
//! Reads a TOML diagram, replays any `--hover` labels as pointer-enter
//! events, and writes the final frame as SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use contour::{ContourError, DiagramBuilder, PointerEvent};

/// Run the Contour CLI application
///
/// # Errors
///
/// Returns `ContourError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing and input validation errors
/// - Non-finite geometry
pub fn run(args: &Args) -> Result<(), ContourError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let diagram = builder.parse(&source)?;

    for label in &args.hover {
        if !diagram.labels().any(|known| known == label.as_str()) {
            warn!(label = label; "Hovered label does not match any element");
        }
    }

    let mut interactive = builder.interactive(diagram)?;
    let mut svg = interactive.render()?;
    for label in &args.hover {
        svg = interactive.handle_event(PointerEvent::enter(label.as_str()))?;
    }

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
