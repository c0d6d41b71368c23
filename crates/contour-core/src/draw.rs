//! Drawable primitives for schematic rendering.
//!
//! Everything that ends up on the surface implements [`Drawable`], which
//! renders into a [`LayeredOutput`] so strokes and labels can be stacked in a
//! fixed z-order regardless of the order elements are produced in.
//!
//! - [`PathData`] - SVG path descriptions built from move/line/arc commands
//! - [`StrokeDefinition`] - Stroke color and width, applied with [`apply_stroke!`](crate::apply_stroke!)
//! - [`TextDefinition`] and [`Text`] - Label styling and rendering
//! - [`RenderLayer`] and [`LayeredOutput`] - Z-ordered SVG node collection

mod layer;
mod path;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use path::{PathCommand, PathData};
pub use stroke::StrokeDefinition;
pub use text::{Text, TextDefinition};

/// An element that can render itself into layered SVG output.
///
/// Implementations are expected to be pure: rendering the same value twice
/// yields identical output.
pub trait Drawable: std::fmt::Debug {
    fn render_to_layers(&self) -> LayeredOutput;
}
