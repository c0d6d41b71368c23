//! Stroke definitions.
//!
//! A [`StrokeDefinition`] holds the color and width of a stroked path. Apply
//! it to any SVG element with the [`apply_stroke!`](crate::apply_stroke!)
//! macro:
//!
//! ```
//! use contour_core::{color::Color, draw::StrokeDefinition};
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::new(Color::red(), 2.0);
//! let path = svg_element::Path::new().set("d", "M 0 0 L 10 0");
//! let path = contour_core::apply_stroke!(path, &stroke);
//! ```
//!
//! | Rust Property | SVG Attribute |
//! |--------------|---------------|
//! | `color` | `stroke`, `stroke-opacity` |
//! | `width` | `stroke-width` |

use crate::color::Color;

/// Color and width of a stroked path.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns a copy of this stroke painted in `color`.
    pub fn with_color(&self, color: Color) -> Self {
        Self {
            color,
            width: self.width,
        }
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 2.0,
        }
    }
}

/// Apply stroke color, opacity and width to an SVG element.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    }};
}
