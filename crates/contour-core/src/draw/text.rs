//! Text rendering for element labels.
//!
//! - [`TextDefinition`] - Reusable label style (font family, size, fill color)
//! - [`Text`] - A label anchored at a point, rendered on the
//!   [`Text`](crate::draw::RenderLayer::Text) layer
//!
//! ```
//! # use contour_core::{color::Color, draw::{Drawable, Text, TextDefinition}, geometry::Point};
//! let style = TextDefinition::new("Arial", 10).with_color(Color::red());
//! let text = Text::new(&style, "e1", Point::new(60.0, 10.0));
//! assert!(!text.render_to_layers().is_empty());
//! ```

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::Point,
};

/// Label style shared by all elements of a diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Color,
}

impl TextDefinition {
    pub fn new(font_family: impl Into<String>, font_size: u16) -> Self {
        Self {
            font_family: font_family.into(),
            font_size,
            color: Color::default(),
        }
    }

    /// Returns a copy of this definition with a different fill color.
    pub fn with_color(&self, color: Color) -> Self {
        Self {
            color,
            ..self.clone()
        }
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self::new("Arial", 10)
    }
}

/// A label placed at an anchor point.
///
/// The anchor is used as the SVG `x`/`y` of the text, so it marks the start of
/// the text baseline.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: String,
    anchor: Point,
    data_label: Option<String>,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: impl Into<String>, anchor: Point) -> Self {
        Self {
            definition,
            content: content.into(),
            anchor,
            data_label: None,
        }
    }

    /// Tags the rendered `<text>` with a `data-label` attribute.
    pub fn with_data_label(mut self, label: impl Into<String>) -> Self {
        self.data_label = Some(label.into());
        self
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let mut text = svg_element::Text::new(self.content.as_str())
            .set("x", self.anchor.x())
            .set("y", self.anchor.y())
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size())
            .set("fill", self.definition.color().to_string());

        if let Some(label) = &self.data_label {
            text = text.set("data-label", label.as_str());
        }

        output.add_to_layer(RenderLayer::Text, Box::new(text));
        output
    }
}
