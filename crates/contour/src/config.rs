//! Configuration types for Contour rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file:
//!
//! ```toml
//! [style]
//! default_color = "black"
//! highlight_color = "#e63946"
//! stroke_width = 2.0
//! font_family = "Arial"
//! font_size = 10
//! background_color = "white"
//! ```
//!
//! - [`AppConfig`] - Top-level configuration root.
//! - [`StyleConfig`] - Raw, optional style settings as written in the file.
//! - [`Style`] - Style settings with defaults applied and colors parsed.
//!
//! # Example
//!
//! ```
//! # use contour::config::AppConfig;
//! let config = AppConfig::default();
//! let style = config.style().resolve().unwrap();
//! assert_eq!(style.stroke_width(), 2.0);
//! ```

use serde::Deserialize;

use contour_core::{
    color::Color,
    draw::{StrokeDefinition, TextDefinition},
};

const DEFAULT_STROKE_WIDTH: f32 = 2.0;
const DEFAULT_FONT_FAMILY: &str = "Arial";
const DEFAULT_FONT_SIZE: u16 = 10;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling options. Unset fields fall back to black strokes, red
/// highlights, 2px stroke width and 10pt Arial labels on a white background.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    default_color: Option<String>,

    #[serde(default)]
    highlight_color: Option<String>,

    #[serde(default)]
    background_color: Option<String>,

    #[serde(default)]
    stroke_width: Option<f32>,

    #[serde(default)]
    font_family: Option<String>,

    #[serde(default)]
    font_size: Option<u16>,
}

impl StyleConfig {
    pub fn with_default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = Some(color.into());
        self
    }

    pub fn with_highlight_color(mut self, color: impl Into<String>) -> Self {
        self.highlight_color = Some(color.into());
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    /// Applies defaults and parses every color.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending setting if a color cannot be
    /// parsed or the stroke width is not a finite, non-negative number.
    pub fn resolve(&self) -> Result<Style, String> {
        let parse = |value: &Option<String>, fallback: Color, name: &str| {
            value
                .as_deref()
                .map(Color::new)
                .transpose()
                .map(|color| color.unwrap_or(fallback))
                .map_err(|err| format!("Invalid {name} in config: {err}"))
        };

        let default_color = parse(&self.default_color, Color::black(), "default_color")?;
        let highlight_color = parse(&self.highlight_color, Color::red(), "highlight_color")?;
        let background_color = parse(&self.background_color, Color::white(), "background_color")?;

        let stroke_width = self.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH);
        if !stroke_width.is_finite() || stroke_width < 0.0 {
            return Err(format!(
                "Invalid stroke_width in config: {stroke_width} is not a non-negative number"
            ));
        }

        let text = TextDefinition::new(
            self.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY),
            self.font_size.unwrap_or(DEFAULT_FONT_SIZE),
        );

        Ok(Style {
            default_color,
            highlight_color,
            background_color,
            stroke: StrokeDefinition::new(default_color, stroke_width),
            text,
        })
    }
}

/// Resolved style used by the path generator and the surface renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    default_color: Color,
    highlight_color: Color,
    background_color: Color,
    stroke: StrokeDefinition,
    text: TextDefinition,
}

impl Style {
    pub fn default_color(&self) -> Color {
        self.default_color
    }

    pub fn highlight_color(&self) -> Color {
        self.highlight_color
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke.width()
    }

    /// Base stroke in the default color; recolored per element.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Label style; its color is replaced per element at render time.
    pub fn text(&self) -> &TextDefinition {
        &self.text
    }

    /// Picks the highlight or default color.
    pub fn color_for(&self, highlighted: bool) -> Color {
        if highlighted {
            self.highlight_color
        } else {
            self.default_color
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            default_color: Color::black(),
            highlight_color: Color::red(),
            background_color: Color::white(),
            stroke: StrokeDefinition::new(Color::black(), DEFAULT_STROKE_WIDTH),
            text: TextDefinition::new(DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE),
        }
    }
}
