//! SVG path data.
//!
//! [`PathData`] keeps path commands typed until the last moment so callers
//! (and tests) can inspect arc flags and endpoints instead of parsing strings.
//! Its [`Display`](std::fmt::Display) output is a valid SVG `d` attribute.
//!
//! ```
//! # use contour_core::{draw::PathData, geometry::Point};
//! let data = PathData::new()
//!     .move_to(Point::new(10.0, 10.0))
//!     .line_to(Point::new(110.0, 10.0));
//! assert_eq!(data.to_string(), "M 10 10 L 110 10");
//! ```

use std::fmt;

use crate::geometry::Point;

/// A single SVG path command in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc (`rx == ry`, no axis rotation) ending at `end`
    ArcTo {
        radius: f32,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(p) => write!(f, "M {} {}", p.x(), p.y()),
            Self::LineTo(p) => write!(f, "L {} {}", p.x(), p.y()),
            Self::ArcTo {
                radius,
                large_arc,
                sweep,
                end,
            } => write!(
                f,
                "A {radius} {radius} 0 {} {} {} {}",
                u8::from(*large_arc),
                u8::from(*sweep),
                end.x(),
                end.y()
            ),
        }
    }
}

/// An ordered list of path commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, point: Point) -> Self {
        self.commands.push(PathCommand::MoveTo(point));
        self
    }

    pub fn line_to(mut self, point: Point) -> Self {
        self.commands.push(PathCommand::LineTo(point));
        self
    }

    pub fn arc_to(mut self, radius: f32, large_arc: bool, sweep: bool, end: Point) -> Self {
        self.commands.push(PathCommand::ArcTo {
            radius,
            large_arc,
            sweep,
            end,
        });
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

impl From<&PathData> for svg::node::Value {
    fn from(data: &PathData) -> Self {
        Self::from(data.to_string())
    }
}
