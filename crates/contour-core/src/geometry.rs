//! Geometric primitives for diagram fitting and rendering.
//!
//! This module provides the small set of geometric types Contour needs to
//! normalize a schematic into a drawing surface.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram or surface space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Contour uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! Angles follow the same convention: 0° points along +X and positive angles
//! turn clockwise on screen because Y grows downward.

use serde::Deserialize;

/// A 2D point representing a position in diagram or surface space.
///
/// # Examples
///
/// ```
/// # use contour_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Returns `true` if both coordinates are finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns the point at `radius` from this point in the direction of `radians`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contour_core::geometry::Point;
    /// let center = Point::new(10.0, 10.0);
    /// let p = center.polar_offset(5.0, 0.0);
    /// assert_eq!(p, Point::new(15.0, 10.0));
    /// ```
    pub fn polar_offset(self, radius: f32, radians: f32) -> Self {
        Self {
            x: self.x + radius * radians.cos(),
            y: self.y + radius * radians.sin(),
        }
    }
}

/// Represents the dimensions of an area with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size grown by `amount` on every side
    pub fn expand_uniform(self, amount: f32) -> Self {
        Self {
            width: amount.mul_add(2.0, self.width),
            height: amount.mul_add(2.0, self.height),
        }
    }
}

/// An axis-aligned bounding box with minimum and maximum coordinates.
///
/// A box starts out [`empty`](Bounds::empty) with `min = +∞` and `max = −∞` so
/// that folding in the first point yields a zero-area box around it.
///
/// # Examples
///
/// ```
/// # use contour_core::geometry::{Bounds, Point};
/// let bounds = Bounds::empty()
///     .include_point(Point::new(0.0, 5.0))
///     .include_point(Point::new(10.0, -5.0));
///
/// assert_eq!(bounds.min_x(), 0.0);
/// assert_eq!(bounds.min_y(), -5.0);
/// assert_eq!(bounds.width(), 10.0);
/// assert_eq!(bounds.height(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from explicit extremes
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Returns the inverted infinite box that contains nothing
    pub fn empty() -> Self {
        Self {
            min_x: f32::INFINITY,
            min_y: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            max_y: f32::NEG_INFINITY,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns `true` if nothing has been folded into this box.
    pub fn is_empty(self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Returns `true` if all four extremes are finite numbers.
    pub fn is_finite(self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
    }

    /// Extends the box so that it contains `point`.
    pub fn include_point(self, point: Point) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }

    /// Extends the box so that it contains the full circle around `center`.
    pub fn include_circle(self, center: Point, radius: f32) -> Self {
        self.merge(&Self {
            min_x: center.x - radius,
            min_y: center.y - radius,
            max_x: center.x + radius,
            max_y: center.y + radius,
        })
    }

    /// Merges two bounds into the smallest box that contains both
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns `true` if `point` lies inside or on the edge of the box
    pub fn contains_point(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_midpoint() {
        let mid = Point::new(0.0, 0.0).midpoint(Point::new(10.0, 4.0));
        assert_eq!(mid, Point::new(5.0, 2.0));
    }

    #[test]
    fn test_point_polar_offset() {
        let center = Point::new(50.0, 50.0);

        let down = center.polar_offset(10.0, FRAC_PI_2);
        assert_approx_eq!(f32, down.x(), 50.0, epsilon = 1e-4);
        assert_approx_eq!(f32, down.y(), 60.0, epsilon = 1e-4);

        let left = center.polar_offset(10.0, PI);
        assert_approx_eq!(f32, left.x(), 40.0, epsilon = 1e-4);
        assert_approx_eq!(f32, left.y(), 50.0, epsilon = 1e-4);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_approx_eq!(f32, a.distance(b), 5.0);
    }

    #[test]
    fn test_size_expand_uniform() {
        let size = Size::new(100.0, 50.0).expand_uniform(10.0);
        assert_approx_eq!(f32, size.width(), 120.0);
        assert_approx_eq!(f32, size.height(), 70.0);
    }

    #[test]
    fn test_bounds_empty() {
        let bounds = Bounds::empty();
        assert!(bounds.is_empty());
        assert!(!bounds.is_finite());
        assert_eq!(bounds.min_x(), f32::INFINITY);
        assert_eq!(bounds.max_y(), f32::NEG_INFINITY);
    }

    #[test]
    fn test_bounds_single_point_is_not_empty() {
        let bounds = Bounds::empty().include_point(Point::new(3.0, 4.0));
        assert!(!bounds.is_empty());
        assert!(bounds.is_finite());
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
    }

    #[test]
    fn test_bounds_include_circle() {
        let bounds = Bounds::empty().include_circle(Point::new(50.0, 50.0), 20.0);
        assert_eq!(bounds, Bounds::new(30.0, 30.0, 70.0, 70.0));
    }

    #[test]
    fn test_bounds_merge() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(-5.0, 5.0, 5.0, 20.0);
        assert_eq!(a.merge(&b), Bounds::new(-5.0, 0.0, 10.0, 20.0));
    }

    #[test]
    fn test_bounds_merge_with_empty_is_identity() {
        let a = Bounds::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Bounds::empty().merge(&a), a);
    }

    #[test]
    fn test_bounds_contains_point_on_edge() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(bounds.contains_point(Point::new(10.0, 0.0)));
        assert!(!bounds.contains_point(Point::new(10.1, 0.0)));
    }
}
