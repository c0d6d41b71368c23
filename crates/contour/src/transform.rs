//! Uniform scale-to-fit transform from diagram space to surface space.
//!
//! A [`FitTransform`] maps the diagram's bounding box into a
//! [`Viewport`]'s `width × height` content area with a single scale factor on
//! both axes, then shifts it by the margin:
//!
//! ```text
//! scale  = min(width / (max_x − min_x), height / (max_y − min_y))
//! map(p) = ((p.x − min_x) * scale + margin, (p.y − min_y) * scale + margin)
//! ```
//!
//! The margin is outside the content area, so the whole surface measures
//! `(width + 2*margin) × (height + 2*margin)`.

use log::{debug, warn};
use thiserror::Error;

use contour_core::geometry::{Bounds, Point, Size};

/// Reasons a bounding box cannot be fitted.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FitError {
    #[error("diagram has no edges or arcs to fit")]
    Empty,

    #[error("diagram bounds are not finite: {0:?}")]
    NonFinite(Bounds),
}

/// The drawing surface: content area plus a uniform margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
    margin: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Total surface extent, margins included.
    pub fn surface_size(&self) -> Size {
        Size::new(self.width, self.height).expand_uniform(self.margin)
    }
}

/// Uniform scale plus translation into a [`Viewport`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransform {
    origin: Point,
    scale: f32,
    margin: f32,
}

impl FitTransform {
    /// Fits `bounds` into `viewport`.
    ///
    /// An axis with zero extent (a horizontal or vertical diagram) does not
    /// constrain the scale. If both axes have zero extent the diagram is a
    /// single point and the scale falls back to `1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::Empty`] for the empty box and
    /// [`FitError::NonFinite`] if any extreme is infinite or NaN, or if the
    /// extent between two finite extremes overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contour::{FitTransform, Viewport};
    /// # use contour_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::new(0.0, 0.0, 10.0, 5.0);
    /// let fit = FitTransform::fit(bounds, Viewport::new(100.0, 100.0, 10.0)).unwrap();
    ///
    /// assert_eq!(fit.scale(), 10.0);
    /// assert_eq!(fit.map_point(Point::new(10.0, 5.0)), Point::new(110.0, 60.0));
    /// ```
    pub fn fit(bounds: Bounds, viewport: Viewport) -> Result<Self, FitError> {
        if bounds.is_empty() {
            return Err(FitError::Empty);
        }
        // Finite extremes can still be too far apart to subtract in f32
        if !bounds.is_finite() || !bounds.width().is_finite() || !bounds.height().is_finite() {
            return Err(FitError::NonFinite(bounds));
        }

        let scale_x = axis_scale(viewport.width(), bounds.width());
        let scale_y = axis_scale(viewport.height(), bounds.height());

        let scale = match (scale_x, scale_y) {
            (Some(x), Some(y)) => x.min(y),
            (Some(s), None) | (None, Some(s)) => s,
            (None, None) => {
                warn!(bounds:? = bounds; "Diagram has zero extent on both axes, using unit scale");
                1.0
            }
        };

        debug!(scale = scale, scale_x:? = scale_x, scale_y:? = scale_y; "Computed fit transform");

        Ok(Self {
            origin: bounds.min_point(),
            scale,
            margin: viewport.margin(),
        })
    }

    /// The uniform scale factor applied to coordinates and lengths.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Maps a diagram-space point into surface space.
    pub fn map_point(&self, point: Point) -> Point {
        let shifted = point.sub_point(self.origin).scale(self.scale);
        Point::new(shifted.x() + self.margin, shifted.y() + self.margin)
    }

    /// Maps a diagram-space length (such as a radius) into surface space.
    pub fn map_length(&self, length: f32) -> f32 {
        length * self.scale
    }
}

/// Scale that stretches `extent` to `available`, or `None` for an axis whose
/// extent is zero or whose ratio is not a finite positive number.
fn axis_scale(available: f32, extent: f32) -> Option<f32> {
    (extent > 0.0)
        .then(|| available / extent)
        .filter(|scale| scale.is_finite() && *scale > 0.0)
}
