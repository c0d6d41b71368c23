//! Semantic model of a Contour schematic.
//!
//! A [`Diagram`] is the complete input contract: surface dimensions plus the
//! labelled [`Line`] and [`Arc`] elements to draw. Positions are supplied by
//! the caller; nothing in Contour computes a layout.
//!
//! All types implement [`serde::Deserialize`] so diagrams can be loaded from
//! TOML (or any other serde format). Field names accept both `snake_case` and
//! the `camelCase` spelling used by web hosts.
//!
//! ```
//! # use contour_core::{geometry::Point, semantic::{Arc, Diagram, Line}};
//! let diagram = Diagram::new(100.0, 100.0, 10.0)
//!     .with_edges(vec![Line::new("e1", Point::new(0.0, 0.0), Point::new(10.0, 0.0))])
//!     .with_arcs(vec![Arc::new("a1", Point::new(5.0, 0.0), 5.0, 0.0, 180.0)]);
//!
//! assert_eq!(diagram.element_count(), 2);
//! assert!(diagram.validate().is_ok());
//! ```

use std::collections::HashMap;

use log::trace;
use serde::Deserialize;
use thiserror::Error;

use crate::geometry::{Point, Size};

/// Problems with a diagram that make it unusable as rendering input.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("surface size must be finite and positive, got {width}x{height}")]
    InvalidSize { width: f32, height: f32 },

    #[error("margin must be finite and non-negative, got {0}")]
    InvalidMargin(f32),

    #[error("element `{0}` has a non-finite coordinate")]
    NonFiniteCoordinate(String),

    #[error("arc `{label}` has a negative radius {radius}")]
    NegativeRadius { label: String, radius: f32 },
}

/// A labelled straight segment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Line {
    label: String,
    #[serde(alias = "startPoint")]
    start_point: Point,
    #[serde(alias = "endPoint")]
    end_point: Point,
}

impl Line {
    pub fn new(label: impl Into<String>, start_point: Point, end_point: Point) -> Self {
        Self {
            label: label.into(),
            start_point,
            end_point,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn start_point(&self) -> Point {
        self.start_point
    }

    pub fn end_point(&self) -> Point {
        self.end_point
    }
}

/// A labelled circular arc.
///
/// Angles are in degrees, measured from +X and turning clockwise on screen.
/// `end_angle` may be smaller than `start_angle`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Arc {
    label: String,
    center: Point,
    radius: f32,
    #[serde(alias = "startAngle")]
    start_angle: f32,
    #[serde(alias = "endAngle")]
    end_angle: f32,
}

impl Arc {
    pub fn new(
        label: impl Into<String>,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    ) -> Self {
        Self {
            label: label.into(),
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Start angle in degrees
    pub fn start_angle(&self) -> f32 {
        self.start_angle
    }

    /// End angle in degrees
    pub fn end_angle(&self) -> f32 {
        self.end_angle
    }
}

/// The full rendering input: surface dimensions and the elements to draw.
///
/// `nodes` and `selected_labels` are part of the input contract but are not
/// consulted by bounding or rendering.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Diagram {
    width: f32,
    height: f32,
    margin: f32,
    #[serde(default)]
    nodes: Vec<Point>,
    #[serde(default)]
    edges: Vec<Line>,
    #[serde(default)]
    arcs: Vec<Arc>,
    #[serde(default, alias = "selectedLabels")]
    selected_labels: Option<String>,
}

impl Diagram {
    /// Creates an empty diagram for a `width × height` area with `margin` on every side.
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
            nodes: Vec::new(),
            edges: Vec::new(),
            arcs: Vec::new(),
            selected_labels: None,
        }
    }

    pub fn with_nodes(mut self, nodes: Vec<Point>) -> Self {
        self.nodes = nodes;
        self
    }

    pub fn with_edges(mut self, edges: Vec<Line>) -> Self {
        self.edges = edges;
        self
    }

    pub fn with_arcs(mut self, arcs: Vec<Arc>) -> Self {
        self.arcs = arcs;
        self
    }

    pub fn with_selected_labels(mut self, selected_labels: impl Into<String>) -> Self {
        self.selected_labels = Some(selected_labels.into());
        self
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

    /// The `width × height` area the geometry is fitted into, excluding the margin.
    pub fn content_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Line] {
        &self.edges
    }

    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    pub fn selected_labels(&self) -> Option<&str> {
        self.selected_labels.as_deref()
    }

    /// Number of drawable elements (edges plus arcs)
    pub fn element_count(&self) -> usize {
        self.edges.len() + self.arcs.len()
    }

    /// Labels of all edges followed by all arcs, in input order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.edges
            .iter()
            .map(Line::label)
            .chain(self.arcs.iter().map(Arc::label))
    }

    /// Returns every label that is used by more than one element, in order
    /// of first appearance.
    ///
    /// Highlighting is keyed by label, so a duplicated label lights up all of
    /// its elements at once.
    pub fn duplicate_labels(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order = Vec::new();
        for label in self.labels() {
            let count = counts.entry(label).or_insert(0);
            *count += 1;
            if *count == 2 {
                order.push(label);
            }
        }
        order
    }

    /// Checks the dimensions and element geometry.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] for a non-positive or non-finite surface size,
    /// a negative or non-finite margin, non-finite coordinates, or a negative
    /// arc radius.
    pub fn validate(&self) -> Result<(), InputError> {
        trace!(edges = self.edges.len(), arcs = self.arcs.len(); "Validating diagram");

        let size_ok = |v: f32| v.is_finite() && v > 0.0;
        if !size_ok(self.width) || !size_ok(self.height) {
            return Err(InputError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(InputError::InvalidMargin(self.margin));
        }

        for line in &self.edges {
            if !line.start_point.is_finite() || !line.end_point.is_finite() {
                return Err(InputError::NonFiniteCoordinate(line.label.clone()));
            }
        }

        for arc in &self.arcs {
            let finite = arc.center.is_finite()
                && arc.radius.is_finite()
                && arc.start_angle.is_finite()
                && arc.end_angle.is_finite();
            if !finite {
                return Err(InputError::NonFiniteCoordinate(arc.label.clone()));
            }
            if arc.radius < 0.0 {
                return Err(InputError::NegativeRadius {
                    label: arc.label.clone(),
                    radius: arc.radius,
                });
            }
        }

        Ok(())
    }
}
