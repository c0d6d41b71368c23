//! One synchronous render pass: bounds → fit → paths.

use log::{debug, info, warn};

use contour_core::semantic::Diagram;

use crate::{
    bounds::calculate_bounding_box,
    config::Style,
    highlight::HighlightSet,
    path::{PathGenerator, StyledElement},
    transform::{FitError, FitTransform, Viewport},
};

/// Everything the surface renderer needs for one frame.
#[derive(Debug)]
pub struct Scene<'a> {
    viewport: Viewport,
    style: &'a Style,
    transform: Option<FitTransform>,
    elements: Vec<StyledElement<'a>>,
}

impl<'a> Scene<'a> {
    /// Runs the full pipeline for `diagram` with the current highlights.
    ///
    /// An empty diagram is not an error: the scene is built with no elements
    /// and no transform, so the surface renders as background only.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::NonFinite`] if the geometry contains infinite or
    /// NaN coordinates.
    pub fn build(
        diagram: &Diagram,
        style: &'a Style,
        highlights: &'a HighlightSet,
    ) -> Result<Self, FitError> {
        let viewport = Viewport::new(diagram.width(), diagram.height(), diagram.margin());
        let bounds = calculate_bounding_box(diagram.edges(), diagram.arcs());

        let transform = match FitTransform::fit(bounds, viewport) {
            Ok(transform) => transform,
            Err(FitError::Empty) => {
                warn!("Diagram has no edges or arcs, rendering an empty surface");
                return Ok(Self {
                    viewport,
                    style,
                    transform: None,
                    elements: Vec::new(),
                });
            }
            Err(err) => return Err(err),
        };

        let elements = PathGenerator::new(transform, style, highlights).generate(diagram);

        info!(
            elements = elements.len(),
            highlighted = highlights.len();
            "Scene built"
        );
        debug!(scale = transform.scale(); "Scene transform");

        Ok(Self {
            viewport,
            style,
            transform: Some(transform),
            elements,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn style(&self) -> &Style {
        self.style
    }

    /// The fit transform, or `None` for an empty diagram.
    pub fn transform(&self) -> Option<FitTransform> {
        self.transform
    }

    pub fn elements(&self) -> &[StyledElement<'a>] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use contour_core::{
        geometry::Point,
        semantic::{Arc, Line},
    };

    use super::*;

    #[test]
    fn test_empty_diagram_builds_empty_scene() {
        let diagram = Diagram::new(100.0, 100.0, 10.0);
        let style = Style::default();
        let highlights = HighlightSet::new();

        let scene = Scene::build(&diagram, &style, &highlights).unwrap();
        assert!(scene.is_empty());
        assert!(scene.transform().is_none());
        assert_approx_eq!(f32, scene.viewport().surface_size().width(), 120.0);
    }

    #[test]
    fn test_horizontal_line_scene_is_finite() {
        let diagram = Diagram::new(100.0, 100.0, 10.0).with_edges(vec![Line::new(
            "e1",
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        )]);
        let style = Style::default();
        let highlights = HighlightSet::new();

        let scene = Scene::build(&diagram, &style, &highlights).unwrap();
        assert_eq!(scene.elements().len(), 1);
        assert_eq!(
            scene.elements()[0].path().data().to_string(),
            "M 10 10 L 110 10"
        );
    }

    #[test]
    fn test_arc_label_distance_scales_with_fit() {
        let diagram = Diagram::new(100.0, 100.0, 10.0).with_arcs(vec![Arc::new(
            "a1",
            Point::new(50.0, 50.0),
            20.0,
            0.0,
            180.0,
        )]);
        let style = Style::default();
        let highlights = HighlightSet::new();

        let scene = Scene::build(&diagram, &style, &highlights).unwrap();
        let transform = scene.transform().unwrap();
        let center = transform.map_point(Point::new(50.0, 50.0));
        let anchor = scene.elements()[0].path().anchor();

        assert_approx_eq!(f32, transform.scale(), 2.5);
        assert_approx_eq!(
            f32,
            anchor.distance(center),
            1.2 * 20.0 * transform.scale(),
            epsilon = 1e-3
        );
        // Straight down from the center: 90°
        assert_approx_eq!(f32, anchor.x(), center.x(), epsilon = 1e-3);
        assert!(anchor.y() > center.y());
    }

    #[test]
    fn test_extent_overflow_is_an_error() {
        let diagram = Diagram::new(100.0, 100.0, 10.0).with_edges(vec![Line::new(
            "wide",
            Point::new(-3e38, 0.0),
            Point::new(3e38, 10.0),
        )]);
        let style = Style::default();
        let highlights = HighlightSet::new();

        assert!(diagram.validate().is_ok());
        assert!(matches!(
            Scene::build(&diagram, &style, &highlights),
            Err(FitError::NonFinite(_))
        ));
    }

    #[test]
    fn test_non_finite_geometry_is_an_error() {
        let diagram = Diagram::new(100.0, 100.0, 10.0).with_edges(vec![Line::new(
            "e1",
            Point::new(0.0, 0.0),
            Point::new(f32::INFINITY, 0.0),
        )]);
        let style = Style::default();
        let highlights = HighlightSet::new();

        assert!(matches!(
            Scene::build(&diagram, &style, &highlights),
            Err(FitError::NonFinite(_))
        ));
    }
}
