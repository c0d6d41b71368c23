//! Path generation for lines and arcs.
//!
//! Turns each diagram element into surface-space path data plus a label
//! anchor, then decides its color from the current [`HighlightSet`].
//!
//! Lines become `M start L end` with the label at the midpoint. Arcs become
//! `M start A r r 0 <large> 1 end`: the sweep flag is always set (positive
//! angle direction) and the large-arc flag is set when the angular span
//! exceeds 180°. Arc labels sit at 1.2 × radius along the mid angle, just
//! outside the stroke.

use log::trace;
use svg::node::element as svg_element;

use contour_core::{
    apply_stroke,
    draw::{Drawable, LayeredOutput, PathData, RenderLayer, StrokeDefinition, Text},
    geometry::Point,
    semantic::{Arc, Diagram, Line},
};

use crate::{config::Style, highlight::HighlightSet, transform::FitTransform};

/// Distance of an arc label from the center, relative to the radius.
const ARC_LABEL_OFFSET: f32 = 1.2;

/// Which input collection an element came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Edge,
    Arc,
}

/// Geometry of one element in surface space.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementPath {
    label: String,
    kind: ElementKind,
    data: PathData,
    anchor: Point,
}

impl ElementPath {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn data(&self) -> &PathData {
        &self.data
    }

    /// Where the label text is placed.
    pub fn anchor(&self) -> Point {
        self.anchor
    }
}

/// Builds the path for a straight edge.
pub fn line_path(line: &Line, transform: &FitTransform) -> ElementPath {
    let start = transform.map_point(line.start_point());
    let end = transform.map_point(line.end_point());

    ElementPath {
        label: line.label().to_string(),
        kind: ElementKind::Edge,
        data: PathData::new().move_to(start).line_to(end),
        anchor: start.midpoint(end),
    }
}

/// Builds the path for an arc.
pub fn arc_path(arc: &Arc, transform: &FitTransform) -> ElementPath {
    let center = transform.map_point(arc.center());
    let radius = transform.map_length(arc.radius());
    let start_angle = arc.start_angle().to_radians();
    let end_angle = arc.end_angle().to_radians();

    let start = center.polar_offset(radius, start_angle);
    let end = center.polar_offset(radius, end_angle);
    let large_arc = is_large_arc(start_angle, end_angle);

    let mid_angle = (start_angle + end_angle) / 2.0;

    ElementPath {
        label: arc.label().to_string(),
        kind: ElementKind::Arc,
        data: PathData::new()
            .move_to(start)
            .arc_to(radius, large_arc, true, end),
        anchor: center.polar_offset(radius * ARC_LABEL_OFFSET, mid_angle),
    }
}

/// The large-arc flag: set when the signed span exceeds half a turn.
pub fn is_large_arc(start_radians: f32, end_radians: f32) -> bool {
    end_radians - start_radians > std::f32::consts::PI
}

/// An [`ElementPath`] with its stroke and label style decided.
#[derive(Debug, Clone)]
pub struct StyledElement<'a> {
    path: ElementPath,
    stroke: StrokeDefinition,
    style: &'a Style,
    highlighted: bool,
}

impl StyledElement<'_> {
    pub fn path(&self) -> &ElementPath {
        &self.path
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

impl Drawable for StyledElement<'_> {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let label = self.path.label();

        let mut element = svg_element::Path::new()
            .set("d", self.path.data())
            .set("data-label", label);

        let layer = match self.path.kind() {
            ElementKind::Edge => RenderLayer::Edge,
            ElementKind::Arc => {
                element = element.set("fill", "none");
                RenderLayer::Arc
            }
        };

        let element = apply_stroke!(element, &self.stroke);
        output.add_to_layer(layer, Box::new(element));

        let text_definition = self.style.text().with_color(self.stroke.color());
        let text = Text::new(&text_definition, label, self.path.anchor()).with_data_label(label);
        output.merge(text.render_to_layers());

        output
    }
}

/// Generates styled elements for a whole diagram.
///
/// Holds the fit transform, the resolved style and a read-only view of the
/// highlight set for the duration of one render pass.
#[derive(Debug)]
pub struct PathGenerator<'a> {
    transform: FitTransform,
    style: &'a Style,
    highlights: &'a HighlightSet,
}

impl<'a> PathGenerator<'a> {
    pub fn new(transform: FitTransform, style: &'a Style, highlights: &'a HighlightSet) -> Self {
        Self {
            transform,
            style,
            highlights,
        }
    }

    /// All edges followed by all arcs, in input order.
    pub fn generate(&self, diagram: &Diagram) -> Vec<StyledElement<'a>> {
        let edges = diagram
            .edges()
            .iter()
            .map(|line| line_path(line, &self.transform));
        let arcs = diagram
            .arcs()
            .iter()
            .map(|arc| arc_path(arc, &self.transform));

        edges.chain(arcs).map(|path| self.style_path(path)).collect()
    }

    /// Decides the color of one element from the current highlight set.
    pub fn style_path(&self, path: ElementPath) -> StyledElement<'a> {
        let highlighted = self.highlights.contains(path.label());
        let color = self.style.color_for(highlighted);
        trace!(label = path.label(), highlighted = highlighted, data = path.data().to_string(); "Generated element path");

        StyledElement {
            path,
            stroke: self.style.stroke().with_color(color),
            style: self.style,
            highlighted,
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use contour_core::{color::Color, draw::PathCommand, geometry::Bounds};

    use super::*;
    use crate::transform::Viewport;

    fn identity() -> FitTransform {
        // 100 units into 100 pixels without margin
        FitTransform::fit(
            Bounds::new(0.0, 0.0, 100.0, 100.0),
            Viewport::new(100.0, 100.0, 0.0),
        )
        .unwrap()
    }

    fn arc_end(path: &ElementPath) -> (f32, bool, bool, Point) {
        match path.data().commands()[1] {
            PathCommand::ArcTo {
                radius,
                large_arc,
                sweep,
                end,
            } => (radius, large_arc, sweep, end),
            other => panic!("expected arc command, got {other:?}"),
        }
    }

    #[test]
    fn test_line_path_and_midpoint_anchor() {
        let line = Line::new("e1", Point::new(10.0, 20.0), Point::new(30.0, 60.0));
        let path = line_path(&line, &identity());

        assert_eq!(path.kind(), ElementKind::Edge);
        assert_eq!(path.data().to_string(), "M 10 20 L 30 60");
        assert_eq!(path.anchor(), Point::new(20.0, 40.0));
    }

    #[test]
    fn test_large_arc_flag() {
        use std::f32::consts::PI;

        assert!(is_large_arc(0.0, 200f32.to_radians()));
        assert!(!is_large_arc(0.0, 90f32.to_radians()));
        assert!(!is_large_arc(0.0, PI));
        // Negative spans are never large
        assert!(!is_large_arc(0.0, -270f32.to_radians()));
    }

    #[test]
    fn test_arc_path_large_flag_from_degrees() {
        let large = Arc::new("a1", Point::new(50.0, 50.0), 20.0, 0.0, 200.0);
        let (_, large_arc, sweep, _) = arc_end(&arc_path(&large, &identity()));
        assert!(large_arc);
        assert!(sweep);

        let small = Arc::new("a2", Point::new(50.0, 50.0), 20.0, 0.0, 90.0);
        let (_, large_arc, sweep, _) = arc_end(&arc_path(&small, &identity()));
        assert!(!large_arc);
        assert!(sweep);
    }

    #[test]
    fn test_arc_path_endpoints() {
        let arc = Arc::new("a1", Point::new(50.0, 50.0), 20.0, 0.0, 90.0);
        let path = arc_path(&arc, &identity());

        match path.data().commands()[0] {
            PathCommand::MoveTo(start) => {
                assert_approx_eq!(f32, start.x(), 70.0, epsilon = 1e-4);
                assert_approx_eq!(f32, start.y(), 50.0, epsilon = 1e-4);
            }
            other => panic!("expected move command, got {other:?}"),
        }

        // 90° points down the screen
        let (radius, _, _, end) = arc_end(&path);
        assert_approx_eq!(f32, radius, 20.0);
        assert_approx_eq!(f32, end.x(), 50.0, epsilon = 1e-4);
        assert_approx_eq!(f32, end.y(), 70.0, epsilon = 1e-4);
    }

    #[test]
    fn test_arc_label_anchor_outside_stroke() {
        let arc = Arc::new("a1", Point::new(50.0, 50.0), 20.0, 0.0, 180.0);
        let path = arc_path(&arc, &identity());

        // Mid angle is 90°, so the label sits straight below the center
        assert_approx_eq!(f32, path.anchor().x(), 50.0, epsilon = 1e-4);
        assert_approx_eq!(f32, path.anchor().y(), 74.0, epsilon = 1e-4);
    }

    #[test]
    fn test_generate_orders_edges_before_arcs() {
        let diagram = Diagram::new(100.0, 100.0, 0.0)
            .with_arcs(vec![Arc::new("a1", Point::new(50.0, 50.0), 10.0, 0.0, 90.0)])
            .with_edges(vec![
                Line::new("e1", Point::new(0.0, 0.0), Point::new(100.0, 0.0)),
                Line::new("e2", Point::new(0.0, 0.0), Point::new(0.0, 100.0)),
            ]);
        let style = Style::default();
        let highlights = HighlightSet::new();

        let elements = PathGenerator::new(identity(), &style, &highlights).generate(&diagram);
        let labels: Vec<_> = elements.iter().map(|e| e.path().label()).collect();
        assert_eq!(labels, vec!["e1", "e2", "a1"]);
    }

    #[test]
    fn test_style_follows_highlight_set() {
        let diagram = Diagram::new(100.0, 100.0, 0.0).with_edges(vec![
            Line::new("e1", Point::new(0.0, 0.0), Point::new(100.0, 0.0)),
            Line::new("e2", Point::new(0.0, 0.0), Point::new(0.0, 100.0)),
        ]);
        let style = Style::default();
        let mut highlights = HighlightSet::new();
        highlights.add("e1");

        let elements = PathGenerator::new(identity(), &style, &highlights).generate(&diagram);

        assert!(elements[0].is_highlighted());
        assert_eq!(elements[0].stroke().color(), Color::red());
        assert!(!elements[1].is_highlighted());
        assert_eq!(elements[1].stroke().color(), Color::black());
        assert_eq!(elements[1].stroke().width(), 2.0);
    }

    #[test]
    fn test_configured_stroke_width_survives_highlight() {
        let style = crate::config::StyleConfig::default()
            .with_stroke_width(3.5)
            .resolve()
            .unwrap();
        let mut highlights = HighlightSet::new();
        highlights.add("e1");
        let generator = PathGenerator::new(identity(), &style, &highlights);

        let line = Line::new("e1", Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        let element = generator.style_path(line_path(&line, &identity()));

        assert_eq!(element.stroke().color(), Color::red());
        assert_eq!(element.stroke().width(), 3.5);
    }

    #[test]
    fn test_rendered_label_shares_stroke_color() {
        let style = Style::default();
        let mut highlights = HighlightSet::new();
        highlights.add("a1");
        let generator = PathGenerator::new(identity(), &style, &highlights);

        let arc = Arc::new("a1", Point::new(50.0, 50.0), 10.0, 0.0, 90.0);
        let element = generator.style_path(arc_path(&arc, &identity()));

        let rendered: String = element
            .render_to_layers()
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect();

        let red = format!("\"{}\"", Color::red());
        assert!(rendered.contains(&format!("stroke={red}")));
        assert!(rendered.contains(&format!("fill={red}")));
        assert!(rendered.contains(r#"fill="none""#));
        assert!(rendered.contains(r#"data-label="a1""#));
    }
}
