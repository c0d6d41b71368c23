//! Contour - fit-to-surface rendering of labelled line and arc schematics.
//!
//! A diagram of straight edges and circular arcs is bounded, scaled uniformly
//! into a `width × height` area with a margin around it, and rendered to SVG.
//! Elements are highlighted while the pointer hovers them.
//!
//! The pipeline for one render pass is:
//!
//! 1. [`calculate_bounding_box`] over all lines and arcs (arcs as full circles)
//! 2. [`FitTransform::fit`] to derive a single scale factor and the margin offset
//! 3. [`PathGenerator`] to produce path data, label anchors and colors
//! 4. [`export::svg::Svg`] to compose the surface
//!
//! [`InteractiveDiagram`] owns a [`HighlightSet`] and re-renders after each
//! [`PointerEvent`].

pub mod config;
pub mod export;

mod bounds;
mod error;
mod highlight;
mod path;
mod scene;
mod transform;

pub use contour_core::{color, draw, geometry, semantic};

pub use bounds::calculate_bounding_box;
pub use error::ContourError;
pub use highlight::{HighlightSet, PointerEvent};
pub use path::{ElementKind, ElementPath, PathGenerator, StyledElement, arc_path, is_large_arc, line_path};
pub use scene::Scene;
pub use transform::{FitError, FitTransform, Viewport};

use std::path::Path;

use log::{debug, info, trace, warn};
use svg::Document;

use config::{AppConfig, Style};
use export::{Exporter, svg::Svg};
use semantic::Diagram;

/// Builder for loading and rendering Contour diagrams.
///
/// # Examples
///
/// ```rust
/// use contour::{DiagramBuilder, HighlightSet};
///
/// let source = r#"
///     width = 100
///     height = 100
///     margin = 10
///
///     [[edges]]
///     label = "e1"
///     start_point = { x = 0, y = 0 }
///     end_point = { x = 10, y = 10 }
/// "#;
///
/// let builder = DiagramBuilder::default();
/// let diagram = builder.parse(source).expect("Failed to parse");
/// let svg = builder
///     .render_svg(&diagram, &HighlightSet::new())
///     .expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a TOML diagram description.
    ///
    /// Duplicate labels are logged as warnings but accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ContourError::Parse`] for malformed TOML and
    /// [`ContourError::Input`] for invalid dimensions or geometry.
    pub fn parse(&self, source: &str) -> Result<Diagram, ContourError> {
        info!("Parsing diagram");

        let diagram: Diagram =
            toml::from_str(source).map_err(|err| ContourError::new_parse_error(err, source))?;
        diagram.validate()?;
        warn_duplicate_labels(&diagram);

        debug!(
            edges = diagram.edges().len(),
            arcs = diagram.arcs().len(),
            nodes = diagram.nodes().len();
            "Diagram parsed successfully"
        );
        trace!(diagram:? = diagram; "Parsed diagram");

        Ok(diagram)
    }

    /// Render a diagram with the given highlights to an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`ContourError`] for invalid input, an invalid style
    /// configuration, or non-finite geometry.
    pub fn render_document(
        &self,
        diagram: &Diagram,
        highlights: &HighlightSet,
    ) -> Result<Document, ContourError> {
        diagram.validate()?;
        let style = self.style()?;
        render_document(diagram, &style, highlights)
    }

    /// Render a diagram with the given highlights to an SVG string.
    ///
    /// # Errors
    ///
    /// See [`DiagramBuilder::render_document`].
    pub fn render_svg(
        &self,
        diagram: &Diagram,
        highlights: &HighlightSet,
    ) -> Result<String, ContourError> {
        let doc = self.render_document(diagram, highlights)?;
        info!("SVG rendered successfully");
        Ok(doc.to_string())
    }

    /// Render a diagram and write the SVG to `path`.
    ///
    /// # Errors
    ///
    /// See [`DiagramBuilder::render_document`]; additionally returns
    /// [`ContourError::Export`] if the file cannot be written.
    pub fn export_svg(
        &self,
        diagram: &Diagram,
        highlights: &HighlightSet,
        path: impl AsRef<Path>,
    ) -> Result<(), ContourError> {
        diagram.validate()?;
        let style = self.style()?;
        let scene = Scene::build(diagram, &style, highlights)?;
        Svg::new(path.as_ref()).export_scene(&scene)?;
        Ok(())
    }

    /// Wrap a diagram for interactive use with this builder's configuration.
    ///
    /// # Errors
    ///
    /// See [`InteractiveDiagram::new`].
    pub fn interactive(&self, diagram: Diagram) -> Result<InteractiveDiagram, ContourError> {
        InteractiveDiagram::new(diagram, &self.config)
    }

    fn style(&self) -> Result<Style, ContourError> {
        self.config.style().resolve().map_err(ContourError::Config)
    }
}

/// A diagram instance that owns its hover state.
///
/// Each call to [`handle_event`](Self::handle_event) applies the event to the
/// highlight set and then renders the whole diagram again, in that order,
/// within the same call. The set belongs to this instance alone; create a new
/// instance to start over with nothing highlighted.
///
/// # Examples
///
/// ```rust
/// use contour::{InteractiveDiagram, PointerEvent, config::AppConfig};
/// use contour::{geometry::Point, semantic::{Diagram, Line}};
///
/// let diagram = Diagram::new(100.0, 100.0, 10.0).with_edges(vec![
///     Line::new("e1", Point::new(0.0, 0.0), Point::new(10.0, 10.0)),
/// ]);
///
/// let mut interactive = InteractiveDiagram::new(diagram, &AppConfig::default()).unwrap();
/// let hovered = interactive.handle_event(PointerEvent::enter("e1")).unwrap();
/// assert!(interactive.highlights().contains("e1"));
///
/// let left = interactive.handle_event(PointerEvent::leave("e1")).unwrap();
/// assert_ne!(hovered, left);
/// ```
#[derive(Debug)]
pub struct InteractiveDiagram {
    diagram: Diagram,
    style: Style,
    highlights: HighlightSet,
}

impl InteractiveDiagram {
    /// Validates the diagram, resolves the style, and starts with an empty
    /// highlight set.
    ///
    /// # Errors
    ///
    /// Returns [`ContourError::Input`] or [`ContourError::Config`].
    pub fn new(diagram: Diagram, config: &AppConfig) -> Result<Self, ContourError> {
        diagram.validate()?;
        let style = config.style().resolve().map_err(ContourError::Config)?;

        Ok(Self {
            diagram,
            style,
            highlights: HighlightSet::new(),
        })
    }

    /// Applies a pointer event and returns the re-rendered SVG.
    ///
    /// # Errors
    ///
    /// Returns [`ContourError::Geometry`] for non-finite geometry.
    pub fn handle_event(&mut self, event: PointerEvent) -> Result<String, ContourError> {
        let changed = self.highlights.apply(&event);
        debug!(label = event.label(), changed = changed; "Handled pointer event");
        self.render()
    }

    /// Renders the current state without changing it.
    ///
    /// # Errors
    ///
    /// Returns [`ContourError::Geometry`] for non-finite geometry.
    pub fn render(&self) -> Result<String, ContourError> {
        render_document(&self.diagram, &self.style, &self.highlights).map(|doc| doc.to_string())
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Read-only view of the labels currently highlighted.
    pub fn highlights(&self) -> &HighlightSet {
        &self.highlights
    }
}

fn render_document(
    diagram: &Diagram,
    style: &Style,
    highlights: &HighlightSet,
) -> Result<Document, ContourError> {
    let scene = Scene::build(diagram, style, highlights)?;
    Ok(Svg::render_scene(&scene))
}

fn warn_duplicate_labels(diagram: &Diagram) {
    for label in diagram.duplicate_labels() {
        warn!(label = label; "Label is used by more than one element, highlighting will affect all of them");
    }
}
