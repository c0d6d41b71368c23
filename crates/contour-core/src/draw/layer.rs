//! Layered SVG output.
//!
//! Drawables add nodes to a [`RenderLayer`] and the surface renderer emits
//! one `<g data-layer="...">` group per non-empty layer, bottom to top. This
//! keeps every label above every stroke no matter how elements interleave.
//!
//! ```
//! # use contour_core::draw::{LayeredOutput, RenderLayer};
//! # use svg::node::element::{Path, Text};
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Text, Box::new(Text::new("e1")));
//! output.add_to_layer(RenderLayer::Edge, Box::new(Path::new()));
//!
//! // Edge group first, then the text group
//! assert_eq!(output.render().len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Z-order layers, rendered in declaration order (first variant at the bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Surface background
    Background,
    /// Straight edge strokes
    Edge,
    /// Arc strokes
    Arc,
    /// Element labels
    Text,
}

impl RenderLayer {
    /// Returns the name used for the `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Edge => "edge",
            Self::Arc => "arc",
            Self::Text => "text",
        }
    }
}

/// SVG nodes tagged with the layer they belong to.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to `layer`; order within a layer is preserved.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Moves all nodes of `other` into this output.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders one SVG group per non-empty layer, bottom to top.
    ///
    /// Sorting is stable, so nodes keep their insertion order inside a layer.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);
                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }
            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);
        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::{Path, Rectangle, Text};

    use super::*;

    #[test]
    fn test_empty_output_renders_nothing() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layers_render_bottom_to_top() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Text::new("label")));
        output.add_to_layer(RenderLayer::Arc, Box::new(Path::new()));
        output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Edge, Box::new(Path::new()));

        let rendered: Vec<String> = output.render().iter().map(|n| n.to_string()).collect();
        assert_eq!(rendered.len(), 4);
        assert!(rendered[0].contains(r#"data-layer="background""#));
        assert!(rendered[1].contains(r#"data-layer="edge""#));
        assert!(rendered[2].contains(r#"data-layer="arc""#));
        assert!(rendered[3].contains(r#"data-layer="text""#));
    }

    #[test]
    fn test_merge_same_layer_produces_one_group() {
        let mut first = LayeredOutput::new();
        first.add_to_layer(RenderLayer::Edge, Box::new(Path::new().set("id", "p1")));

        let mut second = LayeredOutput::new();
        second.add_to_layer(RenderLayer::Edge, Box::new(Path::new().set("id", "p2")));

        first.merge(second);
        let nodes = first.render();
        assert_eq!(nodes.len(), 1);

        let group = nodes[0].to_string();
        let p1 = group.find("p1").expect("first path rendered");
        let p2 = group.find("p2").expect("second path rendered");
        assert!(p1 < p2, "insertion order is kept within a layer");
    }
}
