//! SVG surface rendering.
//!
//! Composes a [`Scene`] into an SVG [`Document`] whose `viewBox` covers the
//! content area plus margins, with one group per [`RenderLayer`].

use std::{fs::File, io::Write, path::PathBuf};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use contour_core::draw::{Drawable, LayeredOutput, RenderLayer};

use crate::{export, scene::Scene};

/// SVG exporter writing to a file.
#[derive(Debug, Clone)]
pub struct Svg {
    file_name: PathBuf,
}

impl Svg {
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Renders a scene into an in-memory SVG document.
    ///
    /// The output is a pure function of the scene, so the same diagram,
    /// style and highlight set always produce byte-identical documents.
    pub fn render_scene(scene: &Scene<'_>) -> Document {
        let size = scene.viewport().surface_size();
        let style = scene.style();

        let mut output = LayeredOutput::new();

        let background = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", &style.background_color());
        output.add_to_layer(RenderLayer::Background, Box::new(background));

        for element in scene.elements() {
            output.merge(element.render_to_layers());
        }

        let mut doc = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set(
                "viewBox",
                format!("0 0 {} {}", size.width(), size.height()),
            )
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", &style.default_color())
            .set(
                "style",
                format!("background-color: {}", style.background_color()),
            );

        for node in output.render() {
            doc = doc.add(node);
        }

        debug!(
            width = size.width(),
            height = size.height(),
            elements = scene.elements().len(),
            scale:? = scene.transform().map(|transform| transform.scale());
            "SVG document rendered"
        );

        doc
    }

    /// Writes an SVG document to this exporter's file.
    pub fn write_document(&self, doc: &Document) -> Result<(), export::Error> {
        let file_name = self.file_name.display().to_string();
        info!(file_name = file_name; "Creating SVG file");

        let mut file = File::create(&self.file_name).map_err(|err| {
            error!(file_name = file_name, err:err; "Failed to create SVG file");
            export::Error::Io(err)
        })?;

        write!(file, "{doc}").map_err(|err| {
            error!(file_name = file_name, err:err; "Failed to write SVG content");
            export::Error::Io(err)
        })?;

        Ok(())
    }
}

impl export::Exporter for Svg {
    fn export_scene(&self, scene: &Scene<'_>) -> Result<(), export::Error> {
        let doc = Self::render_scene(scene);
        self.write_document(&doc)
    }
}
