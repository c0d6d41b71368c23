//! Example: Building a schematic in code and replaying pointer events
//!
//! This example builds a diagram from the semantic model types directly,
//! hovers one element, and writes each rendered frame to disk.

use contour::{
    InteractiveDiagram, PointerEvent,
    config::AppConfig,
    geometry::Point,
    semantic::{Arc, Diagram, Line},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building diagram from semantic model...\n");

    let edges = vec![
        Line::new("feed", Point::new(0.0, 0.0), Point::new(40.0, 0.0)),
        Line::new("return", Point::new(0.0, 30.0), Point::new(40.0, 30.0)),
    ];

    // A half circle joining the two edges on the right
    let arcs = vec![Arc::new("loop", Point::new(40.0, 15.0), 15.0, -90.0, 90.0)];

    let diagram = Diagram::new(400.0, 300.0, 20.0)
        .with_edges(edges)
        .with_arcs(arcs);

    println!("Created diagram:");
    println!("  Surface: {}x{}", diagram.width(), diagram.height());
    println!("  Elements: {}", diagram.element_count());
    println!();

    let mut interactive = InteractiveDiagram::new(diagram, &AppConfig::default())?;

    let frames = [
        ("idle", None),
        ("hover_loop", Some(PointerEvent::enter("loop"))),
        ("leave_loop", Some(PointerEvent::leave("loop"))),
    ];

    for (name, event) in frames {
        let svg = match event {
            Some(event) => interactive.handle_event(event)?,
            None => interactive.render()?,
        };

        let output_path = format!("hover_walkthrough_{name}.svg");
        std::fs::write(&output_path, &svg)?;
        println!(
            "{name}: {} highlighted, written to {output_path}",
            interactive.highlights().len()
        );
    }

    Ok(())
}
