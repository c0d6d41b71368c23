//! Bounding-box calculation for a set of lines and arcs.
//!
//! Arcs are bounded by their full circle, not by the swept portion. The box
//! is looser for short arcs but never too small.

use log::debug;

use contour_core::{
    geometry::Bounds,
    semantic::{Arc, Line},
};

/// Computes the smallest axis-aligned box containing every line endpoint and
/// every arc's enclosing circle.
///
/// With no lines and no arcs the result is [`Bounds::empty`], i.e.
/// `{+∞, +∞, −∞, −∞}`; callers must treat it as invalid.
pub fn calculate_bounding_box(lines: &[Line], arcs: &[Arc]) -> Bounds {
    let bounds = lines.iter().fold(Bounds::empty(), |acc, line| {
        acc.include_point(line.start_point())
            .include_point(line.end_point())
    });

    let bounds = arcs.iter().fold(bounds, |acc, arc| {
        acc.include_circle(arc.center(), arc.radius())
    });

    debug!(
        lines = lines.len(),
        arcs = arcs.len(),
        bounds:? = bounds;
        "Calculated bounding box"
    );

    bounds
}

#[cfg(test)]
mod tests {
    use contour_core::geometry::Point;

    use super::*;

    #[test]
    fn test_empty_input_yields_inverted_infinite_box() {
        let bounds = calculate_bounding_box(&[], &[]);
        assert_eq!(bounds.min_x(), f32::INFINITY);
        assert_eq!(bounds.min_y(), f32::INFINITY);
        assert_eq!(bounds.max_x(), f32::NEG_INFINITY);
        assert_eq!(bounds.max_y(), f32::NEG_INFINITY);
        assert!(bounds.is_empty());
    }

    #[test]
    fn test_single_horizontal_line() {
        let lines = [Line::new(
            "e1",
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        )];
        let bounds = calculate_bounding_box(&lines, &[]);
        assert_eq!(bounds, Bounds::new(0.0, 0.0, 10.0, 0.0));
    }

    #[test]
    fn test_reversed_line_endpoints() {
        let lines = [Line::new(
            "e1",
            Point::new(5.0, 8.0),
            Point::new(-3.0, 2.0),
        )];
        let bounds = calculate_bounding_box(&lines, &[]);
        assert_eq!(bounds, Bounds::new(-3.0, 2.0, 5.0, 8.0));
    }

    #[test]
    fn test_partial_arc_is_bounded_by_full_circle() {
        // A quarter arc still reserves room for the whole circle
        let arcs = [Arc::new("a1", Point::new(50.0, 50.0), 20.0, 0.0, 90.0)];
        let bounds = calculate_bounding_box(&[], &arcs);
        assert_eq!(bounds, Bounds::new(30.0, 30.0, 70.0, 70.0));
    }

    #[test]
    fn test_lines_and_arcs_combined() {
        let lines = [Line::new(
            "e1",
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        )];
        let arcs = [Arc::new("a1", Point::new(100.0, 40.0), 10.0, 90.0, 270.0)];
        let bounds = calculate_bounding_box(&lines, &arcs);
        assert_eq!(bounds, Bounds::new(0.0, 0.0, 110.0, 50.0));
    }

    #[test]
    fn test_zero_radius_arc_bounds_its_center() {
        let arcs = [Arc::new("a1", Point::new(3.0, 4.0), 0.0, 0.0, 180.0)];
        let bounds = calculate_bounding_box(&[], &arcs);
        assert_eq!(bounds, Bounds::new(3.0, 4.0, 3.0, 4.0));
    }
}
