//! Contour Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Contour renderer:
//!
//! - **Geometry**: Points, sizes and bounding boxes ([`geometry`] module)
//! - **Colors**: CSS color handling ([`color::Color`])
//! - **Semantic**: The diagram input model of labelled lines and arcs ([`semantic`] module)
//! - **Draw**: Path data, strokes, labels and render layers ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod semantic;
