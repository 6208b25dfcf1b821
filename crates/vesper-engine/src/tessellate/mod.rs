//! Shape tessellation.
//!
//! Each function expands one fully configured shape into triangles, appending
//! to the frame's accumulation streams:
//! - positions: flat `f32` triples
//! - colors: flat `f32` quadruples, one per vertex, all equal to the shape's
//!   color (no gradients)
//! - indices: `u32` triangle corners, relative to the supplied index base
//!
//! The returned vertex count advances the caller's running index base so that
//! consecutive shapes share one global vertex/index stream.
//!
//! A mismatch between the position and color stream lengths is a tessellator
//! bug, guarded by a `debug_assert!` in [`tessellate`] rather than surfaced
//! as a recoverable error.

mod circle;
mod line;
mod rect;
mod triangle;

use crate::coords::{Rgba, Vec3};
use crate::shape::Shape;

/// Dispatches `shape` to its tessellator. Returns the number of vertices
/// emitted.
pub fn tessellate(
    shape: &Shape,
    base: u32,
    positions: &mut Vec<f32>,
    colors: &mut Vec<f32>,
    indices: &mut Vec<u32>,
) -> u32 {
    let emitted = match shape {
        Shape::Rect(s) => rect::tessellate_rect(s, base, positions, colors, indices),
        Shape::Circle(s) => circle::tessellate_circle(s, base, positions, colors, indices),
        Shape::Ellipse(s) => circle::tessellate_ellipse(s, base, positions, colors, indices),
        Shape::Triangle(s) => triangle::tessellate_triangle(s, base, positions, colors, indices),
        Shape::Line(s) => line::tessellate_line(s, base, positions, colors, indices),
    };

    debug_assert_eq!(
        colors.len() / 4,
        positions.len() / 3,
        "position/color streams out of step after tessellating {shape:?}"
    );

    emitted
}

/// Appends one vertex: a position triple and the replicated shape color.
#[inline]
fn emit_vertex(positions: &mut Vec<f32>, colors: &mut Vec<f32>, p: Vec3, c: Rgba) {
    positions.extend_from_slice(&[p.x, p.y, p.z]);
    colors.extend_from_slice(&[c.r, c.g, c.b, c.a]);
}

/// Appends the two triangles {0,1,2} and {0,2,3} of a quad whose corners
/// were emitted in perimeter order starting at `base`.
#[inline]
fn emit_quad_indices(indices: &mut Vec<u32>, base: u32) {
    indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}
