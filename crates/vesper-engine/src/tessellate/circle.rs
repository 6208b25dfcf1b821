use std::f32::consts::TAU;

use crate::coords::{Rgba, Vec3};
use crate::shape::{CircleShape, EllipseShape};

use super::emit_vertex;

pub(super) fn tessellate_circle(
    s: &CircleShape,
    base: u32,
    positions: &mut Vec<f32>,
    colors: &mut Vec<f32>,
    indices: &mut Vec<u32>,
) -> u32 {
    fan(s.pos, s.radius, s.radius, s.resolution, s.color, base, positions, colors, indices)
}

pub(super) fn tessellate_ellipse(
    s: &EllipseShape,
    base: u32,
    positions: &mut Vec<f32>,
    colors: &mut Vec<f32>,
    indices: &mut Vec<u32>,
) -> u32 {
    fan(s.pos, s.width, s.height, s.resolution, s.color, base, positions, colors, indices)
}

/// Fan triangulation: one center vertex plus `resolution` perimeter vertices
/// at `θ_i = 2π·i/resolution`, scaled per axis by `rx`/`ry`.
///
/// `resolution == 0` emits the center vertex only and no triangles; the angle
/// step is never computed in that case.
#[allow(clippy::too_many_arguments)]
fn fan(
    center: Vec3,
    rx: f32,
    ry: f32,
    resolution: u32,
    color: Rgba,
    base: u32,
    positions: &mut Vec<f32>,
    colors: &mut Vec<f32>,
    indices: &mut Vec<u32>,
) -> u32 {
    emit_vertex(positions, colors, center, color);

    if resolution == 0 {
        return 1;
    }

    for i in 0..resolution {
        let theta = TAU * i as f32 / resolution as f32;
        let p = Vec3::new(center.x + theta.cos() * rx, center.y + theta.sin() * ry, center.z);
        emit_vertex(positions, colors, p, color);
    }

    // The modulo wrap closes the fan back onto the first perimeter vertex.
    for i in 0..resolution {
        indices.push(base);
        indices.push(base + i + 1);
        indices.push(base + (i + 1) % resolution + 1);
    }

    resolution + 1
}

#[cfg(test)]
mod tests {
    use crate::shape::{CircleShape, EllipseShape};

    fn run_circle(s: &CircleShape, base: u32) -> (Vec<f32>, Vec<u32>, u32) {
        let (mut p, mut c, mut i) = (Vec::new(), Vec::new(), Vec::new());
        let n = super::tessellate_circle(s, base, &mut p, &mut c, &mut i);
        (p, i, n)
    }

    #[test]
    fn vertex_and_triangle_counts() {
        let mut s = CircleShape::default();
        s.radius(5.0).res(12);

        let (p, i, n) = run_circle(&s, 0);
        assert_eq!(n, 13);
        assert_eq!(p.len(), 13 * 3);
        assert_eq!(i.len(), 12 * 3);
    }

    #[test]
    fn perimeter_lies_on_radius() {
        let mut s = CircleShape::default();
        s.xyz(10.0, -4.0, 0.0).radius(7.5).res(24);

        let (p, _, _) = run_circle(&s, 0);
        for v in p.chunks(3).skip(1) {
            let (dx, dy) = (v[0] - 10.0, v[1] + 4.0);
            let dist = (dx * dx + dy * dy).sqrt();
            assert!((dist - 7.5).abs() < 1e-4, "perimeter vertex at distance {dist}");
        }
    }

    #[test]
    fn fan_wraps_back_to_first_perimeter_vertex() {
        let mut s = CircleShape::default();
        s.radius(1.0).res(4);

        let (_, i, _) = run_circle(&s, 3);
        // Last triangle closes onto perimeter vertex 1 (offset by base 3).
        assert_eq!(&i[9..12], &[3, 7, 4]);
        // Every triangle starts at the center.
        for t in i.chunks(3) {
            assert_eq!(t[0], 3);
        }
    }

    #[test]
    fn resolution_zero_emits_center_only() {
        let mut s = CircleShape::default();
        s.radius(50.0).res(0);

        let (p, i, n) = run_circle(&s, 0);
        assert_eq!(n, 1);
        assert_eq!(p.len(), 3);
        assert!(i.is_empty());
    }

    #[test]
    fn ellipse_scales_axes_independently() {
        let mut s = EllipseShape::default();
        s.wh(10.0, 4.0).res(4);

        let (mut p, mut c, mut i) = (Vec::new(), Vec::new(), Vec::new());
        super::tessellate_ellipse(&s, 0, &mut p, &mut c, &mut i);

        // Angles 0 and π/2 hit the axis extremes.
        assert!((p[3] - 10.0).abs() < 1e-4 && p[4].abs() < 1e-4);
        assert!(p[6].abs() < 1e-4 && (p[7] - 4.0).abs() < 1e-4);
    }
}
