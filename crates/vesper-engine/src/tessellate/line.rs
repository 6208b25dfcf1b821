use crate::shape::LineShape;

use super::{emit_quad_indices, emit_vertex};

/// Expands a segment into a quad: the normalized direction is rotated 90° in
/// the XY plane and scaled by half the thickness to obtain a perpendicular
/// offset applied to both endpoints.
///
/// A zero-length segment has no direction to normalize; it emits nothing
/// (0 vertices, 0 indices) rather than producing NaN geometry.
pub(super) fn tessellate_line(
    s: &LineShape,
    base: u32,
    positions: &mut Vec<f32>,
    colors: &mut Vec<f32>,
    indices: &mut Vec<u32>,
) -> u32 {
    let Some(dir) = (s.to - s.from).normalized() else {
        return 0;
    };
    let offset = dir.perp_xy() * (s.thickness * 0.5);

    // Perimeter order, so the quad shares the rect's index pattern.
    emit_vertex(positions, colors, s.from + offset, s.color);
    emit_vertex(positions, colors, s.to + offset, s.color);
    emit_vertex(positions, colors, s.to - offset, s.color);
    emit_vertex(positions, colors, s.from - offset, s.color);

    emit_quad_indices(indices, base);

    4
}

#[cfg(test)]
mod tests {
    use crate::shape::LineShape;

    fn run(s: &LineShape) -> (Vec<f32>, Vec<u32>, u32) {
        let (mut p, mut c, mut i) = (Vec::new(), Vec::new(), Vec::new());
        let n = super::tessellate_line(s, 0, &mut p, &mut c, &mut i);
        (p, i, n)
    }

    #[test]
    fn horizontal_line_forms_exact_quad() {
        let mut s = LineShape::default();
        s.from((0.0, 0.0)).to((10.0, 0.0)).thickness(2.0);

        let (p, i, n) = run(&s);
        assert_eq!(n, 4);
        // Direction (1,0); CCW perpendicular (0,1); offset length 1.
        assert_eq!(p, vec![0.0, 1.0, 0.0, 10.0, 1.0, 0.0, 10.0, -1.0, 0.0, 0.0, -1.0, 0.0]);
        assert_eq!(i, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn long_edges_parallel_and_short_edges_thickness() {
        let mut s = LineShape::default();
        s.from((1.0, 2.0)).to((7.0, 10.0)).thickness(3.0);

        let (p, _, _) = run(&s);
        let v: Vec<[f32; 2]> = p.chunks(3).map(|c| [c[0], c[1]]).collect();

        // Long edges v0→v1 and v3→v2 both equal `to - from`.
        assert!((v[1][0] - v[0][0] - 6.0).abs() < 1e-4);
        assert!((v[1][1] - v[0][1] - 8.0).abs() < 1e-4);
        assert!((v[2][0] - v[3][0] - 6.0).abs() < 1e-4);
        assert!((v[2][1] - v[3][1] - 8.0).abs() < 1e-4);

        // Short edges v0→v3 and v1→v2 have length == thickness.
        for (a, b) in [(v[0], v[3]), (v[1], v[2])] {
            let len = ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt();
            assert!((len - 3.0).abs() < 1e-4, "short edge length {len}");
        }
    }

    #[test]
    fn degenerate_segment_emits_nothing() {
        let mut s = LineShape::default();
        s.from((5.0, 5.0)).to((5.0, 5.0)).thickness(4.0);

        let (p, i, n) = run(&s);
        assert_eq!(n, 0);
        assert!(p.is_empty());
        assert!(i.is_empty());
    }
}
