use crate::shape::TriangleShape;

use super::emit_vertex;

/// Emits the three configured points in order as a single triangle.
pub(super) fn tessellate_triangle(
    s: &TriangleShape,
    base: u32,
    positions: &mut Vec<f32>,
    colors: &mut Vec<f32>,
    indices: &mut Vec<u32>,
) -> u32 {
    for p in s.points {
        emit_vertex(positions, colors, p, s.color);
    }
    indices.extend_from_slice(&[base, base + 1, base + 2]);
    3
}

#[cfg(test)]
mod tests {
    use crate::shape::TriangleShape;

    #[test]
    fn points_pass_through_in_order() {
        let mut s = TriangleShape::default();
        s.a(0.0, 0.0, 0.0).b(4.0, 0.0, 0.0).c(0.0, 3.0, 0.0);

        let (mut p, mut c, mut i) = (Vec::new(), Vec::new(), Vec::new());
        let n = super::tessellate_triangle(&s, 5, &mut p, &mut c, &mut i);

        assert_eq!(n, 3);
        assert_eq!(p, vec![0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 3.0, 0.0]);
        assert_eq!(i, vec![5, 6, 7]);
        assert_eq!(c.len(), 12);
    }

    #[test]
    fn clockwise_winding_is_not_corrected() {
        let mut s = TriangleShape::default();
        s.points((0.0, 0.0), (0.0, 3.0), (4.0, 0.0));

        let (mut p, mut c, mut i) = (Vec::new(), Vec::new(), Vec::new());
        super::tessellate_triangle(&s, 0, &mut p, &mut c, &mut i);

        // Vertices keep specification order even when wound clockwise.
        assert_eq!(&p[3..6], &[0.0, 3.0, 0.0]);
        assert_eq!(&p[6..9], &[4.0, 0.0, 0.0]);
    }
}
