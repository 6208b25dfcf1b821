use crate::coords::Vec3;
use crate::shape::RectShape;

use super::{emit_quad_indices, emit_vertex};

/// Emits the four corners counter-clockwise from the anchor and two
/// triangles. Negative extents are tessellated as given (flipped winding).
pub(super) fn tessellate_rect(
    s: &RectShape,
    base: u32,
    positions: &mut Vec<f32>,
    colors: &mut Vec<f32>,
    indices: &mut Vec<u32>,
) -> u32 {
    let Vec3 { x, y, z } = s.pos;
    let (w, h) = (s.width, s.height);

    emit_vertex(positions, colors, Vec3::new(x, y, z), s.color);
    emit_vertex(positions, colors, Vec3::new(x + w, y, z), s.color);
    emit_vertex(positions, colors, Vec3::new(x + w, y + h, z), s.color);
    emit_vertex(positions, colors, Vec3::new(x, y + h, z), s.color);

    emit_quad_indices(indices, base);

    4
}

#[cfg(test)]
mod tests {
    use crate::shape::RectShape;

    fn run(s: &RectShape, base: u32) -> (Vec<f32>, Vec<f32>, Vec<u32>, u32) {
        let (mut p, mut c, mut i) = (Vec::new(), Vec::new(), Vec::new());
        let n = super::tessellate_rect(s, base, &mut p, &mut c, &mut i);
        (p, c, i, n)
    }

    #[test]
    fn unit_rect_at_origin() {
        let mut s = RectShape::default();
        s.wh(10.0, 10.0);

        let (p, c, i, n) = run(&s, 0);
        assert_eq!(n, 4);
        assert_eq!(p, vec![0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 10.0, 10.0, 0.0, 0.0, 10.0, 0.0]);
        assert_eq!(i, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(c.len(), 16);
    }

    #[test]
    fn corners_offset_by_anchor_and_z_preserved() {
        let mut s = RectShape::default();
        s.xyz(3.0, 4.0, 0.5).wh(2.0, 6.0);

        let (p, _, _, _) = run(&s, 0);
        assert_eq!(&p[0..3], &[3.0, 4.0, 0.5]);
        assert_eq!(&p[3..6], &[5.0, 4.0, 0.5]);
        assert_eq!(&p[6..9], &[5.0, 10.0, 0.5]);
        assert_eq!(&p[9..12], &[3.0, 10.0, 0.5]);
    }

    #[test]
    fn indices_shift_with_base() {
        let s = RectShape::default();
        let (_, _, i, _) = run(&s, 7);
        assert_eq!(i, vec![7, 8, 9, 7, 9, 10]);
    }

    #[test]
    fn color_replicated_per_vertex() {
        let mut s = RectShape::default();
        s.rgba(0.2, 0.4, 0.6, 0.8);

        let (_, c, _, _) = run(&s, 0);
        for v in c.chunks(4) {
            assert_eq!(v, &[0.2, 0.4, 0.6, 0.8]);
        }
    }
}
