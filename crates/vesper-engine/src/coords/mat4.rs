use core::ops::Mul;

/// Column-major 4×4 matrix.
///
/// Column-major storage matches both `mat4x4<f32>` in WGSL and the layout
/// expected by the transform uniform upload, so `to_cols_array` is a plain
/// flatten with no transpose.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    cols: [[f32; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    #[inline]
    pub const fn from_cols(cols: [[f32; 4]; 4]) -> Self {
        Self { cols }
    }

    #[inline]
    pub const fn from_translation(x: f32, y: f32, z: f32) -> Self {
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [x, y, z, 1.0],
            ],
        }
    }

    #[inline]
    pub const fn from_scale(x: f32, y: f32, z: f32) -> Self {
        Self {
            cols: [
                [x, 0.0, 0.0, 0.0],
                [0.0, y, 0.0, 0.0],
                [0.0, 0.0, z, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Maps pixel coordinates (top-left origin, +Y down) onto wgpu NDC:
    /// `(0, 0) → (-1, 1)` and `(width, height) → (1, -1)`.
    #[inline]
    pub fn pixel_to_ndc(width: f32, height: f32) -> Self {
        let w = width.max(1.0);
        let h = height.max(1.0);
        Mat4::from_translation(-1.0, 1.0, 0.0) * Mat4::from_scale(2.0 / w, -2.0 / h, 1.0)
    }

    /// Flattens to 16 floats, column by column.
    #[inline]
    pub fn to_cols_array(self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (c, col) in self.cols.iter().enumerate() {
            out[c * 4..c * 4 + 4].copy_from_slice(col);
        }
        out
    }

    /// Transforms a point (w = 1), returning the xyz of the result.
    pub fn transform_point(&self, x: f32, y: f32, z: f32) -> (f32, f32, f32) {
        let m = &self.cols;
        (
            m[0][0] * x + m[1][0] * y + m[2][0] * z + m[3][0],
            m[0][1] * x + m[1][1] * y + m[2][1] * z + m[3][1],
            m[0][2] * x + m[1][2] * y + m[2][2] * z + m[3][2],
        )
    }
}

impl Default for Mat4 {
    #[inline]
    fn default() -> Self {
        Mat4::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let a = &self.cols;
        let mut cols = [[0.0f32; 4]; 4];
        for (c, rc) in rhs.cols.iter().enumerate() {
            for r in 0..4 {
                cols[c][r] =
                    a[0][r] * rc[0] + a[1][r] * rc[1] + a[2][r] * rc[2] + a[3][r] * rc[3];
            }
        }
        Mat4 { cols }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f32, f32, f32), b: (f32, f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-6 && (a.1 - b.1).abs() < 1e-6 && (a.2 - b.2).abs() < 1e-6
    }

    #[test]
    fn identity_mul_is_identity() {
        let m = Mat4::from_translation(3.0, -2.0, 1.0);
        assert_eq!(Mat4::IDENTITY * m, m);
        assert_eq!(m * Mat4::IDENTITY, m);
    }

    #[test]
    fn translate_then_scale_composition() {
        // Matrix product applies the right-hand factor first.
        let m = Mat4::from_translation(10.0, 0.0, 0.0) * Mat4::from_scale(2.0, 2.0, 1.0);
        assert!(close(m.transform_point(1.0, 1.0, 0.0), (12.0, 2.0, 0.0)));
    }

    #[test]
    fn pixel_to_ndc_maps_corners() {
        let m = Mat4::pixel_to_ndc(800.0, 600.0);
        assert!(close(m.transform_point(0.0, 0.0, 0.0), (-1.0, 1.0, 0.0)));
        assert!(close(m.transform_point(800.0, 600.0, 0.0), (1.0, -1.0, 0.0)));
        assert!(close(m.transform_point(400.0, 300.0, 0.0), (0.0, 0.0, 0.0)));
    }

    #[test]
    fn cols_array_is_column_major() {
        let m = Mat4::from_translation(5.0, 6.0, 7.0);
        let a = m.to_cols_array();
        assert_eq!(&a[12..15], &[5.0, 6.0, 7.0]);
        assert_eq!(a[0], 1.0);
    }
}
