/// Straight-alpha RGBA color, each channel nominally in `[0, 1]`.
///
/// Channels are passed to the GPU as given; nothing clamps or premultiplies.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque grayscale.
    #[inline]
    pub const fn value(v: f32, a: f32) -> Self {
        Self { r: v, g: v, b: v, a }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl Default for Rgba {
    #[inline]
    fn default() -> Self {
        Rgba::WHITE
    }
}
