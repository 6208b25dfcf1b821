//! Frame batch accumulation.
//!
//! `GeometryBatch` owns the frame's pending shape list and the three parallel
//! CPU streams the tessellators append into. Draw order is insertion order;
//! nothing sorts by depth, so later shapes paint on top.

use crate::shape::Shape;
use crate::tessellate::tessellate;

/// Per-frame geometry accumulator.
///
/// Invariants:
/// - `colors.len() / 4 == positions.len() / 3` between operations
/// - every index value is `< positions.len() / 3`
///
/// Empty at frame start, grows as shapes are recorded and tessellated, and is
/// cleared in full after GPU submission. Capacity is retained across frames
/// so steady-state drawing does not reallocate.
#[derive(Debug, Default)]
pub struct GeometryBatch {
    pending: Vec<Shape>,
    positions: Vec<f32>,
    colors: Vec<f32>,
    indices: Vec<u32>,
}

impl GeometryBatch {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a shape in the pending list and returns a mutable borrow of the
    /// stored value for fluent configuration.
    ///
    /// Shape modules wrap this in typed entry points (`rect()`, `circle()`…).
    pub(crate) fn push_shape(&mut self, shape: Shape) -> &mut Shape {
        self.pending.push(shape);
        // Pushed one element above, so last_mut always succeeds.
        self.pending
            .last_mut()
            .expect("pending list is non-empty after push")
    }

    /// Tessellates every pending shape in insertion order, threading a
    /// running index base through so all shapes share one vertex/index
    /// stream.
    pub fn tessellate_pending(&mut self) {
        let mut base = self.vertex_count() as u32;
        for shape in &self.pending {
            base += tessellate(
                shape,
                base,
                &mut self.positions,
                &mut self.colors,
                &mut self.indices,
            );
        }
        self.pending.clear();
    }

    /// Empties all streams and the pending list unconditionally. Idempotent.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.positions.clear();
        self.colors.clear();
        self.indices.clear();
    }

    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[inline]
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_rect_end_to_end() {
        let mut batch = GeometryBatch::new();
        batch.rect().wh(10.0, 10.0);
        batch.tessellate_pending();

        assert_eq!(batch.indices(), &[0, 1, 2, 0, 2, 3]);
        assert_eq!(
            batch.positions(),
            &[0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 10.0, 10.0, 0.0, 0.0, 10.0, 0.0]
        );
        assert_eq!(batch.colors().len(), 4 * 4);
    }

    #[test]
    fn index_base_advances_across_shapes() {
        let mut batch = GeometryBatch::new();
        batch.rect().wh(1.0, 1.0);
        batch.circle().radius(1.0).res(3);
        batch.rect().wh(2.0, 2.0);
        batch.tessellate_pending();

        // Rect (4 verts) then circle (1 + 3 verts) then rect again.
        assert_eq!(batch.vertex_count(), 4 + 4 + 4);
        assert_eq!(batch.index_count(), 6 + 9 + 6);
        assert_eq!(&batch.indices()[..3], &[0, 1, 2]);
        assert_eq!(batch.indices()[6], 4); // circle fan center
        assert_eq!(&batch.indices()[15..18], &[8, 9, 10]);
    }

    #[test]
    fn all_indices_reference_emitted_vertices() {
        let mut batch = GeometryBatch::new();
        batch.circle().radius(5.0).res(16);
        batch.line().to((3.0, 4.0)).thickness(1.0);
        batch.triangle().points((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        batch.tessellate_pending();

        let count = batch.vertex_count() as u32;
        assert!(batch.indices().iter().all(|&i| i < count));
        assert_eq!(batch.colors().len() / 4, batch.vertex_count());
    }

    #[test]
    fn skipped_degenerate_line_does_not_break_bases() {
        let mut batch = GeometryBatch::new();
        batch.rect().wh(1.0, 1.0);
        batch.line().from((2.0, 2.0)).to((2.0, 2.0)); // emits nothing
        batch.rect().wh(1.0, 1.0);
        batch.tessellate_pending();

        assert_eq!(batch.vertex_count(), 8);
        assert_eq!(&batch.indices()[6..9], &[4, 5, 6]);
    }

    #[test]
    fn insertion_order_is_tessellation_order() {
        let mut batch = GeometryBatch::new();
        batch.rect().x(1.0).wh(1.0, 1.0);
        batch.rect().x(2.0).wh(1.0, 1.0);
        batch.tessellate_pending();

        // First rect's anchor precedes the second's in the stream.
        assert_eq!(batch.positions()[0], 1.0);
        assert_eq!(batch.positions()[12], 2.0);
    }

    #[test]
    fn clear_empties_everything_and_is_idempotent() {
        let mut batch = GeometryBatch::new();
        batch.ellipse().wh(3.0, 2.0).res(8);
        batch.tessellate_pending();
        batch.circle().radius(1.0); // pending but untessellated

        batch.clear();
        assert!(batch.is_empty());
        assert_eq!(batch.pending_count(), 0);
        assert_eq!(batch.vertex_count(), 0);

        batch.clear();
        assert!(batch.is_empty());
    }

    #[test]
    fn builder_chaining_configures_stored_shape() {
        let mut batch = GeometryBatch::new();
        batch
            .circle()
            .xy((4.0, 5.0))
            .radius(9.0)
            .res(30)
            .rgba(0.1, 0.2, 0.3, 0.4);
        batch.tessellate_pending();

        assert_eq!(batch.vertex_count(), 31);
        assert_eq!(&batch.positions()[..3], &[4.0, 5.0, 0.0]);
        assert_eq!(&batch.colors()[..4], &[0.1, 0.2, 0.3, 0.4]);
    }
}
