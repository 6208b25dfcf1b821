//! GPU buffer synchronization.
//!
//! A [`BufferSlot`] reconciles one CPU-side stream with one GPU buffer across
//! frames. The reuse policy is a three-way branch on the tracked byte size:
//!
//! - no buffer bound → create sized to the data and upload
//! - sizes equal → in-place write, no reallocation
//! - sizes differ → destroy and recreate at the new size
//!
//! Stable vertex counts across frames (the common case for steady-state
//! drawing) therefore never touch the allocator.

use wgpu::util::DeviceExt;

/// Outcome of the size comparison, kept separate from the GPU calls so the
/// policy itself is unit-testable without a device.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum SyncAction {
    Create,
    Write,
    Recreate,
}

pub(crate) fn plan_sync(bound: bool, tracked_bytes: u64, incoming_bytes: u64) -> SyncAction {
    if !bound {
        SyncAction::Create
    } else if tracked_bytes == incoming_bytes {
        SyncAction::Write
    } else {
        SyncAction::Recreate
    }
}

/// One GPU buffer handle plus its last-known byte size.
///
/// Invariant: `size` always equals the byte length of the data most recently
/// written through this slot.
pub struct BufferSlot {
    label: &'static str,
    usage: wgpu::BufferUsages,
    buffer: Option<wgpu::Buffer>,
    size: u64,
}

impl BufferSlot {
    /// `usage` is the slot's role (VERTEX, INDEX, …); COPY_DST is added at
    /// creation so in-place writes always work.
    pub fn new(label: &'static str, usage: wgpu::BufferUsages) -> Self {
        Self { label, usage, buffer: None, size: 0 }
    }

    /// Reconciles the slot with `bytes` per the three-way policy above.
    pub fn sync(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, bytes: &[u8]) {
        let incoming = bytes.len() as u64;

        match plan_sync(self.buffer.is_some(), self.size, incoming) {
            SyncAction::Write => {
                // Guarded by plan_sync: Write implies a bound buffer.
                let buffer = self.buffer.as_ref().expect("Write action implies bound buffer");
                queue.write_buffer(buffer, 0, bytes);
            }
            action => {
                if action == SyncAction::Recreate {
                    log::trace!("{}: resize {} -> {} bytes", self.label, self.size, incoming);
                    if let Some(old) = self.buffer.take() {
                        old.destroy();
                    }
                }
                let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(self.label),
                    contents: bytes,
                    usage: self.usage | wgpu::BufferUsages::COPY_DST,
                });
                self.buffer = Some(buffer);
                self.size = incoming;
            }
        }
    }

    #[inline]
    pub fn buffer(&self) -> Option<&wgpu::Buffer> {
        self.buffer.as_ref()
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }
}

impl Drop for BufferSlot {
    fn drop(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            buffer.destroy();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SyncAction, plan_sync};

    #[test]
    fn unbound_slot_creates() {
        assert_eq!(plan_sync(false, 0, 1024), SyncAction::Create);
        assert_eq!(plan_sync(false, 0, 0), SyncAction::Create);
    }

    #[test]
    fn equal_size_writes_in_place() {
        assert_eq!(plan_sync(true, 1024, 1024), SyncAction::Write);
    }

    #[test]
    fn same_size_repeatedly_never_recreates() {
        // First upload creates; every following same-sized frame writes.
        let mut bound = false;
        let mut tracked = 0u64;
        let mut recreates = 0;
        for _ in 0..3 {
            match plan_sync(bound, tracked, 512) {
                SyncAction::Create => {
                    bound = true;
                    tracked = 512;
                }
                SyncAction::Write => {}
                SyncAction::Recreate => recreates += 1,
            }
        }
        assert_eq!(recreates, 0);
    }

    #[test]
    fn growth_and_shrinkage_recreate() {
        assert_eq!(plan_sync(true, 512, 1024), SyncAction::Recreate);
        assert_eq!(plan_sync(true, 1024, 512), SyncAction::Recreate);
    }
}
