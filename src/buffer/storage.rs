//! Growable heap region backing a [`crate::ByteBuffer`].
//!
//! [`HeapStorage`] owns one contiguous, zero-initialised byte region and implements the two raw
//! primitives the typed layer is built on: copying bytes out of the region and copying bytes
//! into it. Copying in never fails for lack of space; the region is grown first according to the
//! configured [`GrowthPolicy`].
//!
//! Offsets and lengths are not validated against the logical size of the buffer here. The
//! typed layer clamps reads to the written data and validates caller slices before it calls in.

use log::trace;

use crate::config::GrowthPolicy;

/// Contiguous byte region that grows on demand.
#[derive(Debug, Clone)]
pub struct HeapStorage {
    /// Allocated region; `data.len()` is the allocated length
    data: Vec<u8>,
    /// Base increment used by the growth policy
    unit: usize,
    /// Resizes performed so far, plus one
    growth_count: usize,
    policy: GrowthPolicy,
}

impl HeapStorage {
    /// Allocates `size` zeroed bytes. `size` is also remembered as the growth unit.
    #[must_use]
    pub fn new(size: usize, policy: GrowthPolicy) -> HeapStorage {
        HeapStorage {
            data: vec![0; size],
            unit: size,
            growth_count: 1,
            policy,
        }
    }

    /// Allocated length of the region.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// The whole allocated region, including bytes beyond the logical size.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of resize events so far.
    #[must_use]
    pub fn growths(&self) -> usize {
        self.growth_count - 1
    }

    /// Copies `dst.len()` bytes starting at `offset` into `dst`.
    ///
    /// The caller has already clamped the range to the written data, which always lies within
    /// the allocated region.
    pub fn copy_out(&self, dst: &mut [u8], offset: usize) {
        dst.copy_from_slice(&self.data[offset..offset + dst.len()]);
    }

    /// Copies `src` into the region starting at `offset`, growing the region first if needed.
    ///
    /// The caller has already checked that `offset + src.len()` does not overflow.
    pub fn copy_in(&mut self, src: &[u8], offset: usize) {
        let end = offset + src.len();
        if end > self.data.len() {
            self.grow(end);
        }

        self.data[offset..end].copy_from_slice(src);
    }

    /// Shrinks the region to `len` bytes and releases the excess allocation.
    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
        self.data.shrink_to_fit();
    }

    /// Takes the first `len` bytes of the region.
    #[must_use]
    pub fn into_vec(mut self, len: usize) -> Vec<u8> {
        self.data.truncate(len);
        self.data
    }

    fn grow(&mut self, required: usize) {
        let current = self.data.len();
        let next = self
            .policy
            .next_len(current, required, self.unit, self.growth_count);

        trace!(
            "growing heap storage {} -> {} bytes ({} policy, growth #{})",
            current,
            next,
            self.policy,
            self.growth_count
        );

        let mut grown = Vec::with_capacity(next);
        grown.extend_from_slice(&self.data);
        grown.resize(next, 0);
        self.data = grown;
        self.growth_count += 1;
    }
}
