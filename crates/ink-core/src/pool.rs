use crate::blob::Blob;
use crate::constants::MAX_BLOBS;
use std::collections::VecDeque;

/// Bounded, spawn-ordered set of live blobs. Oldest blobs are evicted first
/// once the capacity is exceeded.
#[derive(Clone, Debug)]
pub struct BlobPool {
    blobs: VecDeque<Blob>,
    capacity: usize,
}

impl BlobPool {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            blobs: VecDeque::with_capacity(capacity.min(MAX_BLOBS) + 1),
            capacity,
        }
    }

    /// Append a blob, returning how many old blobs were evicted to make room.
    pub fn push(&mut self, blob: Blob) -> usize {
        self.blobs.push_back(blob);
        let mut evicted = 0;
        while self.blobs.len() > self.capacity {
            self.blobs.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// Age every blob and compact out the ones that are no longer visible,
    /// keeping survivors in spawn order. Returns the number removed.
    pub fn age(&mut self, delta: f32, elapsed: f32, taper: f32) -> usize {
        let before = self.blobs.len();
        self.blobs
            .retain_mut(|blob| blob.age(delta, elapsed, taper));
        before - self.blobs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Blob> {
        self.blobs.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
