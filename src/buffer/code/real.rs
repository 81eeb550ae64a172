use super::super::TestBuffer;
use std::hint::black_box;

/// Slot backed by real heap storage.
///
/// The storage lives in an owned `Vec`, so it is released exactly once: on
/// the next `realloc` or when the buffer is dropped.
#[derive(Debug, Default)]
pub struct RealBuffer {
    storage: Option<Vec<u8>>,
}

impl RealBuffer {
    /// Capacity of the held storage, if allocated.
    pub fn capacity(&self) -> Option<usize> {
        self.storage.as_ref().map(Vec::capacity)
    }
}

impl TestBuffer for RealBuffer {
    const KIND: &'static str = "real";

    #[inline(never)]
    fn realloc(&mut self, size: usize) {
        match self.storage.take() {
            Some(storage) => drop(black_box(storage)),
            // Uninitialized capacity, like a bare `new char[size]`
            None => self.storage = Some(black_box(Vec::with_capacity(size))),
        }
    }

    fn is_allocated(&self) -> bool {
        self.storage.is_some()
    }
}
