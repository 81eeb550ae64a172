use super::super::TestBuffer;
use std::hint::black_box;

/// Slot that only tracks the allocated flag. Never touches the heap.
#[derive(Debug, Default)]
pub struct FakeBuffer {
    allocated: bool,
}

impl TestBuffer for FakeBuffer {
    const KIND: &'static str = "fake";

    #[inline(never)]
    fn realloc(&mut self, size: usize) {
        // Keep the size draw alive so the fake pass pays for it too
        black_box(size);
        self.allocated = !self.allocated;
    }

    fn is_allocated(&self) -> bool {
        self.allocated
    }
}
