//! # Test Buffers
//!
//! One pool slot of a benchmark pass. Every `realloc` flips the slot between
//! free and allocated:
//!
//! - [`RealBuffer`] acquires `size` bytes on free → allocated and releases
//!   them on allocated → free (or when dropped while allocated).
//! - [`FakeBuffer`] flips the same state without touching the heap, giving
//!   the loop/dispatch/RNG overhead that is subtracted from the real pass.

pub mod code;
#[cfg(test)]
pub mod test;

pub use code::*;

/// A pool slot that alternates between allocated and free.
pub trait TestBuffer: Default {
    /// Short name used in trace output.
    const KIND: &'static str;

    /// Allocate `size` bytes if free, release the held bytes if allocated.
    fn realloc(&mut self, size: usize);

    fn is_allocated(&self) -> bool;
}
