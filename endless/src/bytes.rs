//! Convenience functions for creating pre-sized endless buffers.

use std::num::NonZeroUsize;

use crate::Endless;

const fn size(bytes: usize) -> NonZeroUsize {
    match NonZeroUsize::new(bytes) {
        Some(n) => n,
        None => panic!("size must be non-zero"),
    }
}

const SIZE_256B: NonZeroUsize = size(256);
const SIZE_1KB: NonZeroUsize = size(1024);
const SIZE_4KB: NonZeroUsize = size(4096);
const SIZE_16KB: NonZeroUsize = size(16384);
const SIZE_64KB: NonZeroUsize = size(65536);

/// Creates a 256B endless buffer.
pub fn endless_256b() -> Endless {
    Endless::with_capacity(SIZE_256B)
}

/// Creates a 1KB endless buffer.
pub fn endless_1kb() -> Endless {
    Endless::with_capacity(SIZE_1KB)
}

/// Creates a 4KB endless buffer.
pub fn endless_4kb() -> Endless {
    Endless::with_capacity(SIZE_4KB)
}

/// Creates a 16KB endless buffer.
pub fn endless_16kb() -> Endless {
    Endless::with_capacity(SIZE_16KB)
}

/// Creates a 64KB endless buffer.
pub fn endless_64kb() -> Endless {
    Endless::with_capacity(SIZE_64KB)
}

/// Creates a default 1KB endless buffer.
pub fn endless() -> Endless {
    endless_1kb()
}
