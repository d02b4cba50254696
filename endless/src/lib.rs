//! Fixed-capacity circular byte buffer with independent readers.
//!
//! An [`Endless`] buffer accepts bytes from one writer forever, keeping only
//! the most recent `capacity` of them. Any number of [`Reader`]s follow it,
//! each at its own pace. A reader that falls so far behind that its next
//! byte was overwritten gets [`EndlessError::ReaderFellBehind`] rather than
//! stale data.
//!
//! # Positions
//!
//! Positions are absolute: byte `n` is the `n`-th byte ever written. The
//! buffer holds the window `[start(), end())`; `end() - start()` never
//! exceeds the capacity.
//!
//! ```
//! use endless::{Endless, EndlessError};
//!
//! let buf = Endless::new(10).unwrap();
//! let mut reader = buf.new_reader(0);
//!
//! buf.write(&[1, 2, 3, 4, 5]);
//! buf.write(&[6, 7, 8, 9, 10, 11, 12]);
//! assert_eq!(buf.start(), 2);
//! assert_eq!(buf.end(), 12);
//!
//! // Bytes 0 and 1 are gone.
//! let mut data = [0u8; 4];
//! assert!(matches!(
//!     reader.read(&mut data),
//!     Err(EndlessError::ReaderFellBehind { position: 0, start: 2 })
//! ));
//!
//! // Skip ahead to the oldest byte still held.
//! assert_eq!(reader.resync(), 2);
//! assert_eq!(reader.read(&mut data).unwrap(), 4);
//! assert_eq!(data, [3, 4, 5, 6]);
//! ```
//!
//! # Writes larger than the buffer
//!
//! A single [`Endless::write`] stores at most `capacity` bytes: the first
//! `capacity` bytes of the input. The remainder is dropped, not wrapped.
//!
//! # Thread Safety
//!
//! [`Endless`] is `Send + Sync` and `Clone`; clones share one storage behind
//! a read-write lock. Writes take the lock exclusively, reads and accessors
//! share it. Each [`Reader`] owns its position and is moved to the thread
//! that reads from it.
//!
//! # Convenience Functions
//!
//! The [`bytes`] module provides pre-sized constructors:
//!
//! ```
//! use endless::{endless_4kb, endless_64kb};
//!
//! let small = endless_4kb();
//! let large = endless_64kb();
//! assert_eq!(small.capacity(), 4096);
//! assert_eq!(large.capacity(), 65536);
//! ```

pub mod bytes;
mod config;
mod endless;
mod error;
mod reader;

pub use bytes::*;
pub use config::{Config, DEFAULT_CAPACITY};
pub use endless::Endless;
pub use error::{EndlessError, Result};
pub use reader::Reader;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Endless>();
        assert_send_sync::<Reader>();
        assert_send_sync::<EndlessError>();
    }

    #[test]
    fn test_types_are_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<Endless>();
        assert_clone::<Reader>();
        assert_clone::<Config>();
    }
}
