//! Fixed-capacity overwriting byte buffer.

use std::fmt;
use std::io;
use std::num::NonZeroUsize;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::config::Config;
use crate::error::{EndlessError, Result};
use crate::reader::Reader;

/// A thread-safe endless byte buffer.
///
/// `Endless` keeps the most recent `capacity` bytes ever written. Every byte
/// has an absolute position: the count of bytes written before it. The valid
/// window is `[start(), end())`; writing past the capacity silently evicts
/// the oldest bytes and moves `start()` forward.
///
/// Any number of [`Reader`]s can follow the buffer, each at its own position.
/// A reader whose position gets evicted fails with
/// [`EndlessError::ReaderFellBehind`] instead of returning stale data.
///
/// # Semantics
///
/// - **Write**: Never blocks, never fails. A single call stores at most
///   `capacity` bytes; input beyond that is dropped.
/// - **Read**: Never blocks. Returns `0` when the reader has caught up.
/// - **Clone**: Clones share the same storage.
///
/// # Example
///
/// ```
/// use endless::Endless;
///
/// let buf = Endless::new(10).unwrap();
/// let mut reader = buf.new_reader(0);
///
/// buf.write(b"hello");
///
/// let mut data = [0u8; 8];
/// let n = reader.read(&mut data).unwrap();
/// assert_eq!(&data[..n], b"hello");
/// ```
pub struct Endless {
    state: Arc<RwLock<EndlessState>>,
}

struct EndlessState {
    data: Vec<u8>,
    // Absolute counters: total bytes ever written, and the absolute index of
    // the oldest byte still held. end - start <= data.len() at all times.
    write_cursor: u64,
    start: u64,
}

impl EndlessState {
    fn capacity(&self) -> u64 {
        self.data.len() as u64
    }

    /// Physical offset of an absolute position.
    fn offset(&self, position: u64) -> usize {
        (position % self.capacity()) as usize
    }

    fn write(&mut self, buf: &[u8]) -> usize {
        let capacity = self.data.len();
        let size = buf.len().min(capacity);
        let pos = self.offset(self.write_cursor);

        if pos + size > capacity {
            let tail_size = capacity - pos;
            let head_size = size - tail_size;
            self.data[pos..].copy_from_slice(&buf[..tail_size]);
            self.data[..head_size].copy_from_slice(&buf[tail_size..size]);
        } else {
            self.data[pos..pos + size].copy_from_slice(&buf[..size]);
        }

        self.write_cursor += size as u64;
        if self.write_cursor - self.start > self.capacity() {
            self.start = self.write_cursor - self.capacity();
        }

        size
    }

    /// Copies bytes starting at `position` into `buf` without moving anything.
    fn read_at(&self, position: u64, buf: &mut [u8]) -> Result<usize> {
        let available = self.available_at(position)?;
        let size = available.min(buf.len() as u64) as usize;
        self.copy_out(position, &mut buf[..size]);
        Ok(size)
    }

    /// Fills `buf` from `position`. The range must lie inside the window.
    fn copy_out(&self, position: u64, buf: &mut [u8]) {
        let capacity = self.data.len();
        let size = buf.len();
        let pos = self.offset(position);
        if pos + size > capacity {
            let tail_size = capacity - pos;
            let head_size = size - tail_size;
            buf[..tail_size].copy_from_slice(&self.data[pos..]);
            buf[tail_size..].copy_from_slice(&self.data[..head_size]);
        } else {
            buf.copy_from_slice(&self.data[pos..pos + size]);
        }
    }

    fn available_at(&self, position: u64) -> Result<u64> {
        if self.start > position {
            return Err(EndlessError::ReaderFellBehind {
                position,
                start: self.start,
            });
        }
        // A reader created ahead of the writer waits for it to catch up.
        Ok(self.write_cursor.saturating_sub(position))
    }
}

impl Clone for Endless {
    fn clone(&self) -> Self {
        Endless {
            state: Arc::clone(&self.state),
        }
    }
}

impl fmt::Debug for Endless {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("Endless")
            .field("capacity", &state.data.len())
            .field("start", &state.start)
            .field("end", &state.write_cursor)
            .finish()
    }
}

impl Endless {
    /// Creates a buffer holding `capacity` bytes.
    ///
    /// Returns [`EndlessError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        NonZeroUsize::new(capacity)
            .map(Self::with_capacity)
            .ok_or(EndlessError::InvalidCapacity(capacity))
    }

    /// Creates a buffer holding `capacity` bytes.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Endless {
            state: Arc::new(RwLock::new(EndlessState {
                data: vec![0; capacity.get()],
                write_cursor: 0,
                start: 0,
            })),
        }
    }

    /// Creates a buffer from a [`Config`].
    ///
    /// Fails with [`EndlessError::InvalidCapacity`] when the config does not
    /// pass [`Config::validate`].
    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::new(cfg.capacity)
    }

    /// Writes data to the buffer, evicting the oldest bytes as needed.
    ///
    /// At most `capacity` bytes are stored per call: when `buf` is longer
    /// than the whole buffer, only its first `capacity` bytes are written and
    /// the rest is dropped. Returns the number of bytes written.
    pub fn write(&self, buf: &[u8]) -> usize {
        let mut state = self.state.write();
        let n = state.write(buf);
        if n < buf.len() {
            debug!(
                requested = buf.len(),
                written = n,
                "endless: write larger than capacity, dropping excess"
            );
        }
        trace!(
            written = n,
            start = state.start,
            end = state.write_cursor,
            "endless: write"
        );
        n
    }

    /// Returns a reader positioned at `position`.
    ///
    /// A position that has already been evicted is moved forward to
    /// [`start`](Self::start).
    pub fn new_reader(&self, position: u64) -> Reader {
        let start = self.start();
        Reader::new(self.clone(), position.max(start))
    }

    /// Returns the absolute index of the oldest byte still held.
    pub fn start(&self) -> u64 {
        self.state.read().start
    }

    /// Returns the absolute index of the next byte to be written.
    pub fn end(&self) -> u64 {
        self.state.read().write_cursor
    }

    /// Returns true once the buffer holds `capacity` bytes of data.
    ///
    /// This is false only until the first `capacity` bytes have been written.
    pub fn filled(&self) -> bool {
        let state = self.state.read();
        state.write_cursor - state.start == state.capacity()
    }

    /// Returns the midpoint of the valid window.
    pub fn mid_point(&self) -> u64 {
        let state = self.state.read();
        state.start + (state.write_cursor - state.start) / 2
    }

    /// Returns the buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.state.read().data.len()
    }

    /// Returns the number of bytes in the valid window.
    pub fn len(&self) -> u64 {
        let state = self.state.read();
        state.write_cursor - state.start
    }

    /// Returns true if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of the valid window, oldest byte first.
    pub fn to_vec(&self) -> Vec<u8> {
        let state = self.state.read();
        let mut out = vec![0; (state.write_cursor - state.start) as usize];
        state.copy_out(state.start, &mut out);
        out
    }

    pub(crate) fn read_at(&self, position: u64, buf: &mut [u8]) -> Result<usize> {
        self.state.read().read_at(position, buf)
    }

    pub(crate) fn available_at(&self, position: u64) -> Result<u64> {
        self.state.read().available_at(position)
    }
}

impl io::Write for Endless {
    /// Forwards to [`Endless::write`]. Through `write_all`, input longer than
    /// the capacity is written in capacity-sized steps.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(Endless::write(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Write for &Endless {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(Endless::write(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
