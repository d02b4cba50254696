//! Independent readers over an [`Endless`] buffer.

use std::io;

use tracing::debug;

use crate::endless::Endless;
use crate::error::{EndlessError, Result};

/// A cursor that follows an [`Endless`] buffer.
///
/// Each reader keeps its own absolute position and never affects the buffer
/// or other readers. Created with [`Endless::new_reader`].
///
/// The reader holds a handle to the buffer, so the storage stays alive for as
/// long as any reader does. Cloning a reader gives a second, independent
/// reader at the same position.
#[derive(Debug, Clone)]
pub struct Reader {
    source: Endless,
    position: u64,
}

impl Reader {
    pub(crate) fn new(source: Endless, position: u64) -> Self {
        Reader { source, position }
    }

    /// Reads up to `buf.len()` bytes from the reader position.
    ///
    /// Returns `Ok(0)` when there is nothing new to read. Fails with
    /// [`EndlessError::ReaderFellBehind`] when the bytes at the reader
    /// position have been overwritten; the position is left unchanged, so
    /// every later call fails the same way until [`resync`](Self::resync).
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        match self.source.read_at(self.position, buf) {
            Ok(n) => {
                self.position += n as u64;
                Ok(n)
            }
            Err(err) => {
                debug!(position = self.position, "endless: {}", err);
                Err(err)
            }
        }
    }

    /// Returns the number of bytes that can be read right now.
    pub fn available(&self) -> Result<u64> {
        self.source.available_at(self.position)
    }

    /// Returns true if the reader position has been overwritten.
    pub fn is_behind(&self) -> bool {
        matches!(
            self.available(),
            Err(EndlessError::ReaderFellBehind { .. })
        )
    }

    /// Moves a reader that fell behind to the oldest byte still held.
    ///
    /// Returns the number of bytes skipped, or 0 if the reader was still
    /// valid. The position never moves backwards.
    pub fn resync(&mut self) -> u64 {
        let start = self.source.start();
        if start <= self.position {
            return 0;
        }
        let skipped = start - self.position;
        debug!(
            from = self.position,
            to = start,
            skipped,
            "endless: reader resynced"
        );
        self.position = start;
        skipped
    }

    /// Returns the absolute position of the next byte to read.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Returns the buffer this reader follows.
    pub fn source(&self) -> &Endless {
        &self.source
    }
}

impl io::Read for Reader {
    /// `Ok(0)` means the reader has caught up with the writer, not that the
    /// stream has ended.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(Reader::read(self, buf)?)
    }
}
