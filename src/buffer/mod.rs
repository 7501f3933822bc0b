//! Growable random-access byte buffer.
//!
//! This module provides [`ByteBuffer`], an in-memory region supporting sequential and
//! randomly-seekable reads and writes of raw bytes and fixed-width scalars, big-endian encoded.
//!
//! # Architecture
//!
//! The buffer is layered from the bottom up:
//!
//! - **Storage** - a private growable heap region implementing raw copy-in/copy-out
//! - **Typed engine** - range and scalar reads/writes, bounds validation, cursor bookkeeping
//!   (see the `read_*`/`write_*` methods)
//! - **Public contract** - factories, navigation, queries and serialization (this file)
//!
//! Three positions describe the state of a buffer:
//!
//! - `index` - the cursor every read and write starts at
//! - `capacity` - the count of bytes written so far, i.e. the logical size
//! - `mark` - a saved cursor restored by [`ByteBuffer::reset`]
//!
//! The allocated storage is always at least `capacity` bytes long and only grows when a write
//! does not fit.
//!
//! # Cursor semantics
//!
//! Seeking is permissive: [`ByteBuffer::seek_set`], [`ByteBuffer::seek_cur`] and
//! [`ByteBuffer::seek_end`] do not check the target against the written data. A cursor past the
//! end makes the next read report end-of-data, and the next write grows the storage and
//! zero-fills the gap. Offsets that would move the cursor before the start saturate at `0`.
//! [`ByteBuffer::checked_seek`] is the validating alternative.
//!
//! # End of data
//!
//! Running out of data is not an error. Scalar reads return `None`, byte range reads return
//! `Ok(None)` (or `None`) once no bytes remain, and short reads are truncated to what is
//! available. Only inconsistent caller supplied ranges produce [`crate::Error::OutOfBounds`].
//!
//! # Usage Examples
//!
//! ```rust
//! use heapbuf::ByteBuffer;
//!
//! let mut buffer = ByteBuffer::allocate_with(4);
//! buffer.write_int(114_514).write_short(-3).write_double(64.5);
//!
//! buffer.rewind();
//! assert_eq!(buffer.read_int(), Some(114_514));
//! assert_eq!(buffer.read_short(), Some(-3));
//! assert_eq!(buffer.read_double(), Some(64.5));
//! assert_eq!(buffer.read_byte(), None);
//! ```
//!
//! # Thread Safety
//!
//! [`ByteBuffer`] is a single-owner structure mutated through `&mut self`. It is `Send` and
//! `Sync` because it owns nothing but heap memory, but concurrent mutation requires external
//! synchronisation such as a `Mutex`, or one buffer per worker.

mod codec;
mod stdio;
mod storage;
mod typed;

pub use codec::Scalar;

use std::{fmt, io::SeekFrom};

use crate::{
    config::{BufferConfig, DEFAULT_BUFFER_SIZE},
    Error::InvalidOffset,
    Result,
};
use storage::HeapStorage;

/// A growable, seekable byte buffer with big-endian scalar access.
///
/// Create one with [`ByteBuffer::allocate`] (empty) or [`ByteBuffer::wrap`] (pre-populated, cursor
/// at the end). The buffer is mutated in place by every read, write and seek.
///
/// # Examples
///
/// ```rust
/// use heapbuf::ByteBuffer;
///
/// // Append to wrapped data, then rewind and read everything back
/// let mut buffer = ByteBuffer::wrap(&[0x00, 0x2A]);
/// buffer.write_byte(0x07);
/// assert_eq!(buffer.size(), 3);
///
/// buffer.rewind();
/// assert_eq!(buffer.read_short(), Some(42));
/// assert_eq!(buffer.read_byte(), Some(0x07));
/// ```
#[derive(Debug, Clone)]
pub struct ByteBuffer {
    storage: HeapStorage,
    /// Bytes written so far
    capacity: usize,
    /// Cursor
    index: usize,
    mark: usize,
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::allocate()
    }
}

impl ByteBuffer {
    /// Creates an empty buffer with [`DEFAULT_BUFFER_SIZE`] bytes of storage.
    #[must_use]
    pub fn allocate() -> ByteBuffer {
        Self::with_config(BufferConfig::default())
    }

    /// Creates an empty buffer with `size` bytes of storage.
    ///
    /// `size` is also the growth unit used once writes exceed the initial storage.
    ///
    /// # Arguments
    /// * `size` - Initial storage length in bytes
    #[must_use]
    pub fn allocate_with(size: usize) -> ByteBuffer {
        Self::with_config(BufferConfig::with_size(size))
    }

    /// Creates an empty buffer from an explicit [`BufferConfig`].
    #[must_use]
    pub fn with_config(config: BufferConfig) -> ByteBuffer {
        ByteBuffer {
            storage: HeapStorage::new(config.initial_size, config.growth),
            capacity: 0,
            index: 0,
            mark: 0,
        }
    }

    /// Creates a buffer holding a copy of `data`, with the cursor at the end.
    ///
    /// The cursor position allows further appends right away; call [`ByteBuffer::rewind`]
    /// before reading the data back.
    #[must_use]
    pub fn wrap(data: &[u8]) -> ByteBuffer {
        let mut buffer = Self::allocate_with(data.len().max(DEFAULT_BUFFER_SIZE));
        buffer.write_bytes(data);
        buffer
    }

    /// Creates a buffer holding a copy of `data[offset..offset + len]`, cursor at the end.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the range does not fit into `data`.
    pub fn wrap_range(data: &[u8], offset: usize, len: usize) -> Result<ByteBuffer> {
        let mut buffer = Self::allocate_with(len.max(DEFAULT_BUFFER_SIZE));
        buffer.write_range(data, offset, len)?;
        Ok(buffer)
    }

    /// Logical size: the number of bytes written so far.
    #[must_use]
    pub fn size(&self) -> usize {
        self.capacity
    }

    /// Count of bytes meaningfully written. Same value as [`ByteBuffer::size`].
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// Length of the allocated storage, which is at least [`ByteBuffer::capacity`].
    #[must_use]
    pub fn allocated(&self) -> usize {
        self.storage.len()
    }

    /// Current cursor position.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Bytes between the cursor and the end of the written data.
    #[must_use]
    pub fn readable_bytes(&self) -> usize {
        self.capacity.saturating_sub(self.index)
    }

    /// Bytes between the cursor and the end of the allocated storage.
    ///
    /// This reflects allocation slack rather than the logical size. Writes beyond it still
    /// succeed; they grow the storage.
    #[must_use]
    pub fn writeable_bytes(&self) -> usize {
        self.storage.len().saturating_sub(self.index)
    }

    /// Moves the cursor to the absolute position `offset`.
    pub fn seek_set(&mut self, offset: usize) -> &mut Self {
        self.index = offset;
        self
    }

    /// Moves the cursor by `offset` relative to its current position.
    ///
    /// A negative result saturates at `0`.
    pub fn seek_cur(&mut self, offset: isize) -> &mut Self {
        self.index = self.index.saturating_add_signed(offset);
        self
    }

    /// Moves the cursor to `capacity - offset`.
    ///
    /// `seek_end(0)` places the cursor right behind the written data, ready for appends.
    /// A negative `offset` moves past the end. A result below zero saturates at `0`.
    pub fn seek_end(&mut self, offset: isize) -> &mut Self {
        self.index = if offset >= 0 {
            self.capacity.saturating_sub(offset.unsigned_abs())
        } else {
            self.capacity.saturating_add(offset.unsigned_abs())
        };
        self
    }

    /// Advances the cursor by `len` bytes without reading them.
    pub fn skip_bytes(&mut self, len: usize) -> &mut Self {
        self.index = self.index.saturating_add(len);
        self
    }

    /// Moves the cursor like [`std::io::Seek`], but only to positions inside `[0, capacity]`.
    ///
    /// Returns the new cursor position.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidOffset`] and leaves the cursor untouched if the target
    /// lies before the start or past the end of the written data.
    pub fn checked_seek(&mut self, pos: SeekFrom) -> Result<usize> {
        let target = self.resolve(pos);
        match usize::try_from(target) {
            Ok(index) if index <= self.capacity => {
                self.index = index;
                Ok(index)
            }
            _ => Err(InvalidOffset(target)),
        }
    }

    /// Bookmarks the current cursor position.
    pub fn mark_index(&mut self) -> &mut Self {
        self.mark = self.index;
        self
    }

    /// Restores the cursor to the last bookmark (initially `0`).
    pub fn reset(&mut self) -> &mut Self {
        self.index = self.mark;
        self
    }

    /// Moves the cursor to the start. Shortcut for `seek_set(0)`.
    pub fn rewind(&mut self) -> &mut Self {
        self.seek_set(0)
    }

    /// Releases storage beyond the written data.
    pub fn compact(&mut self) -> &mut Self {
        if self.storage.len() > self.capacity {
            self.storage.truncate(self.capacity);
        }
        self
    }

    /// The written data, `capacity` bytes long.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage.data()[..self.capacity]
    }

    /// Returns a fresh copy of the written data.
    ///
    /// Neither the cursor nor the bookmark is affected, so there is no need to rewind first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Consumes the buffer and returns the written data.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.storage.into_vec(self.capacity)
    }

    fn resolve(&self, pos: SeekFrom) -> i128 {
        match pos {
            SeekFrom::Start(offset) => i128::from(offset),
            SeekFrom::Current(offset) => self.index as i128 + i128::from(offset),
            SeekFrom::End(offset) => self.capacity as i128 + i128::from(offset),
        }
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        ByteBuffer::wrap(&data)
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(data: &[u8]) -> Self {
        ByteBuffer::wrap(data)
    }
}

impl PartialEq for ByteBuffer {
    /// Buffers are equal when their written data is equal.
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteBuffer {}

impl fmt::Display for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ByteBuffer(index={}, mark={}, capacity={}, allocated={}, growths={})",
            self.index,
            self.mark,
            self.capacity,
            self.storage.len(),
            self.storage.growths()
        )
    }
}
