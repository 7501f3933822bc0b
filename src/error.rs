use thiserror::Error;

/// Builds an [`Error::OutOfBounds`] for a caller supplied `(offset, len)` pair that does not
/// fit into a slice of `size` bytes.
macro_rules! out_of_bounds_error {
    ($offset:expr, $len:expr, $size:expr) => {
        crate::Error::OutOfBounds {
            offset: $offset,
            len: $len,
            size: $size,
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Reaching the end of the buffered data is deliberately *not* represented here. Reads that run
/// out of data return `None` so that callers can loop until exhaustion without treating the
/// ordinary end of a buffer as a failure.
///
/// # Error Categories
///
/// ## Contract violations
/// - [`Error::OutOfBounds`] - An `(offset, len)` pair does not describe a range of the caller's slice
/// - [`Error::InvalidOffset`] - A checked seek resolved outside of the written data
///
/// ## I/O and External Errors
/// - [`Error::FileError`] - Filesystem, memory map or stream I/O errors
///
/// # Examples
///
/// ```rust
/// use heapbuf::{ByteBuffer, Error};
///
/// let mut buffer = ByteBuffer::wrap(&[1, 2, 3]);
/// buffer.rewind();
///
/// let mut dst = [0u8; 2];
/// match buffer.read_range(&mut dst, 1, 4) {
///     Err(Error::OutOfBounds { offset, len, size }) => {
///         assert_eq!((offset, len, size), (1, 4, 2));
///     }
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A caller supplied range does not fit into the slice it refers to.
    ///
    /// Raised before any byte is moved when `offset + len` overflows or exceeds the length of
    /// the slice handed to a range read or write, and when a write at the cursor would overflow
    /// the position (`size` is `usize::MAX` then).
    ///
    /// # Fields
    ///
    /// * `offset` - Start of the requested range
    /// * `len` - Length of the requested range
    /// * `size` - Length of the slice the range was checked against
    #[error("Out of bound access - offset {offset} + length {len} exceeds slice of {size} bytes")]
    OutOfBounds {
        /// Start of the requested range
        offset: usize,
        /// Length of the requested range
        len: usize,
        /// Length of the slice the range was checked against
        size: usize,
    },

    /// A checked seek resolved to a position outside of `[0, capacity]`.
    ///
    /// The associated value is the position the seek would have produced. It is signed and
    /// wide enough to report targets before the start of the buffer as well as overflowing ones.
    #[error("Seek target {0} lies outside of the written data")]
    InvalidOffset(i128),

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur while loading, mapping, storing or copying data.
    #[error("{0}")]
    FileError(#[from] std::io::Error),
}
