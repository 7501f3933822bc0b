//! Typed reads and writes on top of the raw storage primitives.
//!
//! Every operation here ends in exactly one copy out of or into the storage. Range operations
//! validate the caller's `(offset, len)` pair first; reads are then clamped to the written data.
//! Scalar accessors are thin wrappers over [`ByteBuffer::read_be`] and [`ByteBuffer::write_be`],
//! which move the encoded bytes through the same range path.

use super::{ByteBuffer, Scalar};
use crate::Result;

/// Validates `offset..offset + len` against a slice of `size` bytes and returns the end.
fn check_range(offset: usize, len: usize, size: usize) -> Result<usize> {
    match offset.checked_add(len) {
        Some(end) if end <= size => Ok(end),
        _ => Err(out_of_bounds_error!(offset, len, size)),
    }
}

impl ByteBuffer {
    /// Reads up to `dst.len()` bytes into `dst`.
    ///
    /// Returns the number of bytes copied, or `None` if no written bytes remain behind the
    /// cursor. A request larger than [`ByteBuffer::readable_bytes`] is truncated.
    pub fn read_into(&mut self, dst: &mut [u8]) -> Option<usize> {
        let remaining = self.readable_bytes();
        if remaining == 0 {
            return None;
        }

        let len = dst.len().min(remaining);
        self.storage.copy_out(&mut dst[..len], self.index);
        self.index += len;
        Some(len)
    }

    /// Reads up to `len` bytes into `dst[offset..offset + len]`.
    ///
    /// # Returns
    /// `Ok(Some(n))` with the number of bytes copied, which may be less than `len` near the end
    /// of the written data, or `Ok(None)` if no bytes remain.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the range does not fit into `dst`. The cursor is
    /// not moved in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapbuf::ByteBuffer;
    ///
    /// let mut buffer = ByteBuffer::wrap(&[1, 2, 3]);
    /// buffer.rewind();
    ///
    /// let mut dst = [0u8; 8];
    /// assert_eq!(buffer.read_range(&mut dst, 2, 6)?, Some(3));
    /// assert_eq!(&dst[..5], &[0, 0, 1, 2, 3]);
    /// assert_eq!(buffer.read_range(&mut dst, 0, 1)?, None);
    /// # Ok::<(), heapbuf::Error>(())
    /// ```
    pub fn read_range(
        &mut self,
        dst: &mut [u8],
        offset: usize,
        len: usize,
    ) -> Result<Option<usize>> {
        let end = check_range(offset, len, dst.len())?;
        Ok(self.read_into(&mut dst[offset..end]))
    }

    /// Reads up to `len` bytes into a new vector.
    ///
    /// Returns `None` if no bytes remain; otherwise the vector holds at most `len` bytes.
    pub fn read_bytes(&mut self, len: usize) -> Option<Vec<u8>> {
        let mut bytes = vec![0; len.min(self.readable_bytes())];
        let read = self.read_into(&mut bytes)?;
        bytes.truncate(read);
        Some(bytes)
    }

    /// Writes all of `src` at the cursor.
    ///
    /// An empty `src` changes nothing. Otherwise the storage grows as needed, the cursor advances
    /// by `src.len()` and the logical size becomes `max(capacity, index)`. A cursor positioned
    /// past the written data leaves a zero-filled gap.
    ///
    /// # Panics
    /// Panics if the cursor was sought so far that `index + src.len()` overflows `usize`. Use
    /// [`ByteBuffer::try_write_bytes`] to handle that case.
    pub fn write_bytes(&mut self, src: &[u8]) -> &mut Self {
        if let Err(error) = self.try_write_bytes(src) {
            panic!("{error}");
        }
        self
    }

    /// Writes all of `src` at the cursor, failing instead of panicking on cursor overflow.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] with `size == usize::MAX` if `index + src.len()`
    /// overflows `usize`. Nothing is written in that case.
    pub fn try_write_bytes(&mut self, src: &[u8]) -> Result<&mut Self> {
        if src.is_empty() {
            return Ok(self);
        }

        let end = check_range(self.index, src.len(), usize::MAX)?;

        self.storage.copy_in(src, self.index);
        self.index = end;
        self.capacity = self.capacity.max(end);
        Ok(self)
    }

    /// Writes `src[offset..offset + len]` at the cursor.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the range does not fit into `src` or the write
    /// would overflow the cursor. Nothing is written in that case.
    pub fn write_range(&mut self, src: &[u8], offset: usize, len: usize) -> Result<&mut Self> {
        let end = check_range(offset, len, src.len())?;
        self.try_write_bytes(&src[offset..end])
    }

    /// Reads one big-endian encoded `T` and advances the cursor by its width.
    ///
    /// Returns `None`, without moving the cursor, if fewer than `T::WIDTH` bytes remain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapbuf::ByteBuffer;
    ///
    /// let mut buffer = ByteBuffer::wrap(&[0x00, 0x01, 0x00, 0x02]);
    /// buffer.rewind();
    ///
    /// assert_eq!(buffer.read_be::<u16>(), Some(1));
    /// assert_eq!(buffer.read_be::<u16>(), Some(2));
    /// assert_eq!(buffer.read_be::<u16>(), None);
    /// ```
    pub fn read_be<T: Scalar>(&mut self) -> Option<T> {
        if self.readable_bytes() < T::WIDTH {
            return None;
        }

        let mut bytes = T::Bytes::default();
        self.read_into(bytes.as_mut())?;
        Some(T::from_be_bytes(bytes))
    }

    /// Decodes one big-endian `T` at the cursor without moving it.
    #[must_use]
    pub fn peek_be<T: Scalar>(&self) -> Option<T> {
        if self.readable_bytes() < T::WIDTH {
            return None;
        }

        let mut bytes = T::Bytes::default();
        self.storage.copy_out(bytes.as_mut(), self.index);
        Some(T::from_be_bytes(bytes))
    }

    /// Writes `value` big-endian encoded and advances the cursor by its width.
    pub fn write_be<T: Scalar>(&mut self, value: T) -> &mut Self {
        self.write_bytes(value.to_be_bytes().as_ref())
    }

    /// Reads a single raw byte.
    pub fn read_byte(&mut self) -> Option<u8> {
        self.read_be()
    }

    /// Reads a 2-byte char (UTF-16 code unit).
    pub fn read_char(&mut self) -> Option<u16> {
        self.read_be()
    }

    /// Reads `count` consecutive chars.
    ///
    /// Returns `None` if fewer than `count` chars remain; the cursor is not moved then.
    pub fn read_chars(&mut self, count: usize) -> Option<Vec<u16>> {
        if self.readable_bytes() / 2 < count {
            return None;
        }
        (0..count).map(|_| self.read_char()).collect()
    }

    /// Reads a sign-extended 2-byte short.
    pub fn read_short(&mut self) -> Option<i16> {
        self.read_be()
    }

    /// Reads a 4-byte int.
    pub fn read_int(&mut self) -> Option<i32> {
        self.read_be()
    }

    /// Reads an 8-byte long.
    pub fn read_long(&mut self) -> Option<i64> {
        self.read_be()
    }

    /// Reads a 4-byte IEEE-754 float.
    pub fn read_float(&mut self) -> Option<f32> {
        self.read_be()
    }

    /// Reads an 8-byte IEEE-754 double.
    pub fn read_double(&mut self) -> Option<f64> {
        self.read_be()
    }

    /// Writes a single raw byte.
    pub fn write_byte(&mut self, value: u8) -> &mut Self {
        self.write_be(value)
    }

    /// Writes a 2-byte char (UTF-16 code unit).
    pub fn write_char(&mut self, value: u16) -> &mut Self {
        self.write_be(value)
    }

    /// Writes each of `chars` as a 2-byte char.
    pub fn write_chars(&mut self, chars: &[u16]) -> &mut Self {
        for &c in chars {
            self.write_char(c);
        }
        self
    }

    /// Writes a 2-byte short.
    pub fn write_short(&mut self, value: i16) -> &mut Self {
        self.write_be(value)
    }

    /// Writes a 4-byte int.
    pub fn write_int(&mut self, value: i32) -> &mut Self {
        self.write_be(value)
    }

    /// Writes an 8-byte long.
    pub fn write_long(&mut self, value: i64) -> &mut Self {
        self.write_be(value)
    }

    /// Writes the 4-byte IEEE-754 bit pattern of `value`.
    pub fn write_float(&mut self, value: f32) -> &mut Self {
        self.write_be(value)
    }

    /// Writes the 8-byte IEEE-754 bit pattern of `value`.
    pub fn write_double(&mut self, value: f64) -> &mut Self {
        self.write_be(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ByteBuffer, Error::OutOfBounds};

    #[test]
    fn write_then_read_int() {
        let mut buffer = ByteBuffer::allocate_with(4);
        buffer.write_int(114_514);
        buffer.seek_set(0);
        assert_eq!(buffer.read_int(), Some(114_514));
    }

    #[test]
    fn sequential_order() {
        let mut buffer = ByteBuffer::allocate_with(12);
        buffer.write_int(1001).write_int(1002).write_int(1003);
        assert_eq!(buffer.allocated(), 12);

        buffer.seek_set(0);
        assert_eq!(buffer.read_int(), Some(1001));
        assert_eq!(buffer.read_int(), Some(1002));
        assert_eq!(buffer.read_int(), Some(1003));
        assert_eq!(buffer.read_int(), None);
    }

    #[test]
    fn mixed_scalars() {
        let mut buffer = ByteBuffer::allocate();
        buffer
            .write_char(u16::from(b'A'))
            .write_short(255)
            .write_int(12138)
            .write_long(10086)
            .write_float(32.5)
            .write_double(64.5)
            .write_byte(0xFE);
        assert_eq!(buffer.size(), 2 + 2 + 4 + 8 + 4 + 8 + 1);

        buffer.rewind();
        assert_eq!(buffer.read_char(), Some(0x41));
        assert_eq!(buffer.read_short(), Some(255));
        assert_eq!(buffer.read_int(), Some(12138));
        assert_eq!(buffer.read_long(), Some(10086));
        assert_eq!(buffer.read_float(), Some(32.5));
        assert_eq!(buffer.read_double(), Some(64.5));
        assert_eq!(buffer.read_byte(), Some(0xFE));
        assert_eq!(buffer.readable_bytes(), 0);
    }

    #[test]
    fn big_endian_layout() {
        let mut buffer = ByteBuffer::allocate_with(0);
        buffer.write_short(-2).write_int(0x0102_0304).write_char(0xABCD);
        assert_eq!(
            buffer.to_vec(),
            vec![0xFF, 0xFE, 0x01, 0x02, 0x03, 0x04, 0xAB, 0xCD]
        );
    }

    #[test]
    fn extreme_values_round_trip() {
        let mut buffer = ByteBuffer::allocate_with(1);
        buffer
            .write_short(i16::MIN)
            .write_int(i32::MIN)
            .write_long(i64::MAX)
            .write_float(f32::NEG_INFINITY)
            .write_double(f64::MIN_POSITIVE)
            .write_be(u64::MAX)
            .write_be(-1_i8);

        buffer.rewind();
        assert_eq!(buffer.read_short(), Some(i16::MIN));
        assert_eq!(buffer.read_int(), Some(i32::MIN));
        assert_eq!(buffer.read_long(), Some(i64::MAX));
        assert_eq!(buffer.read_float(), Some(f32::NEG_INFINITY));
        assert_eq!(buffer.read_double(), Some(f64::MIN_POSITIVE));
        assert_eq!(buffer.read_be::<u64>(), Some(u64::MAX));
        assert_eq!(buffer.read_be::<i8>(), Some(-1));
    }

    #[test]
    fn eof_after_consuming_everything() {
        let mut buffer = ByteBuffer::allocate_with(4);
        buffer.write_int(1);
        buffer.seek_set(0);

        assert_eq!(buffer.read_int(), Some(1));
        assert_eq!(buffer.read_byte(), None);
        assert_eq!(buffer.index(), 4);
        assert_eq!(buffer.read_bytes(3), None);
        assert_eq!(buffer.index(), 4);
    }

    #[test]
    fn short_scalar_read_leaves_cursor() {
        let mut buffer = ByteBuffer::wrap(&[0x01, 0x02]);
        buffer.rewind();

        assert_eq!(buffer.read_int(), None);
        assert_eq!(buffer.index(), 0);
        assert_eq!(buffer.read_short(), Some(0x0102));
    }

    #[test]
    fn range_read_truncates() {
        let mut buffer = ByteBuffer::wrap(&[1, 2, 3, 4, 5]);
        buffer.seek_set(3);

        let mut dst = [0u8; 4];
        assert_eq!(buffer.read_range(&mut dst, 0, 4).unwrap(), Some(2));
        assert_eq!(dst, [4, 5, 0, 0]);
        assert_eq!(buffer.index(), 5);
        assert_eq!(buffer.read_range(&mut dst, 0, 4).unwrap(), None);
    }

    #[test]
    fn range_arguments_are_validated() {
        let mut buffer = ByteBuffer::wrap(&[1, 2, 3]);
        buffer.rewind();

        let mut dst = [0u8; 4];
        assert!(matches!(
            buffer.read_range(&mut dst, 3, 2),
            Err(OutOfBounds {
                offset: 3,
                len: 2,
                size: 4
            })
        ));
        assert!(matches!(
            buffer.read_range(&mut dst, usize::MAX, 2),
            Err(OutOfBounds { .. })
        ));
        assert_eq!(buffer.index(), 0);

        assert!(matches!(
            buffer.write_range(&[1, 2], 1, 2),
            Err(OutOfBounds { .. })
        ));
        assert_eq!(buffer.size(), 3);

        // zero length at the very end of the slice is fine
        assert_eq!(buffer.read_range(&mut dst, 4, 0).unwrap(), Some(0));
        buffer.write_range(&[7, 8, 9], 1, 2).unwrap();
        assert_eq!(buffer.to_vec(), vec![8, 9, 3]);
    }

    #[test]
    fn read_bytes_truncates() {
        let mut buffer = ByteBuffer::wrap(&[10, 20, 30]);
        buffer.seek_set(1);

        assert_eq!(buffer.read_bytes(10), Some(vec![20, 30]));
        assert_eq!(buffer.read_bytes(1), None);
    }

    #[test]
    fn overwrite_keeps_capacity() {
        let mut buffer = ByteBuffer::wrap(&[0; 8]);
        buffer.seek_set(2).write_short(0x0101);

        assert_eq!(buffer.size(), 8);
        assert_eq!(buffer.index(), 4);
        assert_eq!(buffer.to_vec(), vec![0, 0, 1, 1, 0, 0, 0, 0]);

        buffer.seek_end(1).write_int(-1);
        assert_eq!(buffer.size(), 11);
    }

    #[test]
    fn write_past_end_fills_gap() {
        let mut buffer = ByteBuffer::allocate_with(2);
        buffer.seek_set(4).write_byte(9);

        assert_eq!(buffer.size(), 5);
        assert_eq!(buffer.to_vec(), vec![0, 0, 0, 0, 9]);

        buffer.seek_set(100);
        assert_eq!(buffer.read_byte(), None);
    }

    #[test]
    fn growth_preserves_bytes() {
        let mut buffer = ByteBuffer::allocate_with(1);
        for i in 0..1000_u32 {
            buffer.write_byte((i % 256) as u8);
        }
        assert_eq!(buffer.capacity(), 1000);
        assert!(buffer.allocated() >= 1000);

        buffer.seek_set(0);
        for i in 0..1000_u32 {
            assert_eq!(buffer.read_byte(), Some((i % 256) as u8));
        }
        assert_eq!(buffer.read_byte(), None);
    }

    #[test]
    fn chars() {
        let mut buffer = ByteBuffer::allocate_with(0);
        let text: Vec<u16> = "héllo".encode_utf16().collect();
        buffer.write_chars(&text);
        assert_eq!(buffer.size(), text.len() * 2);

        buffer.rewind();
        assert_eq!(buffer.read_chars(text.len() + 1), None);
        assert_eq!(buffer.index(), 0);
        assert_eq!(buffer.read_chars(text.len()), Some(text));
    }

    #[test]
    fn write_at_overflowing_cursor() {
        let mut buffer = ByteBuffer::wrap(&[1, 2]);
        buffer.seek_set(usize::MAX - 1);

        assert!(matches!(
            buffer.try_write_bytes(&[1, 2, 3]),
            Err(OutOfBounds {
                offset,
                len: 3,
                size: usize::MAX
            }) if offset == usize::MAX - 1
        ));
        assert_eq!(buffer.index(), usize::MAX - 1);
        assert_eq!(buffer.size(), 2);
        assert_eq!(buffer.to_vec(), vec![1, 2]);

        buffer.try_write_bytes(&[]).unwrap();
        assert_eq!(buffer.size(), 2);
    }

    #[test]
    #[should_panic(expected = "Out of bound access")]
    fn write_scalar_at_overflowing_cursor_panics() {
        let mut buffer = ByteBuffer::allocate();
        buffer.seek_set(usize::MAX).write_byte(1);
    }

    #[test]
    fn peek_does_not_move() {
        let mut buffer = ByteBuffer::wrap(&[0x00, 0x00, 0x00, 0x2A]);
        buffer.rewind();

        assert_eq!(buffer.peek_be::<i32>(), Some(42));
        assert_eq!(buffer.index(), 0);
        assert_eq!(buffer.peek_be::<i64>(), None);

        let shared = &buffer;
        assert_eq!(shared.peek_be::<u16>(), Some(0));
        assert_eq!(buffer.read_int(), Some(42));
        assert_eq!(buffer.peek_be::<u8>(), None);
    }
}
